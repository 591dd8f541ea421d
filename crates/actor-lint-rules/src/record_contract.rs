//! Rule requiring explicit data contracts on records crossing the actor
//! boundary.
//!
//! # Rationale
//!
//! Positional records have no parameterless constructor and expose
//! init-only properties, so the data contract serializer only round-trips them
//! reliably when the record opts in with `[DataContract]` and every public
//! property carries `[DataMember]`.
//!
//! # Detected Patterns
//!
//! - A record reachable from a remotable method (directly, behind `Task<T>`,
//!   or as a first-level collection element) without `[DataContract]`,
//!   reported at the use
//! - A public property of such a record without `[DataMember]`, reported at
//!   the property; properties the host gives no location are skipped
//!
//! Both checks run independently. Records that no actor method reaches are
//! exempt.

use crate::support::{has_data_contract, use_label};
use actor_lint_core::utils::{has_attribute, AttributeConcept};
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, TypeId, Violation,
};
use std::collections::HashSet;

/// Rule code for record-needs-contract.
pub const CODE: &str = "DAPR1412";

/// Rule name for record-needs-contract.
pub const NAME: &str = "record-needs-contract";

/// Requires `[DataContract]`/`[DataMember]` on reachable records.
#[derive(Debug, Clone)]
pub struct RecordNeedsContract {
    /// Severity level.
    pub severity: Severity,
}

impl Default for RecordNeedsContract {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordNeedsContract {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for RecordNeedsContract {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Records used in actor methods must carry [DataContract] and [DataMember]"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Record '{0}' should be decorated with [DataContract] and have [DataMember] attributes on properties for proper Actor serialization"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let Some(surface) = ctx.surface else {
            return Vec::new();
        };

        let mut members_checked: HashSet<TypeId> = HashSet::new();
        let mut violations = Vec::new();

        for (ty, classification, use_) in surface.reachable() {
            if classification != Classification::Record {
                continue;
            }
            let Some(record) = ctx.type_def(ty) else {
                continue;
            };

            if !has_data_contract(record) {
                if let Some(v) = self.violation(use_.location.as_ref(), &[&record.name]) {
                    violations.push(v.with_suggestion(Suggestion::new(format!(
                        "Add [DataContract] to record '{}'",
                        record.name
                    ))));
                }
            }

            if !members_checked.insert(ty) {
                continue;
            }
            let unmarked = record
                .properties()
                .filter(|p| p.is_public_property())
                .filter(|p| !has_attribute(&p.attributes, AttributeConcept::DataMember));
            for property in unmarked {
                let Some(mut v) = self.violation(property.location.as_ref(), &[&record.name])
                else {
                    continue;
                };
                if let Some(label) = use_label(use_) {
                    v = v.with_label(label);
                }
                violations.push(v.with_suggestion(Suggestion::new(format!(
                    "Add [DataMember] to '{}.{}'",
                    record.name, property.name
                ))));
            }
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_lint_core::fixtures::{check_raw, Fixture, Signature};
    use actor_lint_core::{Accessibility, AttributeRef, MemberRef, MethodRef, TypeDef};

    fn check(fx: &Fixture) -> Vec<Violation> {
        fx.check(&RecordNeedsContract::new())
    }

    fn contract() -> AttributeRef {
        AttributeRef::new("DataContract")
    }

    fn member() -> AttributeRef {
        AttributeRef::new("DataMember")
    }

    #[test]
    fn test_fully_marked_record_passes() {
        let mut fx = Fixture::default();
        let string = fx.system("String");
        let name = fx.property("Name", string).attribute(member());
        let secret = fx
            .property("Secret", string)
            .accessibility(Accessibility::Private);
        let doodad = fx.add(
            TypeDef::record("Doodad")
                .attribute(contract())
                .member(name)
                .member(secret),
        );
        fx.actor_with("DoodadActor", &[Signature::new("Set").param("d", doodad)]);
        assert!(check(&fx).is_empty());
    }

    #[test]
    fn test_missing_contract_and_member_fire_independently() {
        let mut fx = Fixture::default();
        let string = fx.system("String");
        let name = fx.property("Name", string);
        let doodad = fx.add(TypeDef::record("Doodad").member(name));
        fx.actor_with("DoodadActor", &[Signature::new("Set").param("d", doodad)]);

        let violations = check(&fx);
        assert_eq!(violations.len(), 2);
        // Property at line 1, parameter use at line 5.
        assert_eq!(violations[0].location.line, 1);
        assert_eq!(violations[0].labels.len(), 1);
        assert_eq!(violations[1].location.line, 5);
        insta::assert_snapshot!(
            &violations[1].message,
            @"Record 'Doodad' should be decorated with [DataContract] and have [DataMember] attributes on properties for proper Actor serialization"
        );
    }

    #[test]
    fn test_unlocated_properties_do_not_repeat_the_use_finding() {
        let mut fx = Fixture::default();
        let string = fx.system("String");
        let doodad = fx.add(
            TypeDef::record("Doodad")
                .member(MemberRef::property("Name", string))
                .member(MemberRef::property("Size", string)),
        );
        fx.actor_with("DoodadActor", &[Signature::new("Set").param("d", doodad)]);

        let raw = check_raw(&RecordNeedsContract::new(), &fx.graph);
        assert_eq!(raw.len(), 1);
        assert_eq!(raw[0].location.line, 4);
        assert!(raw[0].labels.is_empty());
    }

    #[test]
    fn test_contract_without_members() {
        let mut fx = Fixture::default();
        let string = fx.system("String");
        let a = fx.property("A", string);
        let b = fx.property("B", string).attribute(member());
        let doodad = fx.add(
            TypeDef::record("Doodad")
                .attribute(contract())
                .member(a)
                .member(b),
        );
        fx.actor_with("DoodadActor", &[Signature::new("Set").param("d", doodad)]);

        let violations = check(&fx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 1);
    }

    #[test]
    fn test_reachable_through_task_and_collection() {
        let mut fx = Fixture::default();
        let doodad = fx.add(TypeDef::record("Doodad"));
        let task = fx.task_of(doodad);
        let many = fx.list_of(doodad);
        fx.actor_with(
            "DoodadActor",
            &[
                Signature::new("Get").returns(task),
                Signature::new("Put").param("all", many),
            ],
        );
        assert_eq!(check(&fx).len(), 2);
    }

    #[test]
    fn test_unreachable_record_is_exempt() {
        let mut fx = Fixture::default();
        fx.declare(TypeDef::record("Orphan"));
        let helper = fx.declare(TypeDef::interface("IHelper").method(MethodRef::new("Take")));
        let orphan_param = fx.add(TypeDef::record("AlsoOrphan"));
        let (class, _) = fx.actor_with("DoodadActor", &[]);
        let take = fx.implementation(&Signature::new("Take").param("o", orphan_param));
        if let Some(def) = fx.graph.get_mut(class) {
            def.interfaces.push(helper);
            def.methods.push(take);
        }
        assert!(check(&fx).is_empty());
    }
}
