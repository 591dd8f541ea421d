//! Rule requiring serialization contracts on complex types crossing the actor
//! boundary.
//!
//! # Rationale
//!
//! Parameters and results of remotable methods are serialized with the data
//! contract serializer. Without `[DataContract]` (or another recognized
//! contract attribute) the type's shape on the wire is implicit and breaks on
//! refactoring.
//!
//! # Detected Patterns
//!
//! - A class or struct used directly as a parameter or (unwrapped) return type
//!   of a remotable method, lacking a contract attribute
//!
//! Reported once per type, at the type's declaration. Records are handled by
//! `record-needs-contract`, collection elements by
//! `collection-element-needs-validation`.

use crate::support::{has_serialization_contract, use_label};
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, TypeId, Violation,
};
use std::collections::HashSet;

/// Rule code for complex-type-needs-attributes.
pub const CODE: &str = "DAPR1408";

/// Rule name for complex-type-needs-attributes.
pub const NAME: &str = "complex-type-needs-attributes";

/// Requires contract attributes on complex types used by actor methods.
#[derive(Debug, Clone)]
pub struct ComplexTypeNeedsAttributes {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ComplexTypeNeedsAttributes {
    fn default() -> Self {
        Self::new()
    }
}

impl ComplexTypeNeedsAttributes {
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

impl Rule for ComplexTypeNeedsAttributes {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Complex types used in actor methods must carry [DataContract]/[DataMember]"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Type '{0}' used in Actor method should be decorated with [DataContract] and have [DataMember] on serializable properties"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let Some(surface) = ctx.surface else {
            return Vec::new();
        };

        let mut seen: HashSet<TypeId> = HashSet::new();
        let mut violations = Vec::new();
        for use_ in surface.uses() {
            if use_.classification != Classification::ComplexObject || !seen.insert(use_.ty) {
                continue;
            }
            let Some(def) = ctx.type_def(use_.ty) else {
                continue;
            };
            if has_serialization_contract(def) {
                continue;
            }
            let Some(mut violation) = self.violation(def.location.as_ref(), &[&def.name]) else {
                tracing::debug!("No declaration site for '{}'; finding suppressed", def.name);
                continue;
            };
            if let Some(label) = use_label(use_) {
                violation = violation.with_label(label);
            }
            violations.push(violation.with_suggestion(Suggestion::new(format!(
                "Add [DataContract] to '{}' and [DataMember] to each serialized property",
                def.name
            ))));
        }
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_lint_core::fixtures::{Fixture, Signature};
    use actor_lint_core::{AttributeRef, TypeDef};

    #[test]
    fn test_reported_once_at_declaration() {
        let mut fx = Fixture::default();
        let order = fx.add_located(TypeDef::class("Order"));
        let task = fx.task_of(order);
        fx.actor_with(
            "OrderActor",
            &[
                Signature::new("Submit").param("order", order),
                Signature::new("Get").returns(task),
            ],
        );

        let violations = fx.check(&ComplexTypeNeedsAttributes::new());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].location.line, 1);
        assert_eq!(violations[0].labels.len(), 1);
        insta::assert_snapshot!(
            &violations[0].message,
            @"Type 'Order' used in Actor method should be decorated with [DataContract] and have [DataMember] on serializable properties"
        );
    }

    #[test]
    fn test_any_recognized_contract_passes() {
        let mut fx = Fixture::default();
        let json = fx.add_located(TypeDef::class("A").attribute(AttributeRef::new("JsonObject")));
        let serializable =
            fx.add_located(TypeDef::structure("B").attribute(AttributeRef::new("Serializable")));
        fx.actor_with(
            "OrderActor",
            &[Signature::new("Put").param("a", json).param("b", serializable)],
        );
        assert!(fx.check(&ComplexTypeNeedsAttributes::new()).is_empty());
    }

    #[test]
    fn test_ignores_primitives_records_and_collections() {
        let mut fx = Fixture::default();
        let id = fx.system("Guid");
        let record = fx.add_located(TypeDef::record("Line"));
        let item = fx.add_located(TypeDef::class("Item"));
        let items = fx.list_of(item);
        let name = fx.system("String");
        let task = fx.task_of(name);
        fx.actor_with(
            "OrderActor",
            &[
                Signature::new("Put")
                    .param("id", id)
                    .param("line", record)
                    .param("items", items),
                Signature::new("Name").returns(task),
            ],
        );
        assert!(fx.check(&ComplexTypeNeedsAttributes::new()).is_empty());
    }

    #[test]
    fn test_unreachable_type_is_exempt() {
        let mut fx = Fixture::default();
        fx.declare(TypeDef::class("Unused"));
        fx.actor_with("OrderActor", &[Signature::new("Ping")]);
        assert!(fx.check(&ComplexTypeNeedsAttributes::new()).is_empty());
    }
}
