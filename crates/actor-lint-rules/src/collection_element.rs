//! Rule flagging collections on the actor surface whose element type lacks a
//! serialization contract.
//!
//! # Detected Patterns
//!
//! - `List<T>`, `T[]`, `IEnumerable<T>`, ... as a parameter or (unwrapped)
//!   result, where `T` is a class or struct without a contract attribute
//!
//! Only the first-level element is inspected: `List<List<T>>` checks the
//! inner list, not `T`. For map shapes the first type argument (the key) is
//! the element. Record elements are left to `record-needs-contract`.

use crate::support::has_serialization_contract;
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, Violation,
};

/// Rule code for collection-element-needs-validation.
pub const CODE: &str = "DAPR1411";

/// Rule name for collection-element-needs-validation.
pub const NAME: &str = "collection-element-needs-validation";

/// Flags collection uses whose element type lacks a contract.
#[derive(Debug, Clone)]
pub struct CollectionElementNeedsValidation {
    /// Severity level.
    pub severity: Severity,
}

impl Default for CollectionElementNeedsValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl CollectionElementNeedsValidation {
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

impl Rule for CollectionElementNeedsValidation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Collection element types in actor methods must have serialization attributes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Collection type '{0}' in Actor method contains elements of type '{1}' which needs proper serialization attributes"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let Some(surface) = ctx.surface else {
            return Vec::new();
        };

        let mut violations = Vec::new();
        for use_ in surface.uses() {
            let Some((element, Classification::ComplexObject)) = use_.element else {
                continue;
            };
            let Some(element_def) = ctx.type_def(element) else {
                continue;
            };
            if has_serialization_contract(element_def) {
                continue;
            }
            let collection = ctx.display_name(use_.ty);
            let element_name = ctx.display_name(element);
            if let Some(v) = self.violation(use_.location.as_ref(), &[&collection, &element_name]) {
                violations.push(v.with_suggestion(Suggestion::new(format!(
                    "Add [DataContract] to '{element_name}'"
                ))));
            }
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
    fn test_detects_list_and_array_elements() {
        let mut fx = Fixture::default();
        let item = fx.add(TypeDef::class("Item"));
        let list = fx.list_of(item);
        let array = fx.array_of(item);
        let task = fx.task_of(array);
        fx.actor_with(
            "CartActor",
            &[
                Signature::new("Add").param("items", list),
                Signature::new("All").returns(task),
            ],
        );

        let violations = fx.check(&CollectionElementNeedsValidation::new());
        assert_eq!(violations.len(), 2);
        insta::assert_snapshot!(
            &violations[0].message,
            @"Collection type 'List' in Actor method contains elements of type 'Item' which needs proper serialization attributes"
        );
        assert!(violations[1].message.starts_with("Collection type 'Item[]'"));
    }

    #[test]
    fn test_map_uses_first_argument() {
        let mut fx = Fixture::default();
        let key = fx.add(TypeDef::class("SkuKey"));
        let value = fx.system("Int32");
        let by_key = fx.dictionary_of(key, value);
        let string = fx.system("String");
        let by_name = fx.dictionary_of(string, key);
        fx.actor_with(
            "CartActor",
            &[Signature::new("Load")
                .param("byKey", by_key)
                .param("byName", by_name)],
        );

        let violations = fx.check(&CollectionElementNeedsValidation::new());
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("elements of type 'SkuKey'"));
    }

    #[test]
    fn test_contract_records_and_nested_collections_pass() {
        let mut fx = Fixture::default();
        let good = fx.add(TypeDef::class("Good").attribute(AttributeRef::new("DataContract")));
        let line = fx.add(TypeDef::record("Line"));
        let bad = fx.add(TypeDef::class("Bad"));
        let inner = fx.list_of(bad);
        let goods = fx.list_of(good);
        let lines = fx.list_of(line);
        let nested = fx.list_of(inner);
        fx.actor_with(
            "CartActor",
            &[Signature::new("Put")
                .param("goods", goods)
                .param("lines", lines)
                .param("nested", nested)],
        );
        assert!(fx.check(&CollectionElementNeedsValidation::new()).is_empty());
    }
}
