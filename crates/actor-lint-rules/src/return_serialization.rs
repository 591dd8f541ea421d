//! Rule flagging actor method results whose type lacks a serialization
//! contract.
//!
//! `Task<T>` results are checked as `T`; a bare `Task` or `void` result has
//! nothing to serialize.

use crate::support::has_serialization_contract;
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, UsePosition,
    Violation,
};

/// Rule code for return-needs-validation.
pub const CODE: &str = "DAPR1410";

/// Rule name for return-needs-validation.
pub const NAME: &str = "return-needs-validation";

/// Flags actor method return types of complex types without a contract.
#[derive(Debug, Clone)]
pub struct ReturnNeedsValidation {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ReturnNeedsValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ReturnNeedsValidation {
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

impl Rule for ReturnNeedsValidation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actor method return types must use types with serialization attributes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Return type '{0}' in method '{1}' should have proper serialization attributes"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let Some(surface) = ctx.surface else {
            return Vec::new();
        };

        surface
            .uses()
            .iter()
            .filter(|u| u.position == UsePosition::Return)
            .filter(|u| u.classification == Classification::ComplexObject)
            .filter(|u| ctx.type_def(u.ty).is_some_and(|def| !has_serialization_contract(def)))
            .filter_map(|u| {
                let type_name = ctx.display_name(u.ty);
                let v = self.violation(u.location.as_ref(), &[&type_name, &u.method])?;
                Some(v.with_suggestion(Suggestion::new(format!(
                    "Add [DataContract] to '{type_name}'"
                ))))
            })
            .collect()
    }
}
