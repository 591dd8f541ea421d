//! Rule flagging actor method parameters whose type lacks a serialization
//! contract.
//!
//! Reported at each parameter, so every call site of a shared type shows up
//! where it is used. See `complex-type-needs-attributes` for the per-type
//! finding.

use crate::support::has_serialization_contract;
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, UsePosition,
    Violation,
};

/// Rule code for parameter-needs-validation.
pub const CODE: &str = "DAPR1409";

/// Rule name for parameter-needs-validation.
pub const NAME: &str = "parameter-needs-validation";

/// Flags actor method parameters of complex types without a contract.
#[derive(Debug, Clone)]
pub struct ParameterNeedsValidation {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ParameterNeedsValidation {
    fn default() -> Self {
        Self::new()
    }
}

impl ParameterNeedsValidation {
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

impl Rule for ParameterNeedsValidation {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actor method parameters must use types with serialization attributes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Parameter '{0}' of type '{1}' in method '{2}' should have proper serialization attributes"
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
            .filter(|u| u.classification == Classification::ComplexObject)
            .filter_map(|u| {
                let UsePosition::Parameter { name } = &u.position else {
                    return None;
                };
                let def = ctx.type_def(u.ty)?;
                if has_serialization_contract(def) {
                    return None;
                }
                let type_name = ctx.display_name(u.ty);
                let v = self.violation(u.location.as_ref(), &[name, &type_name, &u.method])?;
                Some(v.with_suggestion(Suggestion::new(format!(
                    "Add [DataContract] to '{type_name}'"
                ))))
            })
            .collect()
    }
}
