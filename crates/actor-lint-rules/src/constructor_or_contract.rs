//! Rule requiring reachable complex types to be constructible by the
//! serializer.
//!
//! # Rationale
//!
//! Without `[DataContract]` the serializer falls back to creating instances
//! through a public parameterless constructor. A type that offers neither
//! fails at runtime on the first call that carries it.
//!
//! # Detected Patterns
//!
//! - A class with explicit constructors, none of them public and
//!   parameterless
//! - A struct without an explicit public parameterless constructor
//!
//! A class that declares no constructor at all gets the implicit public one
//! and passes. Reported at every use of the type.

use crate::support::has_data_contract;
use actor_lint_core::{
    Classification, DeclarationRole, Rule, RuleContext, Severity, Suggestion, TypeDef, TypeKind,
    Violation,
};

/// Rule code for type-missing-ctor-or-contract.
pub const CODE: &str = "DAPR1414";

/// Rule name for type-missing-ctor-or-contract.
pub const NAME: &str = "type-missing-ctor-or-contract";

/// Requires a public parameterless constructor or `[DataContract]`.
#[derive(Debug, Clone)]
pub struct TypeMissingCtorOrContract {
    /// Severity level.
    pub severity: Severity,
}

impl Default for TypeMissingCtorOrContract {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeMissingCtorOrContract {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

fn has_usable_constructor(def: &TypeDef) -> bool {
    if def.constructors.is_empty() {
        return def.kind == TypeKind::Class;
    }
    def.constructors.iter().any(|c| c.is_public_parameterless())
}

impl Rule for TypeMissingCtorOrContract {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Types used in actor methods need a public parameterless constructor or [DataContract]"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Type '{0}' must either have a public parameterless constructor or be decorated with [DataContract] attribute for proper serialization"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let Some(surface) = ctx.surface else {
            return Vec::new();
        };

        surface
            .reachable()
            .filter(|(_, classification, _)| *classification == Classification::ComplexObject)
            .filter_map(|(ty, _, use_)| {
                let def = ctx.type_def(ty)?;
                if has_data_contract(def) || has_usable_constructor(def) {
                    return None;
                }
                let v = self.violation(use_.location.as_ref(), &[&def.name])?;
                Some(v.with_suggestion(Suggestion::new(format!(
                    "Add a public parameterless constructor or [DataContract] to '{}'",
                    def.name
                ))))
            })
            .collect()
    }
}
