//! Rule requiring `[EnumMember]` on every enum value.
//!
//! # Rationale
//!
//! Data-contract serialization writes enum values by their marked name. An
//! unmarked value serializes as its integer form, so renaming or reordering
//! values silently changes the wire format.
//!
//! # Detected Patterns
//!
//! - Any value of a declared enum without `[EnumMember]`

use actor_lint_core::utils::{has_attribute, AttributeConcept};
use actor_lint_core::{DeclarationRole, Rule, RuleContext, Severity, Suggestion, Violation};

/// Rule code for enum-member-missing-marker.
pub const CODE: &str = "DAPR1406";

/// Rule name for enum-member-missing-marker.
pub const NAME: &str = "enum-member-missing-marker";

/// Requires `[EnumMember]` on enum values.
#[derive(Debug, Clone)]
pub struct EnumMemberMissingMarker {
    /// Severity level.
    pub severity: Severity,
}

impl Default for EnumMemberMissingMarker {
    fn default() -> Self {
        Self::new()
    }
}

impl EnumMemberMissingMarker {
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

impl Rule for EnumMemberMissingMarker {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Enum members must be decorated with [EnumMember]"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Enum member '{0}' in enum '{1}' should be decorated with [EnumMember] attribute for proper serialization"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::Enum
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let def = ctx.declaration.def;
        def.enum_values()
            .filter(|value| !has_attribute(&value.attributes, AttributeConcept::EnumMember))
            .filter_map(|value| {
                self.violation(value.location.as_ref(), &[&value.name, &def.name])
                    .map(|v| {
                        v.with_suggestion(Suggestion::new(format!(
                            "Add [EnumMember(Value = \"{}\")] to '{}'",
                            value.name, value.name
                        )))
                    })
            })
            .collect()
    }
}
