//! Rule recommending explicit wire names on actor class properties.
//!
//! Informational. Weakly-typed actor clients address state through JSON, where
//! property names follow the serializer's naming policy unless pinned with
//! `[JsonPropertyName]`.

use actor_lint_core::utils::{has_attribute, AttributeConcept};
use actor_lint_core::{DeclarationRole, Rule, RuleContext, Severity, Suggestion, Violation};

/// Rule code for property-wire-name.
pub const CODE: &str = "DAPR1407";

/// Rule name for property-wire-name.
pub const NAME: &str = "property-wire-name";

/// Recommends `[JsonPropertyName]` on actor class properties.
#[derive(Debug, Clone)]
pub struct PropertyWireName {
    /// Severity level.
    pub severity: Severity,
}

impl Default for PropertyWireName {
    fn default() -> Self {
        Self::new()
    }
}

impl PropertyWireName {
    /// Creates a new rule with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Info,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for PropertyWireName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actor class properties should pin their JSON name with [JsonPropertyName]"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Property '{0}' in Actor class '{1}' should consider using [JsonPropertyName] attribute for consistent naming"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let class = ctx.declaration.def;
        class
            .properties()
            .filter(|p| !has_attribute(&p.attributes, AttributeConcept::WireName))
            .filter_map(|p| {
                let v = self.violation(p.location.as_ref(), &[&p.name, &class.name])?;
                Some(v.with_suggestion(Suggestion::new(format!(
                    "Add [JsonPropertyName(\"{}\")]",
                    camel_case(&p.name)
                ))))
            })
            .collect()
    }
}

fn camel_case(name: &str) -> String {
    let mut chars = name.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_lowercase().chain(chars).collect()
    })
}
