//! Rule trait for defining lint rules.

use crate::context::{DeclarationRole, RuleContext};
use crate::types::{Location, Severity, Violation};
use crate::utils::render;

/// A lint rule evaluated once per declaration.
///
/// Rules are stateless: everything they need arrives through the
/// [`RuleContext`], and they return their findings instead of reporting them.
/// Evaluation is infallible; a rule that cannot decide emits nothing.
///
/// # Example
///
/// ```
/// use actor_lint_core::{DeclarationRole, Rule, RuleContext, Severity, Violation};
///
/// pub struct NoEmptyEnums;
///
/// impl Rule for NoEmptyEnums {
///     fn name(&self) -> &'static str { "no-empty-enums" }
///     fn code(&self) -> &'static str { "DEMO001" }
///     fn message_template(&self) -> &'static str { "Enum '{0}' has no members" }
///
///     fn applies_to(&self, role: DeclarationRole) -> bool {
///         role == DeclarationRole::Enum
///     }
///
///     fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
///         let def = ctx.declaration.def;
///         if def.enum_values().next().is_some() {
///             return Vec::new();
///         }
///         self.violation(def.location.as_ref(), &[&def.name])
///             .into_iter()
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "record-needs-contract").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "DAPR1412").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Positional message template; `{0}`, `{1}`, ... are filled per finding.
    fn message_template(&self) -> &'static str;

    /// Whether the rule has anything to say about declarations of this role.
    fn applies_to(&self, role: DeclarationRole) -> bool;

    /// Checks one declaration and returns any violations found.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation>;

    /// Renders the message template with `args`.
    fn message(&self, args: &[&str]) -> String {
        render(self.message_template(), args)
    }

    /// Builds a violation at `location`, or nothing when the location is
    /// unknown.
    fn violation(&self, location: Option<&Location>, args: &[&str]) -> Option<Violation> {
        location.map(|location| {
            Violation::new(
                self.code(),
                self.name(),
                self.default_severity(),
                location.clone(),
                self.message(args),
            )
        })
    }

    /// Static metadata of this rule.
    fn descriptor(&self) -> RuleDescriptor {
        RuleDescriptor {
            name: self.name(),
            code: self.code(),
            description: self.description(),
            default_severity: self.default_severity(),
            message_template: self.message_template(),
        }
    }
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;

/// Static metadata of a rule, as listed by `list-rules`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct RuleDescriptor {
    /// Kebab-case name.
    pub name: &'static str,
    /// Stable code.
    pub code: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Severity before configuration overrides.
    pub default_severity: Severity,
    /// Message template.
    pub message_template: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestRule;

    impl Rule for TestRule {
        fn name(&self) -> &'static str {
            "test-rule"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test rule"
        }
        fn message_template(&self) -> &'static str {
            "Type '{0}' in '{1}'"
        }
        fn applies_to(&self, _role: DeclarationRole) -> bool {
            true
        }
        fn check(&self, _ctx: &RuleContext<'_>) -> Vec<Violation> {
            Vec::new()
        }
    }

    #[test]
    fn test_rule_trait() {
        let rule = TestRule;
        assert_eq!(rule.name(), "test-rule");
        assert_eq!(rule.code(), "TEST001");
        assert_eq!(rule.default_severity(), Severity::Warning);
        assert_eq!(rule.descriptor().description, "A test rule");
    }

    #[test]
    fn test_violation_uses_template() {
        let rule = TestRule;
        let location = Location::new("a.cs", 3, 7);
        let v = rule
            .violation(Some(&location), &["Order", "Submit"])
            .expect("location given");
        assert_eq!(v.message, "Type 'Order' in 'Submit'");
        assert_eq!(v.code, "TEST001");
        assert!(rule.violation(None, &["Order"]).is_none());
    }
}
