//! Rule requiring every actor class to expose a remotable contract.
//!
//! # Rationale
//!
//! An actor registers under the interfaces it implements that extend
//! `IActor`. A class deriving from the actor base without any such interface
//! cannot be invoked remotely at all.
//!
//! # Detected Patterns
//!
//! - A class deriving from the actor base whose flattened interface set
//!   contains no interface extending `IActor`
//!
//! Implementing `IActor` directly does not count; the marker exposes no
//! methods.

use actor_lint_core::{DeclarationRole, Rule, RuleContext, Severity, Suggestion, Violation};

/// Rule code for actor-missing-capability.
pub const CODE: &str = "DAPR1413";

/// Rule name for actor-missing-capability.
pub const NAME: &str = "actor-missing-capability";

/// Requires actor classes to implement an interface extending the capability
/// marker.
#[derive(Debug, Clone)]
pub struct ActorMissingCapability {
    /// Severity level.
    pub severity: Severity,
}

impl Default for ActorMissingCapability {
    fn default() -> Self {
        Self::new()
    }
}

impl ActorMissingCapability {
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

impl Rule for ActorMissingCapability {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actor classes must implement an interface that inherits from IActor"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Actor class '{0}' should implement an interface that inherits from IActor"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        role == DeclarationRole::ActorClass
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let declaration = ctx.declaration;
        let exposed = ctx
            .resolver
            .all_interfaces(declaration.id)
            .iter()
            .any(|&iface| ctx.resolver.derives_from_capability(iface));
        if exposed {
            return Vec::new();
        }

        let class = declaration.def;
        self.violation(class.location.as_ref(), &[&class.name])
            .map(|v| {
                v.with_suggestion(Suggestion::new(format!(
                    "Declare 'I{}' extending {} and implement it",
                    class.name, ctx.framework.capability_interface
                )))
            })
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_lint_core::fixtures::Fixture;
    use actor_lint_core::TypeDef;

    #[test]
    fn test_detects_actor_without_contract() {
        let mut fx = Fixture::default();
        let base = fx.actor_base;
        fx.declare(TypeDef::class("TimerActor").extends(base));

        let violations = fx.check(&ActorMissingCapability::new());
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Error);
        insta::assert_snapshot!(
            &violations[0].message,
            @"Actor class 'TimerActor' should implement an interface that inherits from IActor"
        );
    }

    #[test]
    fn test_direct_marker_is_not_enough() {
        let mut fx = Fixture::default();
        let (base, marker) = (fx.actor_base, fx.capability);
        fx.declare(TypeDef::class("TimerActor").extends(base).implements(marker));
        assert_eq!(fx.check(&ActorMissingCapability::new()).len(), 1);
    }

    #[test]
    fn test_contract_inherited_from_base_class() {
        let mut fx = Fixture::default();
        let contract = fx.contract("ITimerActor", &[]);
        let middle = fx.actor("TimerActorBase", contract, &[]);
        fx.declare(TypeDef::class("TimerActor").extends(middle));
        assert!(fx.check(&ActorMissingCapability::new()).is_empty());
    }

    #[test]
    fn test_independent_of_unmarked_interface() {
        let mut fx = Fixture::default();
        let unmarked = fx.declare(TypeDef::interface("ITimerActor"));
        fx.actor("TimerActor", unmarked, &[]);
        assert_eq!(fx.check(&ActorMissingCapability::new()).len(), 1);
    }
}
