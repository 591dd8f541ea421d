//! Rule requiring actor contracts to extend the capability marker.
//!
//! # Rationale
//!
//! The runtime only generates remoting proxies for interfaces that extend
//! `IActor`. An interface named like an actor contract that does not extend it
//! compiles fine and fails at activation time.
//!
//! # Detected Patterns
//!
//! - A declared interface whose name ends with the actor-interface suffix
//!   (default `Actor`) and whose flattened interface set lacks `IActor`
//! - An actor class directly implementing such an interface that is not
//!   checked itself, because it is declared elsewhere or excluded (reported
//!   on the class)

use crate::support::is_unmarked_actor_interface;
use actor_lint_core::{
    DeclarationRole, Label, Rule, RuleContext, Severity, Suggestion, Violation,
};

/// Rule code for interface-missing-capability.
pub const CODE: &str = "DAPR1405";

/// Rule name for interface-missing-capability.
pub const NAME: &str = "interface-missing-capability";

/// Requires actor contract interfaces to extend the capability marker.
#[derive(Debug, Clone)]
pub struct InterfaceMissingCapability {
    /// Severity level.
    pub severity: Severity,
}

impl Default for InterfaceMissingCapability {
    fn default() -> Self {
        Self::new()
    }
}

impl InterfaceMissingCapability {
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

    fn suggestion(ctx: &RuleContext<'_>, interface: &str) -> Suggestion {
        Suggestion::new(format!(
            "Make '{interface}' extend {}",
            ctx.framework.capability_interface
        ))
    }
}

impl Rule for InterfaceMissingCapability {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Actor contract interfaces must inherit from IActor"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn message_template(&self) -> &'static str {
        "Interface '{0}' used by Actor class should inherit from IActor"
    }

    fn applies_to(&self, role: DeclarationRole) -> bool {
        matches!(role, DeclarationRole::Interface | DeclarationRole::ActorClass)
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Violation> {
        let declaration = ctx.declaration;
        let def = declaration.def;

        if declaration.role == DeclarationRole::Interface {
            if !is_unmarked_actor_interface(ctx, declaration.id) {
                return Vec::new();
            }
            return self
                .violation(def.location.as_ref(), &[&def.name])
                .map(|v| v.with_suggestion(Self::suggestion(ctx, &def.name)))
                .into_iter()
                .collect();
        }

        // Interfaces checked in this pass get their own finding above.
        def.interfaces
            .iter()
            .copied()
            .filter(|&iface| !ctx.is_checked(iface))
            .filter(|&iface| is_unmarked_actor_interface(ctx, iface))
            .filter_map(|iface| {
                let iface_def = ctx.type_def(iface)?;
                let mut violation = self
                    .violation(def.location.as_ref(), &[&iface_def.name])?
                    .with_suggestion(Self::suggestion(ctx, &iface_def.name));
                if let Some(location) = &iface_def.location {
                    violation = violation.with_label(Label::new(location.clone(), "declared here"));
                }
                Some(violation)
            })
            .collect()
    }
}
