//! Rule presets for common configurations.

use crate::{
    ActorMissingCapability, CollectionElementNeedsValidation, ComplexTypeNeedsAttributes,
    EnumMemberMissingMarker, InterfaceMissingCapability, ParameterNeedsValidation,
    PropertyWireName, RecordNeedsContract, ReturnNeedsValidation, TypeMissingCtorOrContract,
};
use actor_lint_core::{RuleBox, Severity};
use std::str::FromStr;

/// Preset configurations for actor-lint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Preset {
    /// Every rule at its default severity.
    #[default]
    Recommended,
    /// Every rule, with warnings escalated to errors.
    Strict,
    /// Only the rules whose findings break remoting outright.
    Minimal,
}

impl Preset {
    /// Returns the rules for this preset.
    #[must_use]
    pub fn rules(self) -> Vec<RuleBox> {
        match self {
            Self::Recommended => recommended_rules(),
            Self::Strict => strict_rules(),
            Self::Minimal => minimal_rules(),
        }
    }
}

impl FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "recommended" => Ok(Self::Recommended),
            "strict" => Ok(Self::Strict),
            "minimal" => Ok(Self::Minimal),
            other => Err(format!(
                "unknown preset `{other}` (expected recommended, strict or minimal)"
            )),
        }
    }
}

/// Returns the recommended set of rules: all of them, at default severity.
#[must_use]
pub fn recommended_rules() -> Vec<RuleBox> {
    all_rules()
}

/// Returns the strict set of rules.
///
/// Same rules as [`recommended_rules`], but `warning` findings become
/// `error`s. `property-wire-name` stays informational.
#[must_use]
pub fn strict_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InterfaceMissingCapability::new()),
        Box::new(EnumMemberMissingMarker::new().severity(Severity::Error)),
        Box::new(PropertyWireName::new()),
        Box::new(ComplexTypeNeedsAttributes::new().severity(Severity::Error)),
        Box::new(ParameterNeedsValidation::new().severity(Severity::Error)),
        Box::new(ReturnNeedsValidation::new().severity(Severity::Error)),
        Box::new(CollectionElementNeedsValidation::new().severity(Severity::Error)),
        Box::new(RecordNeedsContract::new().severity(Severity::Error)),
        Box::new(ActorMissingCapability::new()),
        Box::new(TypeMissingCtorOrContract::new()),
    ]
}

/// Returns the minimal set of rules.
///
/// For gradual adoption, only includes:
/// - `interface-missing-capability` (DAPR1405)
/// - `actor-missing-capability` (DAPR1413)
/// - `type-missing-ctor-or-contract` (DAPR1414)
#[must_use]
pub fn minimal_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InterfaceMissingCapability::new()),
        Box::new(ActorMissingCapability::new()),
        Box::new(TypeMissingCtorOrContract::new()),
    ]
}

/// Returns all available rules, in code order.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(InterfaceMissingCapability::new()),
        Box::new(EnumMemberMissingMarker::new()),
        Box::new(PropertyWireName::new()),
        Box::new(ComplexTypeNeedsAttributes::new()),
        Box::new(ParameterNeedsValidation::new()),
        Box::new(ReturnNeedsValidation::new()),
        Box::new(CollectionElementNeedsValidation::new()),
        Box::new(RecordNeedsContract::new()),
        Box::new(ActorMissingCapability::new()),
        Box::new(TypeMissingCtorOrContract::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_all_rules_have_unique_codes_and_names() {
        let rules = all_rules();
        assert_eq!(rules.len(), 10);
        let codes: HashSet<_> = rules.iter().map(|r| r.code()).collect();
        let names: HashSet<_> = rules.iter().map(|r| r.name()).collect();
        assert_eq!(codes.len(), 10);
        assert_eq!(names.len(), 10);
        assert!(rules.iter().all(|r| r.code().starts_with("DAPR14")));
    }

    #[test]
    fn test_default_severities() {
        let severities: Vec<_> = all_rules()
            .iter()
            .map(|r| (r.code(), r.default_severity()))
            .collect();
        assert!(severities.contains(&("DAPR1405", Severity::Error)));
        assert!(severities.contains(&("DAPR1407", Severity::Info)));
        assert!(severities.contains(&("DAPR1412", Severity::Warning)));
        assert!(severities.contains(&("DAPR1414", Severity::Error)));
    }

    #[test]
    fn test_strict_escalates_warnings() {
        let strict = strict_rules();
        assert_eq!(strict.len(), all_rules().len());
        assert!(strict
            .iter()
            .all(|r| r.default_severity() != Severity::Warning));
    }

    #[test]
    fn test_minimal_is_errors_only() {
        let minimal = minimal_rules();
        assert_eq!(minimal.len(), 3);
        assert!(minimal
            .iter()
            .all(|r| r.default_severity() == Severity::Error));
    }

    #[test]
    fn test_parse_preset() {
        assert_eq!("Strict".parse::<Preset>(), Ok(Preset::Strict));
        assert_eq!("minimal".parse::<Preset>(), Ok(Preset::Minimal));
        assert!("everything".parse::<Preset>().is_err());
        assert_eq!(Preset::default().rules().len(), 10);
    }
}
