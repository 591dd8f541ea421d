//! Configuration types for actor-lint.

use crate::types::Severity;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Top-level configuration for actor-lint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preset to use (e.g., "recommended", "strict", "minimal").
    #[serde(default)]
    pub preset: Option<String>,

    /// Severity threshold for a failing run (default: "error").
    #[serde(default)]
    pub fail_on: Option<String>,

    /// Analyzer configuration.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Framework identities the rules check against.
    #[serde(default)]
    pub framework: FrameworkConfig,

    /// Per-rule configurations.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled. Rules are looked up by name or code.
    #[must_use]
    pub fn is_rule_enabled(&self, rule_name: &str, rule_code: &str) -> bool {
        self.rule_config(rule_name, rule_code)
            .map_or(true, |c| c.enabled.unwrap_or(true))
    }

    /// Gets the severity override for a rule.
    #[must_use]
    pub fn rule_severity(&self, rule_name: &str, rule_code: &str) -> Option<Severity> {
        self.rule_config(rule_name, rule_code)
            .and_then(|c| c.severity)
    }

    /// Gets the configuration block of a rule, keyed by name or code.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str, rule_code: &str) -> Option<&RuleConfig> {
        self.rules
            .get(rule_name)
            .or_else(|| self.rules.get(rule_code))
    }

    /// Resolves the `fail_on` threshold, defaulting to [`Severity::Error`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configured value is not a severity.
    pub fn fail_on_severity(&self) -> Result<Severity, ConfigError> {
        match self.fail_on.as_deref() {
            None => Ok(Severity::Error),
            Some(raw) => raw
                .parse()
                .map_err(|message| ConfigError::Invalid { message }),
        }
    }
}

/// Analyzer-level configuration.
///
/// These settings change which declarations are visited and how, never what
/// a rule decides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Glob patterns on declaration source files to exclude from analysis.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Skip declarations the host marks as generated.
    #[serde(default = "default_true")]
    pub exclude_generated: bool,

    /// Evaluate declarations in parallel.
    #[serde(default = "default_true")]
    pub concurrent: bool,

    /// Worker threads for concurrent evaluation (default: rayon's global pool).
    #[serde(default)]
    pub parallelism: Option<usize>,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            exclude_generated: true,
            concurrent: true,
            parallelism: None,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A `(name, namespace)` pair identifying a framework type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeIdentity {
    /// Simple name.
    pub name: String,
    /// Containing namespace.
    pub namespace: String,
}

impl TypeIdentity {
    /// Creates an identity.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl std::fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// Identities of the actor framework types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameworkConfig {
    /// Base class of every actor implementation.
    #[serde(default = "default_actor_base")]
    pub actor_base: TypeIdentity,

    /// Marker interface of remotable actor contracts.
    #[serde(default = "default_capability_interface")]
    pub capability_interface: TypeIdentity,

    /// Single-value asynchronous result wrapper.
    #[serde(default = "default_async_wrapper")]
    pub async_wrapper: TypeIdentity,

    /// Name suffix that marks an interface as an actor contract.
    #[serde(default = "default_actor_interface_suffix")]
    pub actor_interface_suffix: String,
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            actor_base: default_actor_base(),
            capability_interface: default_capability_interface(),
            async_wrapper: default_async_wrapper(),
            actor_interface_suffix: default_actor_interface_suffix(),
        }
    }
}

fn default_actor_base() -> TypeIdentity {
    TypeIdentity::new("Actor", "Dapr.Actors.Runtime")
}

fn default_capability_interface() -> TypeIdentity {
    TypeIdentity::new("IActor", "Dapr.Actors")
}

fn default_async_wrapper() -> TypeIdentity {
    TypeIdentity::new("Task", "System.Threading.Tasks")
}

fn default_actor_interface_suffix() -> String {
    "Actor".to_string()
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,

    /// Severity override for this rule.
    #[serde(default)]
    pub severity: Option<Severity>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },

    /// A value parsed but is not acceptable.
    #[error("Invalid config value: {message}")]
    Invalid {
        /// What was wrong.
        message: String,
    },
}
