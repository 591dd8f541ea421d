//! Configuration file resolution with global fallback.
//!
//! Resolves the configuration file using a deterministic priority order:
//!
//! 1. `--config` flag (explicit path)
//! 2. `actor-lint.toml` or `.actor-lint.toml` in the working directory or the
//!    nearest ancestor that has one (solution roots usually sit above the
//!    project being built)
//! 3. `~/.actor-lint/config.toml` (global fallback)
//! 4. No config found → defaults

use actor_lint_core::{Config, ConfigError};
use std::fmt;
use std::path::{Path, PathBuf};

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicitly specified via `--config` flag.
    Explicit(PathBuf),
    /// Found in the working directory or one of its ancestors.
    Project(PathBuf),
    /// Loaded from the global config directory (`~/.actor-lint/`).
    Global(PathBuf),
    /// No config found; defaults will be used.
    Default,
}

impl ConfigSource {
    /// Returns the resolved path, if any.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Returns `true` if the config was loaded from the global directory.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }

    /// Loads the configuration this source points at.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed. A missing
    /// explicit file is an error; [`ConfigSource::Default`] never fails.
    pub fn load(&self) -> Result<Config, ConfigError> {
        match self.path() {
            Some(path) => {
                tracing::debug!("Loading {self} config: {}", path.display());
                Config::from_file(path)
            }
            None => Ok(Config::default()),
        }
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            Self::Explicit(_) => "explicit",
            Self::Project(_) => "project",
            Self::Global(_) => "global",
            Self::Default => "default",
        };
        f.write_str(kind)
    }
}

/// Project-level config file names, checked in order within each directory.
const PROJECT_CONFIG_NAMES: &[&str] = &["actor-lint.toml", ".actor-lint.toml"];

/// Config file name within the global config directory.
const GLOBAL_CONFIG_NAME: &str = "config.toml";

/// Resolves the configuration file path.
///
/// See module-level docs for resolution order.
#[must_use]
pub fn resolve(working_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_inner(working_dir, explicit, global_config_dir())
}

/// Testable core: accepts `global_dir` as parameter to avoid env var races.
fn resolve_inner(
    working_dir: &Path,
    explicit: Option<&Path>,
    global_dir: Option<PathBuf>,
) -> ConfigSource {
    if let Some(p) = explicit {
        return ConfigSource::Explicit(p.to_path_buf());
    }

    if let Some(found) = find_project_config(working_dir) {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    if let Some(dir) = global_dir {
        let candidate = dir.join(GLOBAL_CONFIG_NAME);
        if candidate.is_file() {
            tracing::debug!("Found global config: {}", candidate.display());
            return ConfigSource::Global(candidate);
        }
    }

    ConfigSource::Default
}

fn find_project_config(working_dir: &Path) -> Option<PathBuf> {
    working_dir.ancestors().find_map(|dir| {
        PROJECT_CONFIG_NAMES
            .iter()
            .map(|name| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}

/// Returns the global config directory path.
///
/// Resolution: `$ACTOR_LINT_CONFIG_DIR` > `~/.actor-lint/`
#[must_use]
pub fn global_config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var("ACTOR_LINT_CONFIG_DIR") {
        return Some(PathBuf::from(dir));
    }
    home::home_dir().map(|h| h.join(".actor-lint"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn explicit_takes_priority_over_project() {
        let tmp = TempDir::new().unwrap();
        let explicit = tmp.path().join("custom.toml");
        touch(&explicit, "");
        touch(&tmp.path().join("actor-lint.toml"), "");

        let result = resolve_inner(tmp.path(), Some(&explicit), None);
        assert_eq!(result, ConfigSource::Explicit(explicit));
    }

    #[test]
    fn explicit_missing_file_fails_on_load() {
        let source = resolve_inner(
            Path::new("/tmp"),
            Some(Path::new("/nonexistent/actor-lint.toml")),
            None,
        );
        assert!(matches!(source, ConfigSource::Explicit(_)));
        assert!(matches!(source.load(), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn plain_name_preferred_over_dot_prefix() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("actor-lint.toml"), "");
        touch(&tmp.path().join(".actor-lint.toml"), "");

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join("actor-lint.toml"))
        );
    }

    #[test]
    fn dot_prefixed_config_found() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join(".actor-lint.toml"), "");

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(
            result,
            ConfigSource::Project(tmp.path().join(".actor-lint.toml"))
        );
    }

    #[test]
    fn nearest_ancestor_config_wins() {
        let root = TempDir::new().unwrap();
        let project = root.path().join("src").join("Shop.Actors");
        fs::create_dir_all(&project).unwrap();
        touch(&root.path().join("actor-lint.toml"), "");

        let result = resolve_inner(&project, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(root.path().join("actor-lint.toml"))
        );

        touch(&project.join(".actor-lint.toml"), "");
        let result = resolve_inner(&project, None, None);
        assert_eq!(
            result,
            ConfigSource::Project(project.join(".actor-lint.toml"))
        );
    }

    #[test]
    fn directory_named_like_config_is_ignored() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("actor-lint.toml")).unwrap();

        let result = resolve_inner(tmp.path(), None, None);
        assert_eq!(result, ConfigSource::Default);
    }

    #[test]
    fn global_fallback_when_no_project_config() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();
        touch(&global.path().join("config.toml"), "fail_on = \"warning\"");

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(result.is_global());
        assert_eq!(result.to_string(), "global");

        let config = result.load().unwrap();
        assert_eq!(config.fail_on.as_deref(), Some("warning"));
    }

    #[test]
    fn global_skipped_when_project_config_exists() {
        let project = TempDir::new().unwrap();
        touch(&project.path().join("actor-lint.toml"), "");
        let global = TempDir::new().unwrap();
        touch(&global.path().join("config.toml"), "");

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert!(matches!(result, ConfigSource::Project(_)));
    }

    #[test]
    fn nothing_found_loads_defaults() {
        let project = TempDir::new().unwrap();
        let global = TempDir::new().unwrap();

        let result = resolve_inner(project.path(), None, Some(global.path().to_path_buf()));
        assert_eq!(result, ConfigSource::Default);
        assert!(result.path().is_none());

        let config = result.load().unwrap();
        assert!(config.preset.is_none());
        assert!(config.analyzer.concurrent);
    }

    #[test]
    fn invalid_project_config_reports_parse_error() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("actor-lint.toml"), "[analyzer\n");

        let source = resolve_inner(tmp.path(), None, None);
        assert!(matches!(source.load(), Err(ConfigError::Parse { .. })));
    }
}
