//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_FILE: &str = "actor-lint.toml";

const DEFAULT_CONFIG: &str = r#"# actor-lint configuration

# Rule preset: "recommended", "strict" or "minimal"
preset = "recommended"

# Lowest severity that makes `actor-lint check` exit non-zero
fail_on = "error"

[analyzer]
# Glob patterns on declaration source files to exclude from analysis
exclude = [
    "**/obj/**",
    "**/bin/**",
]

# Skip declarations the compiler marks as generated
exclude_generated = true

# Evaluate declarations in parallel
concurrent = true
# parallelism = 4

# Framework identities, for forks or wrappers of the Dapr SDK
# [framework]
# actor_base = { name = "Actor", namespace = "Dapr.Actors.Runtime" }
# capability_interface = { name = "IActor", namespace = "Dapr.Actors" }
# actor_interface_suffix = "Actor"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden,
# keyed by name or code

[rules.property-wire-name]
enabled = true

[rules.record-needs-contract]
enabled = true
# severity = "error"  # Override default severity
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    write_config(Path::new("."), force)?;

    println!("Created {CONFIG_FILE}");
    println!("\nNext steps:");
    println!("  1. Edit {CONFIG_FILE} to configure rules");
    println!("  2. Export a symbol graph from your build");
    println!("  3. Run: actor-lint check symbols.json");

    Ok(())
}

fn write_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE);

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}
