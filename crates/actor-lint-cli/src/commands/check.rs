//! Check command implementation.

use actor_lint_core::{Analyzer, Config, LintResult, RuleBox, SymbolGraph};
use actor_lint_rules::{all_rules, Preset};
use anyhow::{Context, Result};
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Command-line options of `actor-lint check`.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Comma-separated rule names or codes.
    pub rules_filter: Option<String>,
    /// Extra exclude globs.
    pub exclude: Vec<String>,
    /// Check generated declarations too.
    pub include_generated: bool,
    /// Disable concurrent evaluation.
    pub sequential: bool,
}

/// Runs the check command.
pub fn run(graphs: &[PathBuf], options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let mut config = load_config(source)?;
    if options.include_generated {
        config.analyzer.exclude_generated = false;
    }
    if options.sequential {
        config.analyzer.concurrent = false;
    }

    let rules = match &options.rules_filter {
        Some(filter) => {
            let names: Vec<&str> = filter.split(',').map(str::trim).collect();
            filter_rules(&names)
        }
        None => preset_rules(&config)?,
    };

    let analyzer = Analyzer::builder()
        .rules(rules)
        .excludes(options.exclude)
        .config(config)
        .build()
        .context("Failed to build analyzer")?;
    let fail_on = analyzer.config().fail_on_severity()?;

    let mut result = LintResult::new();
    for path in graphs {
        let graph = SymbolGraph::from_file(path)
            .with_context(|| format!("Failed to load symbol graph: {}", path.display()))?;
        tracing::info!(
            "Analyzing {} with {} rules",
            path.display(),
            analyzer.rule_count()
        );
        result.extend(analyzer.analyze(&graph));
    }

    super::output::print(&result, options.format)?;

    if result.has_violations_at(fail_on) {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(source: &ConfigSource) -> Result<Config> {
    if let Some(path) = source.path().filter(|_| source.is_global()) {
        tracing::info!("Using global config: {}", path.display());
    }
    source
        .load()
        .with_context(|| format!("Failed to load {source} config"))
}

fn preset_rules(config: &Config) -> Result<Vec<RuleBox>> {
    let preset = match config.preset.as_deref() {
        Some(name) => name.parse::<Preset>().map_err(anyhow::Error::msg)?,
        None => Preset::default(),
    };
    tracing::debug!("Using preset {preset:?}");
    Ok(preset.rules())
}

fn filter_rules(names: &[&str]) -> Vec<RuleBox> {
    let mut available = all_rules();
    let mut selected: Vec<RuleBox> = Vec::new();

    for name in names.iter().filter(|n| !n.is_empty()) {
        match available
            .iter()
            .position(|r| r.name() == *name || r.code().eq_ignore_ascii_case(name))
        {
            Some(index) => selected.push(available.swap_remove(index)),
            None if selected
                .iter()
                .any(|r| r.name() == *name || r.code().eq_ignore_ascii_case(name)) => {}
            None => tracing::warn!("Unknown rule: {}", name),
        }
    }

    selected
}
