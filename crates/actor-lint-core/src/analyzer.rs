//! Core analyzer for orchestrating lint execution.

use crate::classify::Classifier;
use crate::config::{Config, RuleConfig};
use crate::context::{Declaration, DeclarationRole, RuleContext};
use crate::resolve::InheritanceResolver;
use crate::rule::{Rule, RuleBox};
use crate::sink::DiagnosticSink;
use crate::surface::ActorSurface;
use crate::symbols::{SymbolGraph, TypeId};
use crate::types::{LintResult, Severity, Violation};

use rayon::prelude::*;
use thiserror::Error;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Errors that can occur while building an analyzer.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// Glob pattern error.
    #[error("Invalid glob pattern: {0}")]
    Glob(#[from] glob::PatternError),

    /// The dedicated worker pool could not be created.
    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),
}

/// Builder for configuring an [`Analyzer`].
#[derive(Default)]
pub struct AnalyzerBuilder {
    rules: Vec<RuleBox>,
    exclude_patterns: Vec<String>,
    config: Option<Config>,
}

impl AnalyzerBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule to the analyzer.
    #[must_use]
    pub fn rule<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    /// Adds a boxed rule to the analyzer.
    #[must_use]
    pub fn rule_box(mut self, rule: RuleBox) -> Self {
        self.rules.push(rule);
        self
    }

    /// Adds several boxed rules, e.g. a whole registry.
    #[must_use]
    pub fn rules(mut self, rules: impl IntoIterator<Item = RuleBox>) -> Self {
        self.rules.extend(rules);
        self
    }

    /// Adds an exclude glob pattern, matched against declaration source files.
    #[must_use]
    pub fn exclude(mut self, pattern: impl Into<String>) -> Self {
        self.exclude_patterns.push(pattern.into());
        self
    }

    /// Adds multiple exclude glob patterns.
    #[must_use]
    pub fn excludes<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exclude_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the analyzer.
    ///
    /// # Errors
    ///
    /// Returns an error if `fail_on` is not a severity, an exclude pattern is
    /// not a valid glob, or the configured worker pool cannot be created.
    pub fn build(self) -> Result<Analyzer, AnalyzerError> {
        let config = self.config.unwrap_or_default();
        config.fail_on_severity()?;

        // Merge exclude patterns from config
        let mut exclude_patterns = self.exclude_patterns;
        exclude_patterns.extend(config.analyzer.exclude.iter().cloned());
        let exclude = exclude_patterns
            .iter()
            .map(|p| glob::Pattern::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        let pool = match config.analyzer.parallelism {
            Some(threads) if config.analyzer.concurrent => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("actor-lint-{i}"))
                    .build()?,
            ),
            _ => None,
        };

        Ok(Analyzer {
            rules: self.rules,
            exclude,
            config,
            pool,
        })
    }
}

/// The main analyzer that orchestrates lint execution.
///
/// Use [`Analyzer::builder()`] to construct an instance. An analyzer holds no
/// per-run state and can analyze any number of graphs.
pub struct Analyzer {
    rules: Vec<RuleBox>,
    exclude: Vec<glob::Pattern>,
    config: Config,
    pool: Option<rayon::ThreadPool>,
}

impl Analyzer {
    /// Creates a new builder for configuring an analyzer.
    #[must_use]
    pub fn builder() -> AnalyzerBuilder {
        AnalyzerBuilder::new()
    }

    /// Returns the number of registered rules.
    #[must_use]
    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    /// Returns the configuration in effect.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets the rule configuration for a specific rule.
    #[must_use]
    pub fn rule_config(&self, rule_name: &str, rule_code: &str) -> Option<&RuleConfig> {
        self.config.rule_config(rule_name, rule_code)
    }

    /// Analyzes every declaration of `graph` and returns the findings.
    #[must_use]
    pub fn analyze(&self, graph: &SymbolGraph) -> LintResult {
        info!(
            "Starting analysis of {} declaration(s) over {} type(s)",
            graph.declarations.len(),
            graph.len()
        );

        for (owner, target) in graph.dangling_references() {
            warn!("Type {owner} references unknown type {target}");
        }

        let framework = &self.config.framework;
        let resolver = InheritanceResolver::new(graph, framework);
        let classifier = Classifier::new(&resolver);

        let rules = self.active_rules();
        let declarations = self.select_declarations(graph, &resolver);
        let checked: HashSet<TypeId> = declarations.iter().map(|d| d.id).collect();
        let sink = DiagnosticSink::new();

        let check = |declaration: &Declaration<'_>| {
            sink.extend(Self::check_declaration(
                &classifier,
                *declaration,
                &checked,
                &rules,
            ));
        };
        if self.config.analyzer.concurrent {
            match &self.pool {
                Some(pool) => pool.install(|| declarations.par_iter().for_each(check)),
                None => declarations.par_iter().for_each(check),
            }
        } else {
            declarations.iter().for_each(check);
        }

        let result = LintResult {
            violations: sink.into_sorted(),
            declarations_checked: declarations.len(),
        };

        info!(
            "Analysis complete: {} violations in {} declarations",
            result.violations.len(),
            result.declarations_checked
        );

        result
    }

    /// Enabled rules paired with their configured severity override.
    fn active_rules(&self) -> Vec<(&dyn Rule, Option<Severity>)> {
        self.rules
            .iter()
            .map(|rule| &**rule)
            .filter(|rule| {
                let enabled = self.config.is_rule_enabled(rule.name(), rule.code());
                if !enabled {
                    debug!("Skipping disabled rule: {}", rule.name());
                }
                enabled
            })
            .map(|rule| (rule, self.config.rule_severity(rule.name(), rule.code())))
            .collect()
    }

    /// Resolves the declarations to visit, in source order.
    fn select_declarations<'g>(
        &self,
        graph: &'g SymbolGraph,
        resolver: &InheritanceResolver<'_>,
    ) -> Vec<Declaration<'g>> {
        graph
            .declarations
            .iter()
            .filter_map(|&id| {
                let Some(def) = graph.get(id) else {
                    warn!("Declaration {id} does not resolve to a type; skipping");
                    return None;
                };
                if def.is_generated && self.config.analyzer.exclude_generated {
                    debug!("Skipping generated declaration: {}", def.qualified_name());
                    return None;
                }
                if self.is_excluded(def.location.as_ref().map(|l| l.file.as_path())) {
                    debug!("Excluding: {}", def.qualified_name());
                    return None;
                }
                Some(Declaration {
                    id,
                    def,
                    role: DeclarationRole::of(id, def, resolver),
                })
            })
            .collect()
    }

    fn is_excluded(&self, file: Option<&std::path::Path>) -> bool {
        file.is_some_and(|file| self.exclude.iter().any(|p| p.matches_path(file)))
    }

    /// Runs every applicable rule against one declaration.
    fn check_declaration(
        classifier: &Classifier<'_>,
        declaration: Declaration<'_>,
        checked: &HashSet<TypeId>,
        rules: &[(&dyn Rule, Option<Severity>)],
    ) -> Vec<Violation> {
        debug!(
            "Checking {} as {:?}",
            declaration.def.qualified_name(),
            declaration.role
        );

        let surface = (declaration.role == DeclarationRole::ActorClass)
            .then(|| ActorSurface::collect(declaration.id, classifier));
        let ctx = RuleContext::new(classifier, declaration, surface.as_ref(), checked);

        let mut violations = Vec::new();
        for &(rule, severity) in rules {
            if !rule.applies_to(declaration.role) {
                continue;
            }
            let found = rule.check(&ctx);
            violations.extend(apply_severity_override(severity, found));
        }
        violations
    }
}

/// Applies a severity override from configuration.
fn apply_severity_override(
    severity: Option<Severity>,
    mut violations: Vec<Violation>,
) -> Vec<Violation> {
    if let Some(severity) = severity {
        for v in &mut violations {
            v.severity = severity;
        }
    }
    violations
}
