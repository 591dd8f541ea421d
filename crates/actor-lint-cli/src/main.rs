//! actor-lint CLI tool.
//!
//! Usage:
//! ```bash
//! actor-lint check [OPTIONS] <GRAPH>...
//! actor-lint list-rules
//! actor-lint init
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Serialization linter for Dapr actor interfaces and their payload types
#[derive(Parser)]
#[command(name = "actor-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ACTOR_LINT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run lint checks over exported symbol graphs
    Check {
        /// Symbol graph JSON files, one per compilation unit
        #[arg(required = true)]
        graphs: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Only run specific rules (comma-separated names or codes)
        #[arg(long)]
        rules: Option<String>,

        /// Exclude declarations whose source file matches (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Also check declarations marked as generated
        #[arg(long)]
        include_generated: bool,

        /// Evaluate declarations on the current thread only
        #[arg(long)]
        sequential: bool,
    },

    /// List available rules
    ListRules {
        /// Print rule descriptors as JSON
        #[arg(long)]
        json: bool,
    },

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
    /// Rich diagnostics rendered by miette.
    Pretty,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            graphs,
            format,
            rules,
            exclude,
            include_generated,
            sequential,
        } => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            let source = config_resolver::resolve(&cwd, cli.config.as_deref());
            let options = commands::check::CheckOptions {
                format,
                rules_filter: rules,
                exclude,
                include_generated,
                sequential,
            };
            commands::check::run(&graphs, options, &source)
        }
        Commands::ListRules { json } => commands::list_rules::run(json),
        Commands::Init { force } => commands::init::run(force),
    }
}
