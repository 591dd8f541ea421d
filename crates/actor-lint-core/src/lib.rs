//! # actor-lint-core
//!
//! Core framework for checking that types crossing an actor boundary carry
//! the metadata their serializer needs.
//!
//! The host front end resolves source code into a [`SymbolGraph`]; this crate
//! provides everything needed to run rules over it:
//!
//! - [`Classifier`] and [`Classification`] for "what kind of type is this"
//! - [`InheritanceResolver`] for actor-base and capability-interface queries
//! - [`ActorSurface`] for the types reachable from an actor's remotable methods
//! - [`Rule`] trait for per-declaration rules
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use actor_lint_core::{Analyzer, SymbolGraph};
//!
//! let graph = SymbolGraph::from_file("obj/symbols.json".as_ref())?;
//! let analyzer = Analyzer::builder()
//!     .rule(MyRule::new())
//!     .build()?;
//!
//! let result = analyzer.analyze(&graph);
//! println!("{}", result.format_report(Severity::Warning));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod classify;
mod config;
mod context;
mod resolve;
mod rule;
mod sink;
mod surface;
mod symbols;
mod types;

#[cfg(any(test, feature = "test-support"))]
pub mod fixtures;

/// Utility modules for rule implementations.
pub mod utils;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use classify::{Classification, Classifier};
pub use config::{AnalyzerConfig, Config, ConfigError, FrameworkConfig, RuleConfig, TypeIdentity};
pub use context::{Declaration, DeclarationRole, RuleContext};
pub use resolve::InheritanceResolver;
pub use rule::{Rule, RuleBox, RuleDescriptor};
pub use sink::DiagnosticSink;
pub use surface::{ActorSurface, SignatureUse, UsePosition};
pub use symbols::{
    Accessibility, AttributeRef, ConstructorRef, MemberKind, MemberRef, MethodRef, ModelError,
    ParameterRef, SymbolGraph, TypeDef, TypeId, TypeKind,
};
pub use types::{
    Label, LintResult, Location, Severity, Suggestion, Violation, ViolationDiagnostic,
};
