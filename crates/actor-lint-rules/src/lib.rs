//! # actor-lint-rules
//!
//! Built-in serialization rules for Dapr actor code.
//!
//! Every rule inspects one declaration of a [`SymbolGraph`](actor_lint_core::SymbolGraph)
//! and reports what would break or drift when the type crosses the actor
//! remoting boundary.
//!
//! ## Available Rules
//!
//! | Code | Name | Default | Description |
//! |------|------|---------|-------------|
//! | DAPR1405 | `interface-missing-capability` | error | Actor-named interfaces must extend `IActor` |
//! | DAPR1406 | `enum-member-missing-marker` | warning | Enum values need `[EnumMember]` |
//! | DAPR1407 | `property-wire-name` | info | Actor class properties should pin a JSON name |
//! | DAPR1408 | `complex-type-needs-attributes` | warning | Complex types on the actor surface need a contract |
//! | DAPR1409 | `parameter-needs-validation` | warning | Per-parameter contract check |
//! | DAPR1410 | `return-needs-validation` | warning | Per-result contract check |
//! | DAPR1411 | `collection-element-needs-validation` | warning | Collection elements need a contract |
//! | DAPR1412 | `record-needs-contract` | warning | Records need `[DataContract]` and `[DataMember]` |
//! | DAPR1413 | `actor-missing-capability` | error | Actor classes must implement an `IActor` interface |
//! | DAPR1414 | `type-missing-ctor-or-contract` | error | Parameterless constructor or `[DataContract]` |
//!
//! ## Usage
//!
//! ```ignore
//! use actor_lint_core::{Analyzer, SymbolGraph};
//! use actor_lint_rules::{all_rules, RecordNeedsContract, Severity};
//!
//! let analyzer = Analyzer::builder()
//!     .rules(all_rules())
//!     .rule(RecordNeedsContract::new().severity(Severity::Error))
//!     .build()?;
//! let result = analyzer.analyze(&SymbolGraph::from_file("symbols.json".as_ref())?);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod actor_missing_capability;
pub mod collection_element;
pub mod complex_type_attributes;
pub mod constructor_or_contract;
pub mod enum_member_missing_marker;
pub mod interface_missing_capability;
pub mod parameter_serialization;
mod presets;
pub mod property_wire_name;
pub mod record_contract;
pub mod return_serialization;
mod support;

pub use actor_missing_capability::ActorMissingCapability;
pub use collection_element::CollectionElementNeedsValidation;
pub use complex_type_attributes::ComplexTypeNeedsAttributes;
pub use constructor_or_contract::TypeMissingCtorOrContract;
pub use enum_member_missing_marker::EnumMemberMissingMarker;
pub use interface_missing_capability::InterfaceMissingCapability;
pub use parameter_serialization::ParameterNeedsValidation;
pub use presets::{all_rules, minimal_rules, recommended_rules, strict_rules, Preset};
pub use property_wire_name::PropertyWireName;
pub use record_contract::RecordNeedsContract;
pub use return_serialization::ReturnNeedsValidation;

/// Re-export core types for convenience.
pub use actor_lint_core::{Rule, RuleBox, Severity, Violation};
