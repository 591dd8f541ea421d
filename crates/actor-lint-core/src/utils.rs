//! Utility functions for rule implementations.

pub mod attributes;
pub mod templates;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use attributes::{has_attribute, AttributeConcept};
#[doc(inline)]
pub use templates::render;
