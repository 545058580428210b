//! taxon-core: Shared types, codec, and validation for the Taxon platform.
//!
//! This crate provides the foundational pieces used across all Taxon
//! components:
//! - The `SpecialReport` entity and its alternative-identifier grouping
//! - The closed set of identifier namespaces and graph labels
//! - JSON decoding for the external wire shape
//! - Boundary validation errors
//!
//! No I/O and no async live here; this module is pure data.

pub mod codec;
pub mod error;
pub mod types;

pub use error::ValidationError;
pub use types::{labels, AlternativeIdentifiers, IdentifierNamespace, SpecialReport};
