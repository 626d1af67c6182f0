//! A Rust library for normalizing heterogeneous real-estate listing feeds
//! into one unified, validated schema.
//!
//! Raw provider payloads flow through a source adapter, every field write is
//! intercepted by the record validator, and the resulting listings accumulate
//! into an ordered collection ready for serialization.

pub mod adapters;
pub mod config;
pub mod error;
pub mod models;
pub mod schema;
pub mod utils;
pub mod validate;

// Re-export the most common types for easier use
// Core types
pub use config::NormalizerConfig;
pub use error::{NormalizerError, Result};
pub use models::{Listing, ListingCollection};

// Schema and validation
pub use schema::{Constraint, FIELD_RULES, FieldRole, FieldRule, alias_for, rules_for};
pub use validate::validate_field;

// Source adapters
pub use adapters::{ImmoscoutAdapter, ImmoweltAdapter, SourceAdapter, adapter_from_name};
