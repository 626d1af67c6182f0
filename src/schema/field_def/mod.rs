//! Module for unified field rule definitions
//!
//! This module provides a centralized system for declaring listing fields,
//! their roles, external aliases, and validation constraints.

pub mod field;
pub mod registry;

pub use field::{Constraint, FieldRole, FieldRule};
pub use registry::{FIELD_RULES, alias_for, rules_for};
