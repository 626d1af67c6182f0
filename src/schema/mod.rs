//! Declarative schema for the normalized listing record.

pub mod field_def;

pub use field_def::{Constraint, FIELD_RULES, FieldRole, FieldRule, alias_for, rules_for};
