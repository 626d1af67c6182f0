//! Field rule definitions for the unified listing schema
//!
//! This module defines the core rule structures used to centralize
//! per-field roles and constraints for the normalized listing record.

use std::fmt;

/// Semantic role of a normalized field
///
/// Roles classify where a field comes from conceptually; they carry no
/// validation behavior of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Core listing attribute shared by every provider
    CoreListing,
    /// Agency or contact attribute
    Agency,
    /// Field carried through without role classification
    Unclassified,
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRole::CoreListing => write!(f, "CoreListing"),
            FieldRole::Agency => write!(f, "Agency"),
            FieldRole::Unclassified => write!(f, "Unclassified"),
        }
    }
}

/// A single normalization constraint attached to a field
///
/// Constraints are independent and a field may carry any subset of them.
/// They are applied in a fixed order: numeric coercion, length truncation,
/// symbol filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    /// The value must consist of decimal digits only; anything else is dropped
    NumericOnly,
    /// The value never exceeds the given number of characters (must be > 0)
    MaxLength(usize),
    /// Characters with a UTF-8 encoding of three or more bytes are removed
    SymbolFiltered,
}

/// A declarative rule for one normalized field
///
/// Rules are declared once in the static registry and never change at
/// runtime. A field with no rule carries no constraints.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// Internal (snake_case) field name
    pub name: &'static str,
    /// External key used when the record is serialized
    pub alias: &'static str,
    /// Role classification of the field
    pub role: FieldRole,
    /// Constraints applied on every write to the field
    pub constraints: &'static [Constraint],
}

impl FieldRule {
    /// Whether the field only accepts decimal-digit strings
    #[must_use]
    pub fn numeric_only(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::NumericOnly))
    }

    /// The field's maximum length in characters, if bounded
    #[must_use]
    pub fn max_length(&self) -> Option<usize> {
        self.constraints.iter().find_map(|c| match c {
            Constraint::MaxLength(max) => Some(*max),
            _ => None,
        })
    }

    /// Whether wide-encoded symbols are stripped from the field
    #[must_use]
    pub fn symbol_filtered(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| matches!(c, Constraint::SymbolFiltered))
    }

    /// Check if the given name matches this field's internal name or alias
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.alias == name
    }
}
