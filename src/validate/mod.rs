//! Constraint evaluators and the record validator
//!
//! Every write to a normalized listing routes through [`validate_field`],
//! which looks up the field's declared constraints and applies the matching
//! evaluators in a fixed order: numeric coercion, length truncation, symbol
//! filtering. Evaluators never fail; an invalid value is degraded (dropped,
//! truncated, or stripped) rather than rejected, so a listing is never
//! observable in an invalid state.

use log::debug;

use crate::schema::{Constraint, FieldRule, rules_for};

/// Drop values that are not made of decimal digits only
///
/// Upstream feeds occasionally emit descriptive strings ("2+") in numeric
/// slots; those become absent rather than failing the record.
#[must_use]
pub fn coerce_numeric(value: Option<String>) -> Option<String> {
    match value {
        Some(v) if !v.chars().all(|c| c.is_ascii_digit()) => None,
        other => other,
    }
}

/// Truncate a value to the last whitespace boundary at or before `max`
/// characters, dropping the boundary itself
///
/// Values of `max` characters or fewer pass through unchanged. When the
/// first `max` characters contain no whitespace the value is hard-truncated
/// at exactly `max` characters. Lengths are counted in characters, not bytes.
#[must_use]
pub fn truncate_words(value: Option<String>, max: usize) -> Option<String> {
    let Some(v) = value else { return None };
    if v.chars().count() <= max {
        return Some(v);
    }
    let cut = v.char_indices().nth(max).map_or(v.len(), |(i, _)| i);
    let head = &v[..cut];
    match head.rfind(char::is_whitespace) {
        Some(boundary) => Some(head[..boundary].to_string()),
        None => Some(head.to_string()),
    }
}

/// Remove every character whose UTF-8 encoding is three or more bytes,
/// preserving the relative order of the remaining characters
///
/// Downstream consumers cannot render wide-encoded glyphs (emoji, rare
/// scripts), so this is a deterministic lossy sanitization, not an error.
#[must_use]
pub fn strip_wide_symbols(value: Option<String>) -> Option<String> {
    value.map(|v| v.chars().filter(|c| c.len_utf8() < 3).collect())
}

/// Apply one constraint to a candidate value
#[must_use]
pub fn apply_constraint(constraint: Constraint, value: Option<String>) -> Option<String> {
    match constraint {
        Constraint::NumericOnly => coerce_numeric(value),
        Constraint::MaxLength(max) => truncate_words(value, max),
        Constraint::SymbolFiltered => strip_wide_symbols(value),
    }
}

/// Apply every constraint of a rule in the canonical order
///
/// The order is fixed regardless of how the rule declares its constraints:
/// numeric coercion first, then truncation, then symbol filtering.
/// Truncation therefore counts characters of the unfiltered string.
#[must_use]
pub fn apply_rule(rule: &FieldRule, value: Option<String>) -> Option<String> {
    let mut value = if rule.numeric_only() {
        coerce_numeric(value)
    } else {
        value
    };
    if let Some(max) = rule.max_length() {
        value = truncate_words(value, max);
    }
    if rule.symbol_filtered() {
        value = strip_wide_symbols(value);
    }
    value
}

/// Validate one field assignment, returning the accepted value
///
/// Fields without a registry entry pass through unchanged. The caller must
/// store the returned value; this is the single choke point every record
/// write goes through.
#[must_use]
pub fn validate_field(field_name: &str, value: Option<String>) -> Option<String> {
    let Some(rule) = rules_for(field_name) else {
        return value;
    };
    let accepted = apply_rule(rule, value.clone());
    if accepted != value {
        debug!("{field_name}: constraint degraded candidate value");
    }
    accepted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &str) -> Option<String> {
        Some(v.to_string())
    }

    #[test]
    fn numeric_keeps_digit_strings() {
        assert_eq!(coerce_numeric(s("1999")), s("1999"));
        assert_eq!(coerce_numeric(s("0")), s("0"));
    }

    #[test]
    fn numeric_drops_everything_else() {
        assert_eq!(coerce_numeric(s("12a")), None);
        assert_eq!(coerce_numeric(s("2+")), None);
        assert_eq!(coerce_numeric(s("3.5")), None);
        assert_eq!(coerce_numeric(s("-2")), None);
    }

    #[test]
    fn numeric_ignores_absent() {
        assert_eq!(coerce_numeric(None), None);
    }

    #[test]
    fn truncation_leaves_short_values_alone() {
        assert_eq!(truncate_words(s("gas central"), 32), s("gas central"));
        assert_eq!(truncate_words(s("exactly-eight"), 13), s("exactly-eight"));
        assert_eq!(truncate_words(None, 8), None);
    }

    #[test]
    fn truncation_ends_on_word_boundary() {
        // 25 chars; the last space within the first 20 sits after "brown"
        let input = "The quick brown fox jumps";
        assert_eq!(truncate_words(s(input), 18), s("The quick brown"));
        assert_eq!(truncate_words(s(input), 20), s("The quick brown fox"));
    }

    #[test]
    fn truncation_without_whitespace_hard_cuts() {
        assert_eq!(truncate_words(s("abcdefghij"), 4), s("abcd"));
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        // Two-byte characters must not split mid-encoding
        assert_eq!(truncate_words(s("ééééé"), 3), s("ééé"));
    }

    #[test]
    fn symbol_filter_strips_wide_chars_in_order() {
        assert_eq!(strip_wide_symbols(s("nice \u{1F600} flat")), s("nice  flat"));
        assert_eq!(strip_wide_symbols(s("\u{20AC}100")), s("100"));
        // Two-byte characters survive
        assert_eq!(strip_wide_symbols(s("süß")), s("süß"));
        assert_eq!(strip_wide_symbols(None), None);
    }

    #[test]
    fn validator_applies_registry_rules() {
        assert_eq!(validate_field("rooms", s("12a")), None);
        assert_eq!(validate_field("rooms", s("4")), s("4"));
        assert_eq!(validate_field("description", s("flat \u{1F3E0}")), s("flat "));
    }

    #[test]
    fn validator_passes_unconstrained_fields_through() {
        assert_eq!(validate_field("terrace_area", s("12a \u{1F600}")), s("12a \u{1F600}"));
        assert_eq!(validate_field("no_such_field", s("anything")), s("anything"));
    }

    #[test]
    fn validator_is_idempotent() {
        let cases = [
            ("rooms", s("12a")),
            ("title", s("l\u{1F600}ong listing title with symbols")),
            ("heating", s("a very long heating description that keeps going well past the sixty-four character limit")),
        ];
        for (field, value) in cases {
            let once = validate_field(field, value);
            let twice = validate_field(field, once.clone());
            assert_eq!(once, twice, "{field} validation not idempotent");
        }
    }

    #[test]
    fn combined_constraints_truncate_before_filtering() {
        let rule = crate::schema::rules_for("title").unwrap();
        let long: String = "word ".repeat(40); // 200 chars
        let out = apply_rule(rule, Some(long)).unwrap();
        assert!(out.chars().count() <= 128);
        assert!(out.chars().all(|c| c.len_utf8() < 3));
    }
}
