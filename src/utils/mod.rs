//! JSON value-shaping helpers shared by the source adapters.

use itertools::Itertools;
use serde_json::Value;

/// Render a scalar JSON value as a string
///
/// Providers freely mix strings and numbers in the same slot (room counts,
/// areas, years), so numeric values are stringified; whole floats render
/// without a fraction so numeric constraints accept them. Objects, arrays
/// and nulls have no scalar rendering.
#[must_use]
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.fract() == 0.0 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Fetch a nested scalar as a string by walking a path of object keys
#[must_use]
pub fn string_at(value: &Value, path: &[&str]) -> Option<String> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    scalar_string(current)
}

/// Fetch a nested f64 by walking a path of object keys
#[must_use]
pub fn f64_at(value: &Value, path: &[&str]) -> Option<f64> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    match current {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Join the present, non-empty parts with ", "
///
/// Used for multi-part locations and feature lists. Returns `None` when
/// nothing remains, so the field stays absent instead of holding "".
#[must_use]
pub fn join_nonempty<I>(parts: I) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let joined = parts
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .join(", ");
    if joined.is_empty() { None } else { Some(joined) }
}
