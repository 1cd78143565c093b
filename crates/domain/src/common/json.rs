//! Lenient readers for author-written JSON payloads.
//!
//! Homebrew `data` blobs are versionless; fields move between names and change
//! type (`10`, `"10"`, `"d10"`). Everything here returns `None` instead of
//! failing so callers can fall back to defaults.

use serde_json::Value;

/// Returns the first non-null value stored under any of `keys`.
pub fn field<'a>(data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let object = data.as_object()?;
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}

/// Reads an integer from a number or a numeric string.
///
/// Fractional numbers are truncated toward zero.
pub fn loose_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64)),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Reads the leading integer of a string (`"14 + Dex modifier"` is 14), or a
/// number as [`loose_i64`] does.
pub fn leading_i64(value: &Value) -> Option<i64> {
    let Value::String(s) = value else {
        return loose_i64(value);
    };
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Reads a non-blank string; numbers are rendered with `to_string`.
pub fn loose_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => super::none_if_blank(s).map(str::to_string),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Reads a list of strings from an array, or splits a comma-separated string.
pub fn loose_string_list(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(loose_string).collect(),
        Value::String(s) => s
            .split(',')
            .filter_map(super::none_if_blank)
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Whether a loose value has anything worth rendering.
///
/// Null, blank strings, empty arrays and empty objects are empty.
pub fn has_content(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}
