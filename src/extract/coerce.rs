//! Value Coercion
//!
//! Best-effort conversion of an untyped JSON value to a finite number.
//! Failure is always represented as `None`; this function never panics.

use serde_json::Value;

/// Coerce an untyped payload value to a finite `f64`.
///
/// Numbers are returned unchanged when finite. Strings are trimmed and
/// parsed, and accepted only when the parse yields a finite number
/// (infinities and NaN are rejected). Every other JSON type yields `None`.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64().filter(|n| n.is_finite()),
        Value::String(text) => text.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
