//! Table Rows and Sort Values
//!
//! Rows are opaque records owned by the caller; the engine only needs a
//! stable identity and, optionally, raw field access for the same-named
//! sort fallback.

use std::fmt;

/// A comparable value derived from a row for one column.
///
/// Number-vs-number pairs compare numerically; every other pairing falls
/// back to lexicographic comparison of the rendered forms.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Number(f64),
    Text(String),
}

impl SortValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            SortValue::Number(n) => Some(*n),
            SortValue::Text(_) => None,
        }
    }
}

impl fmt::Display for SortValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Number(n) => write!(f, "{n}"),
            SortValue::Text(t) => write!(f, "{t}"),
        }
    }
}

impl From<f64> for SortValue {
    fn from(value: f64) -> Self {
        SortValue::Number(value)
    }
}

impl From<i64> for SortValue {
    fn from(value: i64) -> Self {
        SortValue::Number(value as f64)
    }
}

impl From<bool> for SortValue {
    fn from(value: bool) -> Self {
        SortValue::Number(if value { 1.0 } else { 0.0 })
    }
}

impl From<String> for SortValue {
    fn from(value: String) -> Self {
        SortValue::Text(value)
    }
}

impl From<&str> for SortValue {
    fn from(value: &str) -> Self {
        SortValue::Text(value.to_string())
    }
}

/// Caller-implemented row contract.
pub trait TableRow {
    /// Unique, stable identifier for the row.
    fn row_key(&self) -> String;

    /// Raw field lookup by column key, backing the sort fallback and default
    /// cell rendering for columns without an accessor.
    fn raw_field(&self, _key: &str) -> Option<SortValue> {
        None
    }
}
