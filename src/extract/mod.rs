//! Extraction - Heuristic Metric Extraction
//!
//! Best-effort numeric extraction over loosely-shaped API payloads: value
//! coercion, fuzzy field location, and time-series mapping. The payload
//! shape is not contractually fixed beyond "flat object" for the locator and
//! "sequence of objects" for the mapper; nothing here retains payload state
//! across calls.

pub mod catalog;
pub mod coerce;
pub mod locate;
pub mod series;

pub use catalog::FieldCatalog;
pub use coerce::coerce_number;
pub use locate::locate_numeric;
pub use series::{series_source, to_series, to_series_with};

use serde_json::Value;

use crate::error::Error;

/// Deserialize raw response text into an untyped payload value.
pub fn parse_payload(text: &str) -> Result<Value, Error> {
    Ok(serde_json::from_str(text)?)
}

/// Pull a human-readable detail message out of an error payload.
///
/// The backend reports failures as `{"detail": "..."}`; anything else (or an
/// empty detail) falls back to the caller's message.
pub fn error_detail(payload: &Value, fallback: &str) -> String {
    payload
        .get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| fallback.to_string())
}
