//! Heuristic Field Locator
//!
//! Scans a flat key/value payload object for the first key whose lowered form
//! contains one of a set of candidate substrings and whose value coerces to a
//! number. Substring containment (rather than exact matching) tolerates
//! backend naming drift without a full schema.

use serde_json::{Map, Value};
use tracing::trace;

use super::coerce::coerce_number;

/// Locate the first numeric value under a key matching any candidate.
///
/// Entries are scanned in the map's insertion order; the first structural
/// match wins, not the best one. A key can match lexically while holding a
/// non-numeric value, in which case the scan continues to later entries.
pub fn locate_numeric<S: AsRef<str>>(record: &Map<String, Value>, candidates: &[S]) -> Option<f64> {
    let lowered: Vec<String> = candidates
        .iter()
        .map(|candidate| candidate.as_ref().to_lowercase())
        .collect();

    for (key, value) in record {
        let normalized = key.to_lowercase();
        if !lowered.iter().any(|candidate| normalized.contains(candidate)) {
            continue;
        }
        match coerce_number(value) {
            Some(number) => {
                trace!(key = %key, number, "field locator matched");
                return Some(number);
            }
            None => {
                trace!(key = %key, "field locator key matched but value is not numeric");
            }
        }
    }

    None
}
