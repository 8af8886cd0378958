//! Field Catalog
//!
//! The backend does not contractually fix its field names (`total_spend` vs
//! `spend` vs `spend_total`), so extraction is driven by ordered candidate-key
//! tables consulted in priority order. Keeping the tables in an explicit
//! configuration structure makes the matching policy testable and lets a
//! deployment override it from TOML without code changes.

use serde::{Deserialize, Serialize};

use crate::error::Error;

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Ordered candidate-key tables for heuristic extraction.
///
/// `label_keys` and `value_keys` are exact field names probed in priority
/// order by the time-series mapper. `series_keys` locates the series-bearing
/// field of a response object. The `*_keys` stat lists are lowercase
/// substrings matched by the numeric field locator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct FieldCatalog {
    /// Label field names for chart points, in priority order
    pub label_keys: Vec<String>,
    /// Numeric field names for chart points, in priority order
    pub value_keys: Vec<String>,
    /// Fields of a response object that may carry the time series
    pub series_keys: Vec<String>,
    /// Substring candidates for the total-spend stat
    pub total_spend_keys: Vec<String>,
    /// Substring candidates for the total-CO2e stat
    pub total_co2e_keys: Vec<String>,
    /// Substring candidates for the record-count stat
    pub record_count_keys: Vec<String>,
    /// Substring candidates for the coverage stat
    pub coverage_keys: Vec<String>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self {
            label_keys: to_strings(&["month", "period", "label", "name", "date"]),
            value_keys: to_strings(&["activity", "co2e", "emissions", "spend", "total", "value"]),
            series_keys: to_strings(&["trend", "history", "by_month", "monthly"]),
            total_spend_keys: to_strings(&["total_spend", "spend"]),
            total_co2e_keys: to_strings(&["total_co2e", "co2e", "emissions"]),
            record_count_keys: to_strings(&["record", "entries", "count"]),
            coverage_keys: to_strings(&["coverage", "percent", "ratio"]),
        }
    }
}

impl FieldCatalog {
    /// Load a catalog from TOML text. Missing tables keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }
}
