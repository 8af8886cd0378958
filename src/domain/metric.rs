//! Metric Point
//!
//! One (label, value) pair of a plotted time series.

use serde::{Deserialize, Serialize};

/// A single chart point. Sequence order always equals source payload order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Axis label (month, period, ...), taken verbatim from the payload
    pub label: String,
    /// Finite numeric value
    pub value: f64,
}

impl MetricPoint {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}
