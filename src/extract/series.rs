//! Time-Series Mapper
//!
//! Turns an unknown-shaped payload (expected to be a sequence of row-like
//! objects) into ordered chart points. Rows that cannot yield both a label
//! and a number are skipped; everything else is kept in payload order with
//! no sorting, deduplication, or aggregation by label.

use serde_json::{Map, Value};
use tracing::debug;

use super::catalog::FieldCatalog;
use super::coerce::coerce_number;
use crate::domain::MetricPoint;

/// Map a payload to chart points using the default catalog.
pub fn to_series(payload: &Value) -> Vec<MetricPoint> {
    to_series_with(payload, &FieldCatalog::default())
}

/// Map a payload to chart points using an explicit catalog.
///
/// Total function: a payload that is not an array yields an empty vector,
/// and elements that are not objects are dropped.
pub fn to_series_with(payload: &Value, catalog: &FieldCatalog) -> Vec<MetricPoint> {
    let Value::Array(items) = payload else {
        return Vec::new();
    };

    let points: Vec<MetricPoint> = items
        .iter()
        .filter_map(|item| point_of(item, catalog))
        .collect();

    if points.len() < items.len() {
        debug!(
            kept = points.len(),
            dropped = items.len() - points.len(),
            "time-series mapper skipped incomplete rows"
        );
    }

    points
}

/// Probe a response object for the field carrying its time series.
///
/// Returns the first present, non-null field named by the catalog's series
/// keys (`trend`, `history`, ...), in priority order.
pub fn series_source<'a>(payload: &'a Value, catalog: &FieldCatalog) -> Option<&'a Value> {
    let record = payload.as_object()?;
    first_present(record, &catalog.series_keys)
}

fn point_of(item: &Value, catalog: &FieldCatalog) -> Option<MetricPoint> {
    let record = item.as_object()?;
    let label = label_of(record, &catalog.label_keys)?;
    let value = coerce_number(first_present(record, &catalog.value_keys)?)?;
    Some(MetricPoint { label, value })
}

/// First present, non-null field among the candidate names, in priority order.
fn first_present<'a>(record: &'a Map<String, Value>, keys: &[String]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(key).filter(|value| !value.is_null()))
}

/// Derive a row label: the selected value rendered verbatim as a string.
/// An empty rendering counts as no label and drops the row.
fn label_of(record: &Map<String, Value>, keys: &[String]) -> Option<String> {
    let raw = first_present(record, keys)?;
    let text = match raw {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}
