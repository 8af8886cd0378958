//! Dashboard Overview
//!
//! Derives the overview page's stat scalars and chart series from the
//! `/spend/summary` and `/spend/coverage` responses. Both payloads are
//! loosely shaped, so every scalar goes through the heuristic field locator
//! and may come back absent.

use serde_json::Value;
use tracing::debug;

use crate::constants::NOT_AVAILABLE;
use crate::domain::MetricPoint;
use crate::extract::{locate_numeric, series_source, to_series_with, FieldCatalog};
use crate::utils::format::{format_compact_number, format_currency, format_percent};

/// Numeric overview stats pulled out of the summary and coverage payloads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpendOverview {
    pub total_spend: Option<f64>,
    pub total_co2e: Option<f64>,
    pub record_count: Option<f64>,
    pub coverage_percent: Option<f64>,
}

/// One rendered stat tile of the overview page.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub trend: String,
    pub description: String,
}

fn stat<S: AsRef<str>>(payload: &Value, candidates: &[S]) -> Option<f64> {
    locate_numeric(payload.as_object()?, candidates)
}

fn live_or_absent(value: Option<f64>) -> String {
    let label = if value.is_some() { "Live" } else { NOT_AVAILABLE };
    label.to_string()
}

impl SpendOverview {
    /// Extract overview stats using the default catalog.
    pub fn from_payloads(summary: &Value, coverage: &Value) -> Self {
        Self::from_payloads_with(summary, coverage, &FieldCatalog::default())
    }

    /// Extract overview stats using an explicit catalog.
    pub fn from_payloads_with(summary: &Value, coverage: &Value, catalog: &FieldCatalog) -> Self {
        let overview = Self {
            total_spend: stat(summary, &catalog.total_spend_keys),
            total_co2e: stat(summary, &catalog.total_co2e_keys),
            record_count: stat(summary, &catalog.record_count_keys),
            coverage_percent: stat(coverage, &catalog.coverage_keys),
        };
        debug!(?overview, "extracted spend overview");
        overview
    }

    /// The overview chart series: the summary payload's series when it has
    /// points, else the coverage payload's.
    pub fn chart_points(summary: &Value, coverage: &Value, catalog: &FieldCatalog) -> Vec<MetricPoint> {
        let of = |payload: &Value| {
            series_source(payload, catalog)
                .map(|series| to_series_with(series, catalog))
                .unwrap_or_default()
        };

        let summary_points = of(summary);
        if summary_points.is_empty() {
            of(coverage)
        } else {
            summary_points
        }
    }

    /// Render the four overview stat tiles. Absent scalars always show the
    /// same `N/A` sentinel regardless of which extraction path they took.
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard {
                title: "Total Spend".to_string(),
                value: format_currency(self.total_spend),
                trend: live_or_absent(self.total_spend),
                description: "Current spend captured in the platform".to_string(),
            },
            StatCard {
                title: "Total Calculated CO2e".to_string(),
                value: match self.total_co2e {
                    Some(_) => format!("{} tCO2e", format_compact_number(self.total_co2e)),
                    None => NOT_AVAILABLE.to_string(),
                },
                trend: live_or_absent(self.total_co2e),
                description: "Calculated emissions from spend records".to_string(),
            },
            StatCard {
                title: "Spend Records".to_string(),
                value: format_compact_number(self.record_count),
                trend: live_or_absent(self.record_count),
                description: "Rows currently used for carbon calculations".to_string(),
            },
            StatCard {
                title: "Coverage".to_string(),
                value: format_percent(self.coverage_percent),
                trend: live_or_absent(self.coverage_percent),
                description: "Portion of spend mapped to valid factors".to_string(),
            },
        ]
    }
}
