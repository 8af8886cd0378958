//! Format - Display Formatting Utilities
//!
//! Presentational helpers sitting downstream of the extraction pipeline.
//! Every numeric formatter takes `Option<f64>` and renders an absent value
//! as the same `N/A` sentinel, so the caller cannot tell which extraction
//! path failed.

use chrono::{DateTime, Utc};

use crate::constants::{BILLION, MILLION, NOT_AVAILABLE, THOUSAND};

/// Format a value as whole US dollars with thousands separators.
pub fn format_currency(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    format!("{sign}${}", group_thousands(rounded.abs() as u64))
}

/// Format a value in compact notation (`1.2K`, `3.4M`, `5.6B`), one
/// fraction digit at most.
pub fn format_compact_number(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };

    let magnitude = value.abs();
    let (scaled, suffix) = if magnitude >= BILLION {
        (value / BILLION, "B")
    } else if magnitude >= MILLION {
        (value / MILLION, "M")
    } else if magnitude >= THOUSAND {
        (value / THOUSAND, "K")
    } else {
        (value, "")
    };

    format!("{}{suffix}", trim_fraction(scaled))
}

/// Format a ratio or percentage as a rounded percent string.
///
/// Values above 1 are treated as already expressed in percent; anything
/// else is scaled by 100 first.
pub fn format_percent(value: Option<f64>) -> String {
    let Some(value) = value else {
        return NOT_AVAILABLE.to_string();
    };
    let normalized = if value > 1.0 { value } else { value * 100.0 };
    format!("{}%", normalized.round() as i64)
}

/// Format a UTC timestamp as a date for table cells.
pub fn format_date(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%d").to_string()
}

/// Render with one fraction digit, dropping a trailing `.0`.
fn trim_fraction(value: f64) -> String {
    let text = format!("{value:.1}");
    match text.strip_suffix(".0") {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}

/// Insert thousands separators into a non-negative integer.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    result
}
