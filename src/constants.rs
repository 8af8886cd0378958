//! Core Constants
//!
//! Centralized constants shared across the extraction and table modules.

/// Sentinel rendered for every absent numeric value, regardless of which
/// extraction path produced the absence.
pub const NOT_AVAILABLE: &str = "N/A";

/// Default rows per table page
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Compact number notation thresholds
pub const THOUSAND: f64 = 1_000.0;
pub const MILLION: f64 = 1_000_000.0;
pub const BILLION: f64 = 1_000_000_000.0;
