//! ScopeBoard Core Library
//!
//! This crate provides the data core for the ScopeBoard carbon spend
//! dashboard client: a generic table engine (stable sorting + pagination over
//! caller-supplied row snapshots) and heuristic metric extraction over
//! loosely-shaped API payloads (numeric coercion, fuzzy field location, and
//! time-series mapping for charting).
//!
//! The crate performs no I/O. Callers fetch payloads and row collections
//! themselves and hand the core in-memory snapshots; everything here is a
//! synchronous, pure computation over that data.

pub mod constants;
pub mod domain;
pub mod error;
pub mod extract;
pub mod table;
pub mod utils;

pub use error::Error;
