//! Domain - Pure Data Structures
//!
//! Types shared between the extraction pipeline and the rendering layer.
//! None of these depend on any UI toolkit.

pub mod metric;
pub mod overview;

pub use metric::MetricPoint;
pub use overview::{SpendOverview, StatCard};
