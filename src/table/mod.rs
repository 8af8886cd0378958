//! Table Engine
//!
//! A reusable, headless data table: column model, sort/pagination state
//! machine, and stable sorted/paginated view computation.

pub mod column;
pub mod data_table;
pub mod row;
pub mod state;

pub use column::Column;
pub use data_table::{DataTable, TableView};
pub use row::{SortValue, TableRow};
pub use state::{total_pages, SortDirection, SortState, TableState};
