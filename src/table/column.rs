//! Column Definition
//!
//! Defines table columns with their header, sortability, and cell access.

use super::row::{SortValue, TableRow};

type Accessor<R> = Box<dyn Fn(&R) -> String + Send + Sync>;
type SortValueFn<R> = Box<dyn Fn(&R) -> SortValue + Send + Sync>;

/// Column definition for the table engine
pub struct Column<R> {
    key: String,
    header: String,
    sortable: bool,
    accessor: Option<Accessor<R>>,
    sort_value: Option<SortValueFn<R>>,
}

/// How a sortable column derives its comparison value, resolved once per
/// column rather than rediscovered for every row.
pub(super) enum SortStrategy<'a, R> {
    /// Explicit comparator function
    Explicit(&'a SortValueFn<R>),
    /// Rendered cell text
    Rendered(&'a Accessor<R>),
    /// Same-named raw field on the row
    RawField,
}

impl<R: TableRow> Column<R> {
    /// Create a new column
    pub fn new(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            sortable: false,
            accessor: None,
            sort_value: None,
        }
    }

    /// Make the column sortable
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Set the cell text renderer
    pub fn accessor(mut self, accessor: impl Fn(&R) -> String + Send + Sync + 'static) -> Self {
        self.accessor = Some(Box::new(accessor));
        self
    }

    /// Set an explicit sort comparator value
    pub fn sort_value(mut self, sort_value: impl Fn(&R) -> SortValue + Send + Sync + 'static) -> Self {
        self.sort_value = Some(Box::new(sort_value));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Render a cell: the accessor when present, else the raw same-named
    /// field, else empty text.
    pub fn render_cell(&self, row: &R) -> String {
        if let Some(accessor) = &self.accessor {
            return accessor(row);
        }
        row.raw_field(&self.key)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    pub(super) fn sort_strategy(&self) -> SortStrategy<'_, R> {
        if let Some(sort_value) = &self.sort_value {
            SortStrategy::Explicit(sort_value)
        } else if let Some(accessor) = &self.accessor {
            SortStrategy::Rendered(accessor)
        } else {
            SortStrategy::RawField
        }
    }
}

impl<'a, R: TableRow> SortStrategy<'a, R> {
    /// Derive the comparison value for one row. A sortable column with no
    /// resolvable value degrades to empty text rather than failing.
    pub(super) fn derive(&self, row: &R, column_key: &str) -> SortValue {
        match self {
            SortStrategy::Explicit(sort_value) => sort_value(row),
            SortStrategy::Rendered(accessor) => SortValue::Text(accessor(row)),
            SortStrategy::RawField => row
                .raw_field(column_key)
                .unwrap_or_else(|| SortValue::Text(String::new())),
        }
    }
}
