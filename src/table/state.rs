//! Table State
//!
//! Sort and pagination state for one table instance. Each table owns an
//! independent state; there is no process-wide state to share or lock.

use crate::constants::DEFAULT_PAGE_SIZE;

/// Sort direction for the active column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Active sort column and direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    pub column_key: String,
    pub direction: SortDirection,
}

/// Sort plus pagination state.
///
/// `current_page` is kept within `[1, total_pages]` on every transition,
/// with a floor of one page even for an empty table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableState {
    sort: Option<SortState>,
    current_page: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl TableState {
    /// Create state with the given page size (floored to 1).
    pub fn new(page_size: usize) -> Self {
        Self {
            sort: None,
            current_page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn sort(&self) -> Option<&SortState> {
        self.sort.as_ref()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Activate a new sort column: ascending direction, back to page one.
    pub(super) fn select_column(&mut self, column_key: &str) {
        self.sort = Some(SortState {
            column_key: column_key.to_string(),
            direction: SortDirection::Ascending,
        });
        self.current_page = 1;
    }

    /// Flip the direction of the active column, keeping the page.
    pub(super) fn flip_direction(&mut self) {
        if let Some(sort) = &mut self.sort {
            sort.direction = sort.direction.flipped();
        }
    }

    pub(super) fn clear_sort(&mut self) {
        self.sort = None;
    }

    /// Store a page number clamped into `[1, total_pages]`.
    pub(super) fn set_page(&mut self, page: usize, total_pages: usize) {
        self.current_page = page.clamp(1, total_pages.max(1));
    }

    /// Store a page size (floored to 1) and re-clamp the current page.
    pub(super) fn set_page_size(&mut self, page_size: usize, row_count: usize) {
        self.page_size = page_size.max(1);
        let total_pages = total_pages(row_count, self.page_size);
        self.current_page = self.current_page.clamp(1, total_pages);
    }

    pub(super) fn clamp_page(&mut self, row_count: usize) {
        let total_pages = total_pages(row_count, self.page_size);
        self.current_page = self.current_page.clamp(1, total_pages);
    }
}

/// Page count for a row count, with a floor of one page.
pub fn total_pages(row_count: usize, page_size: usize) -> usize {
    row_count.div_ceil(page_size.max(1)).max(1)
}
