//! Pagination arithmetic for the list view.
//!
//! The backend lists records with `limit`/`offset` query parameters and
//! reports a `total` count alongside each page. These helpers keep the
//! page-number bookkeeping out of the view: converting a page index to the
//! fetch window, counting pages, and clamping a stale page index after the
//! total shrinks (e.g. a bulk delete completed).
//!
//! Page indices are zero-based throughout.

/// The fetch window for one page, as the backend expects it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: usize,
    /// Records per page.
    pub per_page: usize,
}

impl PageRequest {
    /// Creates a request for `page` with `per_page` records per page.
    pub fn new(page: usize, per_page: usize) -> Self {
        Self { page, per_page }
    }

    /// The `offset` query parameter.
    pub fn offset(&self) -> usize {
        self.page * self.per_page.max(1)
    }

    /// The `limit` query parameter. A zero `per_page` degrades to one record
    /// per page rather than an unbounded or empty fetch.
    pub fn limit(&self) -> usize {
        self.per_page.max(1)
    }
}

/// Derived pagination facts for a known total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    total_items: usize,
    per_page: usize,
}

impl PageInfo {
    /// Creates pagination info. A zero `per_page` is treated as one.
    pub fn new(total_items: usize, per_page: usize) -> Self {
        Self {
            total_items,
            per_page: per_page.max(1),
        }
    }

    /// Total number of records across all pages.
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Records per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages. An empty result set still renders one (empty) page.
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.per_page).max(1)
    }

    /// Clamps a page index to the valid range, for reconciling a remembered
    /// page after the total shrinks.
    pub fn clamp_page(&self, page: usize) -> usize {
        page.min(self.page_count() - 1)
    }

    /// Number of records actually present on `page`.
    pub fn items_on_page(&self, page: usize) -> usize {
        let offset = page * self.per_page;
        self.total_items.saturating_sub(offset).min(self.per_page)
    }

    /// True when `page` has a successor.
    pub fn has_next(&self, page: usize) -> bool {
        page + 1 < self.page_count()
    }

    /// True when `page` has a predecessor.
    pub fn has_prev(&self, page: usize) -> bool {
        page > 0
    }
}
