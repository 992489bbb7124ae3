//! Pagination

use thiserror::Error;

/// Errors related to paginator construction.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    /// The page size must be at least one.
    #[error("page size must be at least 1")]
    ZeroPageSize,
}

/// Client-side paginator over an already-fetched collection.
///
/// Pages are fixed-size and `current_page` is 1-based. Replacing the
/// collection resets to page 1. The current page is deliberately *not*
/// clamped when the collection shrinks beneath it: a stale page renders
/// empty until the caller navigates, matching the surrounding views'
/// behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Create an empty paginator.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(page_size: usize) -> Result<Self, PaginationError> {
        Self::with_items(Vec::new(), page_size)
    }

    /// Create a paginator over the given collection, starting on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub fn with_items(items: Vec<T>, page_size: usize) -> Result<Self, PaginationError> {
        if page_size == 0 {
            return Err(PaginationError::ZeroPageSize);
        }

        Ok(Paginator {
            items,
            page_size,
            current_page: 1,
        })
    }

    /// Replace the underlying collection and reset to page 1.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
        self.current_page = 1;
    }

    /// The full underlying collection.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The fixed page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Total number of pages (zero for an empty collection).
    pub fn page_count(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Navigate to a 1-based page. Zero is treated as page 1; pages past the
    /// end are kept as-is and render empty.
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.max(1);
    }

    /// The slice of the collection visible on the current page.
    ///
    /// Empty when the current page lies past the end of the collection.
    pub fn visible_page(&self) -> &[T] {
        let start = (self.current_page - 1).saturating_mul(self.page_size);
        let end = start.saturating_add(self.page_size).min(self.items.len());

        if start >= end {
            return &[];
        }

        self.items.get(start..end).unwrap_or(&[])
    }

    /// Whether pagination controls should be shown at all: only when the
    /// collection overflows a single page.
    pub fn has_pages(&self) -> bool {
        self.items.len() > self.page_size
    }

    /// Whether a previous page exists.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Whether a further page exists.
    pub fn has_next(&self) -> bool {
        self.current_page < self.page_count()
    }
}
