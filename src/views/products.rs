//! Product list view
//!
//! The catalog browsing page: the full fetched collection, an active
//! category filter and a fixed-size paginator over the filtered products.
//! Filtering is purely client-side; the collection is fetched once and
//! re-sliced locally.

use crate::{
    categories::{CategoryFilter, category_index, filter_by_category},
    pagination::{PaginationError, Paginator},
    products::Product,
};

/// Explicit UI state of the product list page.
///
/// Selected category and current page are owned here and passed into the
/// pure aggregation functions; nothing is ambient.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductListView {
    products: Vec<Product>,
    filter: CategoryFilter,
    paginator: Paginator<Product>,
}

impl ProductListView {
    /// Create the view over a fetched catalog, unfiltered, on page 1.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::ZeroPageSize`] when `page_size` is zero.
    pub fn new(products: Vec<Product>, page_size: usize) -> Result<Self, PaginationError> {
        let paginator = Paginator::with_items(products.clone(), page_size)?;

        Ok(ProductListView {
            products,
            filter: CategoryFilter::All,
            paginator,
        })
    }

    /// Category shortcut labels for the full collection, sentinel first.
    pub fn categories(&self) -> Vec<String> {
        category_index(&self.products)
    }

    /// The active category selection.
    pub fn selected_category(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Switch the category filter.
    ///
    /// Re-filters the already-fetched collection (no refetch) and always
    /// resets to page 1, regardless of the prior page.
    pub fn select_category(&mut self, filter: CategoryFilter) {
        self.filter = filter;
        self.paginator
            .set_items(filter_by_category(&self.products, &self.filter));
    }

    /// Replace the fetched collection, re-applying the active filter and
    /// resetting to page 1.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.paginator
            .set_items(filter_by_category(&self.products, &self.filter));
    }

    /// All products passing the active filter.
    pub fn filtered(&self) -> &[Product] {
        self.paginator.items()
    }

    /// The products visible on the current page.
    pub fn visible(&self) -> &[Product] {
        self.paginator.visible_page()
    }

    /// Navigate to a 1-based page of the filtered collection.
    pub fn set_page(&mut self, page: usize) {
        self.paginator.set_page(page);
    }

    /// The current 1-based page.
    pub fn current_page(&self) -> usize {
        self.paginator.current_page()
    }

    /// Total pages of the filtered collection.
    pub fn page_count(&self) -> usize {
        self.paginator.page_count()
    }

    /// Whether pagination controls should be shown.
    pub fn shows_pagination(&self) -> bool {
        self.paginator.has_pages()
    }
}
