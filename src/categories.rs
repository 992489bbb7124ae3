//! Categories

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// Synthetic label for the unfiltered view, always first in the index.
pub const ALL_LABEL: &str = "All";

/// The category labels present in a product collection, in display order:
/// [`ALL_LABEL`] first, then each distinct non-empty category in order of
/// first appearance.
///
/// First-seen order is significant for UI stability; the index is never
/// re-sorted. Recompute whenever the product collection changes.
pub fn category_index(products: &[Product]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut labels = vec![ALL_LABEL.to_string()];

    for product in products {
        if product.category.is_empty() {
            continue;
        }

        if seen.insert(product.category.as_str()) {
            labels.push(product.category.clone());
        }
    }

    labels
}

/// The active category selection of a product list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    /// No filtering; every product is visible.
    #[default]
    All,

    /// Only products whose category equals the label.
    Category(String),
}

impl CategoryFilter {
    /// Build a filter from a display label. [`ALL_LABEL`] (or an empty
    /// label) selects everything.
    pub fn from_label(label: &str) -> Self {
        if label.is_empty() || label == ALL_LABEL {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// The display label for this selection.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Category(label) => label,
        }
    }

    /// Whether the product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => product.category == *label,
        }
    }
}

/// Filter a fetched collection by category, preserving order.
///
/// This is a pure client-side re-filter of the already-fetched collection;
/// it never triggers a refetch.
pub fn filter_by_category(products: &[Product], filter: &CategoryFilter) -> Vec<Product> {
    products
        .iter()
        .filter(|product| filter.matches(product))
        .cloned()
        .collect()
}
