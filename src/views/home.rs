//! Home view
//!
//! The storefront landing sections: category shortcuts, hot-sale ranking
//! and promotion ranking, with the "show only from 3 results" policy
//! applied to both ranked sections.

use smallvec::SmallVec;

use crate::{
    categories::category_index,
    orders::Order,
    pricing::discount_rate,
    products::Product,
    rankings::{TOP_N, promotions::promoted, sales::hot_sale, visible_section},
};

/// Everything the home page derives from the fetched catalog and orders.
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    /// Category shortcut labels, sentinel first.
    pub categories: Vec<String>,

    /// Best sellers section; `None` when fewer than three qualify.
    pub hot_sale: Option<SmallVec<[Product; TOP_N]>>,

    /// Best discounts section; `None` when fewer than three qualify.
    pub promotions: Option<SmallVec<[Product; TOP_N]>>,
}

impl HomeView {
    /// Derive the home sections from the fetched collections.
    ///
    /// Pure and idempotent: rebuild whenever either collection changes.
    pub fn build(products: &[Product], orders: &[Order]) -> Self {
        HomeView {
            categories: category_index(products),
            hot_sale: visible_section(hot_sale(orders)),
            promotions: visible_section(promoted(products)),
        }
    }
}

/// The discount badge shown on a promotion card, e.g. `20.0% OFF`.
pub fn discount_badge(product: &Product) -> String {
    let rate = discount_rate(product);

    format!("{rate:.1}% OFF")
}
