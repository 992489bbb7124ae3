//! Sales Ranking
//!
//! Aggregates per-product revenue across order history to surface the
//! storefront's best sellers ("hot sale").

use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{orders::Order, products::Product, rankings::TOP_N};

/// Revenue accumulated for one product across all orders.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRevenue {
    /// Product id the revenue is keyed by.
    pub product_id: String,

    /// Most recently seen snapshot for this id, if any line carried one.
    pub product: Option<Product>,

    /// Sum of effective amounts of every line referencing this id.
    pub revenue: Decimal,
}

/// Accumulate the effective amount of every resolvable line item into a
/// per-product total, in first-seen product order.
///
/// Line items with no resolvable product id are skipped. Each entry retains
/// the most recently seen non-null snapshot for its id (later snapshots
/// overwrite earlier ones). "Most recent" is only as strong as the input
/// ordering: orders are visited in slice order and lines within an order in
/// key order, with no stronger chronology assumed.
pub fn revenue_by_product(orders: &[Order]) -> Vec<ProductRevenue> {
    let mut slots: FxHashMap<String, usize> = FxHashMap::default();
    let mut totals: Vec<ProductRevenue> = Vec::new();

    for order in orders {
        for item in order.items.values() {
            let Some(product_id) = item.resolved_product_id() else {
                continue;
            };

            let slot = *slots.entry(product_id.to_string()).or_insert_with(|| {
                totals.push(ProductRevenue {
                    product_id: product_id.to_string(),
                    product: None,
                    revenue: Decimal::ZERO,
                });

                totals.len() - 1
            });

            let Some(entry) = totals.get_mut(slot) else {
                continue;
            };

            entry.revenue += item.effective_amount();

            if item.product.is_some() {
                entry.product = item.product.clone();
            }
        }
    }

    totals
}

/// The top best-selling product snapshots, descending by accumulated
/// revenue.
///
/// Entries that never carried a snapshot are excluded before ranking, even
/// if they accumulated revenue. Ties keep first-seen order (the sort is
/// stable). Empty input yields an empty ranking; consumers apply the
/// section suppression policy on top.
pub fn hot_sale(orders: &[Order]) -> SmallVec<[Product; TOP_N]> {
    let mut ranked: Vec<ProductRevenue> = revenue_by_product(orders)
        .into_iter()
        .filter(|entry| entry.product.is_some())
        .collect();

    ranked.sort_by(|a, b| b.revenue.cmp(&a.revenue));

    ranked
        .into_iter()
        .take(TOP_N)
        .filter_map(|entry| entry.product)
        .collect()
}
