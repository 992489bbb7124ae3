//! Promotion Ranking
//!
//! Surfaces the catalog's best current discounts.

use smallvec::SmallVec;

use crate::{pricing::discount_rate, products::Product, rankings::TOP_N};

/// The most heavily discounted products, descending by discount rate.
///
/// Only products with a positive listed discount qualify
/// (`origin_price > 0` and above `price`). Equal rates keep their input
/// order; rate comparison alone is not a total order, so the sort must be
/// stable. Consumers apply the section suppression policy on top.
pub fn promoted(products: &[Product]) -> SmallVec<[Product; TOP_N]> {
    let mut discounted: Vec<(&Product, rust_decimal::Decimal)> = products
        .iter()
        .filter(|product| product.is_discounted())
        .map(|product| (product, discount_rate(product)))
        .collect();

    discounted.sort_by(|a, b| b.1.cmp(&a.1));

    discounted
        .into_iter()
        .take(TOP_N)
        .map(|(product, _)| product.clone())
        .collect()
}
