//! Products

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalog product snapshot as returned by the catalog service.
///
/// Snapshots are read-only once fetched; the same shape also appears embedded
/// in order line items, where it may lag behind the live catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Opaque service-issued identifier. Empty means unresolvable.
    #[serde(default)]
    pub id: String,

    /// Display name
    #[serde(default)]
    pub title: String,

    /// Category label; empty means uncategorised
    #[serde(default)]
    pub category: String,

    /// Unit of sale, display only
    #[serde(default)]
    pub unit: String,

    /// Current selling price
    #[serde(default)]
    pub price: Decimal,

    /// Pre-discount price; zero means no listed original price
    #[serde(default)]
    pub origin_price: Decimal,

    /// Display-only image reference
    #[serde(default, rename = "imageUrl")]
    pub image_url: String,
}

impl Product {
    /// Whether the product carries a listed discount.
    pub fn is_discounted(&self) -> bool {
        self.origin_price > Decimal::ZERO && self.origin_price > self.price
    }
}
