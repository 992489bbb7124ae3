//! Orders

use std::collections::BTreeMap;

use chrono::DateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::products::Product;

/// A customer order as returned by the order service.
///
/// Orders are read-only once fetched. Admin mutations (paid-status toggle,
/// deletion) happen remotely and callers refetch afterwards; nothing here
/// patches aggregate fields locally.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Opaque service-issued identifier
    #[serde(default)]
    pub id: String,

    /// Creation time in seconds since the epoch; zero means unknown
    #[serde(default, rename = "create_at")]
    pub created_at: i64,

    /// Whether the order has been paid
    #[serde(default)]
    pub is_paid: bool,

    /// Order total as reported by the service
    #[serde(default)]
    pub total: Decimal,

    /// Ordering customer, if the service included one
    #[serde(default)]
    pub user: Option<Customer>,

    /// Free-form customer message
    #[serde(default)]
    pub message: String,

    /// Line items keyed by line-item id (wire name `products`).
    ///
    /// Iteration is in key order, which for this service's push-style ids is
    /// chronological insertion order.
    #[serde(default, rename = "products")]
    pub items: BTreeMap<String, LineItem>,
}

impl Order {
    /// Creation time formatted as `YYYY-MM-DD HH:MM:SS` in UTC, or `-` when
    /// the timestamp is zero or out of range.
    pub fn created_at_display(&self) -> String {
        format_timestamp(self.created_at)
    }
}

/// Customer contact details attached to an order. All fields optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer name
    #[serde(default)]
    pub name: String,

    /// Contact email
    #[serde(default)]
    pub email: String,

    /// Delivery address
    #[serde(default)]
    pub address: String,

    /// Contact phone number
    #[serde(default)]
    pub tel: String,
}

/// A single order line item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Line-item id
    #[serde(default)]
    pub id: String,

    /// Referenced product id; may be empty when only the snapshot carries it
    #[serde(default)]
    pub product_id: String,

    /// Ordered quantity
    #[serde(default)]
    pub qty: Decimal,

    /// Product snapshot taken when the line was created; may drift from the
    /// live catalog and may be absent entirely
    #[serde(default)]
    pub product: Option<Product>,

    /// Line total before coupons; zero means not reported
    #[serde(default)]
    pub total: Decimal,

    /// Line total after coupons; zero means not reported
    #[serde(default)]
    pub final_total: Decimal,
}

impl LineItem {
    /// The product id this line refers to: the line's own `product_id` when
    /// set, falling back to the embedded snapshot's id. `None` when neither
    /// resolves.
    pub fn resolved_product_id(&self) -> Option<&str> {
        if !self.product_id.is_empty() {
            return Some(&self.product_id);
        }

        match &self.product {
            Some(product) if !product.id.is_empty() => Some(&product.id),
            _ => None,
        }
    }

    /// The monetary value of this line, resolved by priority: `final_total`
    /// if non-zero, else `total` if non-zero, else `qty * product.price`
    /// (zero without a snapshot).
    pub fn effective_amount(&self) -> Decimal {
        if self.final_total != Decimal::ZERO {
            return self.final_total;
        }

        if self.total != Decimal::ZERO {
            return self.total;
        }

        let unit_price = self
            .product
            .as_ref()
            .map_or(Decimal::ZERO, |product| product.price);

        self.qty * unit_price
    }
}

/// Format an epoch-seconds timestamp as `YYYY-MM-DD HH:MM:SS` in UTC.
///
/// Zero and out-of-range timestamps render as `-`, matching how order lists
/// display unknown creation times.
pub fn format_timestamp(seconds: i64) -> String {
    if seconds == 0 {
        return "-".to_string();
    }

    match DateTime::from_timestamp(seconds, 0) {
        Some(timestamp) => timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "-".to_string(),
    }
}
