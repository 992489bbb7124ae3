//! Admin order view
//!
//! Row and detail-line shapes for the admin console's order tables, with
//! every monetary and temporal field pre-formatted for display.

use rusty_money::iso::Currency;
use tabled::Tabled;

use crate::{
    orders::{LineItem, Order},
    pricing::format_currency,
};

/// Fallback shown for absent display fields.
const EMPTY_FIELD: &str = "-";

/// One row of the admin order listing.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct OrderRow {
    /// Formatted creation time
    #[tabled(rename = "Created")]
    pub created_at: String,

    /// Ordering customer's name
    #[tabled(rename = "Customer")]
    pub customer: String,

    /// Formatted order total
    #[tabled(rename = "Total")]
    pub total: String,

    /// Paid-state label
    #[tabled(rename = "Paid")]
    pub paid: String,
}

impl OrderRow {
    /// Build a listing row from an order.
    pub fn from_order(order: &Order, currency: &'static Currency) -> Self {
        let customer = order
            .user
            .as_ref()
            .map(|user| user.name.as_str())
            .filter(|name| !name.is_empty())
            .unwrap_or(EMPTY_FIELD)
            .to_string();

        OrderRow {
            created_at: order.created_at_display(),
            customer,
            total: format_currency(Some(order.total), currency),
            paid: paid_label(order.is_paid).to_string(),
        }
    }
}

/// Listing rows for a fetched order collection, in input order.
pub fn order_rows(orders: &[Order], currency: &'static Currency) -> Vec<OrderRow> {
    orders
        .iter()
        .map(|order| OrderRow::from_order(order, currency))
        .collect()
}

/// One row of an order's detail table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct OrderDetailLine {
    /// Product name from the embedded snapshot
    #[tabled(rename = "Product")]
    pub title: String,

    /// Category from the embedded snapshot
    #[tabled(rename = "Category")]
    pub category: String,

    /// Ordered quantity
    #[tabled(rename = "Qty")]
    pub qty: String,

    /// Formatted snapshot unit price
    #[tabled(rename = "Unit price")]
    pub unit_price: String,

    /// Formatted effective line amount
    #[tabled(rename = "Amount")]
    pub amount: String,
}

impl OrderDetailLine {
    /// Build a detail row from a line item, falling back to `-` for fields
    /// the snapshot does not carry.
    pub fn from_line_item(item: &LineItem, currency: &'static Currency) -> Self {
        let (title, category, unit_price) = match &item.product {
            Some(product) => (
                non_empty_or_dash(&product.title),
                non_empty_or_dash(&product.category),
                format_currency(Some(product.price), currency),
            ),
            None => (
                EMPTY_FIELD.to_string(),
                EMPTY_FIELD.to_string(),
                format_currency(None, currency),
            ),
        };

        OrderDetailLine {
            title,
            category,
            qty: item.qty.to_string(),
            unit_price,
            amount: format_currency(Some(item.effective_amount()), currency),
        }
    }
}

/// Detail rows for an order, in line-item key order.
pub fn order_detail_lines(order: &Order, currency: &'static Currency) -> Vec<OrderDetailLine> {
    order
        .items
        .values()
        .map(|item| OrderDetailLine::from_line_item(item, currency))
        .collect()
}

/// Display label for the paid flag.
pub fn paid_label(is_paid: bool) -> &'static str {
    if is_paid { "paid" } else { "unpaid" }
}

fn non_empty_or_dash(value: &str) -> String {
    if value.is_empty() {
        EMPTY_FIELD.to_string()
    } else {
        value.to_string()
    }
}
