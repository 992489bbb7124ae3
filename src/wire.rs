//! Wire
//!
//! Shapes exchanged with the external catalog/order service, and decoding
//! of its JSON response bodies. Transport (HTTP, retries, cancellation) is
//! the fetch layer's concern; this module only describes payloads.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::{cart::CartLine, orders::Order, products::Product};

/// Path of the full-catalog listing.
pub const PRODUCTS_ALL_PATH: &str = "/products/all";

/// Path of the customer-visible order listing.
pub const ORDERS_PATH: &str = "/orders";

/// Path of the admin order listing.
pub const ADMIN_ORDERS_PATH: &str = "/admin/orders";

/// Path of the cart collection (POST to add a line).
pub const CART_PATH: &str = "/cart";

/// Path of a single admin order (PUT to update, DELETE to remove).
pub fn admin_order_path(order_id: &str) -> String {
    format!("/admin/order/{order_id}")
}

/// Path that deletes every order at once.
pub const ADMIN_ORDERS_ALL_PATH: &str = "/admin/orders/all";

/// Errors that can occur while decoding a response body.
#[derive(Debug, Error)]
pub enum WireError {
    /// The body was not valid JSON or its envelope had the wrong shape.
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Debug, Default, Deserialize)]
struct ProductsEnvelope {
    #[serde(default)]
    products: Vec<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct OrdersEnvelope {
    #[serde(default)]
    orders: Vec<Value>,
}

/// Decode a `GET /products/all` response body.
///
/// A missing `products` array decodes as empty. Entries that fail to
/// deserialize are dropped silently; this is display aggregation, and a
/// malformed entry should cost one card, not the whole page.
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body itself is not a JSON object.
pub fn decode_products(body: &str) -> Result<Vec<Product>, WireError> {
    let envelope: ProductsEnvelope = serde_json::from_str(body)?;

    Ok(lenient_entries(envelope.products))
}

/// Decode a `GET /orders` or `GET /admin/orders` response body.
///
/// Same envelope and per-entry leniency rules as [`decode_products`].
///
/// # Errors
///
/// Returns [`WireError::Decode`] when the body itself is not a JSON object.
pub fn decode_orders(body: &str) -> Result<Vec<Order>, WireError> {
    let envelope: OrdersEnvelope = serde_json::from_str(body)?;

    Ok(lenient_entries(envelope.orders))
}

/// Deserialize each entry independently, discarding the ones that fail.
fn lenient_entries<T: serde::de::DeserializeOwned>(entries: Vec<Value>) -> Vec<T> {
    entries
        .into_iter()
        .filter_map(|entry| serde_json::from_value(entry).ok())
        .collect()
}

/// Body of `POST /cart`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartRequest {
    /// The service wraps every mutation payload in a `data` object.
    pub data: CartLine,
}

impl From<CartLine> for CartRequest {
    fn from(data: CartLine) -> Self {
        CartRequest { data }
    }
}

/// Body of `PUT /admin/order/{id}` toggling the paid flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaidStatusRequest {
    /// The service wraps every mutation payload in a `data` object.
    pub data: PaidStatus,
}

/// The paid flag carried by a [`PaidStatusRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaidStatus {
    /// Desired paid state
    pub is_paid: bool,
}

impl PaidStatusRequest {
    /// Request body setting the order's paid flag to `is_paid`.
    pub fn new(is_paid: bool) -> Self {
        PaidStatusRequest {
            data: PaidStatus { is_paid },
        }
    }
}
