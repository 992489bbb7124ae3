//! Cart

use serde::{Deserialize, Serialize};

/// An ephemeral cart line sent to the cart service.
///
/// Lives only for the duration of the in-flight request; nothing is
/// persisted locally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product to add
    pub product_id: String,

    /// Quantity to add
    pub qty: u32,
}

impl CartLine {
    /// A single-quantity line for the given product, as the storefront's
    /// add-to-cart button sends.
    pub fn single(product_id: impl Into<String>) -> Self {
        CartLine {
            product_id: product_id.into(),
            qty: 1,
        }
    }
}
