//! Fixtures
//!
//! File-based fixture sets for the demo and integration tests. A set named
//! `demo` ships in-repo under `./fixtures/{products,orders}/demo.json`,
//! shaped exactly like the catalog/order service's response bodies.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    orders::Order,
    products::Product,
    wire::{WireError, decode_orders, decode_products},
};

/// Fixture loading errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// The fixture body failed to decode
    #[error(transparent)]
    Wire(#[from] WireError),

    /// Product not found
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Order not found
    #[error("Order not found: {0}")]
    OrderNotFound(String),
}

/// A loaded fixture set: a product catalog and an order history.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files
    base_path: PathBuf,

    products: Vec<Product>,
    orders: Vec<Order>,
}

impl Fixture {
    /// Create a new empty fixture with the default base path.
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Create a new empty fixture with a custom base path.
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Fixture {
            base_path: base_path.into(),
            products: Vec::new(),
            orders: Vec::new(),
        }
    }

    /// Load a product catalog from a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its envelope decoded.
    pub fn load_products(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("products").join(format!("{name}.json"));
        let contents = fs::read_to_string(&file_path)?;

        self.products = decode_products(&contents)?;

        Ok(self)
    }

    /// Load an order history from a JSON fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its envelope decoded.
    pub fn load_orders(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("orders").join(format!("{name}.json"));
        let contents = fs::read_to_string(&file_path)?;

        self.orders = decode_orders(&contents)?;

        Ok(self)
    }

    /// Load a complete fixture set (products and orders with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_products(name)?.load_orders(name)?;

        Ok(fixture)
    }

    /// The loaded product catalog.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// The loaded order history.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Get a product by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no product carries the id.
    pub fn product(&self, id: &str) -> Result<&Product, FixtureError> {
        self.products
            .iter()
            .find(|product| product.id == id)
            .ok_or_else(|| FixtureError::ProductNotFound(id.to_string()))
    }

    /// Get an order by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no order carries the id.
    pub fn order(&self, id: &str) -> Result<&Order, FixtureError> {
        self.orders
            .iter()
            .find(|order| order.id == id)
            .ok_or_else(|| FixtureError::OrderNotFound(id.to_string()))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
