//! Views
//!
//! View-models for the storefront and admin console. These own the explicit
//! UI state (selected category, current page) and derive everything else
//! from the fetched collections via the pure aggregation modules.

pub mod admin;
pub mod home;
pub mod products;
