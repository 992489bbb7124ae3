//! Shopfront prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    cart::CartLine,
    categories::{ALL_LABEL, CategoryFilter, category_index, filter_by_category},
    fixtures::{Fixture, FixtureError},
    orders::{Customer, LineItem, Order, format_timestamp},
    pagination::{PaginationError, Paginator},
    pricing::{discount_rate, format_currency},
    products::Product,
    rankings::{
        RANKED_SECTION_MIN, TOP_N, promotions::promoted,
        sales::{ProductRevenue, hot_sale, revenue_by_product},
        visible_section,
    },
    views::{
        admin::{OrderDetailLine, OrderRow, order_detail_lines, order_rows, paid_label},
        home::{HomeView, discount_badge},
        products::ProductListView,
    },
    wire::{
        CartRequest, PaidStatusRequest, WireError, decode_orders, decode_products,
    },
};
