//! Storefront Demo
//!
//! Renders the home sections, a filtered product page and the admin order
//! table from a fixture set.
//!
//! Use `-f` to load a fixture set by name
//! Use `-c` to filter the product list by category
//! Use `-p` to pick the product list page

use anyhow::Result;
use clap::Parser;
use rusty_money::iso;
use shopfront::{
    categories::CategoryFilter,
    fixtures::Fixture,
    pricing::format_currency,
    utils::DemoArgs,
    views::{
        admin::order_rows,
        home::{HomeView, discount_badge},
        products::ProductListView,
    },
};
use tabled::Table;

/// Storefront Demo
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = DemoArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let currency = iso::TWD;

    let home = HomeView::build(fixture.products(), fixture.orders());

    println!("Categories: {}", home.categories.join(" | "));

    if let Some(hot_sale) = &home.hot_sale {
        println!("\nHot sale:");

        for product in hot_sale {
            println!(
                "  {} ({})",
                product.title,
                format_currency(Some(product.price), currency)
            );
        }
    }

    if let Some(promotions) = &home.promotions {
        println!("\nPromotions:");

        for product in promotions {
            println!("  {} ({})", product.title, discount_badge(product));
        }
    }

    let mut list = ProductListView::new(fixture.products().to_vec(), args.page_size)?;

    if let Some(category) = args.category.as_deref() {
        list.select_category(CategoryFilter::from_label(category));
    }

    list.set_page(args.page);

    println!(
        "\nProducts ({}), page {} of {}:",
        list.selected_category().label(),
        list.current_page(),
        list.page_count()
    );

    for product in list.visible() {
        println!(
            "  {} ({})",
            product.title,
            format_currency(Some(product.price), currency)
        );
    }

    println!("\nOrders:");
    println!("{}", Table::new(order_rows(fixture.orders(), currency)));

    Ok(())
}
