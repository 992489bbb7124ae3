//! Integration test for the home view over the `demo` fixture set.
//!
//! The fixture catalog carries five discounted products and the order
//! history references five distinct products, so both ranked sections are
//! visible. Expected derivations:
//!
//! - Categories: All, Peripherals, Audio, Displays (first-seen order).
//! - Hot sale by revenue: 27-inch QHD Monitor (7,900), Noise-Cancelling
//!   Headphones (7,200), Low-Profile Mechanical Keyboard (4,960).
//! - Promotions by rate: Wireless Trackball Mouse (50%), Braided USB-C
//!   Cable (25%), then the keyboard (20%) ahead of the headphones (also
//!   20%) on catalog order.

use rust_decimal::Decimal;
use testresult::TestResult;

use shopfront::{
    fixtures::Fixture,
    orders::LineItem,
    rankings::sales::revenue_by_product,
    views::home::{HomeView, discount_badge},
};

#[test]
fn home_view_over_demo_fixture() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let view = HomeView::build(fixture.products(), fixture.orders());

    assert_eq!(view.categories, vec!["All", "Peripherals", "Audio", "Displays"]);

    let hot_ids: Vec<&str> = view
        .hot_sale
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|product| product.id.as_str())
        .collect();

    assert_eq!(hot_ids, vec!["mn-05", "hp-03", "kb-01"]);

    let promo_ids: Vec<&str> = view
        .promotions
        .as_deref()
        .unwrap_or_default()
        .iter()
        .map(|product| product.id.as_str())
        .collect();

    assert_eq!(promo_ids, vec!["ms-02", "cb-07", "kb-01"]);

    Ok(())
}

#[test]
fn promotion_badges_round_to_one_decimal() -> TestResult {
    let fixture = Fixture::from_set("demo")?;

    assert_eq!(discount_badge(fixture.product("ms-02")?), "50.0% OFF");
    assert_eq!(discount_badge(fixture.product("kb-01")?), "20.0% OFF");

    Ok(())
}

#[test]
fn aggregated_revenue_matches_order_history() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let totals = revenue_by_product(fixture.orders());

    // Five distinct products are referenced across the three orders.
    assert_eq!(totals.len(), 5);

    let keyboard = totals
        .iter()
        .find(|entry| entry.product_id == "kb-01")
        .map(|entry| entry.revenue);

    assert_eq!(keyboard, Some(Decimal::from(4960)));

    let output_sum: Decimal = totals.iter().map(|entry| entry.revenue).sum();

    let input_sum: Decimal = fixture
        .orders()
        .iter()
        .flat_map(|order| order.items.values())
        .filter(|item| item.resolved_product_id().is_some())
        .map(LineItem::effective_amount)
        .sum();

    assert_eq!(output_sum, input_sum);

    Ok(())
}

#[test]
fn rankings_disappear_when_history_is_too_thin() -> TestResult {
    let fixture = Fixture::from_set("demo")?;

    // Only the first order: two distinct products, both sections starve.
    let first_order: Vec<_> = fixture.orders().iter().take(1).cloned().collect();
    let two_products: Vec<_> = fixture.products().iter().take(2).cloned().collect();

    let view = HomeView::build(&two_products, &first_order);

    assert_eq!(view.hot_sale, None);
    assert_eq!(view.promotions, None);

    // The category shortcuts survive regardless.
    assert_eq!(view.categories, vec!["All", "Peripherals"]);

    Ok(())
}
