//! Integration test for the admin order console over the `demo` fixture
//! set: listing rows, the detail table for one order, and the mutation
//! payloads the console sends before refetching.

use rusty_money::iso;
use testresult::TestResult;

use shopfront::{
    fixtures::Fixture,
    views::admin::{order_detail_lines, order_rows},
    wire::{PaidStatusRequest, admin_order_path},
};

#[test]
fn listing_rows_are_formatted_in_input_order() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let rows = order_rows(fixture.orders(), iso::TWD);

    assert_eq!(rows.len(), 3);

    let first = rows.first();

    assert_eq!(
        first.map(|row| row.created_at.as_str()),
        Some("2025-08-14 02:00:00")
    );
    assert_eq!(first.map(|row| row.customer.as_str()), Some("Chen Yi-ting"));
    assert_eq!(first.map(|row| row.paid.as_str()), Some("paid"));

    let unpaid = rows.get(1);

    assert_eq!(unpaid.map(|row| row.paid.as_str()), Some("unpaid"));
    assert!(
        unpaid.is_some_and(|row| row.total.contains("7,200")),
        "expected a grouped total"
    );

    Ok(())
}

#[test]
fn detail_lines_resolve_amounts_from_snapshots() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let order = fixture.order("o-1003")?;
    let lines = order_detail_lines(order, iso::TWD);

    assert_eq!(lines.len(), 2);

    let monitor = lines
        .iter()
        .find(|line| line.title == "27-inch QHD Monitor");

    assert!(
        monitor.is_some_and(|line| line.amount.contains("7,900")),
        "expected the monitor line to carry its effective amount"
    );

    let cable = lines.iter().find(|line| line.title == "Braided USB-C Cable");

    assert_eq!(cable.map(|line| line.qty.as_str()), Some("2"));

    Ok(())
}

#[test]
fn paid_toggle_targets_the_order_and_wraps_the_flag() -> TestResult {
    let fixture = Fixture::from_set("demo")?;
    let order = fixture.order("o-1002")?;

    assert!(!order.is_paid);

    // The console PUTs the inverted flag, then refetches the listing; no
    // aggregate field is patched locally.
    assert_eq!(admin_order_path(&order.id), "/admin/order/o-1002");
    assert_eq!(
        serde_json::to_value(PaidStatusRequest::new(!order.is_paid))?,
        serde_json::json!({ "data": { "is_paid": true } })
    );

    Ok(())
}
