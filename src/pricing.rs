//! Pricing
//!
//! Pure price arithmetic and display formatting. These functions are total:
//! absent values default to zero and nothing here can fail.

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};

use crate::products::Product;

/// Percentage reduction from `origin_price` to `price`, in percent points.
///
/// Returns zero when the product carries no listed discount (`origin_price`
/// zero, or not above `price`). No rounding is applied; presentation rounds
/// to one decimal.
pub fn discount_rate(product: &Product) -> Decimal {
    if !product.is_discounted() {
        return Decimal::ZERO;
    }

    (product.origin_price - product.price) / product.origin_price * Decimal::ONE_HUNDRED
}

/// Format a monetary value with the currency's grouping and symbol.
///
/// An absent value formats as zero.
pub fn format_currency(value: Option<Decimal>, currency: &'static Currency) -> String {
    Money::from_decimal(value.unwrap_or_default(), currency).to_string()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use rusty_money::iso;

    use super::*;

    fn product(price: i64, origin_price: i64) -> Product {
        Product {
            price: Decimal::from(price),
            origin_price: Decimal::from(origin_price),
            ..Product::default()
        }
    }

    #[test]
    fn discount_rate_for_discounted_product() {
        assert_eq!(discount_rate(&product(80, 100)), Decimal::from(20));
        assert_eq!(discount_rate(&product(30, 60)), Decimal::from(50));
    }

    #[test]
    fn discount_rate_is_zero_without_listed_discount() {
        assert_eq!(discount_rate(&product(50, 50)), Decimal::ZERO);
        assert_eq!(discount_rate(&product(30, 0)), Decimal::ZERO);
        assert_eq!(discount_rate(&product(100, 80)), Decimal::ZERO);
    }

    #[test]
    fn discount_rate_keeps_fractional_precision() {
        // 1/3 off: presentation rounds, the computation does not.
        let rate = discount_rate(&product(200, 300));

        assert_eq!(rate.round_dp(4), Decimal::new(33_3333, 4));
    }

    #[test]
    fn format_currency_groups_thousands() {
        let formatted = format_currency(Some(Decimal::from(1_234_567)), iso::USD);

        assert!(
            formatted.contains("1,234,567"),
            "expected grouped digits, got {formatted}"
        );
    }

    #[test]
    fn format_currency_defaults_to_zero() {
        let formatted = format_currency(None, iso::USD);

        assert!(formatted.contains('0'), "expected zero amount, got {formatted}");
    }
}
