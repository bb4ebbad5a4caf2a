//! Pricing

use rust_decimal::{Decimal, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};

/// Currency every catalog price is quoted in.
pub const CURRENCY: &Currency = iso::USD;

/// Price of `quantity` units at `unit_price`.
pub fn line_total(unit_price: Decimal, quantity: u32) -> Decimal {
    unit_price.saturating_mul(Decimal::from(quantity))
}

/// Convert a decimal amount into minor units (cents), rounding to the nearest cent.
///
/// Returns `None` if the amount does not fit in an `i64`.
pub fn to_minor_units(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|value| value.round_dp(0).to_i64())
}

/// Convert a decimal amount into money in the store currency.
pub fn to_money(amount: Decimal) -> Option<Money<'static, Currency>> {
    to_minor_units(amount).map(|minor_units| Money::from_minor(minor_units, CURRENCY))
}

/// Format a decimal amount for display, e.g. `$31.98`.
pub fn format_price(amount: Decimal) -> String {
    to_minor_units(amount).map_or_else(|| format!("${amount:.2}"), format_minor_units)
}

/// Format a minor-unit amount for display, e.g. `3198` as `$31.98`.
pub fn format_minor_units(minor_units: i64) -> String {
    let abs_minor = minor_units.unsigned_abs();
    let major_units = abs_minor / 100;
    let fractional = abs_minor % 100;
    let sign = if minor_units < 0 { "-" } else { "" };

    format!("{sign}${major_units}.{fractional:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_total_multiplies_exactly() {
        assert_eq!(line_total(Decimal::new(1599, 2), 5), Decimal::new(7995, 2));
    }

    #[test]
    fn line_total_of_free_item_is_zero() {
        assert_eq!(line_total(Decimal::ZERO, 3), Decimal::ZERO);
    }

    #[test]
    fn to_minor_units_rounds_to_cents() {
        assert_eq!(to_minor_units(Decimal::new(3198, 2)), Some(3198));
        assert_eq!(to_minor_units(Decimal::new(10006, 3)), Some(1001));
    }

    #[test]
    fn to_money_uses_store_currency() {
        let money = to_money(Decimal::new(4198, 2));

        assert_eq!(money, Some(Money::from_minor(4198, iso::USD)));
    }

    #[test]
    fn format_price_pads_cents() {
        assert_eq!(format_price(Decimal::new(3198, 2)), "$31.98");
        assert_eq!(format_price(Decimal::from(10)), "$10.00");
        assert_eq!(format_price(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn format_minor_units_handles_negative_amounts() {
        assert_eq!(format_minor_units(-5), "-$0.05");
    }
}
