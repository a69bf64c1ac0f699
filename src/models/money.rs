//! Currency formatting shared by the report and record renderings.

use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with exactly two decimal places, rounding halves away from zero.
///
/// ```
/// use hris::models::format_money;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_money(Decimal::new(918755, 1)), "91875.50");
/// assert_eq!(format_money(Decimal::ZERO), "0.00");
/// ```
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.2}", rounded)
}
