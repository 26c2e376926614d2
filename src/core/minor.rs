//! Conversion between major-unit amounts and integer minor units (cents).

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Minor units per major unit. Every supported currency is subdivided by 100.
pub const MINOR_PER_MAJOR: i64 = 100;

/// Convert an exact face value to minor units.
///
/// Returns `None` when the value has a sub-cent fraction or does not fit
/// into an `i64` of cents.
pub fn to_minor(value: Decimal) -> Option<i64> {
    let scaled = value.checked_mul(Decimal::from(MINOR_PER_MAJOR))?;
    if !scaled.fract().is_zero() {
        return None;
    }
    scaled.to_i64()
}

/// Convert an amount to minor units, rounding to the nearest cent
/// (midpoint away from zero).
///
/// Returns `None` when the amount does not fit into an `i64` of cents.
pub fn round_to_minor(amount: Decimal) -> Option<i64> {
    amount
        .checked_mul(Decimal::from(MINOR_PER_MAJOR))?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

/// Convert minor units back to a major-unit amount with two decimal places.
pub fn to_major(minor: i64) -> Decimal {
    Decimal::new(minor, 2)
}
