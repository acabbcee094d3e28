//! Common utility functions for tax calculations.
//!
//! This module provides the rounding and clamping helpers shared by the
//! federal, provincial, and premium calculators.

use rust_decimal::Decimal;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(12302.315)), dec!(12302.32));
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::max;
///
/// assert_eq!(max(dec!(100.00), dec!(200.00)), dec!(200.00));
/// assert_eq!(max(dec!(-100.00), dec!(0)), dec!(0));
/// ```
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// Returns the minimum of two decimal values.
pub fn min(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a < b { a } else { b }
}

/// Clamps `value` at zero from below.
pub fn non_negative(value: Decimal) -> Decimal {
    max(value, Decimal::ZERO)
}
