//! Progressive bracket tax, shared by the federal and every provincial
//! schedule.

use rust_decimal::Decimal;

use crate::calculations::common::{min, non_negative};
use crate::models::TaxBracket;

/// Tax on `income` under a progressive schedule.
///
/// Brackets are walked in ascending order; each consumes as much of the
/// remaining income as its width allows and taxes it at its own rate. The
/// unbounded final bracket consumes whatever is left. Zero or negative
/// income, and an empty schedule, yield zero. The result is not rounded.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::TaxBracket;
/// use tax_core::calculations::calculate_bracketed_tax;
///
/// let brackets = vec![
///     TaxBracket::new(dec!(0), dec!(50000), dec!(0.15)),
///     TaxBracket::unbounded(dec!(50000), dec!(0.20)),
/// ];
///
/// // 50,000 × 15% + 25,000 × 20%
/// assert_eq!(calculate_bracketed_tax(dec!(75000), &brackets), dec!(12500.00));
/// ```
pub fn calculate_bracketed_tax(
    income: Decimal,
    brackets: &[TaxBracket],
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    let mut remaining = income;

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        let taxable = match bracket.width() {
            Some(width) => min(remaining, width),
            None => remaining,
        };

        tax += taxable * bracket.rate;
        remaining -= taxable;
    }

    non_negative(tax)
}
