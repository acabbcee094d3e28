//! Ontario Health Premium.

use rust_decimal::Decimal;

use crate::calculations::common::min;
use crate::models::{HealthPremiumBracket, PremiumRule};

/// Looks up the premium owed on `income` in an ascending premium table.
///
/// The first row whose ceiling is at or above `income` decides. Progressive
/// rows are measured from the previous row's ceiling. `max_premium` is
/// returned if no row matches, which a validated table never allows.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::calculate_health_premium;
/// use tax_core::config::provincial_config;
/// use tax_core::{ProvinceCode, TaxYear};
///
/// let ontario = provincial_config(TaxYear::Y2025, ProvinceCode::Ontario);
/// let table = ontario.health_premium.as_deref().unwrap_or_default();
///
/// assert_eq!(calculate_health_premium(dec!(22000), table, dec!(900)), dec!(120));
/// ```
pub fn calculate_health_premium(
    income: Decimal,
    brackets: &[HealthPremiumBracket],
    max_premium: Decimal,
) -> Decimal {
    if income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut previous_max = Decimal::ZERO;

    for bracket in brackets {
        if bracket.contains(income) {
            return match &bracket.rule {
                PremiumRule::Fixed { amount } => *amount,
                PremiumRule::Progressive { base, rate, cap } => {
                    let premium = base + (income - previous_max) * rate;
                    match cap {
                        Some(cap) => min(premium, *cap),
                        None => premium,
                    }
                }
            };
        }
        if let Some(max) = bracket.max {
            previous_max = max;
        }
    }

    max_premium
}
