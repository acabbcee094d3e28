//! Federal non-refundable credit amounts that depend on income.

use rust_decimal::Decimal;

use crate::calculations::common::{min, non_negative};
use crate::models::{DonationConfig, FederalConfig, MedicalThreshold};

/// Charitable donation credit.
///
/// The first `first_tier` dollars earn `low_rate`; the rest earn
/// `high_rate`, or `high_income_rate` when taxable income exceeds
/// `high_income_threshold`.
pub fn calculate_donation_credit(
    donations: Decimal,
    taxable_income: Decimal,
    config: &DonationConfig,
) -> Decimal {
    if donations <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let first_tier_amount = min(donations, config.first_tier);
    let second_tier_amount = non_negative(donations - config.first_tier);

    let high_rate = if taxable_income > config.high_income_threshold {
        config.high_income_rate
    } else {
        config.high_rate
    };

    first_tier_amount * config.low_rate + second_tier_amount * high_rate
}

/// Medical expense credit.
///
/// Only expenses above the lesser of `net_income × rate` and the dollar
/// ceiling qualify; they earn `credit_rate`.
pub fn calculate_medical_credit(
    medical_expenses: Decimal,
    net_income: Decimal,
    threshold: &MedicalThreshold,
    credit_rate: Decimal,
) -> Decimal {
    if medical_expenses <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let floor = min(non_negative(net_income) * threshold.rate, threshold.max);
    let eligible = non_negative(medical_expenses - floor);

    eligible * credit_rate
}

/// Federal basic personal amount after the high-income phase-down.
///
/// Full amount up to `bpa_reduction.start`, the minimum from
/// `bpa_reduction.end`, and a straight line in between.
pub fn calculate_adjusted_bpa(
    taxable_income: Decimal,
    config: &FederalConfig,
) -> Decimal {
    let reduction = &config.bpa_reduction;

    if taxable_income <= reduction.start {
        return config.basic_personal_amount;
    }
    if taxable_income >= reduction.end {
        return reduction.min_bpa;
    }

    let ratio = (taxable_income - reduction.start) / (reduction.end - reduction.start);
    let phased_out = (config.basic_personal_amount - reduction.min_bpa) * ratio;

    config.basic_personal_amount - phased_out
}
