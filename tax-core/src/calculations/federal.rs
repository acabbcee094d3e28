//! Federal income tax and non-refundable credits.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::bracket::calculate_bracketed_tax;
use crate::calculations::common::{min, non_negative};
use crate::calculations::credits::{
    calculate_adjusted_bpa, calculate_donation_credit, calculate_medical_credit,
};
use crate::models::{TaxInput, TaxYearConfig};

/// Breakdown of the federal calculation. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalTaxResult {
    /// Tax from the federal rate schedule, before credits.
    pub gross_tax: Decimal,
    /// Sum of every non-refundable credit, in tax dollars.
    pub credits: Decimal,
    /// `gross_tax - credits`, never below zero.
    pub net_tax: Decimal,
    /// Basic personal amount after the high-income phase-down.
    pub bpa: Decimal,
}

/// Computes basic federal tax on `taxable_income`.
///
/// Credit amounts are valued at the lowest federal rate, except the
/// dividend tax credit (fixed rate on the grossed-up dividend) and the
/// donation credit (its own tiers). The Quebec abatement is not applied
/// here; see [`apply_quebec_abatement`].
pub fn calculate_federal_tax(
    taxable_income: Decimal,
    input: &TaxInput,
    config: &TaxYearConfig,
) -> FederalTaxResult {
    let federal = &config.federal;
    let credit_rate = federal.lowest_rate();

    let gross_tax = calculate_bracketed_tax(taxable_income, &federal.brackets);
    let bpa = calculate_adjusted_bpa(taxable_income, federal);

    let employment_amount = min(input.employment_income, config.canada_employment_amount);
    let cpp_amount = min(input.cpp_contributions, config.cpp.max);
    let ei_amount = min(input.ei_premiums, config.ei_for(input.province).max);

    let base_amounts = non_negative(bpa)
        + non_negative(employment_amount)
        + non_negative(cpp_amount)
        + non_negative(ei_amount)
        + non_negative(input.tuition_amount);

    let dividend_credit = non_negative(
        input.dividend_income * config.dividends.gross_up_factor * config.dividends.tax_credit_rate,
    );
    let donation_credit =
        calculate_donation_credit(input.donations, taxable_income, &config.donations);
    let medical_credit = calculate_medical_credit(
        input.medical_expenses,
        taxable_income,
        &config.medical_threshold,
        credit_rate,
    );

    let credits = base_amounts * credit_rate + dividend_credit + donation_credit + medical_credit;
    let net_tax = non_negative(gross_tax - credits);

    debug!(
        %taxable_income,
        %gross_tax,
        %bpa,
        %credits,
        %net_tax,
        "federal tax calculated"
    );

    FederalTaxResult {
        gross_tax,
        credits,
        net_tax,
        bpa,
    }
}

/// Reduces federal tax by the Quebec abatement `rate` (16.5%).
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::apply_quebec_abatement;
///
/// assert_eq!(apply_quebec_abatement(dec!(10000), dec!(0.165)), dec!(8350.000));
/// ```
pub fn apply_quebec_abatement(
    federal_tax: Decimal,
    rate: Decimal,
) -> Decimal {
    federal_tax * (Decimal::ONE - rate)
}
