//! Provincial and territorial income tax, including surtaxes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::bracket::calculate_bracketed_tax;
use crate::calculations::common::non_negative;
use crate::models::{ProvincialConfig, Surtax};

/// Breakdown of the provincial calculation. Amounts are unrounded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincialTaxResult {
    /// Tax from the provincial rate schedule, before credits.
    pub gross_tax: Decimal,
    /// Provincial BPA credit, valued at the lowest provincial rate.
    pub credits: Decimal,
    pub surtax: Decimal,
    /// Tax after credits, plus surtax.
    pub net_tax: Decimal,
}

/// Computes provincial tax on `taxable_income` under `config`.
pub fn calculate_provincial_tax(
    taxable_income: Decimal,
    config: &ProvincialConfig,
) -> ProvincialTaxResult {
    let gross_tax = calculate_bracketed_tax(taxable_income, &config.brackets);
    let credits = config.bpa * config.lowest_rate();
    let base_tax = non_negative(gross_tax - credits);
    let surtax = calculate_surtax(base_tax, &config.surtax);
    let net_tax = base_tax + surtax;

    debug!(
        province = %config.code,
        %taxable_income,
        %gross_tax,
        %credits,
        %surtax,
        %net_tax,
        "provincial tax calculated"
    );

    ProvincialTaxResult {
        gross_tax,
        credits,
        surtax,
        net_tax,
    }
}

/// Surtax owed on `base_tax`, the provincial tax after credits.
pub fn calculate_surtax(
    base_tax: Decimal,
    surtax: &Surtax,
) -> Decimal {
    match surtax {
        Surtax::None => Decimal::ZERO,
        Surtax::Tiered {
            first,
            first_rate,
            second,
            second_rate,
        } => {
            non_negative(base_tax - first) * first_rate
                + non_negative(base_tax - second) * second_rate
        }
        Surtax::Threshold { threshold, rate } => non_negative(base_tax - threshold) * rate,
    }
}
