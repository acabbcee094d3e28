//! Full return calculation, from raw amounts to refund or balance owing.
//!
//! # Steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Total income: every income line, with dividends grossed up and capital gains at the inclusion rate |
//! | 2    | Total deductions: RRSP and FHSA (each capped at its yearly limit), childcare, moving, union dues |
//! | 3    | Taxable income (Step 1 - Step 2, minimum 0) |
//! | 4    | Federal tax after credits, less the Quebec abatement where it applies |
//! | 5    | Provincial tax after credits, plus surtax |
//! | 6    | Health premium, for provinces that levy one |
//! | 7    | Total tax (Steps 4 to 6, each rounded to the cent) |
//! | 8    | Refund or balance owing (tax withheld - Step 7) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::{ProvinceCode, TaxInput, calculate_tax};
//!
//! let input = TaxInput {
//!     employment_income: dec!(75000),
//!     tax_withheld: dec!(15000),
//!     ..TaxInput::new(ProvinceCode::Ontario)
//! };
//!
//! let result = calculate_tax(&input);
//!
//! assert_eq!(result.total_income, dec!(75000));
//! assert_eq!(
//!     result.total_tax,
//!     result.federal_tax + result.provincial_tax + result.health_premium
//! );
//! assert!(result.is_refund);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::{min, non_negative, round_half_up};
use crate::calculations::federal::{FederalTaxResult, apply_quebec_abatement, calculate_federal_tax};
use crate::calculations::health_premium::calculate_health_premium;
use crate::calculations::provincial::{ProvincialTaxResult, calculate_provincial_tax};
use crate::config::tax_year_config;
use crate::models::{TaxInput, TaxResult, TaxYearConfig};

/// A [`TaxResult`] together with the intermediate federal and provincial
/// figures it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    pub result: TaxResult,
    pub federal: FederalTaxResult,
    /// Federal tax after the Quebec abatement. Equal to `federal.net_tax`
    /// outside Quebec.
    pub federal_after_abatement: Decimal,
    pub provincial: ProvincialTaxResult,
}

/// Calculates a return using the parameters of `input.tax_year`.
pub fn calculate_tax(input: &TaxInput) -> TaxResult {
    calculate_tax_breakdown(input, tax_year_config(input.tax_year)).result
}

/// Calculates a return against an explicit parameter set.
///
/// `config` is used as given, even if its year differs from
/// `input.tax_year`.
pub fn calculate_tax_with_config(
    input: &TaxInput,
    config: &TaxYearConfig,
) -> TaxResult {
    calculate_tax_breakdown(input, config).result
}

/// Calculates a return and keeps the intermediate results.
pub fn calculate_tax_breakdown(
    input: &TaxInput,
    config: &TaxYearConfig,
) -> TaxBreakdown {
    for (field, amount) in input.amounts() {
        if amount < Decimal::ZERO {
            warn!(field, %amount, "negative input amount");
        }
        if amount.abs() > TaxInput::MAX_AMOUNT {
            warn!(field, %amount, max = %TaxInput::MAX_AMOUNT, "input amount out of range, clamped");
        }
    }
    let input = &input.clamped();

    let province = config.province(input.province);

    // Steps 1-3
    let total_income = round_half_up(total_income(input, config));
    let total_deductions = round_half_up(total_deductions(input, config));
    let taxable_income = non_negative(total_income - total_deductions);

    // Step 4
    let federal = calculate_federal_tax(taxable_income, input, config);
    let federal_after_abatement = match province.abatement {
        Some(rate) => apply_quebec_abatement(federal.net_tax, rate),
        None => federal.net_tax,
    };

    // Step 5
    let provincial = calculate_provincial_tax(taxable_income, province);

    // Step 6
    let health_premium = match &province.health_premium {
        Some(table) => calculate_health_premium(taxable_income, table, config.max_health_premium),
        None => Decimal::ZERO,
    };

    // Steps 7-8
    let federal_tax = round_half_up(federal_after_abatement);
    let provincial_tax = round_half_up(provincial.net_tax);
    let health_premium = round_half_up(health_premium);
    let total_tax = federal_tax + provincial_tax + health_premium;
    let refund_or_owing = input.tax_withheld - total_tax;

    debug!(
        province = %input.province,
        year = %config.tax_year,
        %total_income,
        %total_deductions,
        %taxable_income,
        %federal_tax,
        %provincial_tax,
        %health_premium,
        %total_tax,
        %refund_or_owing,
        "tax return calculated"
    );

    TaxBreakdown {
        result: TaxResult {
            total_income,
            total_deductions,
            taxable_income,
            federal_tax,
            provincial_tax,
            health_premium,
            total_tax,
            total_withheld: input.tax_withheld,
            refund_or_owing,
            is_refund: refund_or_owing >= Decimal::ZERO,
            province_name: province.name.clone(),
        },
        federal,
        federal_after_abatement,
        provincial,
    }
}

fn total_income(
    input: &TaxInput,
    config: &TaxYearConfig,
) -> Decimal {
    let grossed_up_dividends = input.dividend_income * config.dividends.gross_up_factor;
    let taxable_capital_gains = input.capital_gains * config.capital_gains_inclusion_rate;

    input.employment_income
        + input.self_employment_income
        + input.rental_income
        + input.interest_income
        + grossed_up_dividends
        + taxable_capital_gains
        + input.other_income
}

fn total_deductions(
    input: &TaxInput,
    config: &TaxYearConfig,
) -> Decimal {
    let rrsp = min(input.rrsp_deduction, config.rrsp_limit);
    let fhsa = min(input.fhsa_deduction, config.fhsa.annual);

    rrsp + fhsa + input.childcare_expenses + input.moving_expenses + input.union_dues
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ProvinceCode, TaxYear};

    fn ontario() -> TaxInput {
        TaxInput::new(ProvinceCode::Ontario)
    }

    // =========================================================================
    // income and deduction tests
    // =========================================================================

    #[test]
    fn dividends_are_grossed_up() {
        let input = TaxInput {
            dividend_income: dec!(10000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_income, dec!(13800));
    }

    #[test]
    fn half_of_capital_gains_is_included() {
        let input = TaxInput {
            capital_gains: dec!(20000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_income, dec!(10000));
    }

    #[test]
    fn every_income_line_is_summed() {
        let input = TaxInput {
            employment_income: dec!(50000),
            self_employment_income: dec!(10000),
            rental_income: dec!(6000),
            interest_income: dec!(1000),
            other_income: dec!(500),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_income, dec!(67500));
    }

    #[test]
    fn rrsp_deduction_is_capped_at_yearly_limit() {
        let input = TaxInput {
            employment_income: dec!(200000),
            rrsp_deduction: dec!(50000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_deductions, dec!(32490));
    }

    #[test]
    fn fhsa_deduction_is_capped_at_annual_limit() {
        let input = TaxInput {
            employment_income: dec!(100000),
            fhsa_deduction: dec!(15000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_deductions, dec!(8000));
    }

    #[test]
    fn other_deductions_are_taken_in_full() {
        let input = TaxInput {
            employment_income: dec!(60000),
            childcare_expenses: dec!(5000),
            moving_expenses: dec!(2000),
            union_dues: dec!(800),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_deductions, dec!(7800));
        assert_eq!(result.taxable_income, dec!(52200));
    }

    #[test]
    fn deductions_above_income_leave_zero_taxable_income() {
        let input = TaxInput {
            employment_income: dec!(20000),
            rrsp_deduction: dec!(32490),
            fhsa_deduction: dec!(8000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    // =========================================================================
    // tax component tests
    // =========================================================================

    #[test]
    fn ontario_75000_lands_in_expected_ranges() {
        let input = TaxInput {
            employment_income: dec!(75000),
            tax_withheld: dec!(15000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert!(result.federal_tax > dec!(5000) && result.federal_tax < dec!(10000));
        assert!(result.provincial_tax > dec!(2000) && result.provincial_tax < dec!(5000));
        assert!(result.health_premium > dec!(0));
        assert_eq!(result.province_name, "Ontario");
    }

    #[test]
    fn only_ontario_pays_health_premium() {
        let input = TaxInput {
            employment_income: dec!(75000),
            ..TaxInput::new(ProvinceCode::BritishColumbia)
        };

        let result = calculate_tax(&input);

        assert_eq!(result.health_premium, dec!(0));
    }

    #[test]
    fn quebec_federal_tax_is_abated() {
        let ontario = calculate_tax(&TaxInput {
            employment_income: dec!(75000),
            ..ontario()
        });
        let quebec = calculate_tax(&TaxInput {
            employment_income: dec!(75000),
            ..TaxInput::new(ProvinceCode::Quebec)
        });

        let expected = ontario.federal_tax * dec!(0.835);

        assert!((quebec.federal_tax - expected).abs() < dec!(1));
    }

    #[test]
    fn breakdown_exposes_unabated_federal_tax_for_quebec() {
        let input = TaxInput {
            employment_income: dec!(75000),
            ..TaxInput::new(ProvinceCode::Quebec)
        };

        let breakdown = calculate_tax_breakdown(&input, tax_year_config(input.tax_year));

        assert!(breakdown.federal_after_abatement < breakdown.federal.net_tax);
        assert_eq!(
            breakdown.result.federal_tax,
            round_half_up(breakdown.federal_after_abatement)
        );
    }

    #[test]
    fn components_are_rounded_to_cents() {
        let input = TaxInput {
            employment_income: dec!(75000),
            tax_year: TaxYear::Y2024,
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.federal_tax, round_half_up(result.federal_tax));
        assert_eq!(result.provincial_tax, round_half_up(result.provincial_tax));
    }

    // =========================================================================
    // refund and balance tests
    // =========================================================================

    #[test]
    fn zero_income_is_a_zero_refund() {
        let result = calculate_tax(&ontario());

        assert_eq!(result.total_tax, dec!(0));
        assert_eq!(result.refund_or_owing, dec!(0));
        assert!(result.is_refund);
    }

    #[test]
    fn overwithholding_is_refunded() {
        let input = TaxInput {
            employment_income: dec!(50000),
            tax_withheld: dec!(20000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert!(result.is_refund);
        assert_eq!(result.refund_or_owing, dec!(20000) - result.total_tax);
    }

    #[test]
    fn underwithholding_leaves_balance_owing() {
        let input = TaxInput {
            employment_income: dec!(100000),
            tax_withheld: dec!(1000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert!(!result.is_refund);
        assert!(result.refund_or_owing < dec!(0));
    }

    // =========================================================================
    // configuration tests
    // =========================================================================

    #[test]
    fn explicit_config_matches_registry_lookup() {
        let input = TaxInput {
            employment_income: dec!(90000),
            tax_year: TaxYear::Y2024,
            ..ontario()
        };

        let from_registry = calculate_tax(&input);
        let explicit = calculate_tax_with_config(&input, tax_year_config(TaxYear::Y2024));

        assert_eq!(from_registry, explicit);
    }

    #[test]
    fn explicit_config_overrides_input_year() {
        let input = TaxInput {
            employment_income: dec!(200000),
            rrsp_deduction: dec!(50000),
            tax_year: TaxYear::Y2025,
            ..ontario()
        };

        let result = calculate_tax_with_config(&input, tax_year_config(TaxYear::Y2024));

        assert_eq!(result.total_deductions, dec!(31560));
    }

    #[test]
    fn negative_amounts_are_accepted() {
        let input = TaxInput {
            employment_income: dec!(-5000),
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_income, dec!(-5000));
        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }

    // =========================================================================
    // range tests
    // =========================================================================

    #[test]
    fn decimal_max_income_is_clamped_instead_of_overflowing() {
        let input = TaxInput {
            employment_income: Decimal::MAX,
            other_income: dec!(1),
            dividend_income: Decimal::MAX,
            donations: Decimal::MAX,
            tax_withheld: Decimal::MAX,
            ..ontario()
        };

        let result = calculate_tax(&input);

        // max + 1 + max × 1.38
        assert_eq!(
            result.total_income,
            TaxInput::MAX_AMOUNT * dec!(2.38) + dec!(1)
        );
        assert!(result.total_tax > dec!(0));
        assert_eq!(
            result.total_tax,
            result.federal_tax + result.provincial_tax + result.health_premium
        );
        assert_eq!(result.total_withheld, TaxInput::MAX_AMOUNT);
        assert_eq!(result.refund_or_owing, TaxInput::MAX_AMOUNT - result.total_tax);
    }

    #[test]
    fn decimal_min_income_is_clamped_instead_of_overflowing() {
        let input = TaxInput {
            employment_income: Decimal::MIN,
            self_employment_income: Decimal::MIN,
            rrsp_deduction: Decimal::MAX,
            ..ontario()
        };

        let result = calculate_tax(&input);

        assert_eq!(result.total_income, -TaxInput::MAX_AMOUNT * dec!(2));
        assert_eq!(result.taxable_income, dec!(0));
        assert_eq!(result.total_tax, dec!(0));
    }
}
