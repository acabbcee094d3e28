//! Required CPP, CPP2 and EI contributions on employment earnings.
//!
//! These estimate what an employer should have deducted. The tax return
//! itself takes the amounts from the slips; the estimates are only used to
//! fill them in when a caller has none.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{min, non_negative};
use crate::models::{CppConfig, EiConfig, ProvinceCode, SecondCppConfig, TaxYearConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollEstimate {
    pub cpp: Decimal,
    pub ei: Decimal,
}

/// Base CPP contribution: pensionable earnings above the basic exemption,
/// up to the YMPE, at the contribution rate.
///
/// # Example
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::TaxYear;
/// use tax_core::calculations::estimate_cpp_contribution;
/// use tax_core::config::tax_year_config;
///
/// let cpp = &tax_year_config(TaxYear::Y2024).cpp;
///
/// assert_eq!(estimate_cpp_contribution(dec!(100000), cpp), dec!(3867.50));
/// ```
pub fn estimate_cpp_contribution(
    employment_income: Decimal,
    config: &CppConfig,
) -> Decimal {
    let pensionable = min(employment_income, config.max_earnings);
    let contributory = non_negative(pensionable - config.exemption);

    min(contributory * config.rate, config.max)
}

/// CPP2 contribution on earnings between the YMPE and the additional
/// maximum.
pub fn estimate_cpp2_contribution(
    employment_income: Decimal,
    cpp: &CppConfig,
    config: &SecondCppConfig,
) -> Decimal {
    let ceiling = min(employment_income, config.additional_max_earnings);
    let band = non_negative(ceiling - cpp.max_earnings);

    min(band * config.rate, config.max)
}

/// EI premium on insurable earnings up to the yearly maximum.
pub fn estimate_ei_premium(
    employment_income: Decimal,
    config: &EiConfig,
) -> Decimal {
    let insurable = non_negative(min(employment_income, config.max_insurable));

    min(insurable * config.rate, config.max)
}

/// Base CPP and EI for a resident of `province`, the two amounts a return
/// claims credits on. CPP2 is left to [`estimate_cpp2_contribution`].
pub fn estimate_payroll(
    employment_income: Decimal,
    province: ProvinceCode,
    config: &TaxYearConfig,
) -> PayrollEstimate {
    PayrollEstimate {
        cpp: estimate_cpp_contribution(employment_income, &config.cpp),
        ei: estimate_ei_premium(employment_income, config.ei_for(province)),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::config::tax_year_config;
    use crate::models::TaxYear;

    fn config_2024() -> &'static TaxYearConfig {
        tax_year_config(TaxYear::Y2024)
    }

    // =========================================================================
    // estimate_cpp_contribution tests
    // =========================================================================

    #[test]
    fn cpp_is_zero_below_basic_exemption() {
        let result = estimate_cpp_contribution(dec!(3000), &config_2024().cpp);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn cpp_on_earnings_between_exemption_and_ympe() {
        let result = estimate_cpp_contribution(dec!(50000), &config_2024().cpp);

        // (50,000 - 3,500) × 5.95%
        assert_eq!(result, dec!(2766.75));
    }

    #[test]
    fn cpp_reaches_maximum_at_ympe() {
        let result = estimate_cpp_contribution(dec!(68500), &config_2024().cpp);

        assert_eq!(result, dec!(3867.50));
    }

    #[test]
    fn cpp_maximum_matches_2025_parameters() {
        let cpp = &tax_year_config(TaxYear::Y2025).cpp;

        let result = estimate_cpp_contribution(dec!(250000), cpp);

        assert_eq!(result, cpp.max);
    }

    #[test]
    fn cpp_is_zero_for_negative_income() {
        let result = estimate_cpp_contribution(dec!(-1000), &config_2024().cpp);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // estimate_cpp2_contribution tests
    // =========================================================================

    #[test]
    fn cpp2_is_zero_up_to_ympe() {
        let config = config_2024();

        let result = estimate_cpp2_contribution(dec!(68500), &config.cpp, &config.cpp2);

        assert_eq!(result, dec!(0));
    }

    #[test]
    fn cpp2_on_partial_band() {
        let config = config_2024();

        let result = estimate_cpp2_contribution(dec!(70500), &config.cpp, &config.cpp2);

        // (70,500 - 68,500) × 4%
        assert_eq!(result, dec!(80));
    }

    #[test]
    fn cpp2_is_capped_above_additional_maximum() {
        let config = config_2024();

        let result = estimate_cpp2_contribution(dec!(200000), &config.cpp, &config.cpp2);

        assert_eq!(result, dec!(188));
    }

    // =========================================================================
    // estimate_ei_premium tests
    // =========================================================================

    #[test]
    fn ei_on_modest_earnings() {
        let result = estimate_ei_premium(dec!(50000), &config_2024().ei);

        assert_eq!(result, dec!(830));
    }

    #[test]
    fn ei_is_capped_at_maximum_insurable() {
        let result = estimate_ei_premium(dec!(120000), &config_2024().ei);

        assert_eq!(result, dec!(1049.12));
    }

    #[test]
    fn ei_is_zero_for_negative_income() {
        let result = estimate_ei_premium(dec!(-500), &config_2024().ei);

        assert_eq!(result, dec!(0));
    }

    // =========================================================================
    // estimate_payroll tests
    // =========================================================================

    #[test]
    fn quebec_payroll_uses_reduced_ei() {
        let result = estimate_payroll(dec!(120000), ProvinceCode::Quebec, config_2024());

        assert_eq!(result.ei, dec!(834.24));
        assert_eq!(result.cpp, dec!(3867.50));
    }

    #[test]
    fn ontario_payroll_at_high_income_is_both_maximums() {
        let result = estimate_payroll(dec!(120000), ProvinceCode::Ontario, config_2024());

        assert_eq!(
            result,
            PayrollEstimate {
                cpp: dec!(3867.50),
                ei: dec!(1049.12),
            }
        );
    }
}
