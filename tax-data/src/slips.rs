use rust_decimal::Decimal;
use tax_core::TaxInput;
use tax_core::calculations::estimate_payroll;
use tax_core::config::tax_year_config;
use tracing::debug;

/// Fills in CPP contributions and EI premiums that were not reported,
/// using the amounts an employer should have deducted from
/// `employment_income`. Reported amounts are left alone.
pub fn fill_payroll_estimates(mut input: TaxInput) -> TaxInput {
    let config = tax_year_config(input.tax_year);
    let estimate = estimate_payroll(input.employment_income, input.province, config);

    if input.cpp_contributions == Decimal::ZERO {
        input.cpp_contributions = estimate.cpp;
    }
    if input.ei_premiums == Decimal::ZERO {
        input.ei_premiums = estimate.ei;
    }

    debug!(
        province = %input.province,
        cpp = %input.cpp_contributions,
        ei = %input.ei_premiums,
        "payroll contributions"
    );

    input
}
