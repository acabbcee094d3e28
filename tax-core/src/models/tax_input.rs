use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::{ProvinceCode, TaxYear};

/// Everything the engine needs to know about one taxpayer's year.
///
/// `province` is required; the year defaults to [`TaxYear::LATEST`] and
/// every amount defaults to zero when absent. Amounts are taken as given:
/// the engine does not reject negative values, it only clamps its own
/// intermediate results. Magnitudes beyond [`TaxInput::MAX_AMOUNT`] are
/// clamped to it before calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxInput {
    pub province: ProvinceCode,
    #[serde(default)]
    pub tax_year: TaxYear,

    // Income
    #[serde(default)]
    pub employment_income: Decimal,
    #[serde(default)]
    pub self_employment_income: Decimal,
    #[serde(default)]
    pub rental_income: Decimal,
    #[serde(default)]
    pub interest_income: Decimal,
    /// Actual (cash) amount of eligible dividends, before gross-up.
    #[serde(default)]
    pub dividend_income: Decimal,
    /// Net capital gains, before the inclusion rate.
    #[serde(default)]
    pub capital_gains: Decimal,
    #[serde(default)]
    pub other_income: Decimal,

    // Payments and contributions
    #[serde(default)]
    pub tax_withheld: Decimal,
    #[serde(default)]
    pub cpp_contributions: Decimal,
    #[serde(default)]
    pub ei_premiums: Decimal,

    // Deductions
    #[serde(default)]
    pub rrsp_deduction: Decimal,
    #[serde(default)]
    pub fhsa_deduction: Decimal,
    #[serde(default)]
    pub childcare_expenses: Decimal,
    #[serde(default)]
    pub moving_expenses: Decimal,
    #[serde(default)]
    pub union_dues: Decimal,

    // Credit amounts
    #[serde(default)]
    pub donations: Decimal,
    #[serde(default)]
    pub medical_expenses: Decimal,
    #[serde(default)]
    pub tuition_amount: Decimal,
}

impl TaxInput {
    /// Largest magnitude the engine calculates with, one quadrillion dollars.
    /// Keeps every sum and product well inside `Decimal` range.
    pub const MAX_AMOUNT: Decimal = dec!(1000000000000000);

    /// An all-zero return for a resident of `province` in the latest year.
    pub fn new(province: ProvinceCode) -> Self {
        Self {
            province,
            tax_year: TaxYear::LATEST,
            employment_income: Decimal::ZERO,
            self_employment_income: Decimal::ZERO,
            rental_income: Decimal::ZERO,
            interest_income: Decimal::ZERO,
            dividend_income: Decimal::ZERO,
            capital_gains: Decimal::ZERO,
            other_income: Decimal::ZERO,
            tax_withheld: Decimal::ZERO,
            cpp_contributions: Decimal::ZERO,
            ei_premiums: Decimal::ZERO,
            rrsp_deduction: Decimal::ZERO,
            fhsa_deduction: Decimal::ZERO,
            childcare_expenses: Decimal::ZERO,
            moving_expenses: Decimal::ZERO,
            union_dues: Decimal::ZERO,
            donations: Decimal::ZERO,
            medical_expenses: Decimal::ZERO,
            tuition_amount: Decimal::ZERO,
        }
    }

    /// Named amounts, used to flag negative and out-of-range entries.
    pub(crate) fn amounts(&self) -> [(&'static str, Decimal); 18] {
        [
            ("employment_income", self.employment_income),
            ("self_employment_income", self.self_employment_income),
            ("rental_income", self.rental_income),
            ("interest_income", self.interest_income),
            ("dividend_income", self.dividend_income),
            ("capital_gains", self.capital_gains),
            ("other_income", self.other_income),
            ("tax_withheld", self.tax_withheld),
            ("cpp_contributions", self.cpp_contributions),
            ("ei_premiums", self.ei_premiums),
            ("rrsp_deduction", self.rrsp_deduction),
            ("fhsa_deduction", self.fhsa_deduction),
            ("childcare_expenses", self.childcare_expenses),
            ("moving_expenses", self.moving_expenses),
            ("union_dues", self.union_dues),
            ("donations", self.donations),
            ("medical_expenses", self.medical_expenses),
            ("tuition_amount", self.tuition_amount),
        ]
    }

    fn amounts_mut(&mut self) -> [&mut Decimal; 18] {
        [
            &mut self.employment_income,
            &mut self.self_employment_income,
            &mut self.rental_income,
            &mut self.interest_income,
            &mut self.dividend_income,
            &mut self.capital_gains,
            &mut self.other_income,
            &mut self.tax_withheld,
            &mut self.cpp_contributions,
            &mut self.ei_premiums,
            &mut self.rrsp_deduction,
            &mut self.fhsa_deduction,
            &mut self.childcare_expenses,
            &mut self.moving_expenses,
            &mut self.union_dues,
            &mut self.donations,
            &mut self.medical_expenses,
            &mut self.tuition_amount,
        ]
    }

    /// A copy with every amount clamped to `±MAX_AMOUNT`.
    pub(crate) fn clamped(&self) -> Self {
        let mut input = self.clone();
        for amount in input.amounts_mut() {
            *amount = (*amount).clamp(-Self::MAX_AMOUNT, Self::MAX_AMOUNT);
        }
        input
    }
}
