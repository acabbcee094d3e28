use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{ProvinceCode, ProvincialConfig, TaxBracket, TaxYear};

/// Income range over which the federal BPA is phased down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BpaReduction {
    pub start: Decimal,
    pub end: Decimal,
    pub min_bpa: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FederalConfig {
    pub brackets: Vec<TaxBracket>,
    pub basic_personal_amount: Decimal,
    pub bpa_reduction: BpaReduction,
}

impl FederalConfig {
    /// Rate of the first bracket, at which most federal credits are valued.
    pub fn lowest_rate(&self) -> Decimal {
        self.brackets
            .first()
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}

/// Base Canada Pension Plan parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CppConfig {
    /// Maximum employee contribution.
    pub max: Decimal,
    pub rate: Decimal,
    /// Year's maximum pensionable earnings (YMPE).
    pub max_earnings: Decimal,
    /// Basic exemption.
    pub exemption: Decimal,
}

/// Second additional CPP contribution (CPP2) on earnings between the YMPE
/// and the year's additional maximum pensionable earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondCppConfig {
    pub additional_max_earnings: Decimal,
    pub rate: Decimal,
    pub max: Decimal,
}

/// Employment Insurance parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EiConfig {
    pub max: Decimal,
    pub rate: Decimal,
    pub max_insurable: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FhsaLimits {
    pub annual: Decimal,
    pub lifetime: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicalThreshold {
    /// Fraction of net income below which expenses earn no credit.
    pub rate: Decimal,
    /// Dollar ceiling on that threshold.
    pub max: Decimal,
}

/// Charitable donation credit tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonationConfig {
    pub first_tier: Decimal,
    pub low_rate: Decimal,
    pub high_rate: Decimal,
    /// Taxable income above which the portion over `first_tier` earns
    /// `high_income_rate` instead of `high_rate`.
    pub high_income_threshold: Decimal,
    pub high_income_rate: Decimal,
}

/// Eligible dividend gross-up and federal dividend tax credit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DividendConfig {
    /// Multiplier applied to the cash dividend (1.38 for eligible dividends).
    pub gross_up_factor: Decimal,
    /// Credit rate applied to the grossed-up amount.
    pub tax_credit_rate: Decimal,
}

/// Every parameter the engine needs for one tax year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxYearConfig {
    pub tax_year: TaxYear,
    pub federal: FederalConfig,
    pub cpp: CppConfig,
    pub cpp2: SecondCppConfig,
    pub ei: EiConfig,
    /// Reduced EI rate for Quebec residents covered by QPIP.
    pub ei_quebec: EiConfig,
    pub rrsp_limit: Decimal,
    pub fhsa: FhsaLimits,
    pub canada_employment_amount: Decimal,
    pub medical_threshold: MedicalThreshold,
    pub donations: DonationConfig,
    pub dividends: DividendConfig,
    pub capital_gains_inclusion_rate: Decimal,
    /// Ontario health premium once income clears every table row.
    pub max_health_premium: Decimal,
    /// One entry per [`ProvinceCode`], in [`ProvinceCode::ALL`] order.
    pub provinces: [ProvincialConfig; 13],
}

impl TaxYearConfig {
    /// Provincial schedule for `code`.
    pub fn province(
        &self,
        code: ProvinceCode,
    ) -> &ProvincialConfig {
        &self.provinces[code.index()]
    }

    /// EI parameters that apply to residents of `code`.
    pub fn ei_for(
        &self,
        code: ProvinceCode,
    ) -> &EiConfig {
        match code {
            ProvinceCode::Quebec => &self.ei_quebec,
            _ => &self.ei,
        }
    }
}
