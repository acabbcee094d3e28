mod health_premium;
mod province;
mod provincial_config;
mod surtax;
mod tax_bracket;
mod tax_input;
mod tax_result;
mod tax_year;
mod tax_year_config;

pub use health_premium::{HealthPremiumBracket, PremiumRule};
pub use province::{ProvinceCode, UnknownProvinceError};
pub use provincial_config::ProvincialConfig;
pub use surtax::Surtax;
pub use tax_bracket::TaxBracket;
pub use tax_input::TaxInput;
pub use tax_result::TaxResult;
pub use tax_year::{TaxYear, UnsupportedTaxYearError};
pub use tax_year_config::{
    BpaReduction, CppConfig, DividendConfig, DonationConfig, EiConfig, FederalConfig, FhsaLimits,
    MedicalThreshold, SecondCppConfig, TaxYearConfig,
};
