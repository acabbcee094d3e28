use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{HealthPremiumBracket, ProvinceCode, Surtax, TaxBracket};

/// Rate schedule and credits for one province or territory in one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProvincialConfig {
    pub code: ProvinceCode,
    pub name: String,
    pub brackets: Vec<TaxBracket>,
    /// Provincial basic personal amount.
    pub bpa: Decimal,
    #[serde(default)]
    pub surtax: Surtax,
    /// Health premium table; only Ontario levies one.
    #[serde(default)]
    pub health_premium: Option<Vec<HealthPremiumBracket>>,
    /// Fraction of basic federal tax abated for residents (Quebec only).
    #[serde(default)]
    pub abatement: Option<Decimal>,
}

impl ProvincialConfig {
    /// Rate of the first bracket, used to value the provincial BPA credit.
    pub fn lowest_rate(&self) -> Decimal {
        self.brackets
            .first()
            .map(|b| b.rate)
            .unwrap_or(Decimal::ZERO)
    }
}
