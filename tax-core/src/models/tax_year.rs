use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when asked for a year the registry holds no parameters for.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("tax year {0} is not supported")]
pub struct UnsupportedTaxYearError(pub String);

/// A tax year for which the registry carries a full parameter set.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "i32", into = "i32")]
pub enum TaxYear {
    Y2024,
    #[default]
    Y2025,
}

impl TaxYear {
    pub const ALL: [TaxYear; 2] = [Self::Y2024, Self::Y2025];

    pub const LATEST: TaxYear = Self::Y2025;

    pub fn year(&self) -> i32 {
        match self {
            Self::Y2024 => 2024,
            Self::Y2025 => 2025,
        }
    }

    pub fn from_year(year: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.year() == year)
    }
}

impl TryFrom<i32> for TaxYear {
    type Error = UnsupportedTaxYearError;

    fn try_from(year: i32) -> Result<Self, Self::Error> {
        Self::from_year(year).ok_or_else(|| UnsupportedTaxYearError(year.to_string()))
    }
}

impl From<TaxYear> for i32 {
    fn from(year: TaxYear) -> Self {
        year.year()
    }
}

impl FromStr for TaxYear {
    type Err = UnsupportedTaxYearError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(Self::from_year)
            .ok_or_else(|| UnsupportedTaxYearError(s.to_string()))
    }
}

impl fmt::Display for TaxYear {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.year())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn default_is_latest_year() {
        assert_eq!(TaxYear::default(), TaxYear::LATEST);
    }

    #[test]
    fn parses_supported_years() {
        assert_eq!("2024".parse::<TaxYear>(), Ok(TaxYear::Y2024));
        assert_eq!(TaxYear::try_from(2025), Ok(TaxYear::Y2025));
    }

    #[test]
    fn rejects_unsupported_year() {
        assert_eq!(
            TaxYear::try_from(2019),
            Err(UnsupportedTaxYearError("2019".to_string()))
        );
        assert!("twenty".parse::<TaxYear>().is_err());
    }
}
