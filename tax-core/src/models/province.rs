use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Returned when a string is not one of the thirteen two-letter codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown province or territory code '{0}'")]
pub struct UnknownProvinceError(pub String);

/// Province or territory of residence on December 31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProvinceCode {
    #[serde(rename = "ON")]
    Ontario,
    #[serde(rename = "BC")]
    BritishColumbia,
    #[serde(rename = "AB")]
    Alberta,
    #[serde(rename = "QC")]
    Quebec,
    #[serde(rename = "MB")]
    Manitoba,
    #[serde(rename = "SK")]
    Saskatchewan,
    #[serde(rename = "NB")]
    NewBrunswick,
    #[serde(rename = "NS")]
    NovaScotia,
    #[serde(rename = "PE")]
    PrinceEdwardIsland,
    #[serde(rename = "NL")]
    NewfoundlandAndLabrador,
    #[serde(rename = "YT")]
    Yukon,
    #[serde(rename = "NT")]
    NorthwestTerritories,
    #[serde(rename = "NU")]
    Nunavut,
}

impl ProvinceCode {
    /// Every jurisdiction, in the order used for pick lists.
    pub const ALL: [ProvinceCode; 13] = [
        Self::Ontario,
        Self::BritishColumbia,
        Self::Alberta,
        Self::Quebec,
        Self::Manitoba,
        Self::Saskatchewan,
        Self::NewBrunswick,
        Self::NovaScotia,
        Self::PrinceEdwardIsland,
        Self::NewfoundlandAndLabrador,
        Self::Yukon,
        Self::NorthwestTerritories,
        Self::Nunavut,
    ];

    /// Position in [`ProvinceCode::ALL`].
    pub fn index(&self) -> usize {
        *self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ontario => "ON",
            Self::BritishColumbia => "BC",
            Self::Alberta => "AB",
            Self::Quebec => "QC",
            Self::Manitoba => "MB",
            Self::Saskatchewan => "SK",
            Self::NewBrunswick => "NB",
            Self::NovaScotia => "NS",
            Self::PrinceEdwardIsland => "PE",
            Self::NewfoundlandAndLabrador => "NL",
            Self::Yukon => "YT",
            Self::NorthwestTerritories => "NT",
            Self::Nunavut => "NU",
        }
    }

    /// Full English name, as printed on the return.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Ontario => "Ontario",
            Self::BritishColumbia => "British Columbia",
            Self::Alberta => "Alberta",
            Self::Quebec => "Quebec",
            Self::Manitoba => "Manitoba",
            Self::Saskatchewan => "Saskatchewan",
            Self::NewBrunswick => "New Brunswick",
            Self::NovaScotia => "Nova Scotia",
            Self::PrinceEdwardIsland => "Prince Edward Island",
            Self::NewfoundlandAndLabrador => "Newfoundland and Labrador",
            Self::Yukon => "Yukon",
            Self::NorthwestTerritories => "Northwest Territories",
            Self::Nunavut => "Nunavut",
        }
    }

    /// Quebec residents file a separate provincial return (TP-1) with
    /// Revenu Québec; every other jurisdiction is collected on the T1.
    pub fn requires_separate_provincial_return(&self) -> bool {
        matches!(self, Self::Quebec)
    }

    /// Parses a two-letter code, ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL.into_iter().find(|p| p.as_str() == code)
    }
}

impl FromStr for ProvinceCode {
    type Err = UnknownProvinceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownProvinceError(s.to_string()))
    }
}

impl fmt::Display for ProvinceCode {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
