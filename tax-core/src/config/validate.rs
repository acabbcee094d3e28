//! Consistency checks for tax-year parameter sets.
//!
//! The calculators assume well-formed tables and never check them at run
//! time. These checks are what the test suite runs over every registered
//! year, and what callers should run over any hand-built config.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::{HealthPremiumBracket, ProvinceCode, TaxBracket, TaxYearConfig};

/// A parameter table that breaks one of the calculators' assumptions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{jurisdiction}: rate schedule is empty")]
    EmptySchedule { jurisdiction: String },

    #[error("{jurisdiction}: first bracket starts at {min}, expected 0")]
    ScheduleNotFromZero {
        jurisdiction: String,
        min: Decimal,
    },

    #[error("{jurisdiction}: bracket {index} does not start where the previous one ends")]
    BracketGap { jurisdiction: String, index: usize },

    #[error("{jurisdiction}: bracket {index} has an upper bound not above its lower bound")]
    InvertedBracket { jurisdiction: String, index: usize },

    #[error("{jurisdiction}: only the last bracket may be unbounded (bracket {index})")]
    UnboundedBeforeEnd { jurisdiction: String, index: usize },

    #[error("{jurisdiction}: last bracket must be unbounded")]
    BoundedFinalBracket { jurisdiction: String },

    #[error("{jurisdiction}: rate {rate} is outside [0, 1]")]
    RateOutOfRange {
        jurisdiction: String,
        rate: Decimal,
    },

    #[error("federal BPA reduction range is inverted or raises the BPA")]
    InvalidBpaReduction,

    #[error("provincial table slot for {expected} holds {found}")]
    ProvinceOutOfPlace {
        expected: ProvinceCode,
        found: ProvinceCode,
    },

    #[error("{jurisdiction}: health premium table is not ascending at row {index}")]
    PremiumTableNotAscending { jurisdiction: String, index: usize },

    #[error("{jurisdiction}: health premium table must end with an unbounded row")]
    PremiumTableBounded { jurisdiction: String },
}

/// Checks every table in `config`, returning the first problem found.
pub fn validate(config: &TaxYearConfig) -> Result<(), ConfigError> {
    validate_schedule("federal", &config.federal.brackets)?;

    let reduction = &config.federal.bpa_reduction;
    if reduction.end <= reduction.start
        || reduction.min_bpa > config.federal.basic_personal_amount
    {
        return Err(ConfigError::InvalidBpaReduction);
    }

    for (expected, provincial) in ProvinceCode::ALL.iter().zip(&config.provinces) {
        if provincial.code != *expected {
            return Err(ConfigError::ProvinceOutOfPlace {
                expected: *expected,
                found: provincial.code,
            });
        }

        let jurisdiction = provincial.code.as_str();
        validate_schedule(jurisdiction, &provincial.brackets)?;

        if let Some(table) = &provincial.health_premium {
            validate_premium_table(jurisdiction, table)?;
        }
    }

    Ok(())
}

/// Checks that `brackets` partitions `[0, ∞)` in ascending order.
pub(crate) fn validate_schedule(
    jurisdiction: &str,
    brackets: &[TaxBracket],
) -> Result<(), ConfigError> {
    let Some(first) = brackets.first() else {
        return Err(ConfigError::EmptySchedule {
            jurisdiction: jurisdiction.to_string(),
        });
    };
    if first.min != Decimal::ZERO {
        return Err(ConfigError::ScheduleNotFromZero {
            jurisdiction: jurisdiction.to_string(),
            min: first.min,
        });
    }

    let last_index = brackets.len() - 1;
    let mut previous_max = Decimal::ZERO;

    for (index, bracket) in brackets.iter().enumerate() {
        if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
            return Err(ConfigError::RateOutOfRange {
                jurisdiction: jurisdiction.to_string(),
                rate: bracket.rate,
            });
        }
        if bracket.min != previous_max {
            return Err(ConfigError::BracketGap {
                jurisdiction: jurisdiction.to_string(),
                index,
            });
        }

        match bracket.max {
            Some(max) if max <= bracket.min => {
                return Err(ConfigError::InvertedBracket {
                    jurisdiction: jurisdiction.to_string(),
                    index,
                });
            }
            Some(max) => previous_max = max,
            None if index != last_index => {
                return Err(ConfigError::UnboundedBeforeEnd {
                    jurisdiction: jurisdiction.to_string(),
                    index,
                });
            }
            None => {}
        }
    }

    if !brackets[last_index].is_unbounded() {
        return Err(ConfigError::BoundedFinalBracket {
            jurisdiction: jurisdiction.to_string(),
        });
    }

    Ok(())
}

fn validate_premium_table(
    jurisdiction: &str,
    table: &[HealthPremiumBracket],
) -> Result<(), ConfigError> {
    let mut previous_max = Decimal::ZERO;

    for (index, bracket) in table.iter().enumerate() {
        match bracket.max {
            Some(max) if max <= previous_max && index > 0 => {
                return Err(ConfigError::PremiumTableNotAscending {
                    jurisdiction: jurisdiction.to_string(),
                    index,
                });
            }
            Some(max) => previous_max = max,
            None if index + 1 != table.len() => {
                return Err(ConfigError::PremiumTableNotAscending {
                    jurisdiction: jurisdiction.to_string(),
                    index,
                });
            }
            None => return Ok(()),
        }
    }

    Err(ConfigError::PremiumTableBounded {
        jurisdiction: jurisdiction.to_string(),
    })
}
