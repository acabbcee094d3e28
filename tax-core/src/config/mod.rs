//! Tax-year parameter registry.
//!
//! Every legislated figure the engine uses lives here, indexed by
//! [`TaxYear`]. Each parameter is a single `match` over the year, so adding
//! a year means adding a [`TaxYear`] variant and one arm per parameter; the
//! compiler points at every arm that is missing.
//!
//! The registry is built once, on first use, and never mutated afterwards.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use tax_core::config::tax_year_config;
//! use tax_core::{ProvinceCode, TaxYear};
//!
//! let config = tax_year_config(TaxYear::Y2025);
//!
//! assert_eq!(config.rrsp_limit, dec!(32490));
//! assert_eq!(config.province(ProvinceCode::Quebec).abatement, Some(dec!(0.165)));
//! ```

mod federal;
mod provincial;
mod validate;

use std::sync::LazyLock;

use rust_decimal::Decimal;

pub use validate::{ConfigError, validate};

use crate::models::{ProvinceCode, ProvincialConfig, TaxBracket, TaxYear, TaxYearConfig};

static REGISTRY: LazyLock<[TaxYearConfig; 2]> =
    LazyLock::new(|| TaxYear::ALL.map(build_tax_year_config));

/// Parameters for `year`.
pub fn tax_year_config(year: TaxYear) -> &'static TaxYearConfig {
    let config = &REGISTRY[year_index(year)];
    debug_assert_eq!(config.tax_year, year);
    config
}

/// Provincial schedule for `province` in `year`.
pub fn provincial_config(
    year: TaxYear,
    province: ProvinceCode,
) -> &'static ProvincialConfig {
    tax_year_config(year).province(province)
}

fn year_index(year: TaxYear) -> usize {
    match year {
        TaxYear::Y2024 => 0,
        TaxYear::Y2025 => 1,
    }
}

fn build_tax_year_config(year: TaxYear) -> TaxYearConfig {
    TaxYearConfig {
        tax_year: year,
        federal: federal::federal(year),
        cpp: federal::cpp(year),
        cpp2: federal::cpp2(year),
        ei: federal::ei(year),
        ei_quebec: federal::ei_quebec(year),
        rrsp_limit: federal::rrsp_limit(year),
        fhsa: federal::fhsa(year),
        canada_employment_amount: federal::canada_employment_amount(year),
        medical_threshold: federal::medical_threshold(year),
        donations: federal::donations(year),
        dividends: federal::dividends(year),
        capital_gains_inclusion_rate: federal::capital_gains_inclusion_rate(year),
        max_health_premium: provincial::max_health_premium(year),
        provinces: ProvinceCode::ALL.map(|code| provincial::provincial(code, year)),
    }
}

/// Builds a contiguous schedule starting at zero.
///
/// `tiers` holds `(upper bound, rate)` for every bounded bracket in
/// ascending order; `top_rate` applies to everything above the last bound.
pub(crate) fn schedule(
    tiers: &[(Decimal, Decimal)],
    top_rate: Decimal,
) -> Vec<TaxBracket> {
    let mut min = Decimal::ZERO;
    let mut brackets = Vec::with_capacity(tiers.len() + 1);

    for &(max, rate) in tiers {
        brackets.push(TaxBracket::new(min, max, rate));
        min = max;
    }
    brackets.push(TaxBracket::unbounded(min, top_rate));

    brackets
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn schedule_chains_bounds_into_contiguous_brackets() {
        let brackets = schedule(&[(dec!(100), dec!(0.1)), (dec!(250), dec!(0.2))], dec!(0.3));

        assert_eq!(
            brackets,
            vec![
                TaxBracket::new(dec!(0), dec!(100), dec!(0.1)),
                TaxBracket::new(dec!(100), dec!(250), dec!(0.2)),
                TaxBracket::unbounded(dec!(250), dec!(0.3)),
            ]
        );
    }

    #[test]
    fn schedule_with_no_tiers_is_a_single_flat_bracket() {
        let brackets = schedule(&[], dec!(0.1));

        assert_eq!(brackets, vec![TaxBracket::unbounded(dec!(0), dec!(0.1))]);
    }

    #[test]
    fn every_registered_year_is_self_consistent() {
        for year in TaxYear::ALL {
            assert_eq!(validate(tax_year_config(year)), Ok(()), "tax year {year}");
        }
    }

    #[test]
    fn lookup_returns_the_requested_year() {
        for year in TaxYear::ALL {
            assert_eq!(tax_year_config(year).tax_year, year);
        }
    }

    #[test]
    fn every_province_has_exactly_one_config() {
        for year in TaxYear::ALL {
            for code in ProvinceCode::ALL {
                let config = provincial_config(year, code);

                assert_eq!(config.code, code);
                assert_eq!(config.name, code.name());
            }
        }
    }

    #[test]
    fn only_quebec_carries_an_abatement() {
        for code in ProvinceCode::ALL {
            let abatement = provincial_config(TaxYear::Y2025, code).abatement;

            if code == ProvinceCode::Quebec {
                assert_eq!(abatement, Some(dec!(0.165)));
            } else {
                assert_eq!(abatement, None, "{code}");
            }
        }
    }

    #[test]
    fn only_ontario_carries_a_health_premium_table() {
        for code in ProvinceCode::ALL {
            let has_table = provincial_config(TaxYear::Y2025, code)
                .health_premium
                .is_some();

            assert_eq!(has_table, code == ProvinceCode::Ontario, "{code}");
        }
    }

    #[test]
    fn contribution_limits_by_year() {
        assert_eq!(tax_year_config(TaxYear::Y2024).rrsp_limit, dec!(31560));
        assert_eq!(tax_year_config(TaxYear::Y2025).rrsp_limit, dec!(32490));
        assert_eq!(tax_year_config(TaxYear::Y2025).fhsa.annual, dec!(8000));
        assert_eq!(tax_year_config(TaxYear::Y2025).fhsa.lifetime, dec!(40000));
    }

    #[test]
    fn donation_high_income_threshold_follows_top_federal_bracket() {
        for year in TaxYear::ALL {
            let config = tax_year_config(year);
            let top = config
                .federal
                .brackets
                .last()
                .map(|b| b.min)
                .unwrap_or_default();

            assert_eq!(config.donations.high_income_threshold, top, "tax year {year}");
        }
    }
}
