//! Federal schedule, payroll maxima, and federal credit parameters.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::schedule;
use crate::models::{
    BpaReduction, CppConfig, DividendConfig, DonationConfig, EiConfig, FederalConfig, FhsaLimits,
    MedicalThreshold, SecondCppConfig, TaxYear,
};

pub(super) fn federal(year: TaxYear) -> FederalConfig {
    match year {
        TaxYear::Y2024 => FederalConfig {
            brackets: schedule(
                &[
                    (dec!(55867), dec!(0.15)),
                    (dec!(111733), dec!(0.205)),
                    (dec!(173205), dec!(0.26)),
                    (dec!(246752), dec!(0.29)),
                ],
                dec!(0.33),
            ),
            basic_personal_amount: dec!(15705),
            bpa_reduction: BpaReduction {
                start: dec!(173205),
                end: dec!(246752),
                min_bpa: dec!(14156),
            },
        },
        // The lowest rate fell from 15% to 14% on July 1, 2025; 14.5% is the
        // blended rate for the year and also values the non-refundable credits.
        TaxYear::Y2025 => FederalConfig {
            brackets: schedule(
                &[
                    (dec!(57375), dec!(0.145)),
                    (dec!(114750), dec!(0.205)),
                    (dec!(177882), dec!(0.26)),
                    (dec!(253414), dec!(0.29)),
                ],
                dec!(0.33),
            ),
            basic_personal_amount: dec!(16129),
            bpa_reduction: BpaReduction {
                start: dec!(177882),
                end: dec!(253414),
                min_bpa: dec!(14538),
            },
        },
    }
}

pub(super) fn cpp(year: TaxYear) -> CppConfig {
    match year {
        TaxYear::Y2024 => CppConfig {
            max: dec!(3867.50),
            rate: dec!(0.0595),
            max_earnings: dec!(68500),
            exemption: dec!(3500),
        },
        TaxYear::Y2025 => CppConfig {
            max: dec!(4034.10),
            rate: dec!(0.0595),
            max_earnings: dec!(71300),
            exemption: dec!(3500),
        },
    }
}

pub(super) fn cpp2(year: TaxYear) -> SecondCppConfig {
    match year {
        TaxYear::Y2024 => SecondCppConfig {
            additional_max_earnings: dec!(73200),
            rate: dec!(0.04),
            max: dec!(188.00),
        },
        TaxYear::Y2025 => SecondCppConfig {
            additional_max_earnings: dec!(81200),
            rate: dec!(0.04),
            max: dec!(396.00),
        },
    }
}

pub(super) fn ei(year: TaxYear) -> EiConfig {
    match year {
        TaxYear::Y2024 => EiConfig {
            max: dec!(1049.12),
            rate: dec!(0.0166),
            max_insurable: dec!(63200),
        },
        TaxYear::Y2025 => EiConfig {
            max: dec!(1077.48),
            rate: dec!(0.0164),
            max_insurable: dec!(65700),
        },
    }
}

pub(super) fn ei_quebec(year: TaxYear) -> EiConfig {
    match year {
        TaxYear::Y2024 => EiConfig {
            max: dec!(834.24),
            rate: dec!(0.0132),
            max_insurable: dec!(63200),
        },
        TaxYear::Y2025 => EiConfig {
            max: dec!(860.67),
            rate: dec!(0.0131),
            max_insurable: dec!(65700),
        },
    }
}

pub(super) fn rrsp_limit(year: TaxYear) -> Decimal {
    match year {
        TaxYear::Y2024 => dec!(31560),
        TaxYear::Y2025 => dec!(32490),
    }
}

pub(super) fn fhsa(year: TaxYear) -> FhsaLimits {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => FhsaLimits {
            annual: dec!(8000),
            lifetime: dec!(40000),
        },
    }
}

pub(super) fn canada_employment_amount(year: TaxYear) -> Decimal {
    match year {
        TaxYear::Y2024 => dec!(1433),
        TaxYear::Y2025 => dec!(1471),
    }
}

pub(super) fn medical_threshold(year: TaxYear) -> MedicalThreshold {
    match year {
        TaxYear::Y2024 => MedicalThreshold {
            rate: dec!(0.03),
            max: dec!(2635),
        },
        TaxYear::Y2025 => MedicalThreshold {
            rate: dec!(0.03),
            max: dec!(2759),
        },
    }
}

/// The 33% donation rate applies once taxable income reaches the top
/// federal bracket, so the threshold moves with that bracket every year.
pub(super) fn donations(year: TaxYear) -> DonationConfig {
    let high_income_threshold = match year {
        TaxYear::Y2024 => dec!(246752),
        TaxYear::Y2025 => dec!(253414),
    };

    DonationConfig {
        first_tier: dec!(200),
        low_rate: federal(year).lowest_rate(),
        high_rate: dec!(0.29),
        high_income_threshold,
        high_income_rate: dec!(0.33),
    }
}

pub(super) fn dividends(year: TaxYear) -> DividendConfig {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => DividendConfig {
            gross_up_factor: dec!(1.38),
            tax_credit_rate: dec!(0.150198),
        },
    }
}

pub(super) fn capital_gains_inclusion_rate(year: TaxYear) -> Decimal {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => dec!(0.5),
    }
}
