//! Provincial and territorial schedules.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::schedule;
use crate::models::{
    HealthPremiumBracket, ProvinceCode, ProvincialConfig, Surtax, TaxBracket, TaxYear,
};

pub(super) fn provincial(
    code: ProvinceCode,
    year: TaxYear,
) -> ProvincialConfig {
    let (brackets, bpa) = match code {
        ProvinceCode::Ontario => ontario(year),
        ProvinceCode::BritishColumbia => british_columbia(year),
        ProvinceCode::Alberta => alberta(year),
        ProvinceCode::Quebec => quebec(year),
        ProvinceCode::Manitoba => manitoba(year),
        ProvinceCode::Saskatchewan => saskatchewan(year),
        ProvinceCode::NewBrunswick => new_brunswick(year),
        ProvinceCode::NovaScotia => nova_scotia(year),
        ProvinceCode::PrinceEdwardIsland => prince_edward_island(year),
        ProvinceCode::NewfoundlandAndLabrador => newfoundland_and_labrador(year),
        ProvinceCode::Yukon => yukon(year),
        ProvinceCode::NorthwestTerritories => northwest_territories(year),
        ProvinceCode::Nunavut => nunavut(year),
    };

    ProvincialConfig {
        code,
        name: code.name().to_string(),
        brackets,
        bpa,
        surtax: surtax(code, year),
        health_premium: (code == ProvinceCode::Ontario).then(|| ontario_health_premium(year)),
        abatement: (code == ProvinceCode::Quebec).then_some(dec!(0.165)),
    }
}

fn surtax(
    code: ProvinceCode,
    year: TaxYear,
) -> Surtax {
    match (code, year) {
        (ProvinceCode::Ontario, TaxYear::Y2024) => Surtax::Tiered {
            first: dec!(5554),
            first_rate: dec!(0.20),
            second: dec!(7108),
            second_rate: dec!(0.36),
        },
        (ProvinceCode::Ontario, TaxYear::Y2025) => Surtax::Tiered {
            first: dec!(5710),
            first_rate: dec!(0.20),
            second: dec!(7307),
            second_rate: dec!(0.36),
        },
        (ProvinceCode::PrinceEdwardIsland, TaxYear::Y2024) => Surtax::Threshold {
            threshold: dec!(12500),
            rate: dec!(0.10),
        },
        // PEI repealed its surtax from 2025 when it restructured its brackets.
        _ => Surtax::None,
    }
}

pub(super) fn max_health_premium(year: TaxYear) -> Decimal {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => dec!(900),
    }
}

fn ontario_health_premium(year: TaxYear) -> Vec<HealthPremiumBracket> {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => vec![
            HealthPremiumBracket::fixed(Some(dec!(20000)), dec!(0)),
            HealthPremiumBracket::progressive(dec!(25000), dec!(0), dec!(0.06), None),
            HealthPremiumBracket::fixed(Some(dec!(36000)), dec!(300)),
            HealthPremiumBracket::progressive(dec!(38500), dec!(300), dec!(0.06), None),
            HealthPremiumBracket::fixed(Some(dec!(48000)), dec!(450)),
            HealthPremiumBracket::progressive(dec!(48600), dec!(450), dec!(0.25), None),
            HealthPremiumBracket::fixed(Some(dec!(72000)), dec!(600)),
            HealthPremiumBracket::progressive(dec!(200000), dec!(600), dec!(0.25), Some(dec!(750))),
            HealthPremiumBracket::fixed(None, max_health_premium(year)),
        ],
    }
}

type Schedule = (Vec<TaxBracket>, Decimal);

fn ontario(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(51446), dec!(0.0505)),
                    (dec!(102894), dec!(0.0915)),
                    (dec!(150000), dec!(0.1116)),
                    (dec!(220000), dec!(0.1216)),
                ],
                dec!(0.1316),
            ),
            dec!(12399),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(52886), dec!(0.0505)),
                    (dec!(105775), dec!(0.0915)),
                    (dec!(150000), dec!(0.1116)),
                    (dec!(220000), dec!(0.1216)),
                ],
                dec!(0.1316),
            ),
            dec!(12747),
        ),
    }
}

fn british_columbia(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(47937), dec!(0.0506)),
                    (dec!(95875), dec!(0.077)),
                    (dec!(110076), dec!(0.105)),
                    (dec!(133664), dec!(0.1229)),
                    (dec!(181232), dec!(0.147)),
                    (dec!(252752), dec!(0.168)),
                ],
                dec!(0.205),
            ),
            dec!(12580),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(49279), dec!(0.0506)),
                    (dec!(98560), dec!(0.077)),
                    (dec!(113158), dec!(0.105)),
                    (dec!(137407), dec!(0.1229)),
                    (dec!(186306), dec!(0.147)),
                    (dec!(259829), dec!(0.168)),
                ],
                dec!(0.205),
            ),
            dec!(12932),
        ),
    }
}

fn alberta(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(148269), dec!(0.10)),
                    (dec!(177922), dec!(0.12)),
                    (dec!(237230), dec!(0.13)),
                    (dec!(355845), dec!(0.14)),
                ],
                dec!(0.15),
            ),
            dec!(21003),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(60000), dec!(0.08)),
                    (dec!(151234), dec!(0.10)),
                    (dec!(181481), dec!(0.12)),
                    (dec!(241974), dec!(0.13)),
                    (dec!(362961), dec!(0.14)),
                ],
                dec!(0.15),
            ),
            dec!(22323),
        ),
    }
}

fn quebec(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(51780), dec!(0.14)),
                    (dec!(103545), dec!(0.19)),
                    (dec!(126000), dec!(0.24)),
                ],
                dec!(0.2575),
            ),
            dec!(18056),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(53255), dec!(0.14)),
                    (dec!(106495), dec!(0.19)),
                    (dec!(129590), dec!(0.24)),
                ],
                dec!(0.2575),
            ),
            dec!(18571),
        ),
    }
}

fn manitoba(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 | TaxYear::Y2025 => (
            schedule(
                &[(dec!(47000), dec!(0.108)), (dec!(100000), dec!(0.1275))],
                dec!(0.174),
            ),
            dec!(15780),
        ),
    }
}

fn saskatchewan(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[(dec!(52057), dec!(0.105)), (dec!(148734), dec!(0.125))],
                dec!(0.145),
            ),
            dec!(18491),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[(dec!(53463), dec!(0.105)), (dec!(152750), dec!(0.125))],
                dec!(0.145),
            ),
            dec!(19491),
        ),
    }
}

fn new_brunswick(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(49958), dec!(0.094)),
                    (dec!(99916), dec!(0.14)),
                    (dec!(185064), dec!(0.16)),
                ],
                dec!(0.195),
            ),
            dec!(13044),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(51306), dec!(0.094)),
                    (dec!(102614), dec!(0.14)),
                    (dec!(190060), dec!(0.16)),
                ],
                dec!(0.195),
            ),
            dec!(13396),
        ),
    }
}

fn nova_scotia(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(29590), dec!(0.0879)),
                    (dec!(59180), dec!(0.1495)),
                    (dec!(93000), dec!(0.1667)),
                    (dec!(150000), dec!(0.175)),
                ],
                dec!(0.21),
            ),
            dec!(8481),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(30507), dec!(0.0879)),
                    (dec!(61015), dec!(0.1495)),
                    (dec!(95883), dec!(0.1667)),
                    (dec!(154650), dec!(0.175)),
                ],
                dec!(0.21),
            ),
            dec!(11744),
        ),
    }
}

fn prince_edward_island(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[(dec!(32656), dec!(0.098)), (dec!(64313), dec!(0.138))],
                dec!(0.167),
            ),
            dec!(13500),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(33328), dec!(0.095)),
                    (dec!(64656), dec!(0.1347)),
                    (dec!(105000), dec!(0.166)),
                    (dec!(140000), dec!(0.1762)),
                ],
                dec!(0.19),
            ),
            dec!(14250),
        ),
    }
}

fn newfoundland_and_labrador(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(43198), dec!(0.087)),
                    (dec!(86395), dec!(0.145)),
                    (dec!(154244), dec!(0.158)),
                    (dec!(215943), dec!(0.178)),
                    (dec!(275870), dec!(0.198)),
                    (dec!(551739), dec!(0.208)),
                    (dec!(1103478), dec!(0.213)),
                ],
                dec!(0.218),
            ),
            dec!(10818),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(44192), dec!(0.087)),
                    (dec!(88382), dec!(0.145)),
                    (dec!(157792), dec!(0.158)),
                    (dec!(220910), dec!(0.178)),
                    (dec!(282214), dec!(0.198)),
                    (dec!(564429), dec!(0.208)),
                    (dec!(1128858), dec!(0.213)),
                ],
                dec!(0.218),
            ),
            dec!(11067),
        ),
    }
}

fn yukon(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(55867), dec!(0.064)),
                    (dec!(111733), dec!(0.09)),
                    (dec!(173205), dec!(0.109)),
                    (dec!(500000), dec!(0.128)),
                ],
                dec!(0.15),
            ),
            dec!(15705),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(57375), dec!(0.064)),
                    (dec!(114750), dec!(0.09)),
                    (dec!(177882), dec!(0.109)),
                    (dec!(500000), dec!(0.128)),
                ],
                dec!(0.15),
            ),
            dec!(16129),
        ),
    }
}

fn northwest_territories(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(50597), dec!(0.059)),
                    (dec!(101198), dec!(0.086)),
                    (dec!(164525), dec!(0.122)),
                ],
                dec!(0.1405),
            ),
            dec!(17373),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(51964), dec!(0.059)),
                    (dec!(103930), dec!(0.086)),
                    (dec!(168967), dec!(0.122)),
                ],
                dec!(0.1405),
            ),
            dec!(17842),
        ),
    }
}

fn nunavut(year: TaxYear) -> Schedule {
    match year {
        TaxYear::Y2024 => (
            schedule(
                &[
                    (dec!(53268), dec!(0.04)),
                    (dec!(106537), dec!(0.07)),
                    (dec!(173205), dec!(0.09)),
                ],
                dec!(0.115),
            ),
            dec!(18767),
        ),
        TaxYear::Y2025 => (
            schedule(
                &[
                    (dec!(54707), dec!(0.04)),
                    (dec!(109413), dec!(0.07)),
                    (dec!(177881), dec!(0.09)),
                ],
                dec!(0.115),
            ),
            dec!(19274),
        ),
    }
}
