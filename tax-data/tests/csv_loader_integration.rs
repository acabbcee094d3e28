//! Integration tests that load returns from an on-disk fixture and run them
//! through the engine and the writers.

use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use tax_core::{ProvinceCode, TaxYear, calculate_tax};
use tax_data::{load_from_file, write_csv};

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_returns.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let inputs = load_from_file(&fixture_path()).expect("fixture file should load without error");

    assert_eq!(inputs.len(), 3);
}

#[test]
fn test_load_fixture_first_row_ontario() {
    let inputs = load_from_file(&fixture_path()).unwrap();
    let input = &inputs[0];

    assert_eq!(input.province, ProvinceCode::Ontario);
    assert_eq!(input.tax_year, TaxYear::Y2025);
    assert_eq!(input.employment_income, dec!(75000.00));
    assert_eq!(input.tax_withheld, dec!(15000.00));
    assert_eq!(input.rrsp_deduction, dec!(0));
}

#[test]
fn test_load_fixture_third_row_alberta_2024() {
    let inputs = load_from_file(&fixture_path()).unwrap();
    let input = &inputs[2];

    assert_eq!(input.province, ProvinceCode::Alberta);
    assert_eq!(input.tax_year, TaxYear::Y2024);
    assert_eq!(input.dividend_income, dec!(10000.00));
    assert_eq!(input.donations, dec!(1200.00));
}

#[test]
fn test_fixture_returns_calculate() {
    let inputs = load_from_file(&fixture_path()).unwrap();

    let results: Vec<_> = inputs.iter().map(calculate_tax).collect();

    assert!(results[0].health_premium > dec!(0));
    assert_eq!(results[1].province_name, "Quebec");
    assert_eq!(results[1].total_deductions, dec!(5000));
    // 120,000 + 2,500 + 10,000 × 1.38 + 20,000 × 50%
    assert_eq!(results[2].total_income, dec!(146300));
    assert_eq!(results[2].taxable_income, dec!(138300));
}

#[test]
fn test_fixture_round_trips_to_csv_report() {
    let returns: Vec<_> = load_from_file(&fixture_path())
        .unwrap()
        .into_iter()
        .map(|input| {
            let result = calculate_tax(&input);
            (input, result)
        })
        .collect();
    let mut out = Vec::new();

    write_csv(&mut out, &returns).unwrap();

    let text = String::from_utf8(out).unwrap();
    let provinces: Vec<_> = text
        .lines()
        .skip(1)
        .filter_map(|line| line.split(',').next())
        .collect();
    assert_eq!(provinces, vec!["ON", "QC", "AB"]);
}
