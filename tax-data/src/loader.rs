//! CSV loader for tax return inputs.
//!
//! ## CSV Format
//!
//! Columns are matched by header name, so order does not matter. Only
//! `province` is required; every other column may be left out entirely or
//! left empty in a given row, in which case the amount is zero.
//!
//! | Column | Required | Type | Notes |
//! |--------------------------|----------|---------|-------------------------------------------|
//! | `province` | yes | string | Two-letter code, e.g. `ON`, `QC`, `NU` |
//! | `tax_year` | no | integer | `2024` or `2025`; defaults to the latest |
//! | `employment_income` | no | decimal | |
//! | `self_employment_income` | no | decimal | |
//! | `rental_income` | no | decimal | |
//! | `interest_income` | no | decimal | |
//! | `dividend_income` | no | decimal | Cash amount of eligible dividends |
//! | `capital_gains` | no | decimal | Before the inclusion rate |
//! | `other_income` | no | decimal | |
//! | `tax_withheld` | no | decimal | |
//! | `cpp_contributions` | no | decimal | |
//! | `ei_premiums` | no | decimal | |
//! | `rrsp_deduction` | no | decimal | |
//! | `fhsa_deduction` | no | decimal | |
//! | `childcare_expenses` | no | decimal | |
//! | `moving_expenses` | no | decimal | |
//! | `union_dues` | no | decimal | |
//! | `donations` | no | decimal | |
//! | `medical_expenses` | no | decimal | |
//! | `tuition_amount` | no | decimal | |
//!
//! ### Minimal example
//!
//! ```csv
//! province,employment_income
//! ON,75000.00
//! ```
use std::io::Read;
use std::path::{Path, PathBuf};

use rust_decimal::Decimal;
use serde::Deserialize;
use tax_core::{ProvinceCode, TaxInput, TaxYear};
use tracing::debug;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    province: String,
    tax_year: Option<i32>,
    employment_income: Option<Decimal>,
    self_employment_income: Option<Decimal>,
    rental_income: Option<Decimal>,
    interest_income: Option<Decimal>,
    dividend_income: Option<Decimal>,
    capital_gains: Option<Decimal>,
    other_income: Option<Decimal>,
    tax_withheld: Option<Decimal>,
    cpp_contributions: Option<Decimal>,
    ei_premiums: Option<Decimal>,
    rrsp_deduction: Option<Decimal>,
    fhsa_deduction: Option<Decimal>,
    childcare_expenses: Option<Decimal>,
    moving_expenses: Option<Decimal>,
    union_dues: Option<Decimal>,
    donations: Option<Decimal>,
    medical_expenses: Option<Decimal>,
    tuition_amount: Option<Decimal>,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading tax inputs from CSV.
#[derive(Debug, thiserror::Error)]
pub enum InputLoadError {
    /// The file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The CSV is structurally invalid or a cell has the wrong type.
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// `row` is 1-based; the header is row 0.
    #[error("unknown province or territory '{value}' on row {row}")]
    UnknownProvince { value: String, row: usize },

    #[error("unsupported tax year {year} on row {row}")]
    UnsupportedYear { year: i32, row: usize },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<TaxInput, InputLoadError> {
    let province: ProvinceCode = row
        .province
        .parse()
        .map_err(|_| InputLoadError::UnknownProvince {
            value: row.province.clone(),
            row: row_number,
        })?;

    let tax_year = match row.tax_year {
        Some(year) => TaxYear::try_from(year).map_err(|_| InputLoadError::UnsupportedYear {
            year,
            row: row_number,
        })?,
        None => TaxYear::LATEST,
    };

    let amount = |value: Option<Decimal>| value.unwrap_or(Decimal::ZERO);

    Ok(TaxInput {
        province,
        tax_year,
        employment_income: amount(row.employment_income),
        self_employment_income: amount(row.self_employment_income),
        rental_income: amount(row.rental_income),
        interest_income: amount(row.interest_income),
        dividend_income: amount(row.dividend_income),
        capital_gains: amount(row.capital_gains),
        other_income: amount(row.other_income),
        tax_withheld: amount(row.tax_withheld),
        cpp_contributions: amount(row.cpp_contributions),
        ei_premiums: amount(row.ei_premiums),
        rrsp_deduction: amount(row.rrsp_deduction),
        fhsa_deduction: amount(row.fhsa_deduction),
        childcare_expenses: amount(row.childcare_expenses),
        moving_expenses: amount(row.moving_expenses),
        union_dues: amount(row.union_dues),
        donations: amount(row.donations),
        medical_expenses: amount(row.medical_expenses),
        tuition_amount: amount(row.tuition_amount),
    })
}

/// Parses CSV from any reader. Rows are returned in file order.
///
/// # Errors
///
/// * [`InputLoadError::Parse`] if the CSV is structurally invalid or a
///   cell cannot be deserialised.
/// * [`InputLoadError::UnknownProvince`] or
///   [`InputLoadError::UnsupportedYear`] for the first row that names one.
pub fn load_from_reader<R: Read>(reader: R) -> Result<Vec<TaxInput>, InputLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(reader);

    let inputs = reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect::<Result<Vec<_>, _>>()?;

    debug!(rows = inputs.len(), "loaded tax inputs");

    Ok(inputs)
}

/// Parses CSV text.
pub fn load_from_str(input: &str) -> Result<Vec<TaxInput>, InputLoadError> {
    load_from_reader(input.as_bytes())
}

/// Reads a CSV file from disk and delegates to [`load_from_str`].
pub fn load_from_file(path: &Path) -> Result<Vec<TaxInput>, InputLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| InputLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    load_from_str(&contents)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    const MINIMAL_CSV: &str = "\
province,employment_income
ON,75000.00
";

    const MULTI_ROW_CSV: &str = "\
province,tax_year,employment_income,tax_withheld,rrsp_deduction
ON,2025,75000.00,15000.00,
qc,2024,60000.00,,5000.00
 BC ,2025,,,
";

    // -----------------------------------------------------------------------
    // Happy path
    // -----------------------------------------------------------------------

    #[test]
    fn minimal_columns_load_with_defaults() {
        let inputs = load_from_str(MINIMAL_CSV).unwrap();

        assert_eq!(inputs.len(), 1);
        assert_eq!(
            inputs[0],
            TaxInput {
                employment_income: dec!(75000.00),
                ..TaxInput::new(ProvinceCode::Ontario)
            }
        );
    }

    #[test]
    fn rows_are_returned_in_file_order() {
        let inputs = load_from_str(MULTI_ROW_CSV).unwrap();

        let provinces: Vec<_> = inputs.iter().map(|i| i.province).collect();
        assert_eq!(
            provinces,
            vec![
                ProvinceCode::Ontario,
                ProvinceCode::Quebec,
                ProvinceCode::BritishColumbia,
            ]
        );
    }

    #[test]
    fn empty_cells_are_zero() {
        let inputs = load_from_str(MULTI_ROW_CSV).unwrap();

        assert_eq!(inputs[0].rrsp_deduction, dec!(0));
        assert_eq!(inputs[1].tax_withheld, dec!(0));
        assert_eq!(inputs[2].employment_income, dec!(0));
    }

    #[test]
    fn tax_year_column_is_honoured() {
        let inputs = load_from_str(MULTI_ROW_CSV).unwrap();

        assert_eq!(inputs[0].tax_year, TaxYear::Y2025);
        assert_eq!(inputs[1].tax_year, TaxYear::Y2024);
    }

    #[test]
    fn header_only_yields_no_rows() {
        let inputs = load_from_str("province,employment_income\n").unwrap();

        assert!(inputs.is_empty());
    }

    // -----------------------------------------------------------------------
    // Errors
    // -----------------------------------------------------------------------

    #[test]
    fn unknown_province_reports_row() {
        let csv = "province,employment_income\nON,1000\nXX,2000\n";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            InputLoadError::UnknownProvince { ref value, row: 2 } if value == "XX"
        ));
    }

    #[test]
    fn unsupported_year_reports_row() {
        let csv = "province,tax_year\nON,2019\n";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(
            err,
            InputLoadError::UnsupportedYear { year: 2019, row: 1 }
        ));
    }

    #[test]
    fn missing_province_column_is_a_parse_error() {
        let csv = "employment_income\n1000\n";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, InputLoadError::Parse(_)));
    }

    #[test]
    fn non_numeric_amount_is_a_parse_error() {
        let csv = "province,employment_income\nON,lots\n";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, InputLoadError::Parse(_)));
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let csv = "province,employment_income\nON,1000,extra\n";

        let err = load_from_str(csv).unwrap_err();

        assert!(matches!(err, InputLoadError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_from_file(Path::new("/nonexistent/inputs.csv")).unwrap_err();

        assert!(matches!(err, InputLoadError::Io { .. }));
    }
}
