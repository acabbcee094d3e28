//! Writers for calculated returns.

use std::io::Write;

use rust_decimal::Decimal;
use serde::Serialize;
use tax_core::{TaxInput, TaxResult};

use crate::format::format_cad;

/// One line of CSV output. Amounts are written as plain decimals.
#[derive(Debug, Serialize)]
struct ResultRow {
    province: &'static str,
    tax_year: i32,
    total_income: Decimal,
    total_deductions: Decimal,
    taxable_income: Decimal,
    federal_tax: Decimal,
    provincial_tax: Decimal,
    health_premium: Decimal,
    total_tax: Decimal,
    total_withheld: Decimal,
    refund_or_owing: Decimal,
    is_refund: bool,
}

impl ResultRow {
    fn new(
        input: &TaxInput,
        result: &TaxResult,
    ) -> Self {
        Self {
            province: input.province.as_str(),
            tax_year: input.tax_year.year(),
            total_income: result.total_income,
            total_deductions: result.total_deductions,
            taxable_income: result.taxable_income,
            federal_tax: result.federal_tax,
            provincial_tax: result.provincial_tax,
            health_premium: result.health_premium,
            total_tax: result.total_tax,
            total_withheld: result.total_withheld,
            refund_or_owing: result.refund_or_owing,
            is_refund: result.is_refund,
        }
    }
}

/// Writes every return as a CSV row, with a header.
pub fn write_csv<W: Write>(
    writer: W,
    returns: &[(TaxInput, TaxResult)],
) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_writer(writer);
    for (input, result) in returns {
        writer.serialize(ResultRow::new(input, result))?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes a human-readable summary of one return.
pub fn write_text<W: Write>(
    mut writer: W,
    input: &TaxInput,
    result: &TaxResult,
) -> std::io::Result<()> {
    writeln!(writer, "{} ({}), {}", result.province_name, input.province, input.tax_year)?;

    let lines = [
        ("Total income", result.total_income),
        ("Total deductions", result.total_deductions),
        ("Taxable income", result.taxable_income),
        ("Federal tax", result.federal_tax),
        ("Provincial tax", result.provincial_tax),
        ("Health premium", result.health_premium),
        ("Total tax", result.total_tax),
        ("Tax withheld", result.total_withheld),
    ];
    for (label, amount) in lines {
        writeln!(writer, "  {label:<18}{:>16}", format_cad(amount, true))?;
    }

    let (label, balance) = if result.is_refund {
        ("Refund", result.refund_or_owing)
    } else {
        ("Balance owing", -result.refund_or_owing)
    };
    writeln!(writer, "  {label:<18}{:>16}", format_cad(balance, true))?;

    Ok(())
}
