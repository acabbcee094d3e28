use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, ValueEnum};
use rust_decimal::Decimal;
use tax_core::{ProvinceCode, TaxInput, TaxYear, calculate_tax};
use tax_data::{fill_payroll_estimates, load_from_file, write_csv, write_text};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Canadian personal income tax calculator.
///
/// Calculates one return from the amount flags, or a batch of returns from
/// a CSV file, and prints the result.
#[derive(Debug, Parser)]
#[command(name = "tax-calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Tax year (2024 or 2025). Ignored with --file, where each row carries
    /// its own year.
    #[arg(long, default_value = "2025")]
    year: TaxYear,

    /// Two-letter province or territory code. Ignored with --file.
    #[arg(long, default_value = "ON")]
    province: ProvinceCode,

    /// CSV file of returns to calculate, one per row.
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Estimate CPP contributions and EI premiums from employment income
    /// when they are not given.
    #[arg(long, default_value_t = false)]
    estimate_payroll: bool,

    #[command(flatten)]
    amounts: Amounts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Csv,
}

/// Amounts for a single return.
#[derive(Debug, Args)]
struct Amounts {
    #[arg(long, default_value = "0")]
    employment_income: Decimal,
    #[arg(long, default_value = "0")]
    self_employment_income: Decimal,
    #[arg(long, default_value = "0")]
    rental_income: Decimal,
    #[arg(long, default_value = "0")]
    interest_income: Decimal,
    /// Cash amount of eligible dividends.
    #[arg(long, default_value = "0")]
    dividend_income: Decimal,
    #[arg(long, default_value = "0")]
    capital_gains: Decimal,
    #[arg(long, default_value = "0")]
    other_income: Decimal,
    #[arg(long, default_value = "0")]
    tax_withheld: Decimal,
    #[arg(long, default_value = "0")]
    cpp_contributions: Decimal,
    #[arg(long, default_value = "0")]
    ei_premiums: Decimal,
    #[arg(long, default_value = "0")]
    rrsp_deduction: Decimal,
    #[arg(long, default_value = "0")]
    fhsa_deduction: Decimal,
    #[arg(long, default_value = "0")]
    childcare_expenses: Decimal,
    #[arg(long, default_value = "0")]
    moving_expenses: Decimal,
    #[arg(long, default_value = "0")]
    union_dues: Decimal,
    #[arg(long, default_value = "0")]
    donations: Decimal,
    #[arg(long, default_value = "0")]
    medical_expenses: Decimal,
    #[arg(long, default_value = "0")]
    tuition_amount: Decimal,
}

impl Amounts {
    fn into_input(
        self,
        province: ProvinceCode,
        tax_year: TaxYear,
    ) -> TaxInput {
        TaxInput {
            province,
            tax_year,
            employment_income: self.employment_income,
            self_employment_income: self.self_employment_income,
            rental_income: self.rental_income,
            interest_income: self.interest_income,
            dividend_income: self.dividend_income,
            capital_gains: self.capital_gains,
            other_income: self.other_income,
            tax_withheld: self.tax_withheld,
            cpp_contributions: self.cpp_contributions,
            ei_premiums: self.ei_premiums,
            rrsp_deduction: self.rrsp_deduction,
            fhsa_deduction: self.fhsa_deduction,
            childcare_expenses: self.childcare_expenses,
            moving_expenses: self.moving_expenses,
            union_dues: self.union_dues,
            donations: self.donations,
            medical_expenses: self.medical_expenses,
            tuition_amount: self.tuition_amount,
        }
    }
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set, falling back to `info`.
/// * Writes to stderr so CSV output on stdout stays clean.
/// * Strips timestamps and target names.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let Cli {
        year,
        province,
        file,
        format,
        estimate_payroll,
        amounts,
    } = Cli::parse();

    let inputs = match &file {
        Some(path) => {
            debug!("loading returns from {}", path.display());
            load_from_file(path)
                .with_context(|| format!("Failed to load returns from: {}", path.display()))?
        }
        None => vec![amounts.into_input(province, year)],
    };

    let returns: Vec<_> = inputs
        .into_iter()
        .map(|input| {
            let input = if estimate_payroll {
                fill_payroll_estimates(input)
            } else {
                input
            };
            let result = calculate_tax(&input);
            (input, result)
        })
        .collect();

    info!(returns = returns.len(), "calculation complete");

    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => {
            for (i, (input, result)) in returns.iter().enumerate() {
                if i > 0 {
                    writeln!(out)?;
                }
                write_text(&mut out, input, result).context("Failed to write report")?;
            }
        }
        OutputFormat::Csv => {
            write_csv(&mut out, &returns).context("Failed to write CSV")?;
        }
    }

    Ok(())
}
