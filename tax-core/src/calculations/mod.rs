//! Tax calculations for a Canadian personal income tax return.
//!
//! Each stage of the return is its own module and can be used on its own;
//! [`calculate_tax`] runs them all in order.

pub mod common;

mod bracket;
mod credits;
mod federal;
mod health_premium;
mod payroll;
mod provincial;
mod tax_return;

pub use bracket::calculate_bracketed_tax;
pub use credits::{calculate_adjusted_bpa, calculate_donation_credit, calculate_medical_credit};
pub use federal::{FederalTaxResult, apply_quebec_abatement, calculate_federal_tax};
pub use health_premium::calculate_health_premium;
pub use payroll::{
    PayrollEstimate, estimate_cpp2_contribution, estimate_cpp_contribution, estimate_ei_premium,
    estimate_payroll,
};
pub use provincial::{ProvincialTaxResult, calculate_provincial_tax, calculate_surtax};
pub use tax_return::{TaxBreakdown, calculate_tax, calculate_tax_breakdown, calculate_tax_with_config};
