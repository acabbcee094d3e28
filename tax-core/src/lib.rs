//! Canadian personal income tax engine.
//!
//! Given a [`TaxInput`], [`calculate_tax`] produces a [`TaxResult`]: federal
//! tax, provincial or territorial tax, the Ontario Health Premium, and the
//! resulting refund or balance owing. Legislated parameters for each
//! supported [`TaxYear`] live in [`config`].

pub mod calculations;
pub mod config;
pub mod models;
pub mod validators;

pub use calculations::{calculate_tax, calculate_tax_with_config};
pub use models::*;
