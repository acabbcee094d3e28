//! Validation of taxpayer identifiers.

pub mod sin;

pub use sin::{format_sin, is_sin_format, mask_sin, validate_sin};
