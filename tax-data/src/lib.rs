//! Input and output around the tax engine: loading returns from CSV,
//! formatting amounts, and writing results.

pub mod format;
pub mod loader;
pub mod report;
pub mod slips;

pub use format::format_cad;
pub use loader::{InputLoadError, load_from_file, load_from_reader, load_from_str};
pub use report::{write_csv, write_text};
pub use slips::fill_payroll_estimates;
