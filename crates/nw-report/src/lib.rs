//! # nw-report
//!
//! Writes a run's records to disk: one delimited file for spreadsheets and
//! one pretty-printed JSON array, both named after the run's start time.

mod delimited;
mod error;
mod writer;

pub use delimited::{FIELDS, render_delimited};
pub use error::ReportError;
pub use writer::{ReportPaths, report_stem, write_report};
