//! nrtest-summary - CI summary for nrtest reports
//!
//! Reads the JSON report written by the nrtest regression runner, counts
//! passed and failed test cases, and renders the counts as `key=value`
//! lines for a CI system's output variables.

pub mod config;
pub mod error;
pub mod summary;

pub use config::{ConfigError, SummaryConfig};
pub use error::SummaryError;
pub use nrtest_report::{ReportError, ReportSchema, TestCaseResult, TestReport};
pub use summary::{summarize_file, ExitCode, OutputFormat, Summary};
