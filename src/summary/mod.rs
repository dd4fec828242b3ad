//! Pass/fail summary of an nrtest report
//!
//! The default output is four `key=value` lines for CI output variables:
//!
//! ```text
//! passed_tests=2
//! failed_tests=1
//! total_tests=3
//! all_tests_passed=False
//! ```

mod failure;
mod format;
mod test_summary;

use std::path::Path;

use nrtest_report::{ReportError, TestReport};

use crate::config::SummaryConfig;

pub use failure::ExitCode;
pub use format::OutputFormat;
pub use test_summary::{Summary, SUMMARY_SCHEMA_ID, SUMMARY_SCHEMA_VERSION};

/// Load the report at `path` and summarize it
pub fn summarize_file(path: &Path, config: &SummaryConfig) -> Result<Summary, ReportError> {
    tracing::debug!(
        path = %path.display(),
        collection_field = %config.schema.collection_field,
        "loading report"
    );

    let report = TestReport::load(path, &config.schema)?;
    let summary = Summary::from_report(&report);

    tracing::info!(
        total = summary.total(),
        passed = summary.passed(),
        failed = summary.failed(),
        "summarized report"
    );
    if report.is_empty() {
        tracing::warn!(path = %path.display(), "report contains no tests");
    }

    Ok(summary)
}
