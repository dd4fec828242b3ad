//! Top-level error type for the summarizer

use nrtest_report::{ErrorClass, ReportError};

use crate::config::ConfigError;
use crate::summary::ExitCode;

/// Any failure that prevents a summary from being printed
#[derive(Debug, thiserror::Error)]
pub enum SummaryError {
    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to serialize summary: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Failed to write summary: {0}")]
    Output(#[from] std::io::Error),
}

impl SummaryError {
    /// Stable exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            SummaryError::Report(e) => ExitCode::from(e.class()),
            SummaryError::Config(e) => ExitCode::from(e.class()),
            SummaryError::Render(_) => ExitCode::Format,
            SummaryError::Output(_) => ExitCode::Io,
        }
    }
}

impl From<ErrorClass> for ExitCode {
    fn from(class: ErrorClass) -> Self {
        match class {
            ErrorClass::Io => ExitCode::Io,
            ErrorClass::Format => ExitCode::Format,
            ErrorClass::Schema => ExitCode::Schema,
        }
    }
}
