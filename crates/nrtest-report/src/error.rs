//! Report loading errors

use std::path::PathBuf;

/// Category of a report failure, used to pick an exit code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// File missing or unreadable
    Io,
    /// Content is not valid JSON
    Format,
    /// JSON is valid but does not have the expected shape
    Schema,
}

/// Errors that can occur when loading a report
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Report file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read report file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse report JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Report is missing required field '{0}'")]
    MissingField(String),

    #[error("Report field '{0}' is not an array")]
    NotACollection(String),

    #[error("Test entry {index}: invalid field '{field}': {reason}")]
    InvalidField {
        index: usize,
        field: String,
        reason: String,
    },
}

impl ReportError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ReportError::NotFound(_) | ReportError::Io { .. } => ErrorClass::Io,
            ReportError::Parse(_) => ErrorClass::Format,
            ReportError::MissingField(_)
            | ReportError::NotACollection(_)
            | ReportError::InvalidField { .. } => ErrorClass::Schema,
        }
    }
}
