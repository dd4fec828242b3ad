//! Summarizer configuration
//!
//! Layers, lowest to highest precedence:
//! 1. Built-in defaults (`Tests` / `passed`, never fail on test failures)
//! 2. Optional TOML file passed with `--config`
//! 3. CLI flags
//!
//! ```toml
//! collection_field = "Tests"
//! passed_field = "passed"
//! fail_on_test_failure = false
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use nrtest_report::{ErrorClass, ReportSchema};
use serde::{Deserialize, Serialize};

use crate::summary::{ExitCode, Summary};

/// Effective summarizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryConfig {
    /// Field names used to read the report
    #[serde(flatten)]
    pub schema: ReportSchema,

    /// Exit non-zero when the report contains failed tests
    pub fail_on_test_failure: bool,
}

/// On-disk layout of the config file; unknown keys are rejected
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    collection_field: Option<String>,
    passed_field: Option<String>,
    fail_on_test_failure: Option<bool>,
}

impl From<ConfigFile> for SummaryConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = ReportSchema::default();
        Self {
            schema: ReportSchema {
                collection_field: file.collection_field.unwrap_or(defaults.collection_field),
                passed_field: file.passed_field.unwrap_or(defaults.passed_field),
            },
            fail_on_test_failure: file.fail_on_test_failure.unwrap_or(false),
        }
    }
}

/// Values supplied on the command line; `None` leaves the lower layer in place
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub collection_field: Option<String>,
    pub passed_field: Option<String>,
    pub fail_on_test_failure: Option<bool>,
}

/// Errors that can occur when loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read config file: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn class(&self) -> ErrorClass {
        match self {
            ConfigError::NotFound(_) | ConfigError::Io(_) => ErrorClass::Io,
            ConfigError::Parse(_) => ErrorClass::Format,
            ConfigError::InvalidValue { .. } => ErrorClass::Schema,
        }
    }
}

impl SummaryConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ConfigError::NotFound(path.to_path_buf())
            } else {
                ConfigError::Io(e)
            }
        })?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let config = SummaryConfig::from(file);
        config.validate()?;
        Ok(config)
    }

    /// Build the effective config from an optional file plus CLI overrides
    pub fn build(path: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => {
                tracing::debug!(path = %p.display(), "loading config file");
                Self::from_file(p)?
            }
            None => Self::default(),
        };

        if let Some(ref field) = overrides.collection_field {
            config.schema.collection_field = field.clone();
        }
        if let Some(ref field) = overrides.passed_field {
            config.schema.passed_field = field.clone();
        }
        if let Some(fail) = overrides.fail_on_test_failure {
            config.fail_on_test_failure = fail;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("collection_field", &self.schema.collection_field),
            ("passed_field", &self.schema.passed_field),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: field.to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Exit code for a successfully printed summary
    pub fn exit_code_for(&self, summary: &Summary) -> ExitCode {
        if self.fail_on_test_failure && !summary.all_passed() {
            ExitCode::TestsFailed
        } else {
            ExitCode::Success
        }
    }
}
