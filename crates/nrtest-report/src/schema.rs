//! Field names used to read a report

use serde::{Deserialize, Serialize};

/// Default top-level collection field
pub const DEFAULT_COLLECTION_FIELD: &str = "Tests";

/// Default per-entry success field
pub const DEFAULT_PASSED_FIELD: &str = "passed";

/// Where to find the test outcomes inside a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSchema {
    /// Top-level field holding the array of test entries
    #[serde(default = "default_collection_field")]
    pub collection_field: String,

    /// Boolean field on each entry
    #[serde(default = "default_passed_field")]
    pub passed_field: String,
}

fn default_collection_field() -> String {
    DEFAULT_COLLECTION_FIELD.to_string()
}

fn default_passed_field() -> String {
    DEFAULT_PASSED_FIELD.to_string()
}

impl Default for ReportSchema {
    fn default() -> Self {
        Self {
            collection_field: default_collection_field(),
            passed_field: default_passed_field(),
        }
    }
}
