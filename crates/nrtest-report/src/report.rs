//! nrtest report model and loader
//!
//! The report is a JSON object with a collection of test entries:
//!
//! ```json
//! { "Tests": [ { "name": "example1", "passed": true }, ... ] }
//! ```
//!
//! Only the success flag is interpreted. The entry name is kept when it is a
//! string so failing cases can be listed; every other field is ignored.

use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::error::ReportError;
use crate::schema::ReportSchema;

/// One test case outcome from the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCaseResult {
    /// Test name, if the entry carries one
    pub name: Option<String>,

    /// Whether the test passed
    pub passed: bool,
}

/// A loaded test-run report, in report order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestReport {
    pub tests: Vec<TestCaseResult>,
}

impl TestReport {
    /// Load a report from a file
    pub fn load(path: &Path, schema: &ReportSchema) -> Result<Self, ReportError> {
        let bytes = fs::read(path).map_err(|e| {
            if e.kind() == io::ErrorKind::NotFound {
                ReportError::NotFound(path.to_path_buf())
            } else {
                ReportError::Io {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse_slice(&bytes, schema)
    }

    /// Parse a report from a JSON string
    pub fn parse(content: &str, schema: &ReportSchema) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_str(content)?;
        Self::from_value(&value, schema)
    }

    /// Parse a report from raw bytes; invalid UTF-8 is a parse error
    pub fn parse_slice(bytes: &[u8], schema: &ReportSchema) -> Result<Self, ReportError> {
        let value: Value = serde_json::from_slice(bytes)?;
        Self::from_value(&value, schema)
    }

    /// Build a report from an already-parsed JSON document
    pub fn from_value(value: &Value, schema: &ReportSchema) -> Result<Self, ReportError> {
        let entries = value
            .get(&schema.collection_field)
            .ok_or_else(|| ReportError::MissingField(schema.collection_field.clone()))?
            .as_array()
            .ok_or_else(|| ReportError::NotACollection(schema.collection_field.clone()))?;

        let tests = entries
            .iter()
            .enumerate()
            .map(|(index, entry)| parse_entry(index, entry, &schema.passed_field))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tests })
    }

    /// Number of entries in the report
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Entries that did not pass with their report index, in report order
    pub fn failures(&self) -> impl Iterator<Item = (usize, &TestCaseResult)> {
        self.tests.iter().enumerate().filter(|(_, t)| !t.passed)
    }
}

fn parse_entry(
    index: usize,
    entry: &Value,
    passed_field: &str,
) -> Result<TestCaseResult, ReportError> {
    let obj = entry.as_object().ok_or_else(|| ReportError::InvalidField {
        index,
        field: passed_field.to_string(),
        reason: "entry is not an object".to_string(),
    })?;

    let passed = match obj.get(passed_field) {
        Some(Value::Bool(b)) => *b,
        Some(other) => {
            return Err(ReportError::InvalidField {
                index,
                field: passed_field.to_string(),
                reason: format!("expected a boolean, found {}", json_type_name(other)),
            })
        }
        None => {
            return Err(ReportError::InvalidField {
                index,
                field: passed_field.to_string(),
                reason: "field is missing".to_string(),
            })
        }
    };

    let name = obj.get("name").and_then(Value::as_str).map(str::to_string);

    Ok(TestCaseResult { name, passed })
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
