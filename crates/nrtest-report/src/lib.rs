//! nrtest report types
//!
//! Loads the JSON report written by the nrtest regression runner and
//! exposes the per-test pass/fail outcomes.

pub mod error;
pub mod report;
pub mod schema;

pub use error::{ErrorClass, ReportError};
pub use report::{TestCaseResult, TestReport};
pub use schema::{ReportSchema, DEFAULT_COLLECTION_FIELD, DEFAULT_PASSED_FIELD};
