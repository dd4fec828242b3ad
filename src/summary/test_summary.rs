//! Summary counts derived from a report

use nrtest_report::TestReport;
use serde::Serialize;

/// Schema version for the JSON summary
pub const SUMMARY_SCHEMA_VERSION: u32 = 1;

/// Schema identifier for the JSON summary
pub const SUMMARY_SCHEMA_ID: &str = "nrtest-summary/summary@1";

/// Pass/fail counts for one report
///
/// `passed + failed == total` always holds; the value is computed once and
/// never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    schema_version: u32,
    schema_id: &'static str,

    #[serde(rename = "passed_tests")]
    passed: usize,

    #[serde(rename = "failed_tests")]
    failed: usize,

    #[serde(rename = "total_tests")]
    total: usize,

    all_tests_passed: bool,

    /// Failing case names; unnamed entries are shown as `#<index>`
    failed_cases: Vec<String>,
}

impl Summary {
    /// Count the outcomes in a report
    pub fn from_report(report: &TestReport) -> Self {
        let total = report.len();

        let failed_cases: Vec<String> = report
            .failures()
            .map(|(i, t)| t.name.clone().unwrap_or_else(|| format!("#{}", i)))
            .collect();

        let failed = failed_cases.len();
        let passed = total - failed;

        Self {
            schema_version: SUMMARY_SCHEMA_VERSION,
            schema_id: SUMMARY_SCHEMA_ID,
            passed,
            failed,
            total,
            all_tests_passed: failed == 0,
            failed_cases,
        }
    }

    pub fn passed(&self) -> usize {
        self.passed
    }

    pub fn failed(&self) -> usize {
        self.failed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// True iff no test failed (an empty report counts as all passed)
    pub fn all_passed(&self) -> bool {
        self.all_tests_passed
    }

    pub fn failed_cases(&self) -> &[String] {
        &self.failed_cases
    }

    /// Render as `key=value` lines for CI output variables
    ///
    /// Booleans are spelled `True`/`False`, which is what existing workflow
    /// conditions compare against.
    pub fn to_key_value(&self) -> String {
        format!(
            "passed_tests={}\nfailed_tests={}\ntotal_tests={}\nall_tests_passed={}\n",
            self.passed,
            self.failed,
            self.total,
            if self.all_tests_passed { "True" } else { "False" },
        )
    }

    /// Serialize to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Human-readable report
    pub fn to_human(&self) -> String {
        let mut out = String::new();

        if self.all_tests_passed {
            out.push_str(&format!("All {} tests passed\n", self.total));
        } else {
            out.push_str(&format!(
                "{} of {} tests failed ({} passed)\n",
                self.failed, self.total, self.passed
            ));
            out.push_str("\nFailed tests:\n");
            for name in &self.failed_cases {
                out.push_str(&format!("  - {}\n", name));
            }
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nrtest_report::ReportSchema;

    fn summary_of(json: &str) -> Summary {
        let report = TestReport::parse(json, &ReportSchema::default()).unwrap();
        Summary::from_report(&report)
    }

    #[test]
    fn test_mixed_report() {
        let summary =
            summary_of(r#"{"Tests": [{"passed": true}, {"passed": false}, {"passed": true}]}"#);
        assert_eq!(summary.passed(), 2);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.total(), 3);
        assert!(!summary.all_passed());
        assert_eq!(
            summary.to_key_value(),
            "passed_tests=2\nfailed_tests=1\ntotal_tests=3\nall_tests_passed=False\n"
        );
    }

    #[test]
    fn test_empty_report_counts_as_passed() {
        let summary = summary_of(r#"{"Tests": []}"#);
        assert_eq!(summary.total(), 0);
        assert!(summary.all_passed());
        assert_eq!(
            summary.to_key_value(),
            "passed_tests=0\nfailed_tests=0\ntotal_tests=0\nall_tests_passed=True\n"
        );
    }

    #[test]
    fn test_counts_always_add_up() {
        for n in 0..12usize {
            let entries: Vec<String> = (0..n)
                .map(|i| format!(r#"{{"passed": {}}}"#, i % 3 != 0))
                .collect();
            let summary = summary_of(&format!(r#"{{"Tests": [{}]}}"#, entries.join(",")));

            let expected_passed = (0..n).filter(|i| i % 3 != 0).count();
            assert_eq!(summary.total(), n);
            assert_eq!(summary.passed(), expected_passed);
            assert_eq!(summary.passed() + summary.failed(), summary.total());
            assert_eq!(summary.all_passed(), summary.failed() == 0);
        }
    }

    #[test]
    fn test_failed_case_names() {
        let summary = summary_of(
            r#"{"Tests": [
                {"name": "swmm-example1", "passed": false},
                {"name": "swmm-example2", "passed": true},
                {"passed": false}
            ]}"#,
        );
        assert_eq!(summary.failed_cases(), &["swmm-example1".to_string(), "#2".to_string()]);

        let human = summary.to_human();
        assert!(human.starts_with("2 of 3 tests failed (1 passed)"));
        assert!(human.contains("  - swmm-example1\n"));
        assert!(human.contains("  - #2\n"));
    }

    #[test]
    fn test_json_uses_output_variable_names() {
        let summary = summary_of(r#"{"Tests": [{"passed": true}]}"#);
        let value: serde_json::Value = serde_json::from_str(&summary.to_json().unwrap()).unwrap();

        assert_eq!(value["schema_id"], SUMMARY_SCHEMA_ID);
        assert_eq!(value["passed_tests"], 1);
        assert_eq!(value["failed_tests"], 0);
        assert_eq!(value["total_tests"], 1);
        assert_eq!(value["all_tests_passed"], true);
        assert_eq!(value["failed_cases"], serde_json::json!([]));
    }

    #[test]
    fn test_human_all_passed() {
        let summary = summary_of(r#"{"Tests": [{"passed": true}, {"passed": true}]}"#);
        assert_eq!(summary.to_human(), "All 2 tests passed\n");
    }
}
