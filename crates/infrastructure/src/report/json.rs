//! JSON report

use chrono::{DateTime, Utc};
use probe_domain::TestResult;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

/// Error type for report rendering.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// One test in the JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestReport {
    /// Test name.
    pub name: String,
    /// Whether it passed.
    pub passed: bool,
    /// Observed status code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Failure cause.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Human-readable duration (e.g. `12.5ms`).
    pub duration: String,
}

/// The whole JSON report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuiteReport {
    /// Number of results.
    pub total_tests: usize,
    /// Results without an error.
    pub passed_tests: usize,
    /// Results with an error.
    pub failed_tests: usize,
    /// Per-test entries in completion order.
    pub results: Vec<TestReport>,
    /// When the report was produced.
    pub timestamp: DateTime<Utc>,
}

/// Formats results as a JSON document.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter;

impl JsonFormatter {
    /// Creates a new JSON formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the report structure.
    #[must_use]
    pub fn format(&self, results: &[TestResult], timestamp: DateTime<Utc>) -> SuiteReport {
        let entries: Vec<_> = results
            .iter()
            .map(|r| TestReport {
                name: r.name.clone(),
                passed: r.passed,
                status_code: r.status_code,
                error: r.error.clone(),
                duration: format!("{:?}", r.duration),
            })
            .collect();
        let failed = entries.iter().filter(|e| e.error.is_some()).count();

        SuiteReport {
            total_tests: entries.len(),
            passed_tests: entries.len() - failed,
            failed_tests: failed,
            results: entries,
            timestamp,
        }
    }

    /// Renders the report as 2-space indented JSON with a trailing newline.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render(&self, results: &[TestResult], timestamp: DateTime<Utc>) -> Result<String, ReportError> {
        let report = self.format(results, timestamp);

        let mut buffer = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"  ");
        let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
        report.serialize(&mut serializer)?;

        let mut json = String::from_utf8(buffer)?;
        json.push('\n');
        Ok(json)
    }
}
