//! Per-test outcome records

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Terminal outcome of one test case execution.
///
/// Exactly one result is produced per test case. A result is passed only if
/// the status matched and every JSON rule held; otherwise `error` carries
/// the cause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Name of the test case.
    pub name: String,
    /// Whether the test passed.
    pub passed: bool,
    /// Observed status code, if a response was received.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    /// Failure cause.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Time from the start of execution until success. Zero for failures.
    #[serde(with = "duration_millis")]
    pub duration: Duration,
}

impl TestResult {
    /// Creates a passed result.
    #[must_use]
    pub fn passed(name: impl Into<String>, status_code: u16, duration: Duration) -> Self {
        Self {
            name: name.into(),
            passed: true,
            status_code: Some(status_code),
            error: None,
            duration,
        }
    }

    /// Creates a failed result for a test that never got a response.
    #[must_use]
    pub fn failed(name: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed: false,
            status_code: None,
            error: Some(error.into()),
            duration: Duration::ZERO,
        }
    }

    /// Creates a failed result for a test that got a response.
    #[must_use]
    pub fn failed_with_status(
        name: impl Into<String>,
        status_code: u16,
        error: impl Into<String>,
    ) -> Self {
        Self {
            status_code: Some(status_code),
            ..Self::failed(name, error)
        }
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    #[allow(clippy::cast_possible_truncation)]
    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_millis() as u64)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}
