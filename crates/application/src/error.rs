//! Execution error types

use thiserror::Error;

use crate::assertion::AssertionError;
use crate::ports::HttpClientError;
use crate::variable_resolver::SubstitutionError;

/// Why a single test failed.
///
/// Never escapes the executor: it is rendered into the test's result.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ExecutionError {
    /// A path or header placeholder could not be resolved.
    #[error(transparent)]
    Substitution(#[from] SubstitutionError),

    /// The request body could not be serialized.
    #[error("failed to serialize body: {0}")]
    BodySerialization(String),

    /// The request could not be constructed.
    #[error("{0}")]
    RequestConstruction(String),

    /// The request was sent but no response arrived.
    #[error(transparent)]
    Transport(HttpClientError),

    /// The response body could not be read.
    #[error("{0}")]
    BodyRead(String),

    /// The response status differs from the expected one.
    #[error("expected {expected}, got {actual}")]
    StatusMismatch {
        /// Expected status.
        expected: u16,
        /// Observed status.
        actual: u16,
    },

    /// A JSON assertion failed.
    #[error("{source}")]
    Assertion {
        /// Observed status.
        status: u16,
        /// The failing assertion.
        source: AssertionError,
    },
}

impl ExecutionError {
    /// The observed status code, for failures that happened after a response.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::StatusMismatch { actual, .. } => Some(*actual),
            Self::Assertion { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<HttpClientError> for ExecutionError {
    fn from(error: HttpClientError) -> Self {
        match error {
            HttpClientError::InvalidRequest(msg) => Self::RequestConstruction(msg),
            HttpClientError::BodyRead(msg) => Self::BodyRead(msg),
            other => Self::Transport(other),
        }
    }
}

/// Suite-level failures. Per-test failures never surface here.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RunError {
    /// The suite environment has no `base_url`.
    #[error("base_url not defined in env")]
    MissingBaseUrl,

    /// The permit pool was closed while tests were being dispatched.
    #[error("concurrency permit pool closed")]
    PermitPoolClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_only_after_response() {
        assert_eq!(
            ExecutionError::StatusMismatch {
                expected: 200,
                actual: 404
            }
            .status_code(),
            Some(404)
        );
        assert_eq!(
            ExecutionError::Assertion {
                status: 200,
                source: AssertionError::InvalidJson
            }
            .status_code(),
            Some(200)
        );
        assert_eq!(
            ExecutionError::Transport(HttpClientError::Timeout { timeout_ms: 10_000 })
                .status_code(),
            None
        );
    }

    #[test]
    fn test_client_error_mapping() {
        assert_eq!(
            ExecutionError::from(HttpClientError::InvalidRequest("bad header".into())),
            ExecutionError::RequestConstruction("bad header".into())
        );
        assert_eq!(
            ExecutionError::from(HttpClientError::BodyRead("eof".into())),
            ExecutionError::BodyRead("eof".into())
        );
        assert!(matches!(
            ExecutionError::from(HttpClientError::ConnectionFailed("refused".into())),
            ExecutionError::Transport(_)
        ));
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            ExecutionError::StatusMismatch {
                expected: 200,
                actual: 500
            }
            .to_string(),
            "expected 200, got 500"
        );
        assert_eq!(RunError::MissingBaseUrl.to_string(), "base_url not defined in env");
    }
}
