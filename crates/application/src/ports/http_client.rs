//! HTTP Client port

use std::future::Future;

use probe_domain::{HttpMethod, HttpResponse};
use thiserror::Error;
use url::Url;

/// A fully resolved request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    /// HTTP method.
    pub method: HttpMethod,
    /// Absolute URL (`base_url` + resolved path).
    pub url: Url,
    /// Header name and resolved value pairs.
    pub headers: Vec<(String, String)>,
    /// Serialized JSON body.
    pub body: Option<Vec<u8>>,
}

/// Failures reported by an [`HttpClient`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// The request could not be built (bad header name or value, etc.).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No response within the timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// The timeout that elapsed.
        timeout_ms: u64,
    },

    /// The connection could not be established or was dropped.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The response body could not be read.
    #[error("failed to read body: {0}")]
    BodyRead(String),

    /// Any other transport error.
    #[error("{0}")]
    Other(String),
}

/// Port for sending HTTP requests.
///
/// This trait abstracts the HTTP client implementation so the executor is
/// independent of specific HTTP libraries. Implementations must read the
/// whole response body before returning.
pub trait HttpClient: Send + Sync {
    /// Sends the request and returns the response with its full body.
    ///
    /// # Errors
    ///
    /// Returns an error if the request cannot be built, the transport
    /// fails, or the body cannot be read.
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send;
}
