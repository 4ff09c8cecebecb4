//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the test executor.

use std::collections::HashMap;
use std::future::Future;

use probe_application::REQUEST_TIMEOUT;
use probe_application::ports::{HttpClient, HttpClientError, PreparedRequest};
use probe_domain::{HttpMethod, HttpResponse};
use reqwest::{Client, Method};

/// HTTP client implementation using reqwest.
///
/// Wraps a shared `reqwest::Client`; clones of the adapter reuse the same
/// connection pool, so one instance serves every concurrent test.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Request timeout: 10 seconds
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "probe/<version>"
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("probe/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Creates a new HTTP client with a custom reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Converts a domain `HttpMethod` to a reqwest `Method`.
    fn to_reqwest_method(method: &HttpMethod) -> Result<Method, HttpClientError> {
        Method::from_bytes(method.as_str().as_bytes())
            .map_err(|e| HttpClientError::InvalidRequest(format!("invalid method: {e}")))
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout {
                timeout_ms: timeout_millis(),
            };
        }

        if error.is_builder() {
            return HttpClientError::InvalidRequest(error.to_string());
        }

        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }

        if error.is_body() || error.is_decode() {
            return HttpClientError::BodyRead(error.to_string());
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("too many redirects: {error}"));
        }

        HttpClientError::Other(error.to_string())
    }
}

#[allow(clippy::cast_possible_truncation)]
const fn timeout_millis() -> u64 {
    REQUEST_TIMEOUT.as_millis() as u64
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &PreparedRequest,
    ) -> impl Future<Output = Result<HttpResponse, HttpClientError>> + Send {
        let method = Self::to_reqwest_method(&request.method);
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();

        async move {
            let mut builder = self.client.request(method?, url);

            for (name, value) in &headers {
                builder = builder.header(name.as_str(), value.as_str());
            }

            if let Some(body) = body {
                builder = builder.body(body);
            }

            let built = builder
                .build()
                .map_err(|e| HttpClientError::InvalidRequest(e.to_string()))?;

            let response = self
                .client
                .execute(built)
                .await
                .map_err(|e| Self::map_error(&e))?;

            let status = response.status().as_u16();

            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response.bytes().await.map_err(|e| {
                if e.is_timeout() {
                    Self::map_error(&e)
                } else {
                    HttpClientError::BodyRead(e.to_string())
                }
            })?;

            Ok(HttpResponse::new(status, response_headers, body_bytes.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_reqwest_method() {
        let get = HttpMethod::parse("GET").unwrap();
        assert_eq!(ReqwestHttpClient::to_reqwest_method(&get).unwrap(), Method::GET);

        let post = HttpMethod::parse("POST").unwrap();
        assert_eq!(ReqwestHttpClient::to_reqwest_method(&post).unwrap(), Method::POST);

        let purge = HttpMethod::parse("PURGE").unwrap();
        assert_eq!(
            ReqwestHttpClient::to_reqwest_method(&purge).unwrap().as_str(),
            "PURGE"
        );
    }

    #[test]
    fn test_client_creation() {
        assert!(ReqwestHttpClient::new().is_ok());
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = PreparedRequest {
            method: HttpMethod::get(),
            url: "http://127.0.0.1:9/unreachable".parse().unwrap(),
            headers: Vec::new(),
            body: None,
        };

        let err = client.execute(&request).await.unwrap_err();
        assert!(
            matches!(
                err,
                HttpClientError::ConnectionFailed(_) | HttpClientError::Other(_)
            ),
            "{err:?}"
        );
    }

    #[tokio::test]
    async fn test_invalid_header_value_is_invalid_request() {
        let client = ReqwestHttpClient::new().unwrap();
        let request = PreparedRequest {
            method: HttpMethod::get(),
            url: "http://127.0.0.1:9/".parse().unwrap(),
            headers: vec![("X-Bad".to_string(), "line\nbreak".to_string())],
            body: None,
        };

        let err = client.execute(&request).await.unwrap_err();
        assert!(matches!(err, HttpClientError::InvalidRequest(_)), "{err:?}");
    }
}
