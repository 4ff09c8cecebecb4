//! In-memory HTTP client for executor and runner tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use probe_domain::HttpResponse;

use crate::ports::{HttpClient, HttpClientError, PreparedRequest};

type Handler = dyn Fn(&PreparedRequest) -> Result<HttpResponse, HttpClientError> + Send + Sync;

/// Answers every request with a canned response and counts how many
/// requests are in flight at once.
pub struct FakeHttpClient {
    handler: Arc<Handler>,
    delay: Duration,
    calls: AtomicUsize,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakeHttpClient {
    pub fn new(
        handler: impl Fn(&PreparedRequest) -> Result<HttpResponse, HttpClientError>
        + Send
        + Sync
        + 'static,
    ) -> Self {
        Self {
            handler: Arc::new(handler),
            delay: Duration::ZERO,
            calls: AtomicUsize::new(0),
            in_flight: AtomicUsize::new(0),
            max_in_flight: AtomicUsize::new(0),
        }
    }

    pub fn json(status: u16, body: serde_json::Value) -> Self {
        let bytes = body.to_string().into_bytes();
        Self::new(move |_| Ok(HttpResponse::new(status, Default::default(), bytes.clone())))
    }

    pub fn text(status: u16, body: &str) -> Self {
        let bytes = body.as_bytes().to_vec();
        Self::new(move |_| Ok(HttpResponse::new(status, Default::default(), bytes.clone())))
    }

    pub fn failing(error: HttpClientError) -> Self {
        Self::new(move |_| Err(error.clone()))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }
}

impl HttpClient for FakeHttpClient {
    async fn execute(&self, request: &PreparedRequest) -> Result<HttpResponse, HttpClientError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(now, Ordering::SeqCst);

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        let response = (self.handler)(request);

        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        response
    }
}
