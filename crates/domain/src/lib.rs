//! Probe Domain - Core suite and result types
//!
//! This crate defines the data model consumed by the test execution engine:
//! suites, test cases, request templates, expectations and per-test results.
//! All types here are pure Rust with no I/O dependencies.

pub mod environment;
pub mod error;
pub mod request;
pub mod response;
pub mod suite;
pub mod testing;

pub use environment::{BASE_URL_KEY, Environment};
pub use error::{DomainError, DomainResult};
pub use request::{HttpMethod, RequestTemplate};
pub use response::HttpResponse;
pub use suite::{Expect, TestCase, TestSuite};
pub use testing::TestResult;
