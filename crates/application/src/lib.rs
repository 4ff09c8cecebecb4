//! Probe Application - Test execution engine
//!
//! This crate holds everything that decides whether an API test passes:
//! - Placeholder substitution over the suite environment
//! - JSON assertion evaluation
//! - Single-test execution through the [`ports::HttpClient`] port
//! - The bounded-concurrency suite runner

pub mod assertion;
pub mod error;
pub mod ports;
pub mod run_suite;
pub mod variable_resolver;

#[cfg(test)]
mod test_support;

pub use assertion::{AssertionError, assert_json, evaluate, extract_value};
pub use error::{ExecutionError, RunError};
pub use execute_test::{REQUEST_TIMEOUT, TestExecutor, prepare_request};
pub use ports::{HttpClient, HttpClientError, PreparedRequest};
pub use run_suite::{
    DEFAULT_MAX_CONCURRENT, ProgressCallback, RunOptions, SuiteRunner, count_failures,
};
pub use variable_resolver::{SubstitutionError, VariableResolver, substitute};
