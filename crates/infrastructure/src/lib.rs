//! Probe Infrastructure - Adapters and implementations
//!
//! This crate provides the reqwest-backed HTTP client, the YAML suite
//! loader, configuration loading and result reporting.

pub mod adapters;
pub mod loader;
pub mod report;
pub mod settings;

pub use adapters::ReqwestHttpClient;
pub use loader::{SuiteLoadError, load_suite, parse_suite};
pub use report::{
    ConsoleFormatter, JsonFormatter, OutputFormat, ReportError, SuiteReport, TestReport,
};
pub use settings::{ConfigError, ProbeConfig};
