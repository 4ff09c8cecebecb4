//! Suite loading
//!
//! Reads YAML suite definitions from disk into [`probe_domain::TestSuite`].

mod yaml;

pub use yaml::{SuiteLoadError, load_suite, parse_suite};
