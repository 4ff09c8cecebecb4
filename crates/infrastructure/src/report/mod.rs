//! Result reporting
//!
//! Console and JSON renderings of suite results.

mod console;
mod json;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

pub use console::ConsoleFormatter;
pub use json::{JsonFormatter, ReportError, SuiteReport, TestReport};

/// Output format for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One line per test as it completes, then a summary.
    #[default]
    Console,
    /// A single JSON document after the run.
    Json,
}

impl OutputFormat {
    /// Returns the format name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::Json => "json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "console" => Ok(Self::Console),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}
