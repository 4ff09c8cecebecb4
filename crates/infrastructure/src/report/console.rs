//! Console output

use probe_domain::TestResult;

/// Formats results for terminal output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Creates a new console formatter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// One line for one result.
    #[must_use]
    pub fn format_result(&self, result: &TestResult) -> String {
        if result.passed {
            format!(
                "✔ {} ({}) [{:?}]",
                result.name,
                result.status_code.unwrap_or_default(),
                result.duration
            )
        } else {
            format!(
                "✖ {} ({})",
                result.name,
                result.error.as_deref().unwrap_or("unknown error")
            )
        }
    }

    /// Summary printed after all results.
    #[must_use]
    pub fn format_summary(&self, total: usize, failed: usize) -> String {
        format!("\n{total} tests , {failed} failed\n")
    }
}
