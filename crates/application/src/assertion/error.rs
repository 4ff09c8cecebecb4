//! Assertion failures

use std::fmt;

use thiserror::Error;

/// Numeric comparison operator of a `>`/`<` rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    /// Strictly greater than.
    GreaterThan,
    /// Strictly less than.
    LessThan,
}

impl ComparisonOperator {
    /// Get the symbol for this operator.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::GreaterThan => ">",
            Self::LessThan => "<",
        }
    }
}

impl fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Why a JSON assertion failed. Every variant names the offending path
/// where one is known.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AssertionError {
    /// The response body is not JSON.
    #[error("invalid json response")]
    InvalidJson,

    /// `$.length` was used on a document that is not an array.
    #[error("$.length applied to non-array")]
    NotAnArray,

    /// A key along the path does not exist.
    #[error("field {path} not found")]
    FieldNotFound {
        /// The full path expression.
        path: String,
    },

    /// The path walks through a value that is not an object.
    #[error("invalid path: {path}")]
    InvalidPath {
        /// The full path expression.
        path: String,
    },

    /// A `>`/`<` rule was applied to a non-numeric value.
    #[error("assertion failed at {path}: comparison on non-number")]
    ComparisonOnNonNumber {
        /// The full path expression.
        path: String,
    },

    /// A `>`/`<` rule did not hold.
    #[error("assertion failed at {path}: {actual} is not {operator} {bound}")]
    ComparisonFailed {
        /// The full path expression.
        path: String,
        /// Printed actual value.
        actual: String,
        /// Comparison operator.
        operator: ComparisonOperator,
        /// Printed bound.
        bound: String,
    },

    /// Printed forms of actual and expected differ.
    #[error("assertion failed at {path}: expected {expected}, got {actual}")]
    ValueMismatch {
        /// The full path expression.
        path: String,
        /// Printed expected value.
        expected: String,
        /// Printed actual value.
        actual: String,
    },
}
