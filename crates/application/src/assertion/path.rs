//! Value extraction by path expression

use serde_json::Value;

use super::error::AssertionError;

/// The one special path: element count of a top-level array.
pub const LENGTH_PATH: &str = "$.length";

/// A value pulled out of a response document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Extracted<'a> {
    /// Element count produced by [`LENGTH_PATH`].
    Length(usize),
    /// A value found inside the document.
    Value(&'a Value),
}

impl Extracted<'_> {
    /// Returns the value as a number, if it is one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Length(n) => Some(*n as f64),
            Self::Value(v) => v.as_f64(),
        }
    }
}

/// Resolves `path` against `document`.
///
/// `$.length` must be used on its own and requires the document to be an
/// array. Any other path is split on `.` and each segment is looked up as
/// an object key, starting from the document root. `$` has no special
/// meaning there, so `$.user` looks for a key literally named `$`.
///
/// # Errors
///
/// - [`AssertionError::NotAnArray`] for `$.length` on a non-array document
/// - [`AssertionError::InvalidPath`] when a segment meets a non-object value
/// - [`AssertionError::FieldNotFound`] when a key is missing
pub fn extract_value<'a>(document: &'a Value, path: &str) -> Result<Extracted<'a>, AssertionError> {
    if path == LENGTH_PATH {
        return match document {
            Value::Array(items) => Ok(Extracted::Length(items.len())),
            _ => Err(AssertionError::NotAnArray),
        };
    }

    let mut current = document;
    for segment in path.split('.') {
        let Value::Object(map) = current else {
            return Err(AssertionError::InvalidPath {
                path: path.to_string(),
            });
        };
        current = map.get(segment).ok_or_else(|| AssertionError::FieldNotFound {
            path: path.to_string(),
        })?;
    }

    Ok(Extracted::Value(current))
}
