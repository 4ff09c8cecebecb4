//! Request template as written in a suite

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The request half of a test case.
///
/// `path` and every header value may contain `{{name}}` placeholders that
/// are resolved against the suite environment right before dispatch. The
/// body is sent as serialized JSON exactly as written; placeholders inside
/// it are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestTemplate {
    /// HTTP method token (e.g. `GET`). Validated at execution time.
    #[serde(default)]
    pub method: String,
    /// Path appended to the suite `base_url`.
    #[serde(default)]
    pub path: String,
    /// Header name to value template.
    #[serde(default)]
    pub headers: IndexMap<String, String>,
    /// Optional JSON body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl RequestTemplate {
    /// Creates a template with the given method and path.
    #[must_use]
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Self::default()
        }
    }

    /// Adds a header template.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }
}
