//! Test suite definitions

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::environment::Environment;
use crate::request::RequestTemplate;

/// A collection of test cases sharing one environment.
///
/// `tests` keeps the order of the source definition. Execution and
/// completion order are independent of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestSuite {
    /// Variables for placeholder substitution. Must contain `base_url` to run.
    #[serde(default)]
    pub env: Environment,
    /// Test cases in definition order.
    #[serde(default)]
    pub tests: Vec<TestCase>,
}

impl TestSuite {
    /// Creates a suite with the given environment and no tests.
    #[must_use]
    pub const fn new(env: Environment) -> Self {
        Self {
            env,
            tests: Vec::new(),
        }
    }

    /// Appends a test case.
    #[must_use]
    pub fn with_test(mut self, test: TestCase) -> Self {
        self.tests.push(test);
        self
    }

    /// Returns the number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// Returns true if the suite has no test cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }
}

/// A single request plus the expectations checked against its response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Display name. Not required to be unique.
    #[serde(default)]
    pub name: String,
    /// Request to send.
    #[serde(default)]
    pub request: RequestTemplate,
    /// Expected outcome.
    #[serde(default)]
    pub expect: Expect,
}

impl TestCase {
    /// Creates a test case.
    #[must_use]
    pub fn new(name: impl Into<String>, request: RequestTemplate, expect: Expect) -> Self {
        Self {
            name: name.into(),
            request,
            expect,
        }
    }
}

/// Expected status code and JSON assertion rules.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Expect {
    /// Exact status code the response must carry.
    #[serde(default)]
    pub status: u16,
    /// Path expression to expected value. String values starting with `>`
    /// or `<` are numeric comparisons; everything else is compared by its
    /// printed form.
    #[serde(default)]
    pub json: IndexMap<String, serde_json::Value>,
}

impl Expect {
    /// Expects the given status and no JSON rules.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self {
            status,
            json: IndexMap::new(),
        }
    }

    /// Adds a JSON assertion rule.
    #[must_use]
    pub fn with_json(mut self, path: impl Into<String>, expected: serde_json::Value) -> Self {
        self.json.insert(path.into(), expected);
        self
    }
}
