//! Concurrent suite execution
//!
//! Fans a suite's test cases out to the [`TestExecutor`] under a fixed
//! number of permits and collects one result per test.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use probe_domain::{TestResult, TestSuite};
use tokio::sync::{Semaphore, mpsc};
use tokio::task::JoinSet;
use tracing::{info, trace, warn};

use crate::error::RunError;
use crate::execute_test::TestExecutor;
use crate::ports::HttpClient;

/// Concurrency cap used when none (or zero) is configured.
pub const DEFAULT_MAX_CONCURRENT: usize = 10;

/// Called once per test as soon as its result is known.
///
/// Invocations come from the concurrent executions themselves and may
/// overlap. The runner does not serialize them: a callback writing to a
/// shared sink must do its own locking.
pub type ProgressCallback = Arc<dyn Fn(&TestResult) + Send + Sync>;

/// Options for [`SuiteRunner`].
#[derive(Clone)]
pub struct RunOptions {
    /// Maximum number of tests in flight; zero means the default. Further
    /// capped by the test count.
    pub max_concurrent: usize,
    /// Optional per-test progress callback.
    pub on_progress: Option<ProgressCallback>,
}

impl RunOptions {
    /// Creates options with the given cap. Zero falls back to
    /// [`DEFAULT_MAX_CONCURRENT`].
    #[must_use]
    pub fn new(max_concurrent: usize) -> Self {
        Self {
            max_concurrent: if max_concurrent == 0 {
                DEFAULT_MAX_CONCURRENT
            } else {
                max_concurrent
            },
            on_progress: None,
        }
    }

    /// Sets the progress callback.
    #[must_use]
    pub fn with_progress(mut self, callback: impl Fn(&TestResult) + Send + Sync + 'static) -> Self {
        self.on_progress = Some(Arc::new(callback));
        self
    }

    /// The cap actually applied to a suite of `test_count` tests. A zero
    /// `max_concurrent` counts as [`DEFAULT_MAX_CONCURRENT`].
    #[must_use]
    pub fn effective_concurrency(&self, test_count: usize) -> usize {
        let max = if self.max_concurrent == 0 {
            DEFAULT_MAX_CONCURRENT
        } else {
            self.max_concurrent
        };
        max.min(test_count)
    }
}

impl Default for RunOptions {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT)
    }
}

impl fmt::Debug for RunOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RunOptions")
            .field("max_concurrent", &self.max_concurrent)
            .field("on_progress", &self.on_progress.is_some())
            .finish()
    }
}

/// Runs whole suites with bounded concurrency.
pub struct SuiteRunner<C: HttpClient> {
    executor: Arc<TestExecutor<C>>,
    options: RunOptions,
}

impl<C: HttpClient + 'static> SuiteRunner<C> {
    /// Creates a runner that sends requests through `client`.
    pub fn new(client: Arc<C>, options: RunOptions) -> Self {
        Self {
            executor: Arc::new(TestExecutor::new(client)),
            options,
        }
    }

    /// Returns the runner options.
    pub const fn options(&self) -> &RunOptions {
        &self.options
    }

    /// Runs every test in the suite and returns one result per test.
    ///
    /// The dispatch loop takes a permit before it spawns each test, so no
    /// more than `min(max_concurrent, tests)` executions exist at any time.
    /// Results come back in completion order, not suite order.
    ///
    /// An execution that panics (for instance inside the progress callback)
    /// is still reported, as a failed result for its test; the progress
    /// callback is not invoked for it again.
    ///
    /// # Errors
    ///
    /// [`RunError::MissingBaseUrl`] if the environment has no `base_url`;
    /// no test is started in that case. Individual test failures are
    /// reported in the results, never as an error.
    pub async fn run_suite(&self, suite: &TestSuite) -> Result<Vec<TestResult>, RunError> {
        let base_url: Arc<str> = suite
            .env
            .base_url()
            .ok_or(RunError::MissingBaseUrl)?
            .into();

        let total = suite.tests.len();
        let cap = self.options.effective_concurrency(total);
        info!(tests = total, max_concurrent = cap, "running suite");

        if total == 0 {
            return Ok(Vec::new());
        }

        let env = Arc::new(suite.env.clone());
        let permits = Arc::new(Semaphore::new(cap));
        let (tx, mut rx) = mpsc::channel::<TestResult>(total);
        let mut tasks = JoinSet::new();
        let mut names = HashMap::with_capacity(total);

        for test in &suite.tests {
            trace!(test = %test.name, "waiting for permit");
            let permit = Arc::clone(&permits)
                .acquire_owned()
                .await
                .map_err(|_| RunError::PermitPoolClosed)?;

            let executor = Arc::clone(&self.executor);
            let env = Arc::clone(&env);
            let base_url = Arc::clone(&base_url);
            let on_progress = self.options.on_progress.clone();
            let tx = tx.clone();
            let test = test.clone();

            let name = test.name.clone();
            let handle = tasks.spawn(async move {
                let result = executor.run_test(&base_url, &env, &test).await;

                if let Some(callback) = &on_progress {
                    callback(&result);
                }

                if tx.send(result).await.is_err() {
                    warn!(test = %test.name, "result dropped: collector closed");
                }
                drop(permit);
            });
            names.insert(handle.id(), name);
        }
        drop(tx);

        let mut results = Vec::with_capacity(total);
        while let Some(result) = rx.recv().await {
            results.push(result);
        }

        while let Some(joined) = tasks.join_next().await {
            if let Err(error) = joined {
                let name = names.remove(&error.id()).unwrap_or_default();
                warn!(test = %name, %error, "test execution aborted");
                results.push(TestResult::failed(name, format!("test execution aborted: {error}")));
            }
        }

        info!(
            tests = results.len(),
            failed = count_failures(&results),
            "suite finished"
        );
        Ok(results)
    }
}

/// Number of results with `passed == false`.
#[must_use]
pub fn count_failures(results: &[TestResult]) -> usize {
    results.iter().filter(|r| !r.passed).count()
}
