//! YAML suite loader.

use std::io;
use std::path::{Path, PathBuf};

use probe_domain::TestSuite;
use thiserror::Error;
use tokio::fs;
use tracing::debug;

/// Error type for suite loading.
#[derive(Debug, Error)]
pub enum SuiteLoadError {
    /// The suite file does not exist.
    #[error("suite file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The suite file could not be read.
    #[error("failed to read suite file {}: {source}", .path.display())]
    Io {
        /// Path of the suite file.
        path: PathBuf,
        /// Underlying IO error.
        source: io::Error,
    },

    /// The contents are not a valid suite definition.
    #[error("invalid suite definition: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Parses a suite from YAML text.
///
/// Only the structure is checked. Missing `headers`, `body` and `json`
/// sections default to empty, and `base_url` is not required here.
///
/// # Errors
///
/// Returns [`SuiteLoadError::Parse`] if the YAML does not match the suite
/// shape.
pub fn parse_suite(yaml: &str) -> Result<TestSuite, SuiteLoadError> {
    Ok(serde_yaml::from_str(yaml)?)
}

/// Reads and parses a suite file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub async fn load_suite(path: impl AsRef<Path>) -> Result<TestSuite, SuiteLoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).await.map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            SuiteLoadError::NotFound(path.to_path_buf())
        } else {
            SuiteLoadError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let suite = parse_suite(&contents)?;
    debug!(path = %path.display(), tests = suite.len(), "loaded suite");
    Ok(suite)
}
