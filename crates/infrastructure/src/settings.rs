//! Runner settings
//!
//! Layers, lowest precedence first: built-in defaults, an optional
//! `probe.toml`/`probe.yaml` in the working directory (or an explicit
//! file), then `PROBE_*` environment variables. Command-line flags are
//! applied on top by the binary.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use probe_application::DEFAULT_MAX_CONCURRENT;
use serde::Deserialize;

use crate::report::OutputFormat;

/// Base name of the optional configuration file.
pub const CONFIG_FILE_STEM: &str = "probe";

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "PROBE";

/// Default tracing filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Errors raised while assembling configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An explicitly requested file does not exist.
    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    /// A source could not be read or merged.
    #[error("invalid configuration: {0}")]
    Invalid(#[from] config::ConfigError),
}

/// Effective runner settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProbeConfig {
    /// Maximum tests in flight. Zero means the default.
    pub max_concurrent: usize,
    /// Report format.
    pub format: OutputFormat,
    /// Tracing filter directive.
    pub log_level: String,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            format: OutputFormat::Console,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ProbeConfig {
    /// Loads configuration from the default file and the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist or a source is malformed.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(explicit, None)
    }

    /// Like [`load`](Self::load), but reads environment overrides from
    /// `env` instead of the process environment when given.
    ///
    /// # Errors
    ///
    /// Returns an error if `explicit` does not exist or a source is malformed.
    pub fn load_with_env(
        explicit: Option<&Path>,
        env: Option<config::Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let mut builder = Config::builder()
            .set_default("max_concurrent", defaults.max_concurrent as u64)?
            .set_default("format", defaults.format.as_str())?
            .set_default("log_level", defaults.log_level)?;

        builder = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound(path.to_path_buf()));
                }
                builder.add_source(File::from(path))
            }
            None => builder.add_source(File::with_name(CONFIG_FILE_STEM).required(false)),
        };

        let config = builder
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let mut loaded: Self = config.try_deserialize()?;
        loaded.max_concurrent = normalize_concurrency(loaded.max_concurrent);
        tracing::debug!(?loaded, "configuration loaded");
        Ok(loaded)
    }

    /// Applies a command-line concurrency override.
    #[must_use]
    pub fn with_max_concurrent(mut self, max_concurrent: Option<usize>) -> Self {
        if let Some(n) = max_concurrent {
            self.max_concurrent = normalize_concurrency(n);
        }
        self
    }

    /// Applies a command-line format override.
    #[must_use]
    pub fn with_format(mut self, format: Option<OutputFormat>) -> Self {
        if let Some(format) = format {
            self.format = format;
        }
        self
    }
}

const fn normalize_concurrency(n: usize) -> usize {
    if n == 0 { DEFAULT_MAX_CONCURRENT } else { n }
}
