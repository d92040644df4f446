//! # Configuration
//!
//! The demo has no behavioral knobs. The only setting is the log filter,
//! taken from `RUST_LOG` when present.

use tracing::warn;
use tracing_subscriber::EnvFilter;

use crate::error::{CalcError, CalcResult};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "RUST_LOG";

/// Filter used when `RUST_LOG` is unset or empty
pub const DEFAULT_FILTER: &str = "warn";

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// `EnvFilter` directive string, e.g. `warn` or `calculator=debug`
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl LogConfig {
    /// Create with an explicit filter
    pub fn new(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
        }
    }

    /// Read the filter from the environment, falling back to the default
    pub fn from_env() -> Self {
        Self::from_value(std::env::var(LOG_ENV).ok())
    }

    fn from_value(value: Option<String>) -> Self {
        match value {
            Some(filter) if !filter.trim().is_empty() => Self::new(filter.trim()),
            _ => Self::default(),
        }
    }

    /// Parse the filter directives
    pub fn env_filter(&self) -> CalcResult<EnvFilter> {
        EnvFilter::try_new(&self.filter)
            .map_err(|e| CalcError::Logging(format!("invalid filter {:?}: {}", self.filter, e)))
    }

    /// Parse the filter, falling back to `DEFAULT_FILTER` when it is invalid
    ///
    /// The parse error is returned alongside so the caller can report it.
    pub fn env_filter_or_default(&self) -> (EnvFilter, Option<CalcError>) {
        match self.env_filter() {
            Ok(filter) => (filter, None),
            Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
        }
    }
}

/// Install the global `tracing` subscriber
///
/// Events go to stderr. Stdout carries only demo output. An invalid filter
/// never fails startup: the default filter is installed and a warning logged.
/// Errors only if a global subscriber is already set.
pub fn init_logging(config: &LogConfig) -> CalcResult<()> {
    let (filter, rejected) = config.env_filter_or_default();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CalcError::Logging(e.to_string()))?;

    if let Some(e) = rejected {
        warn!(error = %e, "ignoring {}, using {:?}", LOG_ENV, DEFAULT_FILTER);
    }
    Ok(())
}
