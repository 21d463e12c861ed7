//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//! Command-line flags override whatever is loaded here.

use std::env;

use crate::output::OutputFormat;

/// Filter used when neither `RUST_LOG` nor `CHECKOUT_LOG` is set.
const DEFAULT_LOG_FILTER: &str = "warn";

/// CLI configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// `tracing` filter directive, e.g. `debug` or `checkout_core=debug`
    pub log_filter: String,

    /// Output format when `--format` is not given
    pub output: OutputFormat,

    /// Pretty-print JSON output
    pub pretty: bool,
}

impl CliConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = CliConfig {
            log_filter: lookup("CHECKOUT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),

            output: lookup("CHECKOUT_OUTPUT")
                .unwrap_or_else(|| "json".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CHECKOUT_OUTPUT".to_string()))?,

            pretty: lookup("CHECKOUT_PRETTY")
                .unwrap_or_else(|| "false".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("CHECKOUT_PRETTY".to_string()))?,
        };

        if config.log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("CHECKOUT_LOG".to_string()));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
