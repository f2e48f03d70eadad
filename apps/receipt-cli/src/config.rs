//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override whatever is loaded here.

use std::env;

use crate::cli::OutputFormat;

/// Runtime configuration for the receipt CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_filter: String,

    /// How receipts are printed
    pub format: OutputFormat,

    /// Fail on malformed order lines instead of dropping them
    pub strict: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        CliConfig {
            log_filter: "warn".to_string(),
            format: OutputFormat::Text,
            strict: false,
        }
    }
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// - `SALESTAX_LOG`: tracing filter (default `warn`)
    /// - `SALESTAX_FORMAT`: `text` or `json` (default `text`)
    /// - `SALESTAX_STRICT`: `true` or `false` (default `false`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`CliConfig::load`] but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = CliConfig::default();

        let log_filter = lookup("SALESTAX_LOG")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        let format = match lookup("SALESTAX_FORMAT") {
            Some(raw) => <OutputFormat as clap::ValueEnum>::from_str(raw.trim(), true)
                .map_err(|_| ConfigError::InvalidValue("SALESTAX_FORMAT".to_string()))?,
            None => defaults.format,
        };

        let strict = match lookup("SALESTAX_STRICT") {
            Some(raw) => raw
                .trim()
                .to_ascii_lowercase()
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SALESTAX_STRICT".to_string()))?,
            None => defaults.strict,
        };

        Ok(CliConfig {
            log_filter,
            format,
            strict,
        })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
