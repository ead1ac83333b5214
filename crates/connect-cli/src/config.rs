//! CLI configuration from the environment.
//!
//! Command-line flags take precedence; the environment only supplies
//! defaults so CI jobs can set them once.

use std::str::FromStr;

/// Log output format for the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines on stderr.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                var: LOG_FORMAT_VAR,
                value: s.to_string(),
                expected: "text or json",
            }),
        }
    }
}

/// Settings read from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    pub log_format: LogFormat,
    /// Print normalized documents on a single line.
    pub compact: bool,
}

const LOG_FORMAT_VAR: &str = "CONNECT_LOG_FORMAT";
const COMPACT_VAR: &str = "CONNECT_COMPACT";

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `CONNECT_LOG_FORMAT`: `text` (default) or `json`
    /// - `CONNECT_COMPACT`: `true`/`false`/`1`/`0` (default: false)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) => raw.parse()?,
            None => LogFormat::default(),
        };
        let compact = match lookup(COMPACT_VAR) {
            Some(raw) => parse_bool(COMPACT_VAR, &raw)?,
            None => false,
        };
        Ok(Self {
            log_format,
            compact,
        })
    }
}

fn parse_bool(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            var,
            value: raw.to_string(),
            expected: "a boolean",
        }),
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {var}: expected {expected}")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}
