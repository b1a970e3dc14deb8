//! Configuration types.
//!
//! This module defines the library configuration, the DoH resolver settings and
//! the logging enums shared with the CLI.

use std::str::FromStr;
use std::time::Duration;

use clap::ValueEnum;
use url::Url;

use crate::config::constants::{DEFAULT_DOH_ENDPOINT, DOH_TIMEOUT_SECS};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    #[default]
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <LogFormat as ValueEnum>::from_str(s.trim(), true)
    }
}

/// Settings for the DNS-over-HTTPS resolver.
///
/// Passed to [`DohResolver::new`](crate::DohResolver::new) at construction so
/// tests can point the resolver at a mock endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DohConfig {
    /// DoH JSON API endpoint
    pub endpoint: Url,
    /// Whole-request timeout in seconds
    pub timeout_seconds: u64,
}

impl DohConfig {
    /// Builds a config for `endpoint` with the default timeout.
    ///
    /// # Errors
    ///
    /// Returns a `url::ParseError` if `endpoint` is not an absolute URL.
    pub fn with_endpoint(endpoint: &str) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: Url::parse(endpoint)?,
            timeout_seconds: DOH_TIMEOUT_SECS,
        })
    }

    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for DohConfig {
    fn default() -> Self {
        Self {
            // DEFAULT_DOH_ENDPOINT is a literal, parse cannot fail
            endpoint: Url::parse(DEFAULT_DOH_ENDPOINT)
                .unwrap_or_else(|e| unreachable!("invalid default DoH endpoint: {e}")),
            timeout_seconds: DOH_TIMEOUT_SECS,
        }
    }
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use dns_integrity::Config;
///
/// let config = Config {
///     domains: vec!["example.com".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Domains to check, in order
    pub domains: Vec<String>,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Trusted DoH resolver settings
    pub doh: DohConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            doh: DohConfig::default(),
        }
    }
}
