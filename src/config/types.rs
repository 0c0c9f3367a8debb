//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{AUTHORITY_WALK_BUDGET_SECS, DNS_QUERY_TIMEOUT_MS};
use crate::error_handling::ConfigError;

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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Report output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with record tables and footnotes
    Text,
    /// Pretty-printed JSON document
    Json,
}

/// Command-line options and configuration.
///
/// This struct is generated by `clap` from the field attributes, and can also be
/// constructed programmatically through `Default`.
///
/// # Examples
///
/// ```bash
/// # Basic usage
/// check_xmpp_dns jabber.org
///
/// # Slower name servers, machine-readable output
/// check_xmpp_dns jabber.org --timeout-ms 5000 --format json
///
/// # Skip the authoritative walk and ask the local resolver
/// check_xmpp_dns jabber.org --skip-authority
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "check_xmpp_dns",
    about = "Checks the DNS SRV records that advertise XMPP client and server endpoints."
)]
pub struct Config {
    /// Domain to check (e.g. jabber.org)
    pub hostname: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Report format: text|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Per-query DNS timeout in milliseconds
    #[arg(long, default_value_t = DNS_QUERY_TIMEOUT_MS)]
    pub timeout_ms: u64,

    /// Overall time budget for discovering the authoritative name servers, in seconds
    #[arg(long, default_value_t = AUTHORITY_WALK_BUDGET_SECS)]
    pub walk_budget_secs: u64,

    /// Also resolve name-server IPv6 (AAAA) addresses during the authority walk
    #[arg(long)]
    pub ipv6: bool,

    /// Query the system resolver directly instead of the authoritative name servers
    #[arg(long)]
    pub skip_authority: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            hostname: String::new(),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            format: OutputFormat::Text,
            timeout_ms: DNS_QUERY_TIMEOUT_MS,
            walk_budget_secs: AUTHORITY_WALK_BUDGET_SECS,
            ipv6: false,
            skip_authority: false,
        }
    }
}

impl Config {
    /// Checks option values that clap cannot validate on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when a timeout or budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::ZeroQueryTimeout);
        }
        if self.walk_budget_secs == 0 {
            return Err(ConfigError::ZeroWalkBudget);
        }
        Ok(())
    }

    /// Per-query DNS timeout.
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Overall authority-walk deadline.
    pub fn walk_budget(&self) -> Duration {
        Duration::from_secs(self.walk_budget_secs)
    }
}
