//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use log::SetLoggerError;
use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Classified outcome of a failed DNS query.
///
/// Every query site (authority walk, SRV lookups) reports failures through this
/// one taxonomy, produced by [`categorize_resolve_error`](super::categorize_resolve_error).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DnsErrorKind {
    /// The query name is not a well-formed DNS name.
    #[error("invalid query name")]
    InvalidName,

    /// The name does not exist (NXDOMAIN).
    #[error("domain name not found")]
    NameNotFound,

    /// The name exists but has no records of the requested type.
    #[error("no answer for the requested record type")]
    NoAnswer,

    /// None of the name servers gave a usable response.
    #[error("no name servers reachable")]
    NoNameserversReachable,

    /// The query did not complete within its timeout.
    #[error("query timed out")]
    Timeout,
}

/// Errors returned by a domain check.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// The hostname is empty or contains an empty interior label (`..`).
    #[error("Invalid hostname: {0:?}")]
    InvalidHostname(String),
}

/// Errors for option values that parse but cannot be used.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `--timeout-ms` was zero.
    #[error("per-query timeout must be greater than zero")]
    ZeroQueryTimeout,

    /// `--walk-budget-secs` was zero.
    #[error("authority walk budget must be greater than zero")]
    ZeroWalkBudget,
}

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}
