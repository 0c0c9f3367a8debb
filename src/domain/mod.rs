//! Domain name validation and normalization.
//!
//! This module turns the raw hostname a user typed into a [`Domain`]:
//! - rejects empty hostnames and empty interior labels (`..`)
//! - trims whitespace, lowercases ASCII letters, drops one trailing dot
//!
//! It also derives the query names the checker needs: the broad-to-narrow
//! sequence of parent domains walked by the authority resolver, and the SRV
//! owner names for each XMPP service.

use std::fmt;
use std::str::FromStr;

use crate::error_handling::CheckError;

/// A validated, normalized domain name (no trailing dot).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Domain {
    name: String,
}

impl Domain {
    /// Validates and normalizes a raw hostname.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHostname` if the hostname is empty or contains
    /// `..`.
    pub fn parse(raw: &str) -> Result<Self, CheckError> {
        let trimmed = raw.trim();
        if trimmed.contains("..") {
            return Err(CheckError::InvalidHostname(raw.to_string()));
        }
        let name = trimmed.strip_suffix('.').unwrap_or(trimmed);
        if name.is_empty() {
            return Err(CheckError::InvalidHostname(raw.to_string()));
        }
        Ok(Self {
            name: name.to_ascii_lowercase(),
        })
    }

    /// The normalized name, without a trailing dot.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Labels from narrowest to broadest (`a.example.com` -> `[a, example, com]`).
    pub fn labels(&self) -> Vec<&str> {
        self.name.split('.').collect()
    }

    /// Fully qualified form, with the trailing root dot.
    pub fn fqdn(&self) -> String {
        format!("{}.", self.name)
    }

    /// Parent domains visited by the authority walk, broadest first.
    ///
    /// The single broadest label (the TLD) is skipped, so `a.b.example.com`
    /// yields `example.com`, `b.example.com`, `a.b.example.com`, and a
    /// single-label domain yields nothing.
    pub fn walk_steps(&self) -> Vec<String> {
        let labels = self.labels();
        (1..labels.len())
            .rev()
            .map(|i| labels[i - 1..].join("."))
            .collect()
    }

    /// Fully qualified SRV owner name for a service prefix such as
    /// `_xmpp-client._tcp`.
    pub fn service_name(&self, prefix: &str) -> String {
        format!("{prefix}.{}", self.fqdn())
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl FromStr for Domain {
    type Err = CheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests;
