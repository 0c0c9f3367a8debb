//! Name-server sets used as query targets.

use std::fmt;
use std::net::IpAddr;

use serde::Serialize;

/// Ordered set of name-server addresses, duplicates dropped on insert.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct NameServerSet {
    addresses: Vec<IpAddr>,
}

impl NameServerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an address unless it is already present.
    pub fn push(&mut self, address: IpAddr) {
        if !self.addresses.contains(&address) {
            self.addresses.push(address);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    pub fn as_slice(&self) -> &[IpAddr] {
        &self.addresses
    }

    pub fn iter(&self) -> impl Iterator<Item = &IpAddr> {
        self.addresses.iter()
    }
}

impl FromIterator<IpAddr> for NameServerSet {
    fn from_iter<I: IntoIterator<Item = IpAddr>>(iter: I) -> Self {
        let mut set = Self::new();
        for address in iter {
            set.push(address);
        }
        set
    }
}

impl fmt::Display for NameServerSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.addresses.is_empty() {
            return f.write_str("(none)");
        }
        let joined = self
            .addresses
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        f.write_str(&joined)
    }
}

/// Where a query is sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "addresses", rename_all = "snake_case")]
pub enum NameServers {
    /// The host's default resolver configuration.
    System,
    /// Specific name servers, queried directly on port 53.
    Direct(NameServerSet),
}

impl fmt::Display for NameServers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::System => f.write_str("system resolver"),
            Self::Direct(set) => fmt::Display::fmt(set, f),
        }
    }
}
