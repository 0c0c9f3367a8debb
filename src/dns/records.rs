//! Query types and parsed resource records.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

use hickory_resolver::proto::rr::{Name, RData, RecordType};

use crate::srv::SrvRecord;

/// Record types the checker asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryType {
    A,
    Aaaa,
    Ns,
    Srv,
}

impl From<QueryType> for RecordType {
    fn from(query_type: QueryType) -> Self {
        match query_type {
            QueryType::A => RecordType::A,
            QueryType::Aaaa => RecordType::AAAA,
            QueryType::Ns => RecordType::NS,
            QueryType::Srv => RecordType::SRV,
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&RecordType::from(*self), f)
    }
}

/// A record from an answer, reduced to the data the checker uses.
///
/// Names are lowercased and fully qualified (trailing dot kept).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceRecord {
    A(Ipv4Addr),
    Aaaa(Ipv6Addr),
    Ns(String),
    Srv(SrvRecord),
    /// Any other record type, kept only so callers can log it.
    Other(String),
}

impl ResourceRecord {
    /// Converts answer data from `hickory-resolver`.
    pub fn from_rdata(rdata: &RData) -> Self {
        match rdata {
            RData::A(a) => Self::A(a.0),
            RData::AAAA(aaaa) => Self::Aaaa(aaaa.0),
            RData::NS(ns) => Self::Ns(fqdn_string(&ns.0)),
            RData::SRV(srv) => Self::Srv(SrvRecord::new(
                fqdn_string(srv.target()),
                srv.port(),
                srv.priority(),
                srv.weight(),
            )),
            other => Self::Other(other.record_type().to_string()),
        }
    }

    /// The address carried by an A or AAAA record.
    pub fn address(&self) -> Option<IpAddr> {
        match self {
            Self::A(ip) => Some(IpAddr::V4(*ip)),
            Self::Aaaa(ip) => Some(IpAddr::V6(*ip)),
            _ => None,
        }
    }

    /// Record type name, for log messages.
    pub fn type_name(&self) -> &str {
        match self {
            Self::A(_) => "A",
            Self::Aaaa(_) => "AAAA",
            Self::Ns(_) => "NS",
            Self::Srv(_) => "SRV",
            Self::Other(name) => name,
        }
    }
}

fn fqdn_string(name: &Name) -> String {
    let mut ascii = name.to_ascii().to_ascii_lowercase();
    if !ascii.ends_with('.') {
        ascii.push('.');
    }
    ascii
}
