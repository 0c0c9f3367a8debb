//! DNS querying and authoritative name-server discovery.
//!
//! This module provides:
//! - The [`DnsTransport`] seam: one lookup against a given set of name servers,
//!   returning parsed records or a classified [`DnsErrorKind`](crate::error_handling::DnsErrorKind)
//! - [`HickoryTransport`], the `hickory-resolver` backed implementation
//! - [`AuthorityResolver`], which walks a domain's labels from broad to narrow
//!   to find the name servers that are authoritative for it, bypassing any
//!   caching resolver in between

mod authority;
mod nameservers;
mod records;
mod transport;

// Re-export public API
pub use authority::{Authority, AuthorityResolver};
pub use nameservers::{NameServerSet, NameServers};
pub use records::{QueryType, ResourceRecord};
pub use transport::{DnsTransport, HickoryTransport};

#[cfg(test)]
pub(crate) mod test_helpers;
