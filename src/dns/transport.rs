//! The query seam between the checker and the network.

use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::proto::rr::Name;

use crate::error_handling::{categorize_resolve_error, DnsErrorKind};
use crate::initialization::{build_resolver, direct_resolver_config};

use super::nameservers::NameServers;
use super::records::{QueryType, ResourceRecord};

/// Performs one DNS lookup against a chosen set of name servers.
///
/// Implementations must not cache answers between calls: the checker relies on
/// every call reaching the servers it names.
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Looks up `name` for records of `query_type`.
    ///
    /// # Errors
    ///
    /// Returns the classified failure when no answer records were obtained.
    async fn query(
        &self,
        servers: &NameServers,
        name: &str,
        query_type: QueryType,
        timeout: Duration,
    ) -> Result<Vec<ResourceRecord>, DnsErrorKind>;
}

/// `hickory-resolver` backed transport.
///
/// Builds a fresh resolver for every query, so nothing is cached and no
/// resolver state is shared between queries or requests.
#[derive(Debug, Clone)]
pub struct HickoryTransport {
    system_config: ResolverConfig,
    system_opts: ResolverOpts,
}

impl HickoryTransport {
    /// Creates a transport whose `NameServers::System` target is the given
    /// resolver configuration.
    pub fn new(system_config: ResolverConfig, system_opts: ResolverOpts) -> Self {
        Self {
            system_config,
            system_opts,
        }
    }
}

#[async_trait]
impl DnsTransport for HickoryTransport {
    async fn query(
        &self,
        servers: &NameServers,
        name: &str,
        query_type: QueryType,
        timeout: Duration,
    ) -> Result<Vec<ResourceRecord>, DnsErrorKind> {
        let query_name = Name::from_ascii(name).map_err(|e| {
            log::debug!("Rejecting query name {name:?}: {e}");
            DnsErrorKind::InvalidName
        })?;

        let resolver = match servers {
            NameServers::System => {
                build_resolver(self.system_config.clone(), &self.system_opts, timeout)
            }
            NameServers::Direct(set) if set.is_empty() => {
                return Err(DnsErrorKind::NoNameserversReachable);
            }
            NameServers::Direct(set) => {
                build_resolver(direct_resolver_config(set), &self.system_opts, timeout)
            }
        };

        log::trace!("Querying {name} {query_type} via {servers}");
        match tokio::time::timeout(timeout, resolver.lookup(query_name, query_type.into())).await
        {
            Ok(Ok(lookup)) => Ok(lookup.iter().map(ResourceRecord::from_rdata).collect()),
            Ok(Err(e)) => {
                let kind = categorize_resolve_error(&e);
                log::debug!("{name} {query_type} via {servers} failed ({kind}): {e}");
                Err(kind)
            }
            Err(_) => {
                log::debug!("{name} {query_type} via {servers} timed out");
                Err(DnsErrorKind::Timeout)
            }
        }
    }
}
