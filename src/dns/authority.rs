//! Authoritative name-server discovery.
//!
//! Intermediate caching resolvers can serve SRV data that is stale up to its
//! TTL. To see what a zone publishes right now, the checker finds the zone's
//! authoritative servers itself and queries them directly.
//!
//! The walk goes from the broadest label to the narrowest. For
//! `a.example.com` it asks the system resolver for the NS records of
//! `example.com`, resolves those hosts to addresses, then asks *those* servers
//! for the NS records of `a.example.com`, and so on. The TLD itself is never
//! queried; root and TLD servers change rarely enough not to matter here.

use std::net::IpAddr;
use std::time::Duration;

use futures::future::try_join_all;
use serde::Serialize;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::config::{AUTHORITY_WALK_BUDGET, DNS_QUERY_TIMEOUT};
use crate::domain::Domain;
use crate::error_handling::{CheckError, DnsErrorKind};

use super::nameservers::{NameServerSet, NameServers};
use super::records::{QueryType, ResourceRecord};
use super::transport::DnsTransport;

/// Outcome of the authority walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "name_servers", rename_all = "snake_case")]
pub enum Authority {
    /// The walk completed; these are the servers to query.
    Known(NameServers),
    /// The walk was aborted. Callers fall back to the system resolver rather
    /// than trust a partial chain.
    Unknown,
}

impl Authority {
    /// Servers the SRV queries should go to.
    ///
    /// `Unknown` and an empty authoritative set both fall back to the system
    /// resolver.
    pub fn upstream(&self) -> NameServers {
        match self {
            Self::Known(NameServers::Direct(set)) if !set.is_empty() => {
                NameServers::Direct(set.clone())
            }
            _ => NameServers::System,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }
}

#[derive(Debug, Error)]
#[error("{kind} for {query_type} query of {name}")]
struct WalkFailure {
    name: String,
    query_type: QueryType,
    kind: DnsErrorKind,
}

/// Discovers the authoritative name servers of a domain.
///
/// Holds no mutable state: each walk step produces a new [`NameServers`] value
/// that is passed to the next one.
pub struct AuthorityResolver<'a, T: ?Sized> {
    transport: &'a T,
    query_timeout: Duration,
    walk_budget: Duration,
    resolve_ipv6: bool,
}

impl<'a, T: DnsTransport + ?Sized> AuthorityResolver<'a, T> {
    /// Creates a resolver with the default per-query timeout and walk budget,
    /// resolving name servers to IPv4 addresses only.
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            query_timeout: DNS_QUERY_TIMEOUT,
            walk_budget: AUTHORITY_WALK_BUDGET,
            resolve_ipv6: false,
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    pub fn with_walk_budget(mut self, budget: Duration) -> Self {
        self.walk_budget = budget;
        self
    }

    /// Also collect AAAA addresses of each name server.
    pub fn with_ipv6(mut self, resolve_ipv6: bool) -> Self {
        self.resolve_ipv6 = resolve_ipv6;
        self
    }

    /// Validates `hostname` and resolves its authority.
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHostname` before any query is issued if the
    /// hostname is empty or contains `..`.
    pub async fn resolve_hostname(
        &self,
        hostname: &str,
        cancel: &CancellationToken,
    ) -> Result<Authority, CheckError> {
        let domain = Domain::parse(hostname)?;
        Ok(self.resolve(&domain, cancel).await)
    }

    /// Walks `domain` from broad to narrow.
    ///
    /// Returns `Authority::Unknown` if any query fails, if the walk budget runs
    /// out, or if `cancel` fires.
    pub async fn resolve(&self, domain: &Domain, cancel: &CancellationToken) -> Authority {
        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::info!("Authority walk for {domain} cancelled");
                Authority::Unknown
            }
            outcome = tokio::time::timeout(self.walk_budget, self.walk(domain)) => match outcome {
                Ok(Ok(servers)) => {
                    log::info!("Authoritative name servers for {domain}: {servers}");
                    Authority::Known(servers)
                }
                Ok(Err(failure)) => {
                    log::warn!(
                        "Unable to determine authoritative name servers for {domain} ({failure}); \
                         falling back to the default resolver"
                    );
                    Authority::Unknown
                }
                Err(_) => {
                    log::warn!(
                        "Authority walk for {domain} exceeded {:?}; falling back to the default resolver",
                        self.walk_budget
                    );
                    Authority::Unknown
                }
            }
        }
    }

    async fn walk(&self, domain: &Domain) -> Result<NameServers, WalkFailure> {
        let mut current = NameServers::System;
        for broader in domain.walk_steps() {
            let zone = format!("{broader}.");
            let answer = self.query(&current, &zone, QueryType::Ns).await?;

            let hosts: Vec<String> = answer
                .into_iter()
                .filter_map(|record| match record {
                    ResourceRecord::Ns(host) => Some(host),
                    other => {
                        log::debug!(
                            "Ignoring unexpected {} record in NS answer for {zone}",
                            other.type_name()
                        );
                        None
                    }
                })
                .collect();

            let addresses = try_join_all(
                hosts
                    .iter()
                    .map(|host| self.name_server_addresses(&current, host)),
            )
            .await?;

            let candidates: NameServerSet = addresses.into_iter().flatten().collect();
            log::debug!(
                "{zone} is served by {} host(s) at {candidates}",
                hosts.len()
            );
            if candidates.is_empty() {
                log::debug!("No name-server addresses resolved for {zone}");
            }
            current = NameServers::Direct(candidates);
        }
        Ok(current)
    }

    async fn name_server_addresses(
        &self,
        servers: &NameServers,
        host: &str,
    ) -> Result<Vec<IpAddr>, WalkFailure> {
        if !self.resolve_ipv6 {
            return Ok(addresses_in(self.query(servers, host, QueryType::A).await?, host));
        }

        let (v4, v6) = tokio::join!(
            self.query(servers, host, QueryType::A),
            self.query(servers, host, QueryType::Aaaa)
        );
        let mut addresses = addresses_in(v4?, host);
        match v6 {
            Ok(records) => addresses.extend(addresses_in(records, host)),
            // Plenty of name servers have no IPv6 address
            Err(WalkFailure {
                kind: DnsErrorKind::NoAnswer,
                ..
            }) => {}
            Err(failure) => return Err(failure),
        }
        Ok(addresses)
    }

    async fn query(
        &self,
        servers: &NameServers,
        name: &str,
        query_type: QueryType,
    ) -> Result<Vec<ResourceRecord>, WalkFailure> {
        self.transport
            .query(servers, name, query_type, self.query_timeout)
            .await
            .map_err(|kind| WalkFailure {
                name: name.to_string(),
                query_type,
                kind,
            })
    }
}

fn addresses_in(records: Vec<ResourceRecord>, host: &str) -> Vec<IpAddr> {
    records
        .into_iter()
        .filter_map(|record| {
            let address = record.address();
            if address.is_none() {
                log::debug!(
                    "Ignoring unexpected {} record in address answer for {host}",
                    record.type_name()
                );
            }
            address
        })
        .collect()
}
