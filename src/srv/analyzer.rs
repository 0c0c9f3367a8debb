//! SRV lookups for both XMPP services and their cross-referencing.

use std::collections::HashSet;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::DNS_QUERY_TIMEOUT;
use crate::dns::{Authority, DnsTransport, NameServers, QueryType, ResourceRecord};
use crate::domain::Domain;

use super::annotate::{annotate, SrvOutcome};
use super::record::SrvRecord;
use super::service::XmppService;

/// Results for the client and server record tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SrvAnalysis {
    pub client: SrvOutcome,
    pub server: SrvOutcome,
}

impl SrvAnalysis {
    pub fn outcome(&self, service: XmppService) -> &SrvOutcome {
        match service {
            XmppService::Client => &self.client,
            XmppService::Server => &self.server,
        }
    }
}

/// Fetches and analyzes the XMPP SRV records of a domain.
pub struct SrvAnalyzer<'a, T: ?Sized> {
    transport: &'a T,
    query_timeout: Duration,
}

impl<'a, T: DnsTransport + ?Sized> SrvAnalyzer<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self {
            transport,
            query_timeout: DNS_QUERY_TIMEOUT,
        }
    }

    pub fn with_query_timeout(mut self, timeout: Duration) -> Self {
        self.query_timeout = timeout;
        self
    }

    /// Queries both services against the servers chosen by `authority` and
    /// analyzes the answers.
    ///
    /// A failed query only empties its own table. If `cancel` fires, both
    /// tables come back as `NoRecords`.
    pub async fn analyze(
        &self,
        domain: &Domain,
        authority: &Authority,
        cancel: &CancellationToken,
    ) -> SrvAnalysis {
        let servers = authority.upstream();
        let (client, server) = tokio::select! {
            biased;
            () = cancel.cancelled() => {
                log::info!("SRV lookups for {domain} cancelled");
                (Vec::new(), Vec::new())
            }
            records = async {
                tokio::join!(
                    self.lookup(domain, XmppService::Client, &servers),
                    self.lookup(domain, XmppService::Server, &servers)
                )
            } => records,
        };
        analyze_records(client, server)
    }

    async fn lookup(
        &self,
        domain: &Domain,
        service: XmppService,
        servers: &NameServers,
    ) -> Vec<SrvRecord> {
        let name = domain.service_name(service.srv_prefix());
        match self
            .transport
            .query(servers, &name, QueryType::Srv, self.query_timeout)
            .await
        {
            Ok(answer) => {
                let records: Vec<SrvRecord> = answer
                    .into_iter()
                    .filter_map(|record| match record {
                        ResourceRecord::Srv(srv) => Some(srv),
                        other => {
                            log::debug!(
                                "Ignoring unexpected {} record in SRV answer for {name}",
                                other.type_name()
                            );
                            None
                        }
                    })
                    .collect();
                log::debug!("{name}: {} SRV record(s) via {servers}", records.len());
                records
            }
            Err(kind) => {
                log::info!("No {service} SRV records for {name} via {servers}: {kind}");
                Vec::new()
            }
        }
    }
}

/// Sorts, cross-references and annotates both record sets.
pub fn analyze_records(client: Vec<SrvRecord>, server: Vec<SrvRecord>) -> SrvAnalysis {
    let client_endpoints = endpoints(&client);
    let server_endpoints = endpoints(&server);
    let client_outcome = annotate(XmppService::Client, client.clone(), &server_endpoints);
    let server_outcome = annotate(XmppService::Server, server.clone(), &client_endpoints);
    SrvAnalysis {
        client: client_outcome,
        server: server_outcome,
    }
}

fn endpoints(records: &[SrvRecord]) -> HashSet<(&str, u16)> {
    records.iter().map(SrvRecord::endpoint).collect()
}
