// Shared test helpers: an in-memory DNS transport and record builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use check_xmpp_dns::dns::{NameServers, QueryType, ResourceRecord};
use check_xmpp_dns::srv::SrvRecord;
use check_xmpp_dns::{DnsErrorKind, DnsTransport};

/// Authoritative data for one fake zone tree, keyed by `(name, type)`.
///
/// Names that were never scripted answer `NameNotFound`. Every query is
/// recorded so tests can check which servers were asked.
#[derive(Default)]
pub struct FakeDns {
    zone: HashMap<(String, QueryType), Result<Vec<ResourceRecord>, DnsErrorKind>>,
    queries: Mutex<Vec<(NameServers, String, QueryType)>>,
}

#[allow(dead_code)] // Not every test file uses every builder
impl FakeDns {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, query_type: QueryType, records: Vec<ResourceRecord>) -> Self {
        self.zone.insert((name.to_string(), query_type), Ok(records));
        self
    }

    pub fn failing(mut self, name: &str, query_type: QueryType, kind: DnsErrorKind) -> Self {
        self.zone.insert((name.to_string(), query_type), Err(kind));
        self
    }

    /// Delegates `zone` to a single name server at `address`.
    pub fn delegate(self, zone: &str, ns_host: &str, address: &str) -> Self {
        self.with(zone, QueryType::Ns, vec![ResourceRecord::Ns(ns_host.to_string())])
            .with(
                ns_host,
                QueryType::A,
                vec![ResourceRecord::A(address.parse().expect("valid IPv4"))],
            )
    }

    pub fn queries(&self) -> Vec<(NameServers, String, QueryType)> {
        self.queries.lock().expect("query log poisoned").clone()
    }

    pub fn srv_queries(&self) -> Vec<(NameServers, String)> {
        self.queries()
            .into_iter()
            .filter(|(_, _, query_type)| *query_type == QueryType::Srv)
            .map(|(servers, name, _)| (servers, name))
            .collect()
    }
}

#[async_trait]
impl DnsTransport for FakeDns {
    async fn query(
        &self,
        servers: &NameServers,
        name: &str,
        query_type: QueryType,
        _timeout: Duration,
    ) -> Result<Vec<ResourceRecord>, DnsErrorKind> {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push((servers.clone(), name.to_string(), query_type));
        self.zone
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(Err(DnsErrorKind::NameNotFound))
    }
}

pub fn srv(target: &str, port: u16, priority: u16, weight: u16) -> ResourceRecord {
    ResourceRecord::Srv(SrvRecord::new(target, port, priority, weight))
}
