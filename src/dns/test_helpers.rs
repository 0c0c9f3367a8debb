// Scripted transports shared by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{DnsTransport, NameServers, QueryType, ResourceRecord};
use crate::error_handling::DnsErrorKind;
use crate::srv::SrvRecord;

/// Answers from a fixed script keyed by `(name, type)` and records every call.
///
/// Unscripted names answer `NameNotFound`; an empty `Direct` server set
/// answers `NoNameserversReachable`, as the real transport does.
#[derive(Default)]
pub struct ScriptedTransport {
    answers: HashMap<(String, QueryType), Result<Vec<ResourceRecord>, DnsErrorKind>>,
    calls: Mutex<Vec<(NameServers, String, QueryType)>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn answer(mut self, name: &str, query_type: QueryType, records: Vec<ResourceRecord>) -> Self {
        self.answers
            .insert((name.to_string(), query_type), Ok(records));
        self
    }

    pub fn fail(mut self, name: &str, query_type: QueryType, kind: DnsErrorKind) -> Self {
        self.answers
            .insert((name.to_string(), query_type), Err(kind));
        self
    }

    pub fn calls(&self) -> Vec<(NameServers, String, QueryType)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl DnsTransport for ScriptedTransport {
    async fn query(
        &self,
        servers: &NameServers,
        name: &str,
        query_type: QueryType,
        _timeout: Duration,
    ) -> Result<Vec<ResourceRecord>, DnsErrorKind> {
        self.calls
            .lock()
            .unwrap()
            .push((servers.clone(), name.to_string(), query_type));
        if let NameServers::Direct(set) = servers {
            if set.is_empty() {
                return Err(DnsErrorKind::NoNameserversReachable);
            }
        }
        self.answers
            .get(&(name.to_string(), query_type))
            .cloned()
            .unwrap_or(Err(DnsErrorKind::NameNotFound))
    }
}

/// Never answers; for deadline and cancellation tests.
pub struct StalledTransport;

#[async_trait]
impl DnsTransport for StalledTransport {
    async fn query(
        &self,
        _servers: &NameServers,
        _name: &str,
        _query_type: QueryType,
        _timeout: Duration,
    ) -> Result<Vec<ResourceRecord>, DnsErrorKind> {
        tokio::time::sleep(Duration::from_secs(30)).await;
        Err(DnsErrorKind::Timeout)
    }
}

pub fn ns(host: &str) -> ResourceRecord {
    ResourceRecord::Ns(host.to_string())
}

pub fn a(address: &str) -> ResourceRecord {
    ResourceRecord::A(address.parse().unwrap())
}

pub fn aaaa(address: &str) -> ResourceRecord {
    ResourceRecord::Aaaa(address.parse().unwrap())
}

pub fn srv(target: &str, port: u16, priority: u16, weight: u16) -> ResourceRecord {
    ResourceRecord::Srv(SrvRecord::new(target, port, priority, weight))
}
