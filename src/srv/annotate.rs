//! Per-record diagnostics and footnotes.

use std::collections::HashSet;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use super::record::{sort_records, SrvRecord};
use super::service::XmppService;

/// A diagnostic attached to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    /// The same host+port is advertised for both clients and servers.
    ClientServerPortCollision,
    /// The port differs from the service's customary port.
    NonStandardPort,
}

impl FlagKind {
    /// Short note shown next to the record.
    pub fn marker(self) -> &'static str {
        match self {
            Self::ClientServerPortCollision => {
                "ERROR This host+port is listed for both client and server records"
            }
            Self::NonStandardPort => "INFO Non-standard port",
        }
    }

    /// Explanation shown once per record table.
    pub fn footnote_text(self, service: XmppService) -> String {
        match self {
            Self::ClientServerPortCollision => "XMPP clients and servers use different \
                handshakes when connecting to servers, so it is not possible for a single \
                hostname+port combination to accept traffic from clients and other servers."
                .to_string(),
            Self::NonStandardPort => format!(
                "The customary port for {} connections is {}. Using a different port isn't \
                 necessarily bad ({} that correctly use DNS SRV records will happily connect \
                 to this port) but it is worth pointing out in case it was an accident.",
                service.connection_kind(),
                service.standard_port(),
                service.peer_noun()
            ),
        }
    }
}

/// A flag on one record, with the footnote that explains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Note {
    pub kind: FlagKind,
    pub footnote: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnotatedRecord {
    pub record: SrvRecord,
    pub notes: Vec<Note>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footnote {
    /// 1-based, in order of first use within the table.
    pub number: usize,
    pub kind: FlagKind,
    pub text: String,
}

/// Analysis result for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SrvOutcome {
    /// The query failed or returned no SRV records.
    NoRecords,
    /// Records in precedence order with their notes and footnotes.
    Records {
        records: Vec<AnnotatedRecord>,
        footnotes: Vec<Footnote>,
    },
}

impl SrvOutcome {
    pub fn records(&self) -> &[AnnotatedRecord] {
        match self {
            Self::NoRecords => &[],
            Self::Records { records, .. } => records,
        }
    }

    pub fn footnotes(&self) -> &[Footnote] {
        match self {
            Self::NoRecords => &[],
            Self::Records { footnotes, .. } => footnotes,
        }
    }

    pub fn has_records(&self) -> bool {
        matches!(self, Self::Records { .. })
    }
}

/// Flag kinds in first-use order; position + 1 is the footnote number.
#[derive(Default)]
struct FootnoteTable {
    kinds: Vec<FlagKind>,
}

impl FootnoteTable {
    fn number_for(&mut self, kind: FlagKind) -> usize {
        match self.kinds.iter().position(|seen| *seen == kind) {
            Some(index) => index + 1,
            None => {
                self.kinds.push(kind);
                self.kinds.len()
            }
        }
    }

    fn into_footnotes(self, service: XmppService) -> Vec<Footnote> {
        self.kinds
            .into_iter()
            .enumerate()
            .map(|(index, kind)| Footnote {
                number: index + 1,
                kind,
                text: kind.footnote_text(service),
            })
            .collect()
    }
}

/// Sorts and annotates the records of one service.
///
/// `other_endpoints` holds the `(target, port)` pairs advertised for the other
/// service. Collisions are checked before the port, so a record flagged for
/// both lists the collision first.
pub fn annotate(
    service: XmppService,
    records: Vec<SrvRecord>,
    other_endpoints: &HashSet<(&str, u16)>,
) -> SrvOutcome {
    if records.is_empty() {
        return SrvOutcome::NoRecords;
    }

    let mut table = FootnoteTable::default();
    let records = sort_records(records)
        .into_iter()
        .map(|record| {
            let mut flags = Vec::new();
            if other_endpoints.contains(&record.endpoint()) {
                flags.push(FlagKind::ClientServerPortCollision);
            }
            if record.port() != service.standard_port() {
                flags.push(FlagKind::NonStandardPort);
            }
            let notes = flags
                .into_iter()
                .map(|kind| Note {
                    kind,
                    footnote: table.number_for(kind),
                })
                .collect();
            AnnotatedRecord { record, notes }
        })
        .collect();

    SrvOutcome::Records {
        records,
        footnotes: table.into_footnotes(service),
    }
}
