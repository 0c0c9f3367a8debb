//! XMPP SRV record analysis.
//!
//! This module provides:
//! - [`SrvRecord`] and its precedence order (priority, then weight)
//! - Per-record diagnostics ([`FlagKind`]) with deduplicated, numbered
//!   footnotes per record table
//! - [`SrvAnalyzer`], which fetches the `_xmpp-client._tcp` and
//!   `_xmpp-server._tcp` records and cross-references them

mod analyzer;
mod annotate;
mod record;
mod service;

// Re-export public API
pub use analyzer::{analyze_records, SrvAnalysis, SrvAnalyzer};
pub use annotate::{annotate, AnnotatedRecord, FlagKind, Footnote, Note, SrvOutcome};
pub use record::{sort_records, SrvRecord};
pub use service::XmppService;
