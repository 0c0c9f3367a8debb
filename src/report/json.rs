//! JSON report.

use serde::Serialize;

use crate::dns::Authority;
use crate::srv::{FlagKind, Footnote, SrvOutcome, XmppService};
use crate::CheckReport;

#[derive(Serialize)]
struct ReportView<'a> {
    hostname: &'a str,
    authority: &'a Authority,
    client: ServiceView<'a>,
    server: ServiceView<'a>,
}

#[derive(Serialize)]
struct ServiceView<'a> {
    query_name: String,
    standard_port: u16,
    /// `false` is the "no records" warning case, distinct from a clean table.
    records_found: bool,
    records: Vec<RecordView<'a>>,
    footnotes: &'a [Footnote],
}

#[derive(Serialize)]
struct RecordView<'a> {
    target: &'a str,
    port: u16,
    priority: u16,
    weight: u16,
    notes: Vec<NoteView>,
}

#[derive(Serialize)]
struct NoteView {
    kind: FlagKind,
    marker: &'static str,
    footnote: usize,
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    let view = ReportView {
        hostname: report.hostname.as_str(),
        authority: &report.authority,
        client: service_view(report, XmppService::Client),
        server: service_view(report, XmppService::Server),
    };
    serde_json::to_string_pretty(&view)
}

fn service_view(report: &CheckReport, service: XmppService) -> ServiceView<'_> {
    let outcome: &SrvOutcome = report.outcome(service);
    ServiceView {
        query_name: report.hostname.service_name(service.srv_prefix()),
        standard_port: service.standard_port(),
        records_found: outcome.has_records(),
        records: outcome
            .records()
            .iter()
            .map(|annotated| RecordView {
                target: annotated.record.display_target(),
                port: annotated.record.port(),
                priority: annotated.record.priority(),
                weight: annotated.record.weight(),
                notes: annotated
                    .notes
                    .iter()
                    .map(|note| NoteView {
                        kind: note.kind,
                        marker: note.kind.marker(),
                        footnote: note.footnote,
                    })
                    .collect(),
            })
            .collect(),
        footnotes: outcome.footnotes(),
    }
}
