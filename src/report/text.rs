//! Plain-text report.

use std::fmt::Write;

use crate::srv::{AnnotatedRecord, Footnote, SrvOutcome, XmppService};
use crate::CheckReport;

const HEADERS: [&str; 5] = ["Target", "Port", "Priority", "Weight", "Notes"];

/// Renders the report as plain text.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    let hostname = report.hostname.as_str();

    if report.authority.is_known() {
        let _ = writeln!(
            out,
            "Name servers queried for {hostname}: {}",
            report.authority.upstream()
        );
    } else {
        let _ = writeln!(
            out,
            "Could not determine the authoritative name servers for {hostname}. \
             These results come from the default resolver and might be stale, \
             up to the lifetime of the TTL."
        );
    }

    for service in [XmppService::Client, XmppService::Server] {
        out.push('\n');
        let _ = writeln!(out, "{service} records for {hostname}");
        match report.outcome(service) {
            SrvOutcome::NoRecords => {
                let _ = writeln!(out, "{}", missing_records_warning(service, hostname));
            }
            SrvOutcome::Records { records, footnotes } => {
                let _ = writeln!(out, "{}", service_blurb(service));
                render_table(&mut out, records);
                render_footnotes(&mut out, footnotes);
            }
        }
    }
    out
}

fn service_blurb(service: XmppService) -> &'static str {
    match service {
        XmppService::Client => "XMPP clients will use these when logging in.",
        XmppService::Server => "Other XMPP servers will use these when peering with this domain.",
    }
}

fn missing_records_warning(service: XmppService, hostname: &str) -> String {
    let consequence = match service {
        XmppService::Client => format!(
            "XMPP clients will try to login to {hostname} on port {}. \
             If this is incorrect then logging in will fail.",
            service.standard_port()
        ),
        XmppService::Server => format!(
            "Other XMPP servers will try to peer with {hostname} on port {}. \
             If this is incorrect then peering won't work correctly.",
            service.standard_port()
        ),
    };
    format!(
        "ERROR: No {} DNS SRV records found! {consequence}",
        service.srv_service()
    )
}

fn render_table(out: &mut String, records: &[AnnotatedRecord]) {
    let rows: Vec<[String; 5]> = records
        .iter()
        .map(|annotated| {
            let record = &annotated.record;
            let notes = annotated
                .notes
                .iter()
                .map(|note| format!("{} [{}]", note.kind.marker(), note.footnote))
                .collect::<Vec<_>>()
                .join("; ");
            [
                record.display_target().to_string(),
                record.port().to_string(),
                record.priority().to_string(),
                record.weight().to_string(),
                notes,
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    write_row(out, &HEADERS.map(String::from), &widths);
    for row in &rows {
        write_row(out, row, &widths);
    }
}

fn write_row(out: &mut String, cells: &[String; 5], widths: &[usize; 5]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    let _ = writeln!(out, "{}", line.trim_end());
}

fn render_footnotes(out: &mut String, footnotes: &[Footnote]) {
    for footnote in footnotes {
        let _ = writeln!(out, "{}. {}", footnote.number, footnote.text);
    }
}
