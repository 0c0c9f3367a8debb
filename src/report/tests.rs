//! Report rendering tests.

use super::*;
use crate::dns::{Authority, NameServerSet, NameServers};
use crate::domain::Domain;
use crate::srv::{analyze_records, SrvRecord};
use crate::CheckReport;

fn report(authority: Authority, client: Vec<SrvRecord>, server: Vec<SrvRecord>) -> CheckReport {
    let analysis = analyze_records(client, server);
    CheckReport {
        hostname: Domain::parse("example.net").unwrap(),
        authority,
        client: analysis.client,
        server: analysis.server,
    }
}

fn authoritative() -> Authority {
    let set: NameServerSet = ["192.0.2.1", "192.0.2.2"]
        .iter()
        .map(|address| address.parse().unwrap())
        .collect();
    Authority::Known(NameServers::Direct(set))
}

#[test]
fn test_text_lists_authoritative_servers() {
    let text = render_text(&report(authoritative(), Vec::new(), Vec::new()));
    assert!(text.starts_with("Name servers queried for example.net: 192.0.2.1, 192.0.2.2\n"));
}

#[test]
fn test_text_warns_when_authority_unknown() {
    let text = render_text(&report(Authority::Unknown, Vec::new(), Vec::new()));
    assert!(text.starts_with("Could not determine the authoritative name servers for example.net."));
    assert!(text.contains("up to the lifetime of the TTL"));
}

#[test]
fn test_text_missing_records_warnings() {
    let text = render_text(&report(authoritative(), Vec::new(), Vec::new()));
    assert!(text.contains(
        "ERROR: No xmpp-client DNS SRV records found! XMPP clients will try to login to \
         example.net on port 5222."
    ));
    assert!(text.contains(
        "ERROR: No xmpp-server DNS SRV records found! Other XMPP servers will try to peer \
         with example.net on port 5269."
    ));
}

#[test]
fn test_text_table_rows_in_precedence_order_with_notes() {
    let text = render_text(&report(
        authoritative(),
        vec![
            SrvRecord::new("b.example.net.", 5222, 10, 0),
            SrvRecord::new("a.example.net.", 443, 0, 5),
        ],
        vec![SrvRecord::new("a.example.net.", 5269, 0, 0)],
    ));

    let lines: Vec<&str> = text.lines().collect();
    let header = lines
        .iter()
        .position(|line| line.starts_with("Target"))
        .unwrap();
    assert!(lines[header].contains("Port") && lines[header].contains("Notes"));
    assert!(lines[header + 1].starts_with("a.example.net"));
    assert!(lines[header + 1].ends_with("INFO Non-standard port [1]"));
    assert!(lines[header + 2].starts_with("b.example.net"));
    assert!(!lines[header + 2].contains('['));
    assert!(lines[header + 3].starts_with("1. The customary port for client-to-server"));
    assert!(!text.contains("a.example.net."));
}

#[test]
fn test_text_columns_aligned() {
    let text = render_text(&report(
        authoritative(),
        vec![
            SrvRecord::new("short.example.net.", 5222, 0, 0),
            SrvRecord::new("a-much-longer-host.example.net.", 5222, 1, 0),
        ],
        Vec::new(),
    ));
    let port_columns: Vec<usize> = text
        .lines()
        .filter(|line| line.contains("5222") || line.starts_with("Target"))
        .filter(|line| !line.starts_with("ERROR"))
        .map(|line| line.find("5222").or_else(|| line.find("Port")).unwrap())
        .collect();
    assert_eq!(port_columns.len(), 3);
    assert!(port_columns.windows(2).all(|pair| pair[0] == pair[1]));
}

#[test]
fn test_json_marks_missing_records() {
    let json = render_json(&report(Authority::Unknown, Vec::new(), Vec::new())).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["authority"]["status"], "unknown");
    assert_eq!(value["client"]["records_found"], false);
    assert_eq!(value["client"]["standard_port"], 5222);
    assert_eq!(value["server"]["query_name"], "_xmpp-server._tcp.example.net.");
}
