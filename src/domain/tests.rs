// Domain module tests.

use super::*;

#[test]
fn test_parse_normalizes_case_whitespace_and_trailing_dot() {
    let domain = Domain::parse("  Jabber.ORG. ").unwrap();
    assert_eq!(domain.as_str(), "jabber.org");
    assert_eq!(domain.fqdn(), "jabber.org.");
    assert_eq!(domain.to_string(), "jabber.org");
}

#[test]
fn test_parse_rejects_double_dot() {
    assert_eq!(
        Domain::parse("a..example.com"),
        Err(CheckError::InvalidHostname("a..example.com".to_string()))
    );
    // A doubled trailing dot is an empty label too
    assert!(Domain::parse("example.com..").is_err());
}

#[test]
fn test_parse_rejects_empty() {
    assert!(Domain::parse("").is_err());
    assert!(Domain::parse("   ").is_err());
    assert!(Domain::parse(".").is_err());
}

#[test]
fn test_from_str() {
    let domain: Domain = "example.com".parse().unwrap();
    assert_eq!(domain.as_str(), "example.com");
    assert!("x..y".parse::<Domain>().is_err());
}

#[test]
fn test_labels() {
    let domain = Domain::parse("a.b.example.com").unwrap();
    assert_eq!(domain.labels(), vec!["a", "b", "example", "com"]);
}

#[test]
fn test_walk_steps_broad_to_narrow_skipping_tld() {
    let domain = Domain::parse("a.b.example.com").unwrap();
    assert_eq!(
        domain.walk_steps(),
        vec!["example.com", "b.example.com", "a.b.example.com"]
    );
}

#[test]
fn test_walk_steps_two_labels() {
    let domain = Domain::parse("example.com").unwrap();
    assert_eq!(domain.walk_steps(), vec!["example.com"]);
}

#[test]
fn test_walk_steps_single_label_is_empty() {
    let domain = Domain::parse("localhost").unwrap();
    assert!(domain.walk_steps().is_empty());
}

#[test]
fn test_service_name() {
    let domain = Domain::parse("example.com").unwrap();
    assert_eq!(
        domain.service_name("_xmpp-client._tcp"),
        "_xmpp-client._tcp.example.com."
    );
}
