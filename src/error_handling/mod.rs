//! Error handling.
//!
//! This module provides:
//! - Error type definitions (DNS query failures, check errors, configuration
//!   and initialization errors)
//! - The single categorization function that maps resolver failures onto
//!   [`DnsErrorKind`]

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_resolve_error, categorize_response_code};
pub use types::{CheckError, ConfigError, DnsErrorKind, InitializationError};

#[cfg(test)]
mod tests {
    use super::*;
    use hickory_resolver::error::{ResolveError, ResolveErrorKind};
    use hickory_resolver::proto::error::{ProtoError, ProtoErrorKind};
    use hickory_resolver::proto::op::ResponseCode;
    use strum::IntoEnumIterator;

    #[test]
    fn test_response_code_categorization() {
        assert_eq!(
            categorize_response_code(ResponseCode::NXDomain),
            DnsErrorKind::NameNotFound
        );
        assert_eq!(
            categorize_response_code(ResponseCode::NoError),
            DnsErrorKind::NoAnswer
        );
        assert_eq!(
            categorize_response_code(ResponseCode::ServFail),
            DnsErrorKind::NoNameserversReachable
        );
        assert_eq!(
            categorize_response_code(ResponseCode::Refused),
            DnsErrorKind::NoNameserversReachable
        );
    }

    #[test]
    fn test_timeout_categorization() {
        let error = ResolveError::from(ResolveErrorKind::Timeout);
        assert_eq!(categorize_resolve_error(&error), DnsErrorKind::Timeout);

        // Timeouts surfaced by the protocol layer count as timeouts too
        let error = ResolveError::from(ProtoError::from(ProtoErrorKind::Timeout));
        assert_eq!(categorize_resolve_error(&error), DnsErrorKind::Timeout);
    }

    #[test]
    fn test_connection_failures_categorization() {
        let error = ResolveError::from(ResolveErrorKind::NoConnections);
        assert_eq!(
            categorize_resolve_error(&error),
            DnsErrorKind::NoNameserversReachable
        );

        let error = ResolveError::from("no servers answered");
        assert_eq!(
            categorize_resolve_error(&error),
            DnsErrorKind::NoNameserversReachable
        );
    }

    #[test]
    fn test_error_kinds_have_messages() {
        for kind in DnsErrorKind::iter() {
            assert!(!kind.to_string().is_empty());
        }
    }

    #[test]
    fn test_invalid_hostname_message() {
        let error = CheckError::InvalidHostname("a..b".to_string());
        assert_eq!(error.to_string(), "Invalid hostname: \"a..b\"");
    }
}
