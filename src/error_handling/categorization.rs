//! DNS error categorization.
//!
//! This module maps resolver failures onto [`DnsErrorKind`]. It is the only
//! place that inspects `hickory-resolver` error variants; the authority walk
//! and the SRV analyzer both go through it.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::error::ProtoErrorKind;
use hickory_resolver::proto::op::ResponseCode;

use super::types::DnsErrorKind;

/// Categorizes a `hickory_resolver` error into a `DnsErrorKind`.
///
/// # Arguments
///
/// * `error` - The resolver error to categorize
///
/// # Returns
///
/// The appropriate `DnsErrorKind` for the error.
pub fn categorize_resolve_error(error: &ResolveError) -> DnsErrorKind {
    match error.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => {
            categorize_response_code(*response_code)
        }
        ResolveErrorKind::Timeout => DnsErrorKind::Timeout,
        ResolveErrorKind::Proto(proto) if matches!(proto.kind(), ProtoErrorKind::Timeout) => {
            DnsErrorKind::Timeout
        }
        // NoConnections, I/O failures, malformed responses and resolver messages
        // all mean no server produced a usable answer
        _ => DnsErrorKind::NoNameserversReachable,
    }
}

/// Categorizes the response code of an empty answer.
///
/// NXDOMAIN means the name does not exist, NOERROR means it exists without
/// records of the requested type. Anything else (SERVFAIL, REFUSED, ...) is a
/// server that would not answer.
pub fn categorize_response_code(code: ResponseCode) -> DnsErrorKind {
    match code {
        ResponseCode::NXDomain => DnsErrorKind::NameNotFound,
        ResponseCode::NoError => DnsErrorKind::NoAnswer,
        _ => DnsErrorKind::NoNameserversReachable,
    }
}
