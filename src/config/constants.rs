//! Configuration constants.
//!
//! This module defines the protocol constants and operational defaults used
//! throughout the application.

use std::time::Duration;

/// Customary port for client-to-server XMPP connections.
pub const XMPP_CLIENT_PORT: u16 = 5222;
/// Customary port for server-to-server XMPP connections.
pub const XMPP_SERVER_PORT: u16 = 5269;

/// SRV owner-name prefix for XMPP client endpoints.
pub const XMPP_CLIENT_SRV_PREFIX: &str = "_xmpp-client._tcp";
/// SRV owner-name prefix for XMPP server endpoints.
pub const XMPP_SERVER_SRV_PREFIX: &str = "_xmpp-server._tcp";

/// Port used when querying name servers directly.
pub const DNS_PORT: u16 = 53;

// Network operation timeouts
/// Per-query DNS timeout in milliseconds.
/// The authority walk issues several sequential queries per label, so each one
/// has to fail fast.
pub const DNS_QUERY_TIMEOUT_MS: u64 = 2500;
/// Per-query DNS timeout.
pub const DNS_QUERY_TIMEOUT: Duration = Duration::from_millis(DNS_QUERY_TIMEOUT_MS);
/// Wall-clock budget for the whole authority walk, in seconds.
pub const AUTHORITY_WALK_BUDGET_SECS: u64 = 10;
/// Wall-clock budget for the whole authority walk.
pub const AUTHORITY_WALK_BUDGET: Duration = Duration::from_secs(AUTHORITY_WALK_BUDGET_SECS);
