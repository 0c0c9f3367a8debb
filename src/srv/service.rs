//! The two XMPP services advertised through SRV.

use std::fmt;

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::{
    XMPP_CLIENT_PORT, XMPP_CLIENT_SRV_PREFIX, XMPP_SERVER_PORT, XMPP_SERVER_SRV_PREFIX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum XmppService {
    /// Client-to-server logins (`_xmpp-client._tcp`).
    Client,
    /// Server-to-server peering (`_xmpp-server._tcp`).
    Server,
}

impl XmppService {
    /// SRV owner-name prefix.
    pub fn srv_prefix(self) -> &'static str {
        match self {
            Self::Client => XMPP_CLIENT_SRV_PREFIX,
            Self::Server => XMPP_SERVER_SRV_PREFIX,
        }
    }

    /// Port used when no SRV record exists, and the one records are expected to use.
    pub fn standard_port(self) -> u16 {
        match self {
            Self::Client => XMPP_CLIENT_PORT,
            Self::Server => XMPP_SERVER_PORT,
        }
    }

    pub fn connection_kind(self) -> &'static str {
        match self {
            Self::Client => "client-to-server",
            Self::Server => "server-to-server",
        }
    }

    /// Who connects to the advertised endpoints.
    pub fn peer_noun(self) -> &'static str {
        match self {
            Self::Client => "clients",
            Self::Server => "servers",
        }
    }

    /// Service name as it appears in the SRV owner name.
    pub fn srv_service(self) -> &'static str {
        match self {
            Self::Client => "xmpp-client",
            Self::Server => "xmpp-server",
        }
    }
}

impl fmt::Display for XmppService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Client => "Client",
            Self::Server => "Server",
        })
    }
}
