//! check_xmpp_dns library: XMPP DNS SRV record checking
//!
//! This library checks that a domain's DNS SRV records correctly advertise its
//! XMPP client (`_xmpp-client._tcp`) and server (`_xmpp-server._tcp`)
//! endpoints. To avoid stale answers from caching resolvers, it first walks the
//! domain's labels to find the authoritative name servers and queries them
//! directly, then sorts the records by SRV precedence and flags non-standard
//! ports and endpoints shared between clients and servers.
//!
//! # Example
//!
//! ```no_run
//! use check_xmpp_dns::{init_transport, render_text, run_check, Config};
//! use tokio_util::sync::CancellationToken;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     hostname: "jabber.org".to_string(),
//!     ..Default::default()
//! };
//!
//! let transport = init_transport();
//! let report = run_check(&config, &transport, &CancellationToken::new()).await?;
//! println!("{}", render_text(&report));
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;
pub mod report;
pub mod srv;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, OutputFormat};
pub use dns::{Authority, AuthorityResolver, DnsTransport, HickoryTransport, NameServers};
pub use domain::Domain;
pub use error_handling::{CheckError, DnsErrorKind};
pub use initialization::init_transport;
pub use report::{render_json, render_text};
pub use run::{run_check, CheckReport};
pub use srv::{SrvAnalysis, SrvAnalyzer, SrvOutcome, XmppService};

// Internal run module (ties the authority walk and the SRV analysis together)
mod run {
    use tokio_util::sync::CancellationToken;

    use crate::config::Config;
    use crate::dns::{Authority, AuthorityResolver, DnsTransport, NameServers};
    use crate::domain::Domain;
    use crate::error_handling::CheckError;
    use crate::srv::{SrvAnalyzer, SrvOutcome, XmppService};

    /// Results of checking one domain.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct CheckReport {
        /// Normalized domain that was checked
        pub hostname: Domain,
        /// Outcome of the authoritative name-server walk
        pub authority: Authority,
        /// `_xmpp-client._tcp` analysis
        pub client: SrvOutcome,
        /// `_xmpp-server._tcp` analysis
        pub server: SrvOutcome,
    }

    impl CheckReport {
        /// Analysis for one service.
        pub fn outcome(&self, service: XmppService) -> &SrvOutcome {
            match service {
                XmppService::Client => &self.client,
                XmppService::Server => &self.server,
            }
        }
    }

    /// Checks the XMPP SRV records of `config.hostname`.
    ///
    /// Discovers the authoritative name servers (unless `skip_authority` is set),
    /// then queries and analyzes both SRV record sets against them. DNS failures
    /// never surface as errors: a failed walk falls back to the system resolver
    /// and a failed SRV query reports `NoRecords` for that service.
    ///
    /// # Arguments
    ///
    /// * `config` - Hostname and query settings
    /// * `transport` - Performs the individual DNS queries
    /// * `cancel` - Aborts in-flight queries when cancelled
    ///
    /// # Errors
    ///
    /// Returns `CheckError::InvalidHostname` if the hostname is empty or contains
    /// `..`. No query is issued in that case.
    pub async fn run_check<T: DnsTransport + ?Sized>(
        config: &Config,
        transport: &T,
        cancel: &CancellationToken,
    ) -> Result<CheckReport, CheckError> {
        let domain = Domain::parse(&config.hostname)?;
        log::info!("Checking XMPP SRV records for {domain}");

        let authority = if config.skip_authority {
            log::debug!("Skipping authority walk for {domain}");
            Authority::Known(NameServers::System)
        } else {
            AuthorityResolver::new(transport)
                .with_query_timeout(config.query_timeout())
                .with_walk_budget(config.walk_budget())
                .with_ipv6(config.ipv6)
                .resolve(&domain, cancel)
                .await
        };

        let analysis = SrvAnalyzer::new(transport)
            .with_query_timeout(config.query_timeout())
            .analyze(&domain, &authority, cancel)
            .await;

        Ok(CheckReport {
            hostname: domain,
            authority,
            client: analysis.client,
            server: analysis.server,
        })
    }
}
