//! DNS resolver initialization.
//!
//! This module builds the per-query `hickory-resolver` instances used by
//! [`HickoryTransport`](crate::dns::HickoryTransport).

use std::time::Duration;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::TokioAsyncResolver;

use crate::config::DNS_PORT;
use crate::dns::{HickoryTransport, NameServerSet};

/// Reads the host's resolver configuration.
///
/// Falls back to `hickory-resolver`'s built-in default servers when the system
/// configuration cannot be read (e.g. no `/etc/resolv.conf` in a container).
pub fn system_resolver_config() -> (ResolverConfig, ResolverOpts) {
    match hickory_resolver::system_conf::read_system_conf() {
        Ok(conf) => conf,
        Err(e) => {
            log::warn!("Failed to read system DNS configuration, using built-in defaults: {e}");
            (ResolverConfig::default(), ResolverOpts::default())
        }
    }
}

/// Resolver configuration that sends every query straight to `servers` on
/// port 53, with no search domains.
pub fn direct_resolver_config(servers: &NameServerSet) -> ResolverConfig {
    ResolverConfig::from_parts(
        None,
        Vec::new(),
        NameServerConfigGroup::from_ips_clear(servers.as_slice(), DNS_PORT, true),
    )
}

/// Builds a single-use resolver with a per-query timeout.
///
/// One attempt per query, no search-domain appending, and no hosts file, so
/// the answer always comes from the configured servers.
pub fn build_resolver(
    config: ResolverConfig,
    base_opts: &ResolverOpts,
    timeout: Duration,
) -> TokioAsyncResolver {
    let mut opts = base_opts.clone();
    opts.timeout = timeout;
    opts.attempts = 1;
    opts.ndots = 0;
    opts.use_hosts_file = false;
    TokioAsyncResolver::tokio(config, opts)
}

/// Initializes the transport used by the command-line checker.
pub fn init_transport() -> HickoryTransport {
    let (config, opts) = system_resolver_config();
    log::debug!(
        "System resolver: {} name server(s)",
        config.name_servers().len()
    );
    HickoryTransport::new(config, opts)
}
