//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON output)
//! - DNS resolvers used by the transport

mod logger;
mod resolver;

// Re-export public API
pub use logger::init_logger_with;
pub use resolver::{build_resolver, direct_resolver_config, init_transport, system_resolver_config};
