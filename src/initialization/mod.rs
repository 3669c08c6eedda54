//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger
//! - HTTP client
//! - Proxy fetcher and registry resolver
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, PROXY_ENDPOINTS};
use crate::fetch::ProxyFetcher;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Builds the proxy fetcher for `config`.
///
/// Endpoints given with `--proxy` replace the built-in list; otherwise the
/// built-in list is used in its declared order.
pub fn init_fetcher(client: Arc<reqwest::Client>, config: &Config) -> Arc<ProxyFetcher> {
    let endpoints = if config.proxies.is_empty() {
        PROXY_ENDPOINTS
    } else {
        config.proxies.as_slice()
    };
    Arc::new(ProxyFetcher::from_endpoints(
        client,
        endpoints,
        Duration::from_secs(config.timeout_seconds),
    ))
}
