//! Page fetching with ordered proxy fallback.
//!
//! [`ProxyFetcher`] tries each strategy in declaration order and returns the
//! first non-empty body. Network errors, timeouts, error statuses and empty
//! bodies only advance to the next strategy; the caller sees a single
//! [`FetchError::Exhausted`] once all of them have failed.

mod request;
mod strategy;

use std::sync::Arc;
use std::time::Duration;

use log::{debug, warn};

use crate::config::ProxyEndpoint;
use crate::error_handling::FetchError;

pub use strategy::{FetchStrategy, ProxyStrategy};

/// Fetches pages through an ordered list of strategies.
pub struct ProxyFetcher {
    strategies: Vec<Box<dyn FetchStrategy>>,
    timeout: Duration,
}

impl ProxyFetcher {
    /// Creates a fetcher from explicit strategies.
    ///
    /// `timeout` is the default per-attempt timeout used by [`fetch`](Self::fetch).
    pub fn new(strategies: Vec<Box<dyn FetchStrategy>>, timeout: Duration) -> Self {
        Self {
            strategies,
            timeout,
        }
    }

    /// Creates a fetcher with one [`ProxyStrategy`] per endpoint, sharing `client`.
    pub fn from_endpoints(
        client: Arc<reqwest::Client>,
        endpoints: &[ProxyEndpoint],
        timeout: Duration,
    ) -> Self {
        let strategies = endpoints
            .iter()
            .cloned()
            .map(|endpoint| {
                Box::new(ProxyStrategy::new(endpoint, Arc::clone(&client))) as Box<dyn FetchStrategy>
            })
            .collect();
        Self::new(strategies, timeout)
    }

    /// Number of configured strategies.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Fetches `target_url` with the default per-attempt timeout.
    pub async fn fetch(&self, target_url: &str) -> Result<String, FetchError> {
        self.fetch_with_timeout(target_url, self.timeout).await
    }

    /// Fetches `target_url`, giving each attempt at most `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Exhausted` carrying the last attempt's error when
    /// every strategy fails (or none is configured).
    pub async fn fetch_with_timeout(
        &self,
        target_url: &str,
        timeout: Duration,
    ) -> Result<String, FetchError> {
        let mut last_error: Option<FetchError> = None;

        for strategy in &self.strategies {
            match strategy.fetch(target_url, timeout).await {
                Ok(body) => {
                    debug!(
                        "[{}] fetched {} ({} bytes)",
                        strategy.name(),
                        target_url,
                        body.len()
                    );
                    return Ok(body);
                }
                Err(e) => {
                    debug!("Proxy attempt failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        let last_error = last_error
            .map(|e| e.to_string())
            .unwrap_or_else(|| "no proxy endpoints configured".to_string());
        warn!(
            "All {} proxy attempts failed for {}",
            self.strategies.len(),
            target_url
        );
        Err(FetchError::Exhausted {
            url: target_url.to_string(),
            attempts: self.strategies.len(),
            last_error,
        })
    }
}
