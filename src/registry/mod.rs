//! Registry lookups.
//!
//! Resolving one identifier takes two page fetches: the search page yields a
//! record id, and the record's detail page yields the field map. Both go
//! through [`ProxyFetcher`]; parsing is kept in pure functions so it can be
//! tested against saved markup.

mod details;
mod search;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use url::Url;

use crate::config::CHECK_TIMEOUT_SECS;
use crate::error_handling::FetchError;
use crate::fetch::ProxyFetcher;
use crate::identifiers::Identifier;

pub use details::{
    parse_details, DetailFieldMap, INN_KEY, LEGAL_ADDRESS_KEY, OPERATOR_NAME_KEY,
    REGISTRATION_DATE_KEY, REGISTRATION_NUMBER_KEY,
};
pub use search::{page_mentions_identifier, parse_record_id};

/// Opaque id addressing one operator's detail page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RegistryRecordId(String);

impl RegistryRecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RegistryRecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Registry operations used by the batch orchestrator.
#[async_trait]
pub trait RegistryLookup: Send + Sync {
    /// Finds the record id for `identifier`.
    ///
    /// `Ok(None)` means the registry has no such operator.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the search page could not be fetched at all.
    async fn resolve_id(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<RegistryRecordId>, FetchError>;

    /// Fetches and parses the detail page of `record_id`.
    ///
    /// Never fails: on a fetch error the map holds only empty synthesized keys.
    async fn resolve_details(&self, record_id: &RegistryRecordId) -> DetailFieldMap;

    /// Quick presence check with a short timeout.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` when the search page could not be fetched, so a
    /// failed check is not mistaken for an absent operator.
    async fn check_exists(&self, identifier: &Identifier) -> Result<bool, FetchError>;
}

/// [`RegistryLookup`] backed by the live registry site.
pub struct RegistryResolver {
    fetcher: Arc<ProxyFetcher>,
    base_url: Url,
    check_timeout: Duration,
}

impl RegistryResolver {
    /// Creates a resolver for the public registry.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if the built-in registry URL is invalid.
    pub fn new(fetcher: Arc<ProxyFetcher>) -> Result<Self, url::ParseError> {
        Self::with_base_url(fetcher, crate::config::REGISTRY_BASE_URL)
    }

    /// Creates a resolver for a registry served at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `url::ParseError` if `base_url` is not an absolute URL.
    pub fn with_base_url(
        fetcher: Arc<ProxyFetcher>,
        base_url: &str,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            fetcher,
            base_url: Url::parse(base_url)?,
            check_timeout: Duration::from_secs(CHECK_TIMEOUT_SECS),
        })
    }

    /// Overrides the existence check timeout.
    pub fn with_check_timeout(mut self, timeout: Duration) -> Self {
        self.check_timeout = timeout;
        self
    }

    /// `?act=search&name_full=&inn=<id>&regn=`
    pub fn search_url(&self, identifier: &Identifier) -> String {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("act", "search")
            .append_pair("name_full", "")
            .append_pair("inn", identifier.as_str())
            .append_pair("regn", "");
        url.to_string()
    }

    /// `?id=<record id>`
    pub fn detail_url(&self, record_id: &RegistryRecordId) -> String {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .clear()
            .append_pair("id", record_id.as_str());
        url.to_string()
    }
}

#[async_trait]
impl RegistryLookup for RegistryResolver {
    async fn resolve_id(
        &self,
        identifier: &Identifier,
    ) -> Result<Option<RegistryRecordId>, FetchError> {
        let html = self.fetcher.fetch(&self.search_url(identifier)).await?;
        let record_id = parse_record_id(&html, identifier);
        if record_id.is_none() {
            debug!("[{}] no record id on search page", identifier);
        }
        Ok(record_id)
    }

    async fn resolve_details(&self, record_id: &RegistryRecordId) -> DetailFieldMap {
        match self.fetcher.fetch(&self.detail_url(record_id)).await {
            Ok(html) => parse_details(&html),
            Err(e) => {
                warn!("Failed to fetch details for record {}: {}", record_id, e);
                DetailFieldMap::empty()
            }
        }
    }

    async fn check_exists(&self, identifier: &Identifier) -> Result<bool, FetchError> {
        let html = self
            .fetcher
            .fetch_with_timeout(&self.search_url(identifier), self.check_timeout)
            .await?;
        Ok(page_mentions_identifier(&html, identifier))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolver(base: &str) -> RegistryResolver {
        let fetcher = Arc::new(ProxyFetcher::new(Vec::new(), Duration::from_secs(1)));
        RegistryResolver::with_base_url(fetcher, base).unwrap()
    }

    #[test]
    fn test_search_url_shape() {
        let r = resolver("https://registry.test/operators-list/");
        let id = Identifier::parse("7701234567").unwrap();
        assert_eq!(
            r.search_url(&id),
            "https://registry.test/operators-list/?act=search&name_full=&inn=7701234567&regn="
        );
    }

    #[test]
    fn test_detail_url_encodes_id() {
        let r = resolver("https://registry.test/operators-list/");
        assert_eq!(
            r.detail_url(&RegistryRecordId::new("77-18-012345")),
            "https://registry.test/operators-list/?id=77-18-012345"
        );
        assert_eq!(
            r.detail_url(&RegistryRecordId::new("a b")),
            "https://registry.test/operators-list/?id=a+b"
        );
    }

    #[test]
    fn test_relative_base_url_is_rejected() {
        let fetcher = Arc::new(ProxyFetcher::new(Vec::new(), Duration::from_secs(1)));
        assert!(RegistryResolver::with_base_url(fetcher, "/operators-list/").is_err());
    }

    #[test]
    fn test_default_base_url_parses() {
        let fetcher = Arc::new(ProxyFetcher::new(Vec::new(), Duration::from_secs(1)));
        assert!(RegistryResolver::new(fetcher).is_ok());
    }

    #[tokio::test]
    async fn test_fetch_failures_degrade_gracefully() {
        let r = resolver("https://registry.test/operators-list/");
        let id = Identifier::parse("7701234567").unwrap();

        let err = r.resolve_id(&id).await.unwrap_err();
        assert!(matches!(err, FetchError::Exhausted { .. }));

        let details = r.resolve_details(&RegistryRecordId::new("1")).await;
        assert_eq!(details, DetailFieldMap::empty());

        assert!(r.check_exists(&id).await.is_err());
    }
}
