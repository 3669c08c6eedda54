//! Fetch strategies.
//!
//! A strategy is one way of getting a page body for a target URL. The only
//! production strategy is [`ProxyStrategy`], which rewrites the URL for one
//! relay endpoint; tests substitute their own.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

use super::request::apply_browser_headers;
use crate::config::{ProxyEndpoint, ResponseFormat};
use crate::error_handling::FetchError;

/// One attempt at fetching a page.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// Name used in logs and error messages.
    fn name(&self) -> &str;

    /// Fetches `target_url` and returns a non-empty body.
    async fn fetch(&self, target_url: &str, timeout: Duration) -> Result<String, FetchError>;
}

/// Envelope returned by JSON-wrapping relays.
#[derive(Debug, Deserialize)]
struct ContentsEnvelope {
    contents: Option<String>,
}

/// Fetches through a single relay endpoint.
pub struct ProxyStrategy {
    endpoint: ProxyEndpoint,
    client: Arc<reqwest::Client>,
}

impl ProxyStrategy {
    pub fn new(endpoint: ProxyEndpoint, client: Arc<reqwest::Client>) -> Self {
        Self { endpoint, client }
    }

    fn unwrap_body(&self, body: String) -> Result<String, FetchError> {
        match self.endpoint.format {
            ResponseFormat::Html => Ok(body),
            ResponseFormat::JsonContents => {
                let envelope: ContentsEnvelope =
                    serde_json::from_str(&body).map_err(|source| FetchError::Envelope {
                        proxy: self.name().to_string(),
                        source,
                    })?;
                Ok(envelope.contents.unwrap_or_default())
            }
        }
    }
}

#[async_trait]
impl FetchStrategy for ProxyStrategy {
    fn name(&self) -> &str {
        &self.endpoint.name
    }

    async fn fetch(&self, target_url: &str, timeout: Duration) -> Result<String, FetchError> {
        let request_url = self.endpoint.rewrite(target_url);
        debug!("[{}] GET {}", self.name(), request_url);

        let response = apply_browser_headers(self.client.get(&request_url))
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(self.name(), e))?
            .error_for_status()
            .map_err(|e| FetchError::from_reqwest(self.name(), e))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(self.name(), e))?;
        let body = self.unwrap_body(body)?;

        if body.trim().is_empty() {
            return Err(FetchError::EmptyBody {
                proxy: self.name().to_string(),
            });
        }
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UrlEncoding;

    fn strategy(format: ResponseFormat) -> ProxyStrategy {
        ProxyStrategy::new(
            ProxyEndpoint::new_static("test", "http://relay/?u=", UrlEncoding::Encoded, format),
            Arc::new(reqwest::Client::new()),
        )
    }

    #[test]
    fn test_unwrap_html_passes_through() {
        let body = strategy(ResponseFormat::Html)
            .unwrap_body("<html></html>".to_string())
            .unwrap();
        assert_eq!(body, "<html></html>");
    }

    #[test]
    fn test_unwrap_json_contents() {
        let body = strategy(ResponseFormat::JsonContents)
            .unwrap_body(r#"{"contents":"<table></table>","status":{"http_code":200}}"#.to_string())
            .unwrap();
        assert_eq!(body, "<table></table>");
    }

    #[test]
    fn test_unwrap_json_without_contents_is_empty() {
        let body = strategy(ResponseFormat::JsonContents)
            .unwrap_body(r#"{"status":{"http_code":500}}"#.to_string())
            .unwrap();
        assert!(body.is_empty());
    }

    #[test]
    fn test_unwrap_json_rejects_html() {
        let err = strategy(ResponseFormat::JsonContents)
            .unwrap_body("<html>rate limited</html>".to_string())
            .unwrap_err();
        assert!(matches!(err, FetchError::Envelope { .. }));
    }
}
