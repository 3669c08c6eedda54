//! Proxy endpoint configuration.
//!
//! The registry site is unreliable when reached directly, and public relays
//! each have unpredictable uptime. A fetch therefore walks an ordered list of
//! endpoints; each one knows how to wrap a target URL and how to unwrap the
//! relay's response.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// How the target URL is attached to an endpoint prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlEncoding {
    /// Target URL is percent-encoded, typically as a query parameter value
    Encoded,
    /// Target URL is appended verbatim
    Raw,
}

/// Shape of the relay's response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// The body is the upstream page itself
    Html,
    /// The body is a JSON object carrying the page under `contents`
    JsonContents,
}

/// One URL-rewriting relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyEndpoint {
    pub name: Cow<'static, str>,
    pub prefix: Cow<'static, str>,
    pub encoding: UrlEncoding,
    pub format: ResponseFormat,
}

impl ProxyEndpoint {
    pub const fn new_static(
        name: &'static str,
        prefix: &'static str,
        encoding: UrlEncoding,
        format: ResponseFormat,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            prefix: Cow::Borrowed(prefix),
            encoding,
            format,
        }
    }

    /// Endpoint that sends requests straight to the target.
    pub const fn direct() -> Self {
        Self::new_static("direct", "", UrlEncoding::Raw, ResponseFormat::Html)
    }

    /// Builds the URL actually requested for `target_url`.
    pub fn rewrite(&self, target_url: &str) -> String {
        match self.encoding {
            UrlEncoding::Raw => format!("{}{}", self.prefix, target_url),
            UrlEncoding::Encoded => {
                let encoded: String =
                    url::form_urlencoded::byte_serialize(target_url.as_bytes()).collect();
                format!("{}{}", self.prefix, encoded)
            }
        }
    }
}

impl fmt::Display for ProxyEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Parses a CLI proxy spec.
///
/// Accepted forms: `raw:<prefix>`, `encoded:<prefix>`, `json:<prefix>`
/// (encoded, JSON-wrapped response), or a bare prefix (encoded).
impl FromStr for ProxyEndpoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("proxy prefix must not be empty".to_string());
        }
        let (encoding, format, prefix) = if let Some(rest) = s.strip_prefix("raw:") {
            (UrlEncoding::Raw, ResponseFormat::Html, rest)
        } else if let Some(rest) = s.strip_prefix("encoded:") {
            (UrlEncoding::Encoded, ResponseFormat::Html, rest)
        } else if let Some(rest) = s.strip_prefix("json:") {
            (UrlEncoding::Encoded, ResponseFormat::JsonContents, rest)
        } else {
            (UrlEncoding::Encoded, ResponseFormat::Html, s)
        };
        Ok(Self {
            name: Cow::Owned(prefix.to_string()),
            prefix: Cow::Owned(prefix.to_string()),
            encoding,
            format,
        })
    }
}

/// Default relays, in the order they are tried.
pub static PROXY_ENDPOINTS: &[ProxyEndpoint] = &[
    ProxyEndpoint::direct(),
    ProxyEndpoint::new_static(
        "allorigins-raw",
        "https://api.allorigins.win/raw?url=",
        UrlEncoding::Encoded,
        ResponseFormat::Html,
    ),
    ProxyEndpoint::new_static(
        "corsproxy",
        "https://corsproxy.io/?url=",
        UrlEncoding::Encoded,
        ResponseFormat::Html,
    ),
    ProxyEndpoint::new_static(
        "allorigins-get",
        "https://api.allorigins.win/get?url=",
        UrlEncoding::Encoded,
        ResponseFormat::JsonContents,
    ),
    ProxyEndpoint::new_static(
        "cors-anywhere",
        "https://cors-anywhere.herokuapp.com/",
        UrlEncoding::Raw,
        ResponseFormat::Html,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "https://pd.rkn.gov.ru/operators-registry/operators-list/?id=77-18-012345";

    #[test]
    fn test_rewrite_raw_appends_target_verbatim() {
        let endpoint = PROXY_ENDPOINTS
            .iter()
            .find(|e| e.name == "cors-anywhere")
            .expect("cors-anywhere endpoint should exist");
        assert_eq!(
            endpoint.rewrite(TARGET),
            format!("https://cors-anywhere.herokuapp.com/{}", TARGET)
        );
    }

    #[test]
    fn test_rewrite_encoded_escapes_reserved_characters() {
        let endpoint = &PROXY_ENDPOINTS[1];
        let rewritten = endpoint.rewrite(TARGET);
        assert!(rewritten.starts_with("https://api.allorigins.win/raw?url=https%3A%2F%2F"));
        assert!(rewritten.contains("%3Fid%3D77-18-012345"));
        assert!(!rewritten["https://api.allorigins.win/raw?url=".len()..].contains('?'));
    }

    #[test]
    fn test_direct_endpoint_is_first() {
        assert_eq!(PROXY_ENDPOINTS[0], ProxyEndpoint::direct());
        assert_eq!(PROXY_ENDPOINTS[0].rewrite(TARGET), TARGET);
    }

    #[test]
    fn test_parse_proxy_spec_forms() {
        let raw: ProxyEndpoint = "raw:http://relay/".parse().unwrap();
        assert_eq!(raw.encoding, UrlEncoding::Raw);
        assert_eq!(raw.prefix, "http://relay/");

        let json: ProxyEndpoint = "json:http://relay/get?url=".parse().unwrap();
        assert_eq!(json.encoding, UrlEncoding::Encoded);
        assert_eq!(json.format, ResponseFormat::JsonContents);

        let bare: ProxyEndpoint = "http://relay/?u=".parse().unwrap();
        assert_eq!(bare.encoding, UrlEncoding::Encoded);
        assert_eq!(bare.format, ResponseFormat::Html);

        assert!("  ".parse::<ProxyEndpoint>().is_err());
    }
}
