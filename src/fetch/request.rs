//! HTTP request building.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE};

/// Applies the browser-like Accept headers every registry request carries.
pub(crate) fn apply_browser_headers(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    builder
        .header(ACCEPT, crate::config::ACCEPT)
        .header(ACCEPT_LANGUAGE, crate::config::ACCEPT_LANGUAGE)
}
