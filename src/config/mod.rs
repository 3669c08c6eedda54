//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, delays, spreadsheet layout, etc.)
//! - HTTP header constants
//! - Proxy endpoint list
//! - Regex pattern sources
//! - CLI option types and parsing

mod constants;
mod headers;
pub mod patterns;
mod proxies;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use proxies::{ProxyEndpoint, ResponseFormat, UrlEncoding, PROXY_ENDPOINTS};
pub use types::{Config, LogFormat, LogLevel};
