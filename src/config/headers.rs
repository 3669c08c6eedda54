//! HTTP request header constants.
//!
//! The registry answers browser-looking requests more reliably, so every
//! attempt carries the same Accept headers a desktop browser would send.

/// Accept header sent with every registry request
pub const ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
/// Accept-Language header sent with every registry request
pub const ACCEPT_LANGUAGE: &str = "ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7";

