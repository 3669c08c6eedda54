//! Utility functions.
//!
//! This module provides:
//! - Regex compilation helpers for static pattern tables
//! - String sanitization utilities
//! - CSS selector parsing utilities

mod compile;
pub mod sanitize;
mod selector;

pub use compile::{compile_all, compile_regex_unsafe};
pub use selector::parse_selector_unsafe;
