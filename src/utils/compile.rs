//! Regex compilation helpers for static pattern tables.

use regex::Regex;

/// Compiles a regex pattern that must succeed (for compile-time constants).
///
/// # Panics
///
/// Panics with the offending pattern if compilation fails; the pattern tables
/// are constants, so a failure is a programming error.
pub fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

/// Compiles an ordered pattern table, preserving order.
pub fn compile_all(patterns: &[&str], context: &str) -> Vec<Regex> {
    patterns
        .iter()
        .map(|p| compile_regex_unsafe(p, context))
        .collect()
}
