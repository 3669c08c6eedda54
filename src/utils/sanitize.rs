//! Utilities for sanitizing scraped text and error messages.
//!
//! Removes control characters from error messages before they are stored in
//! result records, and normalizes whitespace in text pulled out of HTML cells.

use std::sync::LazyLock;

use regex::Regex;

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| super::compile_regex_unsafe(r"\s+", "WHITESPACE_RUN_RE"));

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when written to spreadsheets or displayed in logs.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7f}')
        .collect()
}

/// Sanitizes and truncates an error message to `MAX_ERROR_MESSAGE_LENGTH` characters.
///
/// Truncation counts characters, not bytes, so Cyrillic messages are never
/// cut in the middle of a code point.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let max = crate::config::MAX_ERROR_MESSAGE_LENGTH;
    let char_count = sanitized.chars().count();

    if char_count > max {
        let truncated: String = sanitized.chars().take(max.saturating_sub(50)).collect();
        format!(
            "{}... (truncated, original length: {} chars)",
            truncated, char_count
        )
    } else {
        sanitized
    }
}

/// Collapses whitespace runs (including non-breaking spaces and literal
/// `&nbsp;` left over from double-escaped markup) into single spaces and trims.
pub fn collapse_whitespace(text: &str) -> String {
    let text = text.replace("&nbsp;", " ");
    WHITESPACE_RUN_RE.replace_all(&text, " ").trim().to_string()
}
