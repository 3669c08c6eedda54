//! Address fragment extraction.
//!
//! The postal index is the anchor: the fragment is a fixed window of text
//! starting at the first index, with phones and emails cut out.

use crate::config::ADDRESS_WINDOW_CHARS;
use crate::utils::sanitize::collapse_whitespace;

use super::ContactExtractor;

impl ContactExtractor {
    /// Byte offset of the first postal index, standalone or glued to a phone.
    fn first_index_start(&self, text: &str) -> Option<usize> {
        let standalone = self.postal_index.find(text).map(|m| m.start());
        let glued = self
            .phone_with_index
            .iter()
            .filter_map(|re| re.captures(text))
            .filter_map(|caps| caps.get(2).map(|m| m.start()))
            .min();
        match (standalone, glued) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub(super) fn scan_address(&self, text: &str) -> String {
        let Some(start) = self.first_index_start(text) else {
            return String::new();
        };
        let window: String = text[start..].chars().take(ADDRESS_WINDOW_CHARS).collect();
        let window = self.strip_emails(&window);
        let window = self.address_phone.replace_all(&window, " ");
        collapse_whitespace(&window)
    }
}
