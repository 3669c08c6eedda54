//! Email extraction.

use std::collections::BTreeSet;

use super::ContactExtractor;

impl ContactExtractor {
    /// Lowercased, deduplicated, sorted email addresses.
    pub(super) fn scan_emails(&self, text: &str) -> Vec<String> {
        self.email
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Replaces every email address in `text` with a space.
    pub(super) fn strip_emails(&self, text: &str) -> String {
        self.email.replace_all(text, " ").into_owned()
    }
}
