//! Responsible-person name extraction.

use super::ContactExtractor;

impl ContactExtractor {
    /// First name matched by the ordered name patterns, or `""`.
    pub(super) fn scan_person(&self, text: &str) -> String {
        self.person_names
            .iter()
            .find_map(|re| re.captures(text))
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
            .unwrap_or_default()
    }
}
