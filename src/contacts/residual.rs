//! "Other contacts": whatever is left of the blob once phones and emails are gone.

use crate::utils::sanitize::collapse_whitespace;

use super::phones::PhoneScan;
use super::ContactExtractor;

impl ContactExtractor {
    pub(super) fn residual(&self, text: &str, phones: &PhoneScan) -> String {
        let mut needles: Vec<&str> = phones.raw.iter().map(String::as_str).collect();
        // Longest first so a shorter match never splits a longer one
        needles.sort_by_key(|n| std::cmp::Reverse(n.len()));
        needles.extend(phones.national.iter().map(String::as_str));

        let mut rest = text.to_string();
        for needle in needles {
            rest = rest.replace(needle, " ");
        }
        let rest = self.strip_emails(&rest);

        rest.split([',', ';'])
            .map(collapse_whitespace)
            .filter(|piece| piece.chars().any(char::is_alphanumeric))
            .collect::<Vec<_>>()
            .join(", ")
    }
}
