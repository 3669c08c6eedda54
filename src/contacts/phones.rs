//! Phone number extraction and normalization.

use std::collections::HashSet;
use std::ops::Range;

use super::ContactExtractor;

/// Phones found in one blob.
#[derive(Debug, Default)]
pub(super) struct PhoneScan {
    /// Formatted numbers in first-seen order, deduplicated.
    pub formatted: Vec<String>,
    /// Raw text of every accepted match, as it appears in the blob.
    pub raw: Vec<String>,
    /// Ten-digit national numbers of the accepted phones.
    pub national: Vec<String>,
}

impl PhoneScan {
    fn accept(&mut self, raw: &str, seen: &mut HashSet<String>) {
        let Some(digits) = normalize_phone(raw) else {
            return;
        };
        self.raw.push(raw.to_string());
        if seen.insert(digits.clone()) {
            self.formatted.push(format_phone_digits(&digits));
            self.national.push(digits[1..].to_string());
        }
    }
}

/// Replaces `range` with spaces of the same byte length so later offsets stay valid.
fn blank(working: &mut String, range: Range<usize>) {
    let spaces = " ".repeat(range.len());
    working.replace_range(range, &spaces);
}

/// Reduces a raw match to an 11-digit number starting with 7.
///
/// Non-digits are dropped, a 10-digit number gets the country digit, and a
/// leading 8 becomes 7. Anything else is rejected.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 {
        digits.insert(0, '7');
    } else if digits.len() == 11 && digits.starts_with('8') {
        digits.replace_range(0..1, "7");
    }
    (digits.len() == 11 && digits.starts_with('7')).then_some(digits)
}

fn format_phone_digits(digits: &str) -> String {
    format!(
        "+7-({})-{}-{}-{}",
        &digits[1..4],
        &digits[4..7],
        &digits[7..9],
        &digits[9..11]
    )
}

/// Normalizes `raw` and formats it as `+7-(XXX)-XXX-XX-XX`.
pub fn format_phone(raw: &str) -> Option<String> {
    normalize_phone(raw).map(|digits| format_phone_digits(&digits))
}

impl ContactExtractor {
    pub(super) fn scan_phones(&self, text: &str) -> PhoneScan {
        let mut scan = PhoneScan::default();
        let mut seen = HashSet::new();
        let mut working = text.to_string();

        // Split glued postal indexes off first; the whole match leaves the working copy.
        for re in &self.phone_with_index {
            let found: Vec<(Range<usize>, Range<usize>)> = re
                .captures_iter(&working)
                .filter_map(|caps| Some((caps.get(0)?.range(), caps.get(1)?.range())))
                .collect();
            for (whole, phone) in found {
                scan.accept(&text[phone], &mut seen);
                blank(&mut working, whole);
            }
        }

        // Standalone indexes are never part of a phone.
        let indexes: Vec<Range<usize>> = self
            .postal_index
            .find_iter(&working)
            .map(|m| m.range())
            .collect();
        for range in indexes {
            blank(&mut working, range);
        }

        for re in &self.phones {
            let found: Vec<Range<usize>> = re.find_iter(&working).map(|m| m.range()).collect();
            for range in found {
                scan.accept(&text[range.clone()], &mut seen);
                blank(&mut working, range);
            }
        }

        scan
    }
}
