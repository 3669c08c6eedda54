//! Contact extraction from the free-text contacts field of a detail page.
//!
//! Every pass reads the same original blob:
//! - phones (glued postal indexes split off first, then ordered patterns)
//! - emails
//! - residual "other contacts" text with phones and emails removed
//! - responsible-person name
//! - address fragment anchored at the first postal index
//!
//! The pattern tables come from [`crate::config::patterns`]; tests and callers
//! can swap them through [`ContactExtractor::with_patterns`].

mod address;
mod emails;
mod person;
mod phones;
mod residual;

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::config::patterns;
use crate::utils::{compile_all, compile_regex_unsafe};

pub use phones::{format_phone, normalize_phone};

/// Everything extracted from one contacts blob.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactBundle {
    /// Formatted `+7-(XXX)-XXX-XX-XX` numbers, first-seen order
    pub phones: Vec<String>,
    /// Lowercase, sorted
    pub emails: Vec<String>,
    pub responsible_person: String,
    pub address: String,
    pub other_contacts: String,
}

/// Regex sources for a [`ContactExtractor`].
#[derive(Debug, Clone, Copy)]
pub struct ContactPatterns<'a> {
    pub phone_with_index: &'a [&'a str],
    pub phones: &'a [&'a str],
    pub postal_index: &'a str,
    pub email: &'a str,
    pub address_phone: &'a str,
    pub person_names: &'a [&'a str],
}

impl Default for ContactPatterns<'static> {
    fn default() -> Self {
        Self {
            phone_with_index: patterns::PHONE_WITH_INDEX_PATTERNS,
            phones: patterns::PHONE_PATTERNS,
            postal_index: patterns::POSTAL_INDEX_PATTERN,
            email: patterns::EMAIL_PATTERN,
            address_phone: patterns::ADDRESS_PHONE_PATTERN,
            person_names: patterns::PERSON_NAME_PATTERNS,
        }
    }
}

/// Compiled contact heuristics.
#[derive(Debug, Clone)]
pub struct ContactExtractor {
    phone_with_index: Vec<Regex>,
    phones: Vec<Regex>,
    postal_index: Regex,
    email: Regex,
    address_phone: Regex,
    person_names: Vec<Regex>,
}

static DEFAULT_EXTRACTOR: LazyLock<ContactExtractor> = LazyLock::new(ContactExtractor::new);

fn compile_list(sources: &[&str]) -> Result<Vec<Regex>, regex::Error> {
    sources.iter().map(|s| Regex::new(s)).collect()
}

impl Default for ContactExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactExtractor {
    /// Builds the extractor from the built-in pattern tables.
    pub fn new() -> Self {
        let p = ContactPatterns::default();
        Self {
            phone_with_index: compile_all(p.phone_with_index, "PHONE_WITH_INDEX_PATTERNS"),
            phones: compile_all(p.phones, "PHONE_PATTERNS"),
            postal_index: compile_regex_unsafe(p.postal_index, "POSTAL_INDEX_PATTERN"),
            email: compile_regex_unsafe(p.email, "EMAIL_PATTERN"),
            address_phone: compile_regex_unsafe(p.address_phone, "ADDRESS_PHONE_PATTERN"),
            person_names: compile_all(p.person_names, "PERSON_NAME_PATTERNS"),
        }
    }

    /// Builds an extractor from caller-supplied patterns.
    ///
    /// Capture group 1 of each `phone_with_index` pattern is the phone and
    /// group 2 the index; group 1 of each `person_names` pattern is the name.
    ///
    /// # Errors
    ///
    /// Returns the first pattern that fails to compile.
    pub fn with_patterns(p: ContactPatterns<'_>) -> Result<Self, regex::Error> {
        Ok(Self {
            phone_with_index: compile_list(p.phone_with_index)?,
            phones: compile_list(p.phones)?,
            postal_index: Regex::new(p.postal_index)?,
            email: Regex::new(p.email)?,
            address_phone: Regex::new(p.address_phone)?,
            person_names: compile_list(p.person_names)?,
        })
    }

    /// Shared extractor built from the default patterns.
    pub fn shared() -> &'static ContactExtractor {
        &DEFAULT_EXTRACTOR
    }

    /// Runs every pass over `blob`.
    pub fn extract(&self, blob: &str) -> ContactBundle {
        let phones = self.scan_phones(blob);
        ContactBundle {
            emails: self.scan_emails(blob),
            other_contacts: self.residual(blob, &phones),
            responsible_person: self.scan_person(blob),
            address: self.scan_address(blob),
            phones: phones.formatted,
        }
    }
}

/// Extracts contacts with the default patterns.
pub fn extract_contacts(blob: &str) -> ContactBundle {
    ContactExtractor::shared().extract(blob)
}
