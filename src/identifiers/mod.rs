//! Taxpayer identifier (INN) parsing.
//!
//! An identifier is exactly 10 digits (organization) or 12 digits
//! (individual entrepreneur). Malformed tokens are dropped silently; an empty
//! result is not an error, the caller decides whether it is fatal.

mod extract;

use std::fmt;

use serde::Serialize;
use thiserror::Error;

pub use extract::{extract_from_file, extract_from_spreadsheet, extract_from_text};

/// A validated 10- or 12-digit taxpayer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Identifier(String);

/// Kind of taxpayer, derived from the identifier length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    /// 10 digits
    Organization,
    /// 12 digits
    Entrepreneur,
}

/// A token that is not a well-formed identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid identifier '{0}': expected 10 or 12 digits")]
pub struct InvalidIdentifier(pub String);

impl Identifier {
    /// Validates a single token (surrounding whitespace is ignored).
    pub fn parse(token: &str) -> Result<Self, InvalidIdentifier> {
        let token = token.trim();
        if is_identifier_shape(token) {
            Ok(Identifier(token.to_string()))
        } else {
            Err(InvalidIdentifier(token.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn kind(&self) -> IdentifierKind {
        if self.0.len() == 10 {
            IdentifierKind::Organization
        } else {
            IdentifierKind::Entrepreneur
        }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

fn is_identifier_shape(token: &str) -> bool {
    matches!(token.len(), 10 | 12) && token.bytes().all(|b| b.is_ascii_digit())
}

/// Splits free text on commas, semicolons and whitespace and keeps every
/// well-formed identifier in input order.
///
/// Duplicates are kept; deduplication belongs to the file and clipboard
/// helpers and to the orchestrator's opt-in setting.
pub fn parse_identifiers(raw: &str) -> Vec<Identifier> {
    raw.split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter_map(|token| Identifier::parse(token).ok())
        .collect()
}

/// Removes repeated identifiers, keeping the first occurrence of each.
pub fn dedupe_identifiers(identifiers: Vec<Identifier>) -> Vec<Identifier> {
    let mut seen = std::collections::HashSet::new();
    identifiers
        .into_iter()
        .filter(|id| seen.insert(id.clone()))
        .collect()
}
