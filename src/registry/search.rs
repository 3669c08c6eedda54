//! Search results parsing: record id lookup and existence markers.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use scraper::{Html, Selector};

use super::RegistryRecordId;
use crate::config::patterns::{
    ANY_RECORD_ID_PATTERN, HREF_ID_PATTERN, RAW_RECORD_ID_PATTERNS, ROW_HREF_ID_PATTERN,
};
use crate::identifiers::Identifier;
use crate::utils::{compile_all, compile_regex_unsafe, parse_selector_unsafe};

static RECORD_LINK_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe(r#"a[href*="?id="]"#, "RECORD_LINK_SELECTOR"));
static ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("tr", "ROW_SELECTOR"));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("a[href]", "ANCHOR_SELECTOR"));

static HREF_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(HREF_ID_PATTERN, "HREF_ID_RE"));
static ROW_HREF_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ROW_HREF_ID_PATTERN, "ROW_HREF_ID_RE"));
static RAW_RECORD_ID_RES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| compile_all(RAW_RECORD_ID_PATTERNS, "RAW_RECORD_ID_RES"));
static ANY_RECORD_ID_RE: LazyLock<Regex> =
    LazyLock::new(|| compile_regex_unsafe(ANY_RECORD_ID_PATTERN, "ANY_RECORD_ID_RE"));

fn capture_id(re: &Regex, text: &str) -> Option<RegistryRecordId> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|id| !id.is_empty())
        .map(RegistryRecordId::new)
}

/// Finds the registry record id on a search results page.
///
/// Strategies, in order:
/// 1. the first anchor whose href contains `?id=`
/// 2. an anchor inside a table row whose text mentions the identifier
/// 3. raw patterns applied to the unparsed body
///
/// Returns `None` when no strategy matches.
pub fn parse_record_id(html: &str, identifier: &Identifier) -> Option<RegistryRecordId> {
    let document = Html::parse_document(html);

    let from_links = document
        .select(&RECORD_LINK_SELECTOR)
        .filter_map(|a| a.value().attr("href"))
        .find_map(|href| capture_id(&HREF_ID_RE, href));
    if let Some(id) = from_links {
        debug!("[{}] record id {} found via anchor", identifier, id);
        return Some(id);
    }

    let from_rows = document
        .select(&ROW_SELECTOR)
        .filter(|row| row.text().collect::<String>().contains(identifier.as_str()))
        .find_map(|row| {
            row.select(&ANCHOR_SELECTOR)
                .filter_map(|a| a.value().attr("href"))
                .find_map(|href| capture_id(&ROW_HREF_ID_RE, href))
        });
    if let Some(id) = from_rows {
        debug!("[{}] record id {} found via table row", identifier, id);
        return Some(id);
    }

    let from_raw = RAW_RECORD_ID_RES.iter().find_map(|re| capture_id(re, html));
    if let Some(id) = &from_raw {
        debug!("[{}] record id {} found via raw pattern", identifier, id);
    }
    from_raw
}

/// Whether a search page reports a hit for `identifier`.
pub fn page_mentions_identifier(html: &str, identifier: &Identifier) -> bool {
    let id = identifier.as_str();
    html.contains(&format!("ИНН: {}", id))
        || html.contains(&format!("\"inn\":\"{}\"", id))
        || html.contains(&format!("inn={}", id))
        || ANY_RECORD_ID_RE.is_match(html)
}
