//! Detail page parsing.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::utils::parse_selector_unsafe;
use crate::utils::sanitize::collapse_whitespace;

static TABLE_ROW_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("table tr", "TABLE_ROW_SELECTOR"));
static CELL_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_unsafe("td", "CELL_SELECTOR"));

/// Synthesized key holding the operator's identifier.
pub const INN_KEY: &str = "ИНН";
/// Synthesized key holding the operator name.
pub const OPERATOR_NAME_KEY: &str = "Наименование оператора";
/// Synthesized key holding the legal address.
pub const LEGAL_ADDRESS_KEY: &str = "Юридический адрес";
/// Synthesized key holding the registration date.
pub const REGISTRATION_DATE_KEY: &str = "Дата регистрации";
/// Synthesized key holding the registration number.
pub const REGISTRATION_NUMBER_KEY: &str = "Регистрационный номер";

/// Label fragment → synthesized key. Matching is a case-sensitive substring test.
const SYNTHESIZED_KEYS: [(&str, &str); 5] = [
    ("ИНН", INN_KEY),
    ("Наименование", OPERATOR_NAME_KEY),
    ("Юридический адрес", LEGAL_ADDRESS_KEY),
    ("Дата регистрации", REGISTRATION_DATE_KEY),
    ("Регистрационный номер", REGISTRATION_NUMBER_KEY),
];

/// Label → value pairs scraped from a detail page.
///
/// Raw labels are kept verbatim in page order. The five synthesized keys are
/// always present and default to an empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailFieldMap {
    entries: Vec<(String, String)>,
}

impl Default for DetailFieldMap {
    fn default() -> Self {
        Self::empty()
    }
}

impl DetailFieldMap {
    /// A map holding only the synthesized keys, all empty.
    pub fn empty() -> Self {
        Self {
            entries: SYNTHESIZED_KEYS
                .iter()
                .map(|(_, key)| (key.to_string(), String::new()))
                .collect(),
        }
    }

    /// Sets `key` to `value`, replacing an earlier value in place.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    /// Value stored under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Value under `key`, or `""` when absent.
    pub fn value(&self, key: &str) -> &str {
        self.get(key).unwrap_or("")
    }

    /// First entry (in page order) whose label contains `fragment`.
    pub fn find_by_label(&self, fragment: &str) -> Option<(&str, &str)> {
        self.entries
            .iter()
            .find(|(k, _)| k.contains(fragment))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// First entry whose lowercased label contains `fragment`.
    pub fn find_by_label_ignore_case(&self, fragment: &str) -> Option<(&str, &str)> {
        let fragment = fragment.to_lowercase();
        self.entries
            .iter()
            .find(|(k, _)| k.to_lowercase().contains(&fragment))
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn cell_text(cell: &ElementRef<'_>) -> String {
    collapse_whitespace(&cell.text().collect::<String>())
}

/// Parses every `table tr` row of a detail page into a [`DetailFieldMap`].
///
/// The first cell is the label and the second the value; rows with fewer
/// than two cells are skipped. When several labels match one synthesized key
/// the last one wins.
pub fn parse_details(html: &str) -> DetailFieldMap {
    let document = Html::parse_document(html);
    let mut fields = DetailFieldMap::empty();

    for row in document.select(&TABLE_ROW_SELECTOR) {
        let cells: Vec<ElementRef<'_>> = row.select(&CELL_SELECTOR).collect();
        if cells.len() < 2 {
            continue;
        }
        let label = cell_text(&cells[0]);
        let value = cell_text(&cells[1]);

        for (fragment, key) in SYNTHESIZED_KEYS {
            if label.contains(fragment) {
                fields.insert(key, &value);
            }
        }
        fields.insert(&label, &value);
    }

    fields
}
