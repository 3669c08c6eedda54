//! Regex pattern sources used by the registry resolver and the contact extractor.
//!
//! Patterns are kept as plain strings so callers (and tests) can build an
//! alternative rule set; the compiled defaults live next to the code that
//! uses them. `regex` has no look-around, so every "X followed by Y" rule is
//! written with capture groups, and word boundaries are ASCII `(?-u:\b)` so
//! that a Cyrillic letter glued to a digit still counts as a boundary.

/// Phone numbers with a six-digit postal index glued to their end.
///
/// Group 1 is the phone part, group 2 the index. These run before every other
/// phone pattern and their whole match is blanked out of the working text.
pub const PHONE_WITH_INDEX_PATTERNS: &[&str] = &[
    // +7 / 7 / 8 prefixed, optionally grouped, then the index
    r"((?:\+|(?-u:\b))[78][\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2})(\d{6})(?-u:\b)",
    // bare 10-digit number followed by the index
    r"(?-u:\b)(\d{10})(\d{6})(?-u:\b)",
];

/// Phone patterns, applied in order after glued indexes are split off.
pub const PHONE_PATTERNS: &[&str] = &[
    // leading 8
    r"(?-u:\b)8[\s\-]?\(?\d{3,4}\)?[\s\-]?\d{2,3}[\s\-]?\d{2}[\s\-]?\d{2}(?-u:\b)",
    // leading +7 or 7
    r"(?:\+|(?-u:\b))7[\s\-]?\(?\d{3,4}\)?[\s\-]?\d{2,3}[\s\-]?\d{2}[\s\-]?\d{2}(?-u:\b)",
    // 4-5 digit city code without a country prefix
    r"\(?(?-u:\b)\d{4,5}\)?[\s\-]?\d{2,3}[\s\-]?\d{2}[\s\-]?\d{2}(?-u:\b)",
    // bare 10-11 digit runs
    r"(?-u:\b)\d{10,11}(?-u:\b)",
    // dashed or dotted groups
    r"(?-u:\b)\d{3}[\s\-.]?\d{3}[\s\-.]?\d{2}[\s\-.]?\d{2}(?-u:\b)",
    r"(?-u:\b)\d[\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{4}(?-u:\b)",
];

/// A standalone six-digit run (postal index).
pub const POSTAL_INDEX_PATTERN: &str = r"(?-u:\b)\d{6}(?-u:\b)";

/// Standard email address pattern.
pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+\-]+@[a-zA-Z0-9.\-]+\.[a-zA-Z]{2,}";

/// Phone shape removed from an extracted address fragment.
pub const ADDRESS_PHONE_PATTERN: &str =
    r"\+?(?-u:\b)\d[\s\-]?\(?\d{3}\)?[\s\-]?\d{3}[\s\-]?\d{2}[\s\-]?\d{2}(?-u:\b)";

/// Responsible-person name patterns, tried in order; group 1 is the name.
pub const PERSON_NAME_PATTERNS: &[&str] = &[
    // Фамилия Имя Отчество
    r"([А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+)",
    // Фамилия И.О.
    r"([А-ЯЁ][а-яё]+\s+[А-ЯЁ]\.\s?[А-ЯЁ]\.)",
    // label-prefixed, any case
    r"(?i)(?:ФИО|ответственный|руководитель)[:\s]+([А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+)",
    // context-prefixed, any case
    r"(?i)контактных данных[:\s]+([А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+\s+[А-ЯЁ][а-яё]+)",
];

/// Record id inside an anchor href found by the plain anchor scan.
pub const HREF_ID_PATTERN: &str = r"\?id=([^&#]+)";

/// Record id inside an anchor href found in a row mentioning the identifier.
pub const ROW_HREF_ID_PATTERN: &str = r"[?&]id=([^&#]+)";

/// Last-resort patterns applied to the raw search page body; group 1 is the id.
pub const RAW_RECORD_ID_PATTERNS: &[&str] = &[
    r#"\?id=([^&"'\s<>#]+)"#,
    r#"&(?:amp;)?id=([^&"'\s<>#]+)"#,
    // region-prefixed registry number, e.g. 77-18-012345
    r"(?-u:\b)(\d{2}-\d{2}-\d{6,7})(?-u:\b)",
];

/// Any `id=<digits>` token; its presence marks a non-empty search result.
pub const ANY_RECORD_ID_PATTERN: &str = r"id=\d+";
