//! Configuration constants.
//!
//! This module defines the constants used throughout the pipeline: registry
//! URLs, timeouts, inter-request delays, and the spreadsheet layout.

use std::time::Duration;

/// Base URL of the operators registry list page.
///
/// Search requests append `act=search&name_full=&inn=<id>&regn=`; detail
/// requests append `id=<record id>`.
pub const REGISTRY_BASE_URL: &str = "https://pd.rkn.gov.ru/operators-registry/operators-list/";

// Network operation timeouts
/// Per-attempt timeout for search and detail page fetches
pub const FETCH_TIMEOUT_SECS: u64 = 30;
/// Per-attempt timeout for lightweight existence checks
pub const CHECK_TIMEOUT_SECS: u64 = 10;
/// TCP connection timeout in seconds
pub const TCP_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Delay between the id lookup and the detail fetch of one identifier, in milliseconds.
///
/// The upstream site starts rejecting requests when hit back to back.
pub const REQUEST_DELAY_MS: u64 = 500;
/// [`REQUEST_DELAY_MS`] as a `Duration`
pub const REQUEST_DELAY: Duration = Duration::from_millis(REQUEST_DELAY_MS);
/// Delay between identifiers during an existence check run
pub const CHECK_REQUEST_DELAY: Duration = Duration::from_millis(300);

/// Default User-Agent string for HTTP requests.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/131.0.0.0 Safari/537.36";

// Error message limits
/// Maximum error message length in characters stored in a result record
pub const MAX_ERROR_MESSAGE_LENGTH: usize = 500;

// Contact extraction
/// Number of characters taken after a postal index when extracting an address
pub const ADDRESS_WINDOW_CHARS: usize = 150;

// Detail page labels
/// Label of the free-text contacts row on the detail page
pub const CONTACTS_LABEL: &str =
    "номера их контактных телефонов, почтовые адреса и адреса электронной почты";
/// Lowercase fragment used to locate a contacts row when the exact label is absent
pub const CONTACTS_LABEL_FRAGMENT: &str = "контакт";
/// Fragment of the label naming the person responsible for data processing
pub const RESPONSIBLE_LABEL_FRAGMENT: &str = "ответственных за организацию обработки";

// Default output files
/// Default spreadsheet written by a full run
pub const DEFAULT_OUTPUT_FILE: &str = "roskomnadzor_data.xlsx";
/// Default spreadsheet written by an existence check run
pub const DEFAULT_MISSING_OUTPUT_FILE: &str = "missing_inns.xlsx";

// Spreadsheet layout
/// Sheet name for the operators export
pub const RESULTS_SHEET_NAME: &str = "Операторы";
/// Sheet name for the missing identifiers export
pub const MISSING_SHEET_NAME: &str = "Не найденные ИНН";

/// Column headers and display widths of the operators sheet, in output order.
pub const RESULT_COLUMNS: [(&str, f64); 10] = [
    ("ИНН", 15.0),
    ("Регистрационный номер", 20.0),
    ("Наименование оператора", 40.0),
    ("Юридический адрес", 50.0),
    ("Дата регистрации", 15.0),
    ("ФИО ответственного", 25.0),
    ("Контактный телефон", 30.0),
    ("Email", 30.0),
    ("Прочие контакты", 40.0),
    ("Статус", 15.0),
];

/// Column headers and display widths of the missing identifiers sheet.
pub const MISSING_COLUMNS: [(&str, f64); 3] =
    [("ИНН", 20.0), ("Статус", 25.0), ("Дата проверки", 15.0)];

/// Separator used when joining phone and email lists into one cell
pub const LIST_SEPARATOR: &str = "; ";
