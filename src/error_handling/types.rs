//! Error type definitions.
//!
//! Every message here ends up either in a log line or in the error column of a
//! result record, so all of them are plain sentences a user can read.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Errors produced while fetching a page through the proxy list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("{proxy}: request failed: {source}")]
    Request {
        proxy: String,
        #[source]
        source: ReqwestError,
    },

    /// The request timed out.
    #[error("{proxy}: request timed out")]
    Timeout { proxy: String },

    /// The relay answered with a non-success status.
    #[error("{proxy}: HTTP status {status}")]
    Status { proxy: String, status: u16 },

    /// The relay answered with an empty body.
    #[error("{proxy}: empty response body")]
    EmptyBody { proxy: String },

    /// A JSON-wrapping relay returned something that is not its envelope.
    #[error("{proxy}: malformed JSON envelope: {source}")]
    Envelope {
        proxy: String,
        #[source]
        source: serde_json::Error,
    },

    /// Every configured endpoint failed for this URL.
    #[error("all {attempts} proxy attempts failed for {url}; last error: {last_error}")]
    Exhausted {
        url: String,
        attempts: usize,
        last_error: String,
    },
}

impl FetchError {
    /// Classifies a reqwest error raised by one proxy attempt.
    pub fn from_reqwest(proxy: &str, error: ReqwestError) -> Self {
        if error.is_timeout() {
            FetchError::Timeout {
                proxy: proxy.to_string(),
            }
        } else if let Some(status) = error.status() {
            FetchError::Status {
                proxy: proxy.to_string(),
                status: status.as_u16(),
            }
        } else {
            FetchError::Request {
                proxy: proxy.to_string(),
                source: error,
            }
        }
    }
}

/// Errors produced by the spreadsheet and JSON Lines exporters.
#[derive(Error, Debug)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("no records to export")]
    Empty,

    /// The xlsx writer rejected the workbook.
    #[error("failed to write spreadsheet: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// Writing the output file failed.
    #[error("failed to write output file: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized.
    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors produced while reading identifiers from an input file.
#[derive(Error, Debug)]
pub enum InputError {
    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The spreadsheet could not be opened or has no sheets.
    #[error("failed to read spreadsheet {path}: file has an unsupported or corrupt format ({reason})")]
    Spreadsheet { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exhausted_message_is_readable() {
        let err = FetchError::Exhausted {
            url: "https://example.test/?id=1".to_string(),
            attempts: 3,
            last_error: "cors-anywhere: HTTP status 403".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "all 3 proxy attempts failed for https://example.test/?id=1; last error: cors-anywhere: HTTP status 403"
        );
    }

    #[test]
    fn test_attempt_errors_name_the_proxy() {
        let err = FetchError::EmptyBody {
            proxy: "allorigins-raw".to_string(),
        };
        assert!(err.to_string().starts_with("allorigins-raw:"));

        let err = FetchError::Status {
            proxy: "corsproxy".to_string(),
            status: 502,
        };
        assert_eq!(err.to_string(), "corsproxy: HTTP status 502");
    }

    #[test]
    fn test_export_empty_message() {
        assert_eq!(ExportError::Empty.to_string(), "no records to export");
    }
}
