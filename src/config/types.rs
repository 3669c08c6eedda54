//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    CHECK_TIMEOUT_SECS, DEFAULT_OUTPUT_FILE, DEFAULT_USER_AGENT, FETCH_TIMEOUT_SECS,
    REGISTRY_BASE_URL, REQUEST_DELAY_MS,
};
use crate::config::proxies::ProxyEndpoint;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Application configuration.
///
/// Parsed from the command line by `clap`, but every field has a default so
/// the library can also build it programmatically.
///
/// # Examples
///
/// ```no_run
/// use inn_scraper::Config;
///
/// let config = Config {
///     identifiers: vec!["7701234567".to_string()],
///     request_delay_ms: 1000,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "inn_scraper",
    about = "Looks up INN identifiers in the personal-data operators registry and exports contacts to Excel."
)]
pub struct Config {
    /// Identifiers given directly (separated by spaces, commas or semicolons)
    #[arg(value_name = "INN")]
    pub identifiers: Vec<String>,

    /// Read identifiers from a file (xlsx/xls/ods spreadsheet or plain text)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// Read identifiers from standard input
    #[arg(long)]
    pub stdin: bool,

    /// Spreadsheet written with the results
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Also write results as JSON Lines
    #[arg(long)]
    pub jsonl: Option<PathBuf>,

    /// Only check which identifiers exist in the registry
    #[arg(long)]
    pub check_only: bool,

    /// Spreadsheet with identifiers missing from the registry (check-only mode)
    #[arg(long)]
    pub missing_output: Option<PathBuf>,

    /// Drop repeated identifiers before processing
    #[arg(long)]
    pub dedupe: bool,

    /// Delay between the id lookup and the detail fetch, in milliseconds
    #[arg(long, default_value_t = REQUEST_DELAY_MS)]
    pub request_delay_ms: u64,

    /// Per-attempt timeout for search and detail pages, in seconds
    #[arg(long, default_value_t = FETCH_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// Per-attempt timeout for existence checks, in seconds
    #[arg(long, default_value_t = CHECK_TIMEOUT_SECS)]
    pub check_timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Proxy endpoint tried in the given order (raw:<prefix>, encoded:<prefix>,
    /// json:<prefix> or a bare prefix). Replaces the built-in list.
    #[arg(long = "proxy", value_name = "SPEC")]
    pub proxies: Vec<ProxyEndpoint>,

    /// Registry list page URL
    #[arg(long, env = "REGISTRY_URL", default_value = REGISTRY_BASE_URL)]
    pub registry_url: String,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            identifiers: Vec::new(),
            input: None,
            stdin: false,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            jsonl: None,
            check_only: false,
            missing_output: None,
            dedupe: false,
            request_delay_ms: REQUEST_DELAY_MS,
            timeout_seconds: FETCH_TIMEOUT_SECS,
            check_timeout_seconds: CHECK_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            proxies: Vec::new(),
            registry_url: REGISTRY_BASE_URL.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
        }
    }
}
