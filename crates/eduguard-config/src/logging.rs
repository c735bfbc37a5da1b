//! Logging configuration.
//!
//! - `LOG_LEVEL`: Console level for the application crates (default: "warn")
//! - `LOG_DIR`: Directory for rolling log files (default: "storage/logs")
//! - `LOG_TO_FILE`: Write rolling log files at all (default: true)
//!
//! `RUST_LOG`, when set, overrides `LOG_LEVEL` entirely.

use std::env;
use std::path::PathBuf;

use crate::parse_flag;

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub log_dir: PathBuf,
    pub log_to_file: bool,
    /// A `LOG_TO_FILE` value that could not be parsed, reported once tracing
    /// is up.
    pub rejected_log_to_file: Option<String>,
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        let (log_to_file, rejected_log_to_file) = log_to_file_flag(env::var("LOG_TO_FILE").ok());

        Self {
            level: env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string()),
            log_dir: env::var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("storage/logs")),
            log_to_file,
            rejected_log_to_file,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            log_dir: PathBuf::from("storage/logs"),
            log_to_file: true,
            rejected_log_to_file: None,
        }
    }
}

/// Parse `LOG_TO_FILE`, defaulting to true. An unparsable value is returned
/// alongside so it can be reported.
fn log_to_file_flag(raw: Option<String>) -> (bool, Option<String>) {
    match raw.as_deref().map(parse_flag) {
        None => (true, None),
        Some(Some(flag)) => (flag, None),
        Some(None) => (true, raw),
    }
}
