//! Error types and exit codes for casewatch.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for fetch/record/mail failures
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the service returns no headline for the receipt number
pub const EXIT_INVALID_CASE: i32 = 1;

#[derive(Error, Debug)]
pub enum CasewatchError {
    #[error("the case number entered ({0}) is invalid")]
    InvalidCaseNumber(String),

    #[error("could not reach the case status service: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("no date found in status detail: {0}")]
    DateParse(String),

    #[error("status record {path}: {source}")]
    RecordIo {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("mail requested but no [mail] table is configured")]
    MailNotConfigured,

    #[error("mail relay: {0}")]
    Mail(String),

    #[error("config file {path}: {message}")]
    Config { path: PathBuf, message: String },
}
