//! gp-log: run catalog and `progression.txt` parsing.

pub mod parse;
pub mod reader;
pub mod runs;
pub mod types;

pub use parse::{parse_line, parse_str};
pub use reader::{LOG_FILE_NAME, log_path, read_progression};
pub use runs::{RunCatalog, RunEntry};
pub use types::{LogRecord, ProgressionLog};

use std::path::PathBuf;

pub type LogResult<T> = Result<T, LogError>;

#[derive(thiserror::Error, Debug)]
pub enum LogError {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Runs root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Log file not found: {path}")]
    LogNotFound { path: PathBuf },

    #[error("Line {line}: expected at least {expected} fields, found {found}")]
    TooFewFields {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error("Line {line}: field {field} is not a valid {kind}: {text:?}")]
    InvalidNumber {
        line: usize,
        field: usize,
        kind: &'static str,
        text: String,
    },

    #[error("Invalid layout: {0}")]
    Layout(#[from] gp_core::GpError),
}
