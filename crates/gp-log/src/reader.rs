//! Loading `progression.txt` from a run directory.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use gp_core::LogLayout;

use crate::parse::parse_str;
use crate::types::ProgressionLog;
use crate::{LogError, LogResult};

/// Name of the log every run directory must contain.
pub const LOG_FILE_NAME: &str = "progression.txt";

pub fn log_path(run_dir: &Path) -> PathBuf {
    run_dir.join(LOG_FILE_NAME)
}

pub fn read_progression(run_dir: &Path, layout: &LogLayout) -> LogResult<ProgressionLog> {
    let path = log_path(run_dir);
    let content = fs::read_to_string(&path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LogError::LogNotFound { path: path.clone() },
        _ => LogError::Io {
            path: path.clone(),
            source: e,
        },
    })?;

    let log = parse_str(&content, layout)?;
    tracing::debug!(path = %path.display(), records = log.len(), "parsed progression log");
    Ok(log)
}
