//! Error types for the gp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates
/// and gives the binary a single error to report.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("No run directories found under {0}")]
    NoRuns(PathBuf),

    #[error("Invalid run selection: {0}")]
    InvalidSelection(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Log error: {0}")]
    Log(String),

    #[error("Statistics error: {0}")]
    Stats(String),

    #[error("Plot window error: {0}")]
    Plot(String),

    #[error("Report error: {0}")]
    Report(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for gp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<gp_core::GpError> for AppError {
    fn from(err: gp_core::GpError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<gp_log::LogError> for AppError {
    fn from(err: gp_log::LogError) -> Self {
        AppError::Log(err.to_string())
    }
}

impl From<gp_stats::StatsError> for AppError {
    fn from(err: gp_stats::StatsError) -> Self {
        AppError::Stats(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Report(err.to_string())
    }
}
