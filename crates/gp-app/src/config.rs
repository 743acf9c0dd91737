//! Analysis settings. `Default` is the behaviour of a run with no flags.

use std::path::PathBuf;

use gp_core::LogLayout;
use gp_stats::DEFAULT_WINDOW;

use crate::error::{AppError, AppResult};

/// Directory scanned for runs when none is given.
pub const DEFAULT_RUNS_ROOT: &str = "output";

#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    pub runs_root: PathBuf,
    pub window: usize,
    pub layout: LogLayout,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            runs_root: PathBuf::from(DEFAULT_RUNS_ROOT),
            window: DEFAULT_WINDOW,
            layout: LogLayout::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> AppResult<()> {
        if self.window == 0 {
            return Err(AppError::Config(
                "averaging window must be at least 1".to_string(),
            ));
        }
        self.layout.validate()?;
        Ok(())
    }
}
