//! Shared application service layer for gasprog.
//!
//! Wires run selection, log parsing, aggregation and reporting into a single
//! pipeline so the binary only deals with arguments and terminal I/O.

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;
pub mod selection;

pub use config::{AnalysisConfig, DEFAULT_RUNS_ROOT};
pub use error::{AppError, AppResult};
pub use pipeline::{Analysis, analyze, analyze_run, run_session};
pub use report::{
    JsonReport, ReportFormat, RunSummary, average_lines, summarize, write_report,
};
pub use selection::{
    FixedSelection, PromptSelection, RunSelection, parse_selection, select_run, write_run_list,
};
