//! Selection → parsing → aggregation.

use std::io::{BufRead, Write};

use gp_log::{ProgressionLog, RunCatalog, RunEntry, read_progression};
use gp_stats::{ChannelAverages, compute_averages};

use crate::config::AnalysisConfig;
use crate::error::AppResult;
use crate::report::{ReportFormat, write_report};
use crate::selection::{FixedSelection, PromptSelection, RunSelection, select_run};

/// Everything computed for one run.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub run: RunEntry,
    pub log: ProgressionLog,
    pub averages: ChannelAverages,
}

/// Scan the runs root, let `selection` pick a run and analyse it.
pub fn analyze(config: &AnalysisConfig, selection: &mut dyn RunSelection) -> AppResult<Analysis> {
    config.validate()?;
    let catalog = RunCatalog::scan(&config.runs_root)?;
    let run = select_run(&catalog, selection)?.clone();
    tracing::info!(run = %run.name, index = run.index, "selected run");
    analyze_run(run, config)
}

/// Parse and aggregate an already chosen run.
pub fn analyze_run(run: RunEntry, config: &AnalysisConfig) -> AppResult<Analysis> {
    config.validate()?;
    let log = read_progression(&run.path, &config.layout)?;
    let averages = compute_averages(&log, config.window)?;
    Ok(Analysis {
        run,
        log,
        averages,
    })
}

/// Select, analyse and report in one go, the way the binary runs.
///
/// Without `run` the operator is prompted on `input`. The run list goes to
/// `stdout` for text reports and to `stderr` for JSON, so stdout only ever
/// holds the JSON document.
pub fn run_session<R, O, E>(
    config: &AnalysisConfig,
    run: Option<usize>,
    format: ReportFormat,
    input: R,
    stdout: &mut O,
    stderr: &mut E,
) -> AppResult<Analysis>
where
    R: BufRead,
    O: Write,
    E: Write,
{
    let analysis = match run {
        Some(index) => analyze(config, &mut FixedSelection(index))?,
        None => {
            let listing: &mut dyn Write = match format {
                ReportFormat::Text => &mut *stdout,
                ReportFormat::Json => &mut *stderr,
            };
            analyze(config, &mut PromptSelection::new(input, listing))?
        }
    };
    write_report(stdout, &analysis, format)?;
    Ok(analysis)
}
