use clap::{Parser, ValueEnum};
use std::io;
use std::path::PathBuf;
use std::process;

use gp_app::{
    Analysis, AnalysisConfig, AppError, AppResult, DEFAULT_RUNS_ROOT, ReportFormat, run_session,
    summarize,
};
use gp_core::LogLayout;
use gp_plot::{PlotGrid, show_plot_window};
use gp_stats::DEFAULT_WINDOW;

#[derive(Parser)]
#[command(name = "gasprog")]
#[command(about = "Average and plot gas flow/pressure from a simulation progression log", long_about = None)]
struct Cli {
    /// Directory containing one subdirectory per run
    #[arg(long, default_value = DEFAULT_RUNS_ROOT)]
    root: PathBuf,

    /// Index of the run to analyse (prompts when omitted)
    #[arg(long)]
    run: Option<usize>,

    /// Number of trailing samples averaged per series
    #[arg(long, default_value_t = DEFAULT_WINDOW)]
    window: usize,

    /// Report format written to stdout
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Do not open the plot window
    #[arg(long)]
    no_plot: bool,

    /// Log debug details to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for ReportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => ReportFormat::Text,
            Format::Json => ReportFormat::Json,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let config = AnalysisConfig {
        runs_root: cli.root,
        window: cli.window,
        layout: LogLayout::default(),
    };

    let analysis = run_session(
        &config,
        cli.run,
        cli.format.into(),
        io::stdin().lock(),
        &mut io::stdout().lock(),
        &mut io::stderr(),
    )?;
    log_summary(&analysis);

    if cli.no_plot {
        return Ok(());
    }
    let title = format!("gasprog - {}", analysis.run.name);
    let grid = PlotGrid::from_analysis(&analysis.log, &analysis.averages);
    show_plot_window(&title, grid).map_err(|e| AppError::Plot(e.to_string()))
}

fn log_summary(analysis: &Analysis) {
    let summary = summarize(&analysis.log);
    tracing::info!(
        run = %analysis.run.path.display(),
        records = summary.record_count,
        first_iteration = ?summary.first_iteration,
        last_iteration = ?summary.last_iteration,
        window = analysis.averages.window,
        "parsed run"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_flags_means_interactive_defaults() {
        let cli = Cli::try_parse_from(["gasprog"]).unwrap();
        assert_eq!(cli.root, PathBuf::from(DEFAULT_RUNS_ROOT));
        assert_eq!(cli.run, None);
        assert_eq!(cli.window, 100);
        assert!(matches!(cli.format, Format::Text));
        assert!(!cli.no_plot);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::try_parse_from([
            "gasprog", "--root", "/data/runs", "--run", "2", "--window", "50", "--format",
            "json", "--no-plot",
        ])
        .unwrap();
        assert_eq!(cli.root, PathBuf::from("/data/runs"));
        assert_eq!(cli.run, Some(2));
        assert_eq!(cli.window, 50);
        assert_eq!(ReportFormat::from(cli.format), ReportFormat::Json);
        assert!(cli.no_plot);
    }
}
