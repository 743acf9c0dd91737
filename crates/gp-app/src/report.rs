//! Text and JSON reports of an analysis.

use std::io::Write;

use gp_core::Quantity;
use gp_log::ProgressionLog;
use gp_stats::ChannelAverages;
use serde::Serialize;

use crate::error::AppResult;
use crate::pipeline::Analysis;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Size and iteration span of a parsed log.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub record_count: usize,
    pub first_iteration: Option<i64>,
    pub last_iteration: Option<i64>,
}

pub fn summarize(log: &ProgressionLog) -> RunSummary {
    RunSummary {
        record_count: log.len(),
        first_iteration: log.first_iteration(),
        last_iteration: log.last_iteration(),
    }
}

/// Every flow average in channel order, then every pressure average.
pub fn average_lines(averages: &ChannelAverages) -> Vec<String> {
    Quantity::ALL
        .iter()
        .flat_map(move |&quantity| {
            averages.iter(quantity).map(move |(gas, value)| {
                // Debug keeps the decimal point on whole numbers (20.0, not 20)
                format!("Average {} (gas {}) = {:?}", quantity, gas, value)
            })
        })
        .collect()
}

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub run: &'a str,
    pub records: usize,
    pub first_iteration: Option<i64>,
    pub last_iteration: Option<i64>,
    pub window: usize,
    pub flow: &'a [f64],
    pub pressure: &'a [f64],
}

impl<'a> JsonReport<'a> {
    pub fn new(analysis: &'a Analysis) -> Self {
        let summary = summarize(&analysis.log);
        Self {
            run: &analysis.run.name,
            records: summary.record_count,
            first_iteration: summary.first_iteration,
            last_iteration: summary.last_iteration,
            window: analysis.averages.window,
            flow: &analysis.averages.flow,
            pressure: &analysis.averages.pressure,
        }
    }
}

pub fn write_report(out: &mut impl Write, analysis: &Analysis, format: ReportFormat) -> AppResult<()> {
    match format {
        ReportFormat::Text => {
            for line in average_lines(&analysis.averages) {
                writeln!(out, "{}", line)?;
            }
        }
        ReportFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &JsonReport::new(analysis))?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(())
}
