//! Choosing the run to analyse.
//!
//! The choice is injected through [`RunSelection`]: the binary prompts the
//! operator, tests and `--run` supply a fixed index.

use std::io::{self, BufRead, Write};

use gp_log::{RunCatalog, RunEntry};

use crate::error::{AppError, AppResult};

/// Source of the index of the run to analyse.
pub trait RunSelection {
    fn choose(&mut self, runs: &[RunEntry]) -> AppResult<usize>;
}

/// Pre-supplied index, no interaction.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelection(pub usize);

impl RunSelection for FixedSelection {
    fn choose(&mut self, _runs: &[RunEntry]) -> AppResult<usize> {
        Ok(self.0)
    }
}

/// Prints the run list and reads one line holding the index.
pub struct PromptSelection<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PromptSelection<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> RunSelection for PromptSelection<R, W> {
    fn choose(&mut self, runs: &[RunEntry]) -> AppResult<usize> {
        write_run_list(&mut self.output, runs)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(AppError::InvalidSelection(
                "no input received".to_string(),
            ));
        }
        parse_selection(&line, runs.len())
    }
}

/// One `[index] name` line per run.
pub fn write_run_list(out: &mut impl Write, runs: &[RunEntry]) -> io::Result<()> {
    for run in runs {
        writeln!(out, "[{}] {}", run.index, run.name)?;
    }
    Ok(())
}

/// Parse a typed index and check it against the number of listed runs.
pub fn parse_selection(text: &str, count: usize) -> AppResult<usize> {
    let trimmed = text.trim();
    let index = trimmed.parse::<usize>().map_err(|_| {
        AppError::InvalidSelection(format!("{:?} is not a run index", trimmed))
    })?;
    check_range(index, count)
}

fn check_range(index: usize, count: usize) -> AppResult<usize> {
    if index >= count {
        return Err(AppError::InvalidSelection(format!(
            "index {} is out of range (0..{})",
            index, count
        )));
    }
    Ok(index)
}

/// Ask `selection` for an index into the catalog and resolve it.
pub fn select_run<'a>(
    catalog: &'a RunCatalog,
    selection: &mut dyn RunSelection,
) -> AppResult<&'a RunEntry> {
    if catalog.is_empty() {
        return Err(AppError::NoRuns(catalog.root_dir().to_path_buf()));
    }
    let index = check_range(selection.choose(catalog.runs())?, catalog.len())?;
    catalog
        .get(index)
        .ok_or_else(|| AppError::InvalidSelection(format!("index {} is out of range", index)))
}
