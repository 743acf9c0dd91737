//! Record parsing for `progression.txt`.

use gp_core::{ITERATION_FIELD, LogLayout, Quantity, Real};

use crate::types::{LogRecord, ProgressionLog};
use crate::{LogError, LogResult};

/// Parse one non-empty line. `line_no` is 1-based and only used for errors.
pub fn parse_line(line: &str, line_no: usize, layout: &LogLayout) -> LogResult<LogRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    let expected = layout.min_field_count();
    if fields.len() < expected {
        return Err(LogError::TooFewFields {
            line: line_no,
            found: fields.len(),
            expected,
        });
    }

    let iteration = fields[ITERATION_FIELD]
        .parse::<i64>()
        .map_err(|_| LogError::InvalidNumber {
            line: line_no,
            field: ITERATION_FIELD,
            kind: "iteration number",
            text: fields[ITERATION_FIELD].to_string(),
        })?;

    let mut flows = Vec::with_capacity(layout.gas_count);
    let mut pressures = Vec::with_capacity(layout.gas_count);
    for gas in layout.gases() {
        flows.push(parse_value(&fields, line_no, layout.field_index(gas, Quantity::Flow)?)?);
        pressures.push(parse_value(
            &fields,
            line_no,
            layout.field_index(gas, Quantity::Pressure)?,
        )?);
    }

    Ok(LogRecord {
        iteration,
        flows,
        pressures,
    })
}

fn parse_value(fields: &[&str], line_no: usize, index: usize) -> LogResult<Real> {
    let text = fields.get(index).ok_or(LogError::TooFewFields {
        line: line_no,
        found: fields.len(),
        expected: index + 1,
    })?;
    text.parse::<Real>().map_err(|_| LogError::InvalidNumber {
        line: line_no,
        field: index,
        kind: "floating point value",
        text: text.to_string(),
    })
}

/// Parse a whole log. Blank lines are skipped; any malformed line aborts.
pub fn parse_str(content: &str, layout: &LogLayout) -> LogResult<ProgressionLog> {
    layout.validate()?;
    let mut log = ProgressionLog::new(*layout);
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        log.push(parse_line(line, i + 1, layout)?)?;
    }
    Ok(log)
}
