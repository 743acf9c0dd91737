//! Parsed log data.

use gp_core::{GasId, GpError, GpResult, LogLayout, Quantity, Real};

/// One line of `progression.txt`, reduced to the consumed fields.
#[derive(Debug, Clone, PartialEq)]
pub struct LogRecord {
    pub iteration: i64,
    pub flows: Vec<Real>,
    pub pressures: Vec<Real>,
}

impl LogRecord {
    pub fn value(&self, gas: GasId, quantity: Quantity) -> Option<Real> {
        let values = match quantity {
            Quantity::Flow => &self.flows,
            Quantity::Pressure => &self.pressures,
        };
        values.get(gas.index()).copied()
    }
}

/// Every record of one run, stored column-wise: one series per
/// (gas, quantity) pair in file order, plus the iteration numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressionLog {
    layout: LogLayout,
    iterations: Vec<i64>,
    flows: Vec<Vec<Real>>,
    pressures: Vec<Vec<Real>>,
}

impl ProgressionLog {
    pub fn new(layout: LogLayout) -> Self {
        Self {
            layout,
            iterations: Vec::new(),
            flows: vec![Vec::new(); layout.gas_count],
            pressures: vec![Vec::new(); layout.gas_count],
        }
    }

    pub fn push(&mut self, record: LogRecord) -> GpResult<()> {
        let expected = self.layout.gas_count;
        if record.flows.len() != expected || record.pressures.len() != expected {
            return Err(GpError::InvalidArg {
                what: "record channel count does not match the layout",
            });
        }
        self.iterations.push(record.iteration);
        for (series, value) in self.flows.iter_mut().zip(record.flows) {
            series.push(value);
        }
        for (series, value) in self.pressures.iter_mut().zip(record.pressures) {
            series.push(value);
        }
        Ok(())
    }

    pub fn layout(&self) -> &LogLayout {
        &self.layout
    }

    pub fn len(&self) -> usize {
        self.iterations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.iterations.is_empty()
    }

    pub fn iterations(&self) -> &[i64] {
        &self.iterations
    }

    pub fn first_iteration(&self) -> Option<i64> {
        self.iterations.first().copied()
    }

    pub fn last_iteration(&self) -> Option<i64> {
        self.iterations.last().copied()
    }

    pub fn series(&self, gas: GasId, quantity: Quantity) -> Option<&[Real]> {
        let columns = match quantity {
            Quantity::Flow => &self.flows,
            Quantity::Pressure => &self.pressures,
        };
        columns.get(gas.index()).map(Vec::as_slice)
    }

    /// `(iteration, value)` pairs of one series, for plotting.
    pub fn points(&self, gas: GasId, quantity: Quantity) -> Vec<[f64; 2]> {
        match self.series(gas, quantity) {
            Some(values) => self
                .iterations
                .iter()
                .zip(values)
                .map(|(&it, &v)| [it as f64, v])
                .collect(),
            None => Vec::new(),
        }
    }
}
