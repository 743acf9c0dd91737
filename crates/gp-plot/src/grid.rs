//! Plot grid model: one row per quantity, one column per gas channel.

use gp_core::{GasId, Quantity, Real, ensure_finite};
use gp_log::ProgressionLog;
use gp_stats::ChannelAverages;

/// One cell of the grid: a series against iteration plus its average.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotPanel {
    pub gas: GasId,
    pub quantity: Quantity,
    pub title: String,
    pub points: Vec<[f64; 2]>,
    pub average: Real,
}

impl PlotPanel {
    /// Height of the average overlay, if it can be drawn.
    pub fn average_line(&self) -> Option<Real> {
        ensure_finite(self.average, "channel average").ok()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlotGrid {
    pub rows: usize,
    pub columns: usize,
    // row-major
    panels: Vec<PlotPanel>,
}

impl PlotGrid {
    /// Flow on row 0, pressure on row 1, gas g in column g.
    pub fn from_analysis(log: &ProgressionLog, averages: &ChannelAverages) -> Self {
        let columns = log.layout().gas_count;
        let mut panels = Vec::with_capacity(Quantity::ALL.len() * columns);
        for quantity in Quantity::ALL {
            for gas in log.layout().gases() {
                panels.push(PlotPanel {
                    gas,
                    quantity,
                    title: format!("{} (gas {})", capitalize(quantity.label()), gas),
                    points: log.points(gas, quantity),
                    average: averages.get(gas, quantity).unwrap_or(Real::NAN),
                });
            }
        }
        Self {
            rows: Quantity::ALL.len(),
            columns,
            panels,
        }
    }

    pub fn panels(&self) -> &[PlotPanel] {
        &self.panels
    }

    pub fn panel(&self, row: usize, column: usize) -> Option<&PlotPanel> {
        if row >= self.rows || column >= self.columns {
            return None;
        }
        self.panels.get(row * self.columns + column)
    }

    pub fn row(&self, row: usize) -> &[PlotPanel] {
        let start = (row * self.columns).min(self.panels.len());
        let end = (start + self.columns).min(self.panels.len());
        &self.panels[start..end]
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gp_core::LogLayout;
    use gp_log::LogRecord;
    use gp_stats::compute_averages;

    fn log() -> ProgressionLog {
        let mut log = ProgressionLog::new(LogLayout::default());
        for (iteration, base) in [(10_i64, 1.0), (20, 2.0), (30, 3.0)] {
            log.push(LogRecord {
                iteration,
                flows: (0..7).map(|g| base + g as f64).collect(),
                pressures: (0..7).map(|g| 100.0 * base + g as f64).collect(),
            })
            .unwrap();
        }
        log
    }

    #[test]
    fn grid_is_two_rows_by_seven_columns() {
        let log = log();
        let averages = compute_averages(&log, 100).unwrap();
        let grid = PlotGrid::from_analysis(&log, &averages);

        assert_eq!((grid.rows, grid.columns), (2, 7));
        assert_eq!(grid.panels().len(), 14);
        assert!(grid.row(0).iter().all(|p| p.quantity == Quantity::Flow));
        assert!(grid.row(1).iter().all(|p| p.quantity == Quantity::Pressure));
        assert!(grid.panel(2, 0).is_none());
        assert!(grid.panel(0, 7).is_none());
    }

    #[test]
    fn panels_plot_against_iteration_with_average() {
        let log = log();
        let averages = compute_averages(&log, 100).unwrap();
        let grid = PlotGrid::from_analysis(&log, &averages);

        let flow3 = grid.panel(0, 3).unwrap();
        assert_eq!(flow3.gas, GasId::from_index(3));
        assert_eq!(flow3.title, "Flow (gas 3)");
        assert_eq!(flow3.points, vec![[10.0, 4.0], [20.0, 5.0], [30.0, 6.0]]);
        assert_eq!(flow3.average_line(), Some(5.0));

        let pressure0 = grid.panel(1, 0).unwrap();
        assert_eq!(pressure0.title, "Pressure (gas 0)");
        assert_eq!(pressure0.average, 200.0);
    }

    #[test]
    fn negative_iterations_stay_on_the_x_axis() {
        let mut log = ProgressionLog::new(LogLayout::default());
        for (iteration, value) in [(-5_i64, 1.0), (-4, 3.0)] {
            log.push(LogRecord {
                iteration,
                flows: vec![value; 7],
                pressures: vec![value; 7],
            })
            .unwrap();
        }
        let averages = compute_averages(&log, 100).unwrap();
        let grid = PlotGrid::from_analysis(&log, &averages);

        let pressure6 = grid.panel(1, 6).unwrap();
        assert_eq!(pressure6.points, vec![[-5.0, 1.0], [-4.0, 3.0]]);
        assert_eq!(pressure6.average_line(), Some(2.0));
    }

    #[test]
    fn non_finite_average_is_not_drawn() {
        let panel = PlotPanel {
            gas: GasId::from_index(0),
            quantity: Quantity::Flow,
            title: String::new(),
            points: Vec::new(),
            average: Real::NAN,
        };
        assert_eq!(panel.average_line(), None);
    }
}
