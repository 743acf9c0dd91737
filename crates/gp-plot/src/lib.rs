//! gp-plot: flow/pressure plot grid and the native window that shows it.

pub mod grid;
pub mod window;

pub use grid::{PlotGrid, PlotPanel};
pub use window::{DEFAULT_WINDOW_SIZE, ProgressionPlotApp, show_plot_window};
