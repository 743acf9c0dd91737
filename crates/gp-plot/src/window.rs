//! Native window showing a [`PlotGrid`].

use egui::Color32;
use egui_plot::{HLine, Line, LineStyle, Plot, PlotPoints};

use crate::grid::{PlotGrid, PlotPanel};

/// Inner window size in points, the 12x8 figure of the old plotting script.
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];

const CELL_SPACING: f32 = 6.0;
const TITLE_HEIGHT: f32 = 18.0;
const AVERAGE_COLOR: Color32 = Color32::from_rgb(255, 127, 14);

pub struct ProgressionPlotApp {
    grid: PlotGrid,
}

impl ProgressionPlotApp {
    pub fn new(grid: PlotGrid) -> Self {
        Self { grid }
    }

    fn show_panel(ui: &mut egui::Ui, panel: &PlotPanel, size: egui::Vec2) {
        ui.vertical(|ui| {
            ui.set_width(size.x);
            ui.label(egui::RichText::new(&panel.title).strong());

            let points: PlotPoints = panel.points.clone().into();
            let series = Line::new(points).name(&panel.title);
            let average = panel.average_line();

            Plot::new((panel.quantity.row(), panel.gas.index()))
                .width(size.x)
                .height((size.y - TITLE_HEIGHT).max(40.0))
                .x_axis_label("iteration")
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(series);
                    if let Some(y) = average {
                        plot_ui.hline(
                            HLine::new(y)
                                .name(format!("average = {:?}", y))
                                .color(AVERAGE_COLOR)
                                .style(LineStyle::dashed_loose()),
                        );
                    }
                });
        });
    }
}

impl eframe::App for ProgressionPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let columns = self.grid.columns.max(1) as f32;
            let rows = self.grid.rows.max(1) as f32;
            let available = ui.available_size();
            let cell = egui::vec2(
                ((available.x - CELL_SPACING * (columns - 1.0)) / columns).max(60.0),
                ((available.y - CELL_SPACING * (rows - 1.0)) / rows).max(60.0),
            );

            egui::Grid::new("progression_grid")
                .num_columns(self.grid.columns)
                .spacing([CELL_SPACING, CELL_SPACING])
                .show(ui, |ui| {
                    for row in 0..self.grid.rows {
                        for panel in self.grid.row(row) {
                            Self::show_panel(ui, panel, cell);
                        }
                        ui.end_row();
                    }
                });
        });
    }
}

/// Open the plot window and block until the operator closes it.
pub fn show_plot_window(title: &str, grid: PlotGrid) -> eframe::Result<()> {
    tracing::debug!(
        rows = grid.rows,
        columns = grid.columns,
        "opening plot window"
    );
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(DEFAULT_WINDOW_SIZE)
            .with_title(title),
        ..Default::default()
    };

    eframe::run_native(
        title,
        options,
        Box::new(|_cc| Ok(Box::new(ProgressionPlotApp::new(grid)))),
    )
}
