//! Chart Plotter Module
//! Draws a chart description as an interactive line plot using egui_plot.

use crate::charts::ChartSpec;
use egui::RichText;
use egui_plot::{Legend, Line, Plot, PlotPoints};

const LINE_WIDTH: f32 = 1.5;
const TITLE_SIZE: f32 = 18.0;

/// Draws line charts into an egui `Ui`.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Draw the title (if any) and the line plot, filling the remaining space.
    pub fn draw_line_chart(ui: &mut egui::Ui, spec: &ChartSpec) {
        if let Some(title) = &spec.title {
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(TITLE_SIZE).strong());
            });
            ui.add_space(6.0);
        }

        let mut plot = Plot::new("addr_chart")
            .legend(Legend::default())
            .x_axis_label(spec.x_label.clone())
            .y_axis_label(spec.y_label.clone());

        // Keep the whole executed range in view
        if let Some((x_min, x_max)) = spec.x_range() {
            plot = plot.include_x(x_min).include_x(x_max);
        }

        plot.show(ui, |plot_ui| {
            for series in &spec.series {
                plot_ui.line(
                    Line::new(PlotPoints::new(series.points.clone()))
                        .color(series.color)
                        .width(LINE_WIDTH)
                        .name(&series.label),
                );
            }
        });
    }
}
