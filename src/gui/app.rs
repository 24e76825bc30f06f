//! Chart Window
//! A single eframe window showing one chart until the user closes it.

use crate::charts::{ChartPlotter, ChartSpec};
use eframe::egui;
use thiserror::Error;
use tracing::info;

pub const APP_NAME: &str = "addrplot";

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Failed to open chart window: {0}")]
    Display(String),
}

/// Window application holding the chart to draw.
pub struct AddrPlotApp {
    spec: ChartSpec,
}

impl AddrPlotApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, spec: ChartSpec) -> Self {
        Self { spec }
    }
}

impl eframe::App for AddrPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ChartPlotter::draw_line_chart(ui, &self.spec);
        });
    }
}

/// Window title: the chart title if set, otherwise the program name.
pub fn window_title(spec: &ChartSpec) -> String {
    spec.title.clone().unwrap_or_else(|| APP_NAME.to_string())
}

/// Open the chart window and block until it is closed.
///
/// eframe owns the window for the duration of the call and tears it down
/// before returning, on success and on error alike.
pub fn show(spec: ChartSpec) -> Result<(), ViewerError> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 650.0])
            .with_min_inner_size([400.0, 300.0])
            .with_title(window_title(&spec)),
        ..Default::default()
    };

    info!(points = spec.point_count(), "opening chart window");

    eframe::run_native(
        APP_NAME,
        options,
        Box::new(move |cc| Ok(Box::new(AddrPlotApp::new(cc, spec)))),
    )
    .map_err(|e| ViewerError::Display(e.to_string()))?;

    info!("chart window closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::render;
    use crate::config::Config;
    use crate::data::ObservationTable;

    #[test]
    fn window_title_follows_chart_title() {
        let table = ObservationTable::default();

        let untitled = render(&table, &Config::default());
        assert_eq!(window_title(&untitled), APP_NAME);

        let titled = render(
            &table,
            &Config {
                title: Some("Run 42".to_string()),
            },
        );
        assert_eq!(window_title(&titled), "Run 42");
    }
}
