//! Chart Description
//! Builds a display-independent description of the counter chart.

use crate::config::Config;
use crate::data::{min_max, ObservationTable};
use egui::Color32;

pub const X_LABEL: &str = "#ins executed";
pub const Y_LABEL: &str = "#addresses";
pub const ADDR_MEM_LABEL: &str = "contains memory address";
pub const ADDR_ANY_LABEL: &str = "any seen address";

/// Series colors, same order as the series
pub const PALETTE: [Color32; 2] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(243, 156, 18), // Orange
];

/// One line series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesSpec {
    pub label: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Everything the viewer needs to draw the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: Option<String>,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<SeriesSpec>,
}

impl ChartSpec {
    /// Min and max x over all series, `None` when no series has points.
    pub fn x_range(&self) -> Option<(f64, f64)> {
        min_max(
            self.series
                .iter()
                .flat_map(|s| s.points.iter().map(|p| p[0])),
        )
    }

    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}

/// Build the chart for a table: `addr_mem` and `addr_any` against
/// `executed`, in row order.
pub fn render(table: &ObservationTable, config: &Config) -> ChartSpec {
    let executed = table.executed();

    ChartSpec {
        title: config.title.clone(),
        x_label: X_LABEL.to_string(),
        y_label: Y_LABEL.to_string(),
        series: vec![
            line(&executed, table.addr_mem(), ADDR_MEM_LABEL, PALETTE[0]),
            line(&executed, table.addr_any(), ADDR_ANY_LABEL, PALETTE[1]),
        ],
    }
}

fn line(xs: &[f64], ys: Vec<f64>, label: &str, color: Color32) -> SeriesSpec {
    SeriesSpec {
        label: label.to_string(),
        color,
        points: xs.iter().zip(ys).map(|(&x, y)| [x, y]).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Observation;

    fn table(rows: &[(f64, f64, f64)]) -> ObservationTable {
        ObservationTable::new(
            rows.iter()
                .map(|&(executed, addr_mem, addr_any)| Observation {
                    executed,
                    addr_mem,
                    addr_any,
                })
                .collect(),
        )
    }

    fn sample() -> ObservationTable {
        table(&[(100.0, 2.0, 5.0), (200.0, 4.0, 9.0), (300.0, 4.0, 12.0)])
    }

    #[test]
    fn renders_both_series_against_executed() {
        let chart = render(&sample(), &Config::default());

        assert_eq!(chart.title, None);
        assert_eq!(chart.x_label, "#ins executed");
        assert_eq!(chart.y_label, "#addresses");
        assert_eq!(chart.series.len(), 2);

        assert_eq!(chart.series[0].label, "contains memory address");
        assert_eq!(
            chart.series[0].points,
            vec![[100.0, 2.0], [200.0, 4.0], [300.0, 4.0]]
        );
        assert_eq!(chart.series[1].label, "any seen address");
        assert_eq!(
            chart.series[1].points,
            vec![[100.0, 5.0], [200.0, 9.0], [300.0, 12.0]]
        );
        assert_eq!(chart.x_range(), Some((100.0, 300.0)));
        assert_eq!(chart.point_count(), 6);
    }

    #[test]
    fn title_is_used_verbatim() {
        let config = Config {
            title: Some("Run 42".to_string()),
        };
        assert_eq!(render(&sample(), &config).title.as_deref(), Some("Run 42"));

        let config = Config {
            title: Some("  padded ".to_string()),
        };
        assert_eq!(
            render(&sample(), &config).title.as_deref(),
            Some("  padded ")
        );
    }

    #[test]
    fn row_order_is_not_sorted() {
        let chart = render(
            &table(&[(300.0, 1.0, 7.0), (100.0, 3.0, 2.0)]),
            &Config::default(),
        );

        assert_eq!(chart.series[0].points, vec![[300.0, 1.0], [100.0, 3.0]]);
        assert_eq!(chart.series[1].points, vec![[300.0, 7.0], [100.0, 2.0]]);
        assert_eq!(chart.x_range(), Some((100.0, 300.0)));
    }

    #[test]
    fn empty_table_gives_empty_lines() {
        let chart = render(&ObservationTable::default(), &Config::default());

        assert_eq!(chart.series.len(), 2);
        assert!(chart.series.iter().all(|s| s.points.is_empty()));
        assert_eq!(chart.x_range(), None);
    }

    #[test]
    fn render_is_repeatable() {
        let input = sample();
        let config = Config {
            title: Some("again".to_string()),
        };
        assert_eq!(render(&input, &config), render(&input, &config));
    }
}
