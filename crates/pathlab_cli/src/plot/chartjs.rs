//! chart.js compatible JSON export.
//!
//! Each panel of a [`Figure`] becomes one line chart whose labels are the grid
//! times and whose datasets are the paths.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::info;

use super::figure::{Figure, Panel};
use crate::error::Result;

const COLOURS: [&str; 8] = [
    "#00BCD4", "#FFC107", "#4CAF50", "#E91E63", "#F44336", "#3F51B5", "#80DEEA", "#FFF59D",
];

/// One line of a chart.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    /// Dataset label
    pub label: String,
    /// Values, aligned with the chart labels
    pub data: Vec<f64>,
    /// Line colour
    pub border_color: String,
    /// Area fill under the line
    pub fill: bool,
    /// Point marker radius
    pub point_radius: u32,
}

/// Labels and datasets.
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    /// X-axis labels
    pub labels: Vec<String>,
    /// Datasets
    pub datasets: Vec<ChartJsDataset>,
}

/// Title options.
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitleOptions {
    /// Show the title
    pub display: bool,
    /// Title text
    pub text: String,
}

/// Chart options.
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsOptions {
    /// Title settings
    pub title: ChartJsTitleOptions,
}

/// chart.js line chart.
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsLineChart {
    /// Chart type, always `line`
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartJsData,
    /// Chart options
    pub options: ChartJsOptions,
}

impl ChartJsLineChart {
    /// Line chart of every path in `panel`.
    pub fn from_panel(panel: &Panel, times: &[f64]) -> Self {
        let datasets = panel
            .series
            .iter()
            .enumerate()
            .map(|(i, series)| ChartJsDataset {
                label: series.label.clone(),
                data: series.points.iter().map(|&(_, y)| y).collect(),
                border_color: COLOURS[i % COLOURS.len()].to_string(),
                fill: false,
                point_radius: 0,
            })
            .collect();

        Self {
            chart_type: "line".to_string(),
            data: ChartJsData {
                labels: times.iter().map(|t| format!("{:.4}", t)).collect(),
                datasets,
            },
            options: ChartJsOptions {
                title: ChartJsTitleOptions {
                    display: true,
                    text: panel.title.clone(),
                },
            },
        }
    }
}

/// A figure as one chart per panel.
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsFigure {
    /// Figure title
    pub title: String,
    /// Charts, top to bottom
    pub charts: Vec<ChartJsLineChart>,
}

impl From<&Figure> for ChartJsFigure {
    fn from(figure: &Figure) -> Self {
        let times = figure.times();
        Self {
            title: figure.title.clone(),
            charts: figure
                .panels
                .iter()
                .map(|panel| ChartJsLineChart::from_panel(panel, &times))
                .collect(),
        }
    }
}

impl ChartJsFigure {
    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write `figure` to `<dir>/<stem>.json` and return the path.
pub fn write_figure(figure: &Figure, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(format!("{}.json", figure.kind.file_stem()));
    let json = ChartJsFigure::from(figure).to_json()?;
    std::fs::write(&path, json)?;
    info!(path = %path.display(), title = %figure.title, "exported chart.js figure");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::figure::{FigureKind, Series};

    fn sample_figure() -> Figure {
        let series = |i: usize| Series {
            label: format!("path {}", i),
            points: vec![(0.0, 0.01), (0.5, 0.011), (1.0, 0.012 + i as f64 * 1e-3)],
        };
        Figure {
            kind: FigureKind::Correlated,
            title: "Correlated paths n=2, rho=1.0".to_string(),
            panels: vec![
                Panel {
                    title: "HW1F".to_string(),
                    series: vec![series(0), series(1)],
                },
                Panel {
                    title: "GBM".to_string(),
                    series: vec![series(0), series(1)],
                },
            ],
            x_bounds: [0.0, 1.0],
        }
    }

    #[test]
    fn test_dataset_serialization_is_camel_case() {
        let dataset = ChartJsDataset {
            label: "path 0".to_string(),
            data: vec![1.0, 2.0],
            border_color: "#AAA".to_string(),
            fill: false,
            point_radius: 0,
        };
        let json = serde_json::to_string(&dataset).unwrap();
        assert!(json.contains("\"borderColor\""));
        assert!(json.contains("\"pointRadius\""));
    }

    #[test]
    fn test_line_chart_from_panel() {
        let figure = sample_figure();
        let chart = ChartJsLineChart::from_panel(&figure.panels[0], &figure.times());
        assert_eq!(chart.chart_type, "line");
        assert_eq!(chart.data.labels, ["0.0000", "0.5000", "1.0000"]);
        assert_eq!(chart.data.datasets.len(), 2);
        assert_eq!(chart.data.datasets[1].data.len(), 3);
        assert_eq!(chart.data.datasets[1].data[..2], [0.01, 0.011]);
        assert_eq!(chart.options.title.text, "HW1F");
    }

    #[test]
    fn test_figure_json_shape() {
        let json = ChartJsFigure::from(&sample_figure()).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Correlated paths n=2, rho=1.0");
        assert_eq!(value["charts"].as_array().unwrap().len(), 2);
        assert_eq!(value["charts"][1]["type"], "line");
        assert_eq!(value["charts"][1]["options"]["title"]["text"], "GBM");
    }

    #[test]
    fn test_write_figure() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_figure(&sample_figure(), dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), "correlated_paths.json");
        let contents = std::fs::read_to_string(path).unwrap();
        assert!(contents.contains("\"datasets\""));
    }
}
