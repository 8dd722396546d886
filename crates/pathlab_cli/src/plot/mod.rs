//! Path figures: layout, terminal rendering and chart.js export.

pub mod chartjs;
pub mod figure;
pub mod render;
pub mod tui;

pub use chartjs::{write_figure, ChartJsFigure};
pub use figure::{Figure, FigureKind, Panel, Series};
pub use render::{draw_figure, render_to_string};
pub use tui::{FigureViewer, ViewerState};
