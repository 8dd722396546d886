//! Figure rendering with ratatui charts.

use ratatui::backend::TestBackend;
use ratatui::{
    prelude::*,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
};

use super::figure::{Figure, Panel};
use crate::error::{CliError, Result};

/// Smallest snapshot that still fits a header and two panels.
pub const MIN_WIDTH: u16 = 40;
/// See [`MIN_WIDTH`].
pub const MIN_HEIGHT: u16 = 12;

const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::Red,
    Color::Blue,
    Color::LightCyan,
    Color::LightYellow,
];

/// Draw `figure` into `area`: title header, then panels stacked top to bottom.
pub fn draw_figure(frame: &mut Frame, area: Rect, figure: &Figure) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let header = Paragraph::new(format!(" {} ", figure.title))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    let n_panels = figure.panels.len();
    if n_panels == 0 {
        return;
    }
    let constraints: Vec<Constraint> = (0..n_panels)
        .map(|_| Constraint::Ratio(1, n_panels as u32))
        .collect();
    let panel_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(chunks[1]);

    for (i, panel) in figure.panels.iter().enumerate() {
        let is_bottom = i + 1 == n_panels;
        draw_panel(frame, panel_areas[i], panel, figure.x_bounds, is_bottom);
    }
}

fn draw_panel(frame: &mut Frame, area: Rect, panel: &Panel, x_bounds: [f64; 2], is_bottom: bool) {
    let datasets: Vec<Dataset> = panel
        .series
        .iter()
        .enumerate()
        .map(|(i, series)| {
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(PALETTE[i % PALETTE.len()]))
                .data(&series.points)
        })
        .collect();

    let y_bounds = panel.y_bounds();
    let y_labels: Vec<Span> = vec![
        Span::raw(format_value(y_bounds[0])),
        Span::raw(format_value((y_bounds[0] + y_bounds[1]) / 2.0)),
        Span::raw(format_value(y_bounds[1])),
    ];

    let mut x_axis = Axis::default()
        .style(Style::default().fg(Color::Gray))
        .bounds(x_bounds);
    if is_bottom {
        x_axis = x_axis.title("Time (Years)").labels(x_labels(x_bounds));
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(format!(" {} ", panel.title))
                .borders(Borders::ALL),
        )
        .x_axis(x_axis)
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );
    frame.render_widget(chart, area);
}

/// Yearly labels for whole-year horizons up to 30Y, start/mid/end otherwise.
fn x_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [start, end] = bounds;
    if start == 0.0 && end.fract() == 0.0 && (1.0..=30.0).contains(&end) {
        (0..=end as usize)
            .map(|i| Span::raw(format!("{}Y", i)))
            .collect()
    } else {
        [start, (start + end) / 2.0, end]
            .iter()
            .map(|t| Span::raw(format!("{:.1}Y", t)))
            .collect()
    }
}

fn format_value(v: f64) -> String {
    if v.abs() >= 100.0 {
        format!("{:.1}", v)
    } else {
        format!("{:.4}", v)
    }
}

/// Render `figure` off-screen and return the character grid, one line per row
/// with trailing blanks trimmed.
///
/// # Errors
///
/// `InvalidArgument` below [`MIN_WIDTH`] x [`MIN_HEIGHT`].
pub fn render_to_string(figure: &Figure, width: u16, height: u16) -> Result<String> {
    if width < MIN_WIDTH || height < MIN_HEIGHT {
        return Err(CliError::invalid_argument(format!(
            "snapshot size {}x{} is below the minimum {}x{}",
            width, height, MIN_WIDTH, MIN_HEIGHT
        )));
    }

    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| {
        let area = frame.size();
        draw_figure(frame, area, figure);
    })?;

    let buffer = terminal.backend().buffer();
    let mut out = String::with_capacity((width as usize + 1) * height as usize);
    for row in buffer.content.chunks(width as usize) {
        let line: String = row.iter().map(|cell| cell.symbol()).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    Ok(out)
}
