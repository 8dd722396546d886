//! Run command implementation
//!
//! Simulates both figures and shows them in the terminal viewer, or writes
//! text snapshots when headless.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ScenarioConfig;
use crate::plot::{render_to_string, Figure, FigureViewer};
use crate::Result;

/// Snapshot options for headless runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot<'a> {
    /// Directory receiving `<figure>.txt`
    pub output_dir: &'a Path,
    /// Columns
    pub width: u16,
    /// Rows
    pub height: u16,
}

/// Run the run command. `snapshot == None` opens the interactive viewer.
pub fn run(config: &ScenarioConfig, snapshot: Option<Snapshot<'_>>) -> Result<()> {
    let paths = super::simulate(config)?;
    let figures = Figure::all(&paths);
    info!(seed = paths.seed, figures = figures.len(), "Simulation complete");

    match snapshot {
        Some(snapshot) => {
            let written = write_snapshots(&figures, &snapshot)?;
            info!("Wrote {} snapshots to {}", written.len(), snapshot.output_dir.display());
            Ok(())
        }
        None => {
            let mut viewer = FigureViewer::new(figures)?;
            viewer.run()
        }
    }
}

/// Render each figure to `<output_dir>/<stem>.txt`.
pub fn write_snapshots(figures: &[Figure], snapshot: &Snapshot<'_>) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(snapshot.output_dir)?;
    figures
        .iter()
        .map(|figure| {
            let text = render_to_string(figure, snapshot.width, snapshot.height)?;
            let path = snapshot
                .output_dir
                .join(format!("{}.txt", figure.kind.file_stem()));
            std::fs::write(&path, text)?;
            info!("  {} -> {}", figure.title, path.display());
            Ok(path)
        })
        .collect()
}
