//! Export command implementation
//!
//! Writes each figure as chart.js line-chart JSON.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::ScenarioConfig;
use crate::plot::{write_figure, Figure};
use crate::Result;

/// Run the export command
pub fn run(config: &ScenarioConfig, output_dir: &Path) -> Result<Vec<PathBuf>> {
    info!("Exporting figures to {}", output_dir.display());
    let paths = super::simulate(config)?;
    std::fs::create_dir_all(output_dir)?;
    let written = Figure::all(&paths)
        .iter()
        .map(|figure| write_figure(figure, output_dir))
        .collect::<Result<Vec<_>>>()?;

    info!("Export complete: {} files", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_one_file_per_figure() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScenarioConfig::default();
        config.simulation.maturity = 1.0;
        config.simulation.steps_per_year = 12;
        config.simulation.n_paths = 2;
        config.simulation.seed = Some(5);
        config.correlation.rho = 0.5;

        let written = run(&config, &dir.path().join("charts")).unwrap();
        assert_eq!(written.len(), 2);

        let json = std::fs::read_to_string(&written[1]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["title"], "Correlated paths n=2, rho=0.5");
        let datasets = value["charts"][0]["data"]["datasets"].as_array().unwrap();
        assert_eq!(datasets.len(), 2);
        assert_eq!(datasets[0]["data"].as_array().unwrap().len(), 13);
    }

    #[test]
    fn test_rejected_config_leaves_no_directory() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = ScenarioConfig::default();
        config.simulation.n_paths = 0;

        let output_dir = dir.path().join("charts");
        assert!(run(&config, &output_dir).is_err());
        assert!(!output_dir.exists());
    }
}
