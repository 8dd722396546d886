//! End-to-end runs through the command layer: TOML in, snapshots and
//! chart.js files out.

use pathlab_cli::commands::{self, run::Snapshot};
use pathlab_cli::plot::Figure;
use pathlab_cli::{CliError, Scenario, ScenarioConfig};

const SMALL_SCENARIO: &str = r#"
log_level = "debug"

[simulation]
reference_date = "2018-11-30"
maturity = 2.0
steps_per_year = 52
n_paths = 6
seed = 2018

[hull_white]
mean_reversion = 0.05
volatility = 0.0099255
forward_rate = 0.01
day_count = "ACT/360"

[gbm]
initial_value = 0.01
drift = 0.01
volatility = 0.0099255

[correlation]
rho = 0.5
"#;

fn write_config(dir: &std::path::Path) -> std::path::PathBuf {
    let path = dir.join("pathlab.toml");
    std::fs::write(&path, SMALL_SCENARIO).unwrap();
    path
}

#[test]
fn test_config_file_drives_the_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScenarioConfig::load_or_default(&write_config(dir.path())).unwrap();
    config.validate().unwrap();

    let paths = Scenario::from_config(&config).unwrap().simulate().unwrap();
    assert_eq!(paths.seed, 2018);
    assert_eq!(paths.correlated.shape(), (6, 2, 105));
    assert_eq!(paths.uncorrelated[0].1.shape(), (6, 105));

    let titles: Vec<String> = Figure::all(&paths).into_iter().map(|f| f.title).collect();
    assert_eq!(
        titles,
        ["Uncorrelated paths n=6", "Correlated paths n=6, rho=0.5"]
    );
}

#[test]
fn test_missing_config_file_uses_reference_scenario() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScenarioConfig::load_or_default(&dir.path().join("absent.toml")).unwrap();
    let scenario = Scenario::from_config(&config).unwrap();
    assert_eq!(scenario.n_paths(), 25);
    assert_eq!(scenario.grid().len(), 1826);
    assert_eq!(scenario.rho(), 1.0);
}

#[test]
fn test_headless_run_and_export() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScenarioConfig::load(&write_config(dir.path())).unwrap();

    let figures = dir.path().join("figures");
    commands::run::run(
        &config,
        Some(Snapshot {
            output_dir: &figures,
            width: 120,
            height: 48,
        }),
    )
    .unwrap();
    let snapshot = std::fs::read_to_string(figures.join("correlated_paths.txt")).unwrap();
    assert!(snapshot.contains("Correlated paths n=6, rho=0.5"));
    assert_eq!(snapshot.lines().count(), 48);

    let written = commands::export::run(&config, &dir.path().join("charts")).unwrap();
    let names: Vec<_> = written
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, ["uncorrelated_paths.json", "correlated_paths.json"]);
}

#[test]
fn test_same_seed_gives_identical_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScenarioConfig::load(&write_config(dir.path())).unwrap();

    let a = commands::export::run(&config, &dir.path().join("a")).unwrap();
    let b = commands::export::run(&config, &dir.path().join("b")).unwrap();
    for (a, b) in a.iter().zip(&b) {
        assert_eq!(
            std::fs::read_to_string(a).unwrap(),
            std::fs::read_to_string(b).unwrap()
        );
    }
}

#[test]
fn test_invalid_config_is_rejected_before_simulation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = ScenarioConfig::load(&write_config(dir.path())).unwrap();
    config.correlation.rho = 1.5;
    config.simulation.n_paths = 0;

    let err = commands::export::run(&config, &dir.path().join("charts")).unwrap_err();
    match err {
        CliError::Config(e) => {
            let msg = e.to_string();
            assert!(msg.contains("n_paths"));
            assert!(msg.contains("rho"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_check_command() {
    let dir = tempfile::tempdir().unwrap();
    let config = ScenarioConfig::load(&write_config(dir.path())).unwrap();
    commands::check::run(&config).unwrap();
}
