//! # pathlab_cli
//!
//! Command-line front end: configuration, scenario assembly, terminal charts
//! and chart.js export for correlated Hull-White / GBM path simulation.
//!
//! # Commands
//!
//! - `pathlab run` - simulate and view both figures in the terminal
//! - `pathlab run --headless --output-dir DIR` - write text snapshots instead
//! - `pathlab export --output-dir DIR` - write chart.js JSON per figure
//! - `pathlab check` - validate configuration and log the resolved scenario

pub mod commands;
pub mod config;
pub mod error;
pub mod plot;
pub mod scenario;

pub use config::ScenarioConfig;
pub use error::{CliError, Result};
pub use scenario::{Scenario, ScenarioPaths};
