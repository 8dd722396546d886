//! CLI command implementations
//!
//! Each submodule implements one `pathlab` subcommand.

pub mod check;
pub mod export;
pub mod run;

use crate::config::ScenarioConfig;
use crate::scenario::{Scenario, ScenarioPaths};
use crate::Result;

/// Validate `config` and draw every path set.
pub(crate) fn simulate(config: &ScenarioConfig) -> Result<ScenarioPaths> {
    config.validate()?;
    Scenario::from_config(config)?.simulate()
}
