//! Check command implementation
//!
//! Validates the configuration and logs the scenario it resolves to.

use tracing::info;

use crate::config::ScenarioConfig;
use crate::scenario::Scenario;
use crate::Result;

/// Run the check command
pub fn run(config: &ScenarioConfig) -> Result<()> {
    info!("Checking configuration...");
    config.validate()?;
    let scenario = Scenario::from_config(config)?;

    let sim = &config.simulation;
    info!("  Reference date: {}", sim.reference_date);
    info!(
        "  Grid: {} steps to {}Y ({} points)",
        scenario.grid().steps(),
        scenario.grid().last(),
        scenario.grid().len()
    );
    info!("  Paths: {}", scenario.n_paths());
    match sim.seed {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: drawn per run"),
    }
    info!(
        "  HW1F: a={}, sigma={}, flat forward {} ({}), {}",
        config.hull_white.mean_reversion,
        config.hull_white.volatility,
        config.hull_white.forward_rate,
        config.hull_white.day_count,
        config.hull_white.discretisation.name()
    );
    info!(
        "  GBM: x0={}, mu={}, sigma={}, {}",
        config.gbm.initial_value,
        config.gbm.drift,
        config.gbm.volatility,
        config.gbm.discretisation.name()
    );
    info!("  Correlation: rho={}", scenario.rho());

    let array = scenario.process_array()?;
    info!("  Process array: {} processes", array.size());
    info!("Configuration OK");
    Ok(())
}
