//! Scenario assembly: configuration in, simulated paths out.
//!
//! One run draws three path sets from a single RNG stream, in order:
//! Hull-White alone, GBM alone, then both under the configured correlation.

use pathlab_core::market_data::curves::FlatForward;
use pathlab_core::time_grid::TimeGrid;
use pathlab_models::{
    CorrelationMatrix, GbmParams, GbmProcess, HullWhiteParams, HullWhiteProcess, Process1D,
    ProcessArray, StochasticProcess1D,
};
use pathlab_paths::{generate_correlated, generate_single, PathCube, PathMatrix, SimulationConfig};
use tracing::{debug, info};

use crate::config::ScenarioConfig;
use crate::error::{CliError, Result};

/// Processes, grid and sampling settings resolved from a [`ScenarioConfig`].
#[derive(Debug, Clone)]
pub struct Scenario {
    grid: TimeGrid,
    hull_white: Process1D<f64>,
    gbm: Process1D<f64>,
    correlation: CorrelationMatrix<f64>,
    rho: f64,
    simulation: SimulationConfig,
}

/// Paths of one scenario run.
#[derive(Debug, Clone)]
pub struct ScenarioPaths {
    /// Grid every path is aligned with
    pub grid: TimeGrid,
    /// Independent paths, one matrix per process, with its name
    pub uncorrelated: Vec<(&'static str, PathMatrix<f64>)>,
    /// Joint paths of the process array
    pub correlated: PathCube<f64>,
    /// Names of the array's processes, in cube order
    pub correlated_names: Vec<&'static str>,
    /// Correlation used for the joint paths
    pub rho: f64,
    /// Seed the run was drawn with
    pub seed: u64,
}

impl ScenarioPaths {
    /// Paths per set.
    pub fn n_paths(&self) -> usize {
        self.correlated.shape().0
    }
}

impl Scenario {
    /// Build processes and grid from validated configuration.
    pub fn from_config(config: &ScenarioConfig) -> Result<Self> {
        let sim = &config.simulation;
        let steps = sim.steps().ok_or_else(|| {
            CliError::invalid_argument("maturity and steps_per_year overflow the time grid size")
        })?;
        let grid = TimeGrid::regular(sim.maturity, steps)?;

        let hw_cfg = &config.hull_white;
        let curve = FlatForward::new(sim.reference_date, hw_cfg.forward_rate, hw_cfg.day_count);
        let hull_white = HullWhiteProcess::new(
            HullWhiteParams::new(hw_cfg.mean_reversion, hw_cfg.volatility)?,
            curve,
        )
        .with_discretisation(hw_cfg.discretisation);

        let gbm_cfg = &config.gbm;
        let gbm = GbmProcess::new(GbmParams::new(
            gbm_cfg.initial_value,
            gbm_cfg.drift,
            gbm_cfg.volatility,
        )?)
        .with_discretisation(gbm_cfg.discretisation);

        let rho = config.correlation.rho;
        let correlation =
            CorrelationMatrix::two_factor(rho).map_err(pathlab_models::ModelError::from)?;

        let simulation = SimulationConfig::builder()
            .n_paths(sim.n_paths)
            .maybe_seed(sim.seed)
            .build()?;

        Ok(Self {
            grid,
            hull_white: hull_white.into(),
            gbm: gbm.into(),
            correlation,
            rho,
            simulation,
        })
    }

    /// Simulation time grid.
    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Number of paths per set.
    pub fn n_paths(&self) -> usize {
        self.simulation.n_paths()
    }

    /// Correlation coefficient.
    pub fn rho(&self) -> f64 {
        self.rho
    }

    /// The Hull-White and GBM processes under the configured correlation.
    pub fn process_array(&self) -> Result<ProcessArray<f64>> {
        Ok(ProcessArray::new(
            vec![self.hull_white.clone(), self.gbm.clone()],
            self.correlation.clone(),
        )?)
    }

    /// Draw every path set of the scenario.
    pub fn simulate(&self) -> Result<ScenarioPaths> {
        let mut rng = self.simulation.make_rng();
        let n = self.simulation.n_paths();
        info!(
            seed = rng.seed(),
            n_paths = n,
            steps = self.grid.steps(),
            maturity = self.grid.last(),
            "simulating scenario"
        );

        let mut uncorrelated = Vec::with_capacity(2);
        for process in [&self.hull_white, &self.gbm] {
            let matrix = generate_single(process, &self.grid, n, &mut rng);
            log_statistics(process.name(), &matrix);
            uncorrelated.push((process.name(), matrix));
        }

        let array = self.process_array()?;
        let correlated_names: Vec<&'static str> =
            array.processes().iter().map(|p| p.name()).collect();
        info!(rho = self.rho, processes = array.size(), "simulating correlated paths");
        let correlated = generate_correlated(&array, &self.grid, n, &mut rng);
        for (j, name) in correlated_names.iter().enumerate() {
            log_statistics(name, &correlated.asset(j));
        }

        Ok(ScenarioPaths {
            grid: self.grid.clone(),
            uncorrelated,
            correlated,
            correlated_names,
            rho: self.rho,
            seed: rng.seed(),
        })
    }
}

fn log_statistics(name: &str, paths: &PathMatrix<f64>) {
    if let (Some((lo, hi)), Some(mean)) = (paths.value_range(), paths.terminal_mean()) {
        debug!(
            process = name,
            min = lo,
            max = hi,
            terminal_mean = mean,
            "path statistics"
        );
    }
}
