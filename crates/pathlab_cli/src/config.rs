//! Scenario configuration.
//!
//! Loaded from a TOML file (default `pathlab.toml`) with environment variable
//! overrides. Every field has a default, and the defaults reproduce the
//! reference scenario: 25 paths over five years of daily steps, Hull-White
//! and GBM with volatility 0.0099255, perfect correlation.

use chrono::NaiveDate;
use pathlab_core::types::{Date, DayCountConvention};
use pathlab_models::Discretisation;
use pathlab_paths::config::MAX_PATHS;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Largest time grid a scenario may request.
pub const MAX_STEPS: usize = 1_000_000;

/// Path grid and sampling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSection {
    /// Valuation date the initial curve is anchored to
    pub reference_date: Date,
    /// Horizon in years
    pub maturity: f64,
    /// Steps per whole year of maturity
    pub steps_per_year: usize,
    /// Paths per figure
    pub n_paths: usize,
    /// Fixed seed; drawn from entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        Self {
            reference_date: Date::from(NaiveDate::from_ymd_opt(2018, 11, 30).unwrap_or_default()),
            maturity: 5.0,
            steps_per_year: 365,
            n_paths: 25,
            seed: None,
        }
    }
}

impl SimulationSection {
    /// Grid steps: whole years of maturity times `steps_per_year`.
    ///
    /// `None` when the product overflows `usize`.
    pub fn steps(&self) -> Option<usize> {
        if self.maturity.is_finite() && self.maturity > 0.0 {
            (self.maturity.trunc() as usize).checked_mul(self.steps_per_year)
        } else {
            Some(0)
        }
    }
}

/// Hull-White short rate and its flat initial curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HullWhiteSection {
    /// Mean reversion speed `a`
    pub mean_reversion: f64,
    /// Short rate volatility
    pub volatility: f64,
    /// Flat forward rate of the initial curve
    pub forward_rate: f64,
    /// Day count of the initial curve
    pub day_count: DayCountConvention,
    /// Transition scheme
    pub discretisation: Discretisation,
}

impl Default for HullWhiteSection {
    fn default() -> Self {
        Self {
            mean_reversion: 0.05,
            volatility: 0.0099255,
            forward_rate: 0.01,
            day_count: DayCountConvention::Actual360,
            discretisation: Discretisation::Exact,
        }
    }
}

/// Geometric Brownian Motion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GbmSection {
    /// Initial value
    pub initial_value: f64,
    /// Drift
    pub drift: f64,
    /// Volatility
    pub volatility: f64,
    /// Transition scheme
    pub discretisation: Discretisation,
}

impl Default for GbmSection {
    fn default() -> Self {
        Self {
            initial_value: 0.01,
            drift: 0.01,
            volatility: 0.0099255,
            discretisation: Discretisation::Euler,
        }
    }
}

/// Correlation between the Hull-White and GBM drivers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationSection {
    /// Correlation coefficient in [-1, 1]
    pub rho: f64,
}

impl Default for CorrelationSection {
    fn default() -> Self {
        Self { rho: 1.0 }
    }
}

/// Full scenario configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Log level
    pub log_level: String,
    /// Grid and sampling
    pub simulation: SimulationSection,
    /// Hull-White process
    pub hull_white: HullWhiteSection,
    /// GBM process
    pub gbm: GbmSection,
    /// Correlation
    pub correlation: CorrelationSection,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            simulation: SimulationSection::default(),
            hull_white: HullWhiteSection::default(),
            gbm: GbmSection::default(),
            correlation: CorrelationSection::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl ScenarioConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load `path` if it exists, otherwise the defaults
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(n_paths) = std::env::var("PATHLAB_N_PATHS") {
            if let Ok(n_paths) = n_paths.trim().parse() {
                self.simulation.n_paths = n_paths;
            }
        }

        if let Ok(seed) = std::env::var("PATHLAB_SEED") {
            if let Ok(seed) = seed.trim().parse() {
                self.simulation.seed = Some(seed);
            }
        }

        if let Ok(rho) = std::env::var("PATHLAB_RHO") {
            if let Ok(rho) = rho.trim().parse() {
                self.correlation.rho = rho;
            }
        }

        if let Ok(log_level) = std::env::var("PATHLAB_LOG_LEVEL") {
            self.log_level = log_level;
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, valid_log_levels
            ));
        }

        let sim = &self.simulation;
        if !(sim.maturity.is_finite() && sim.maturity > 0.0) {
            errors.push(format!("maturity must be positive, got {}", sim.maturity));
        } else {
            match sim.steps() {
                Some(0) => errors.push(format!(
                    "maturity {} with steps_per_year {} gives an empty time grid",
                    sim.maturity, sim.steps_per_year
                )),
                Some(steps) if steps > MAX_STEPS => errors.push(format!(
                    "time grid of {} steps exceeds maximum allowed ({})",
                    steps, MAX_STEPS
                )),
                Some(_) => {}
                None => errors.push(format!(
                    "maturity {} with steps_per_year {} overflows the time grid size",
                    sim.maturity, sim.steps_per_year
                )),
            }
        }
        if sim.n_paths == 0 {
            errors.push("n_paths must be greater than 0".to_string());
        }
        if sim.n_paths > MAX_PATHS {
            errors.push(format!(
                "n_paths {} exceeds maximum allowed ({})",
                sim.n_paths, MAX_PATHS
            ));
        }

        let hw = &self.hull_white;
        if !(hw.mean_reversion.is_finite() && hw.mean_reversion > 0.0) {
            errors.push(format!(
                "hull_white.mean_reversion must be positive, got {}",
                hw.mean_reversion
            ));
        }
        if !(hw.volatility.is_finite() && hw.volatility > 0.0) {
            errors.push(format!(
                "hull_white.volatility must be positive, got {}",
                hw.volatility
            ));
        }
        if !hw.forward_rate.is_finite() {
            errors.push("hull_white.forward_rate must be finite".to_string());
        }

        let gbm = &self.gbm;
        if !(gbm.initial_value.is_finite() && gbm.initial_value > 0.0) {
            errors.push(format!(
                "gbm.initial_value must be positive, got {}",
                gbm.initial_value
            ));
        }
        if !gbm.drift.is_finite() {
            errors.push("gbm.drift must be finite".to_string());
        }
        if !(gbm.volatility.is_finite() && gbm.volatility >= 0.0) {
            errors.push(format!(
                "gbm.volatility must be non-negative, got {}",
                gbm.volatility
            ));
        }

        if !(self.correlation.rho.abs() <= 1.0) {
            errors.push(format!(
                "correlation.rho must be in [-1, 1], got {}",
                self.correlation.rho
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validation_errors(config: &ScenarioConfig) -> Vec<String> {
        match config.validate() {
            Err(ConfigError::Validation(errors)) => errors,
            other => panic!("Expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_default_config_is_reference_scenario() {
        let config = ScenarioConfig::default();
        assert_eq!(config.simulation.reference_date.to_string(), "2018-11-30");
        assert_eq!(config.simulation.maturity, 5.0);
        assert_eq!(config.simulation.steps(), Some(1825));
        assert_eq!(config.simulation.n_paths, 25);
        assert_eq!(config.simulation.seed, None);
        assert_eq!(config.hull_white.mean_reversion, 0.05);
        assert_eq!(config.hull_white.day_count, DayCountConvention::Actual360);
        assert_eq!(config.gbm.initial_value, 0.01);
        assert_eq!(config.gbm.discretisation, Discretisation::Euler);
        assert_eq!(config.correlation.rho, 1.0);
    }

    #[test]
    fn test_default_config_validates() {
        assert!(ScenarioConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ScenarioConfig::from_toml(
            r#"
            log_level = "debug"

            [simulation]
            n_paths = 100
            seed = 42

            [correlation]
            rho = 0.3
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.simulation.n_paths, 100);
        assert_eq!(config.simulation.seed, Some(42));
        assert_eq!(config.simulation.maturity, 5.0);
        assert_eq!(config.correlation.rho, 0.3);
        assert_eq!(config.gbm, GbmSection::default());
    }

    #[test]
    fn test_full_toml() {
        let config = ScenarioConfig::from_toml(
            r#"
            [simulation]
            reference_date = "2020-01-15"
            maturity = 2.0
            steps_per_year = 52

            [hull_white]
            mean_reversion = 0.1
            volatility = 0.02
            forward_rate = -0.005
            day_count = "ACT/365"
            discretisation = "euler"

            [gbm]
            initial_value = 100.0
            drift = 0.03
            volatility = 0.25
            discretisation = "exact"
            "#,
        )
        .unwrap();
        assert_eq!(config.simulation.steps(), Some(104));
        assert_eq!(config.hull_white.day_count, DayCountConvention::Actual365Fixed);
        assert_eq!(config.hull_white.discretisation, Discretisation::Euler);
        assert_eq!(config.gbm.discretisation, Discretisation::Exact);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_error() {
        let result = ScenarioConfig::from_toml("[simulation]\nn_paths = \"many\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let config =
            ScenarioConfig::load_or_default(Path::new("definitely/not/here/pathlab.toml")).unwrap();
        assert_eq!(config, ScenarioConfig::default());
    }

    #[test]
    fn test_env_override() {
        std::env::set_var("PATHLAB_N_PATHS", "7");
        std::env::set_var("PATHLAB_SEED", "123");
        std::env::set_var("PATHLAB_RHO", "-0.25");
        let config = ScenarioConfig::default().with_env_override();
        std::env::remove_var("PATHLAB_N_PATHS");
        std::env::remove_var("PATHLAB_SEED");
        std::env::remove_var("PATHLAB_RHO");

        assert_eq!(config.simulation.n_paths, 7);
        assert_eq!(config.simulation.seed, Some(123));
        assert_eq!(config.correlation.rho, -0.25);

        // unparsable values leave the file settings alone
        let mut file_config = ScenarioConfig::default();
        file_config.simulation.seed = Some(99);
        std::env::set_var("PATHLAB_SEED", "12x");
        std::env::set_var("PATHLAB_N_PATHS", "lots");
        let config = file_config.with_env_override();
        std::env::remove_var("PATHLAB_SEED");
        std::env::remove_var("PATHLAB_N_PATHS");
        assert_eq!(config.simulation.seed, Some(99));
        assert_eq!(config.simulation.n_paths, 25);
    }

    #[test]
    fn test_validate_invalid_log_level() {
        let mut config = ScenarioConfig::default();
        config.log_level = "loud".to_string();
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("log_level")));
    }

    #[test]
    fn test_validate_short_maturity() {
        let mut config = ScenarioConfig::default();
        config.simulation.maturity = 0.5;
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("empty time grid")));
    }

    #[test]
    fn test_validate_grid_size_overflow() {
        let config = ScenarioConfig::from_toml("[simulation]\nmaturity = 1e19").unwrap();
        assert_eq!(config.simulation.steps(), None);
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("overflows the time grid")));

        let config =
            ScenarioConfig::from_toml("[simulation]\nsteps_per_year = 9223372036854775807").unwrap();
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("overflows the time grid")));
    }

    #[test]
    fn test_validate_grid_size_limit() {
        let mut config = ScenarioConfig::default();
        config.simulation.maturity = 10_000.0;
        assert_eq!(config.simulation.steps(), Some(3_650_000));
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("exceeds maximum allowed")));

        config.simulation.maturity = 2_000.0;
        config.simulation.steps_per_year = 500;
        assert_eq!(config.simulation.steps(), Some(MAX_STEPS));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rho_out_of_range() {
        let mut config = ScenarioConfig::default();
        config.correlation.rho = 1.5;
        assert!(validation_errors(&config)
            .iter()
            .any(|e| e.contains("correlation.rho")));
    }

    #[test]
    fn test_validate_multiple_errors() {
        let mut config = ScenarioConfig::default();
        config.simulation.n_paths = 0;
        config.hull_white.mean_reversion = -0.05;
        config.gbm.initial_value = 0.0;
        config.correlation.rho = f64::NAN;
        assert_eq!(validation_errors(&config).len(), 4);
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError::Validation(vec!["Error 1".to_string(), "Error 2".to_string()]);
        let display = format!("{}", error);
        assert!(display.contains("Error 1"));
        assert!(display.contains("Error 2"));
    }
}
