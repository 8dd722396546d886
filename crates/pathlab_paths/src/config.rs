//! Simulation configuration.

use crate::error::ConfigError;
use crate::rng::SimRng;

/// Maximum number of simulated paths.
pub const MAX_PATHS: usize = 1_000_000;

/// Immutable simulation configuration. Build with
/// [`SimulationConfig::builder`].
///
/// # Examples
///
/// ```rust
/// use pathlab_paths::config::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(25)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 25);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    n_paths: usize,
    seed: Option<u64>,
}

impl SimulationConfig {
    /// Configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Number of paths per simulation.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Fixed seed, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// RNG for this configuration: seeded if a seed is set, otherwise from
    /// entropy.
    pub fn make_rng(&self) -> SimRng {
        match self.seed {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        }
    }

    /// Check the path count range.
    ///
    /// # Errors
    ///
    /// `ConfigError::InvalidPathCount` if `n_paths` is 0 or above
    /// [`MAX_PATHS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
}

impl SimulationConfigBuilder {
    /// Number of paths in [1, 1_000_000].
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Seed for reproducible runs.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Optional seed, convenient when forwarding a configured value.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Build and validate.
    ///
    /// # Errors
    ///
    /// - `ConfigError::MissingParameter` if `n_paths` was not set
    /// - `ConfigError::InvalidPathCount` if it is out of range
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter("n_paths"))?;
        let config = SimulationConfig {
            n_paths,
            seed: self.seed,
        };
        config.validate()?;
        Ok(config)
    }
}
