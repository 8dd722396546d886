//! # pathlab_paths: Monte Carlo Path Generation
//!
//! Turns processes from `pathlab_models` into arrays of simulated paths:
//!
//! - [`rng`]: seeded `SimRng` over `rand::StdRng`
//! - [`config`]: `SimulationConfig` builder (path count, seed)
//! - [`generator`]: single and correlated path generators over a `TimeGrid`
//! - [`paths`]: `generate_paths`, copying generated paths into
//!   `PathMatrix` / `PathCube`
//!
//! ## Usage Example
//!
//! ```rust
//! use pathlab_core::time_grid::TimeGrid;
//! use pathlab_models::{CorrelationMatrix, GbmParams, GbmProcess, Process1D, ProcessArray};
//! use pathlab_paths::config::SimulationConfig;
//! use pathlab_paths::paths::{generate_paths, SimulatedPaths, SimulationTarget};
//!
//! let gbm = Process1D::from(GbmProcess::new(GbmParams::new(1.0, 0.05, 0.2).unwrap()));
//! let array = ProcessArray::new(
//!     vec![gbm.clone(), gbm],
//!     CorrelationMatrix::two_factor(0.5).unwrap(),
//! )
//! .unwrap();
//!
//! let config = SimulationConfig::builder().n_paths(10).seed(42).build().unwrap();
//! let grid = TimeGrid::regular(1.0, 252).unwrap();
//! let mut rng = config.make_rng();
//!
//! let paths = generate_paths(&SimulationTarget::from(array), &grid, config.n_paths(), &mut rng);
//! if let SimulatedPaths::Correlated(cube) = paths {
//!     assert_eq!(cube.shape(), (10, 2, 253));
//! }
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod generator;
pub mod paths;
pub mod rng;

pub use config::SimulationConfig;
pub use error::{ConfigError, PathError};
pub use generator::{MultiPath, MultiPathGenerator, Path, PathGenerator};
pub use paths::{
    generate_correlated, generate_paths, generate_single, PathCube, PathMatrix, SimulatedPaths,
    SimulationTarget,
};
pub use rng::SimRng;
