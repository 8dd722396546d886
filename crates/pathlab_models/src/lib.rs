//! # pathlab_models: Stochastic Processes
//!
//! One-dimensional Ito processes and their correlated combination:
//!
//! - [`process`]: `StochasticProcess1D` trait and `Discretisation`
//! - [`gbm`]: Geometric Brownian Motion
//! - [`rates`]: Hull-White one-factor short rate
//! - [`process_enum`]: `Process1D` static-dispatch enum
//! - [`correlation`]: correlation matrices and their square roots
//! - [`process_array`]: `ProcessArray`, correlated processes driven together
//!
//! ## Design Philosophy
//!
//! - **Static dispatch only**: processes are combined through `Process1D`,
//!   never `Box<dyn StochasticProcess1D>`
//! - **Generic Float type**: every process runs on `f64` or `f32`
//!
//! ## Example
//!
//! ```
//! use pathlab_models::gbm::{GbmParams, GbmProcess};
//! use pathlab_models::process::StochasticProcess1D;
//!
//! let gbm = GbmProcess::new(GbmParams::new(0.01_f64, 0.01, 0.0099255).unwrap());
//! let next = gbm.evolve(0.0, gbm.initial_value(), 1.0 / 365.0, 0.0);
//! assert!(next > 0.01);
//! ```

#![deny(missing_docs)]

pub mod correlation;
pub mod error;
pub mod gbm;
pub mod process;
pub mod process_array;
pub mod process_enum;
pub mod rates;

pub use correlation::{CholeskyFactor, CorrelationMatrix};
pub use error::{CorrelationError, ModelError};
pub use gbm::{GbmParams, GbmProcess};
pub use process::{Discretisation, StochasticProcess1D};
pub use process_array::ProcessArray;
pub use process_enum::Process1D;
pub use rates::hull_white::{HullWhiteParams, HullWhiteProcess};
