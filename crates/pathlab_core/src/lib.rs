//! # pathlab_core: Foundation Layer for Path Simulation
//!
//! pathlab_core is the bottom layer of the workspace, providing:
//! - Generic floating-point trait (`traits::Float`)
//! - Time types: `Date`, `DayCountConvention` (`types::time`)
//! - Simulation time grids (`time_grid::TimeGrid`)
//! - Initial term structures: `YieldCurve`, `FlatForward` (`market_data::curves`)
//! - Error types: `DateError`, `TimeGridError`, `MarketDataError`
//!
//! ## Zero Dependency Principle
//!
//! This layer has no dependencies on other pathlab crates:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathlab_core::market_data::curves::{FlatForward, YieldCurve};
//! use pathlab_core::time_grid::TimeGrid;
//! use pathlab_core::types::{Date, DayCountConvention};
//!
//! let today = Date::from_ymd(2018, 11, 30).unwrap();
//! let curve = FlatForward::new(today, 0.01_f64, DayCountConvention::Actual360);
//! assert!((curve.instantaneous_forward(0.0).unwrap() - 0.01).abs() < 1e-12);
//!
//! let grid = TimeGrid::regular(5.0, 1825).unwrap();
//! assert_eq!(grid.len(), 1826);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod market_data;
pub mod time_grid;
pub mod traits;
pub mod types;
