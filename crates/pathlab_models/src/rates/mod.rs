//! Interest rate processes.
//!
//! ## Hull-White 1F
//!
//! ```text
//! dr(t) = [theta(t) - a * r(t)] * dt + sigma * dW(t)
//! ```
//! with `theta` chosen so the model reproduces the initial yield curve.

pub mod hull_white;

pub use hull_white::{HullWhiteParams, HullWhiteProcess};
