//! Market data used to anchor the simulated processes.
//!
//! - [`curves`]: Yield curve trait and the flat forward curve
//! - [`error`]: Market data error types

pub mod curves;
pub mod error;

pub use error::MarketDataError;
