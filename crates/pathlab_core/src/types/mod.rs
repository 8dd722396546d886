//! Time types and foundation error types.
//!
//! - `time`: `Date` and `DayCountConvention`
//! - `error`: `DateError` and `TimeGridError`

pub mod error;
pub mod time;

pub use error::{DateError, TimeGridError};
pub use time::{Date, DayCountConvention};
