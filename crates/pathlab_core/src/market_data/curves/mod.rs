//! Yield curves.
//!
//! - [`YieldCurve`]: discount factors, zero rates and forward rates
//! - [`FlatForward`]: constant continuously-compounded rate anchored to a date

mod flat_forward;
mod traits;

pub use flat_forward::FlatForward;
pub use traits::YieldCurve;
