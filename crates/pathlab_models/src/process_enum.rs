//! Static dispatch enum for one-dimensional processes.
//!
//! `Process1D` lets heterogeneous processes live in one `Vec` (for
//! [`crate::process_array::ProcessArray`]) while every call is resolved by a
//! `match`, never a vtable.
//!
//! ## Example
//!
//! ```
//! use pathlab_models::gbm::{GbmParams, GbmProcess};
//! use pathlab_models::process::StochasticProcess1D;
//! use pathlab_models::process_enum::Process1D;
//!
//! let gbm = GbmProcess::new(GbmParams::new(1.0_f64, 0.05, 0.2).unwrap());
//! let process: Process1D<f64> = gbm.into();
//! assert_eq!(process.name(), "GBM");
//! ```

use pathlab_core::traits::Float;

use crate::gbm::GbmProcess;
use crate::process::StochasticProcess1D;
use crate::rates::hull_white::HullWhiteProcess;

/// Any supported one-dimensional process.
#[derive(Clone, Debug, PartialEq)]
pub enum Process1D<T: Float> {
    /// Hull-White one-factor short rate
    HullWhite(HullWhiteProcess<T>),
    /// Geometric Brownian Motion
    Gbm(GbmProcess<T>),
}

impl<T: Float> From<HullWhiteProcess<T>> for Process1D<T> {
    fn from(process: HullWhiteProcess<T>) -> Self {
        Process1D::HullWhite(process)
    }
}

impl<T: Float> From<GbmProcess<T>> for Process1D<T> {
    fn from(process: GbmProcess<T>) -> Self {
        Process1D::Gbm(process)
    }
}

impl<T: Float> StochasticProcess1D<T> for Process1D<T> {
    #[inline]
    fn name(&self) -> &'static str {
        match self {
            Process1D::HullWhite(p) => p.name(),
            Process1D::Gbm(p) => p.name(),
        }
    }

    #[inline]
    fn initial_value(&self) -> T {
        match self {
            Process1D::HullWhite(p) => p.initial_value(),
            Process1D::Gbm(p) => p.initial_value(),
        }
    }

    #[inline]
    fn drift(&self, t: T, x: T) -> T {
        match self {
            Process1D::HullWhite(p) => p.drift(t, x),
            Process1D::Gbm(p) => p.drift(t, x),
        }
    }

    #[inline]
    fn diffusion(&self, t: T, x: T) -> T {
        match self {
            Process1D::HullWhite(p) => p.diffusion(t, x),
            Process1D::Gbm(p) => p.diffusion(t, x),
        }
    }

    #[inline]
    fn expectation(&self, t0: T, x0: T, dt: T) -> T {
        match self {
            Process1D::HullWhite(p) => p.expectation(t0, x0, dt),
            Process1D::Gbm(p) => p.expectation(t0, x0, dt),
        }
    }

    #[inline]
    fn std_deviation(&self, t0: T, x0: T, dt: T) -> T {
        match self {
            Process1D::HullWhite(p) => p.std_deviation(t0, x0, dt),
            Process1D::Gbm(p) => p.std_deviation(t0, x0, dt),
        }
    }

    #[inline]
    fn evolve(&self, t0: T, x0: T, dt: T, dw: T) -> T {
        match self {
            Process1D::HullWhite(p) => p.evolve(t0, x0, dt, dw),
            Process1D::Gbm(p) => p.evolve(t0, x0, dt, dw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gbm::GbmParams;
    use crate::process::Discretisation;
    use crate::rates::hull_white::HullWhiteParams;
    use pathlab_core::market_data::curves::FlatForward;
    use pathlab_core::types::{Date, DayCountConvention};

    fn hull_white() -> HullWhiteProcess<f64> {
        let today = Date::from_ymd(2018, 11, 30).unwrap();
        let curve = FlatForward::new(today, 0.01, DayCountConvention::Actual360);
        HullWhiteProcess::new(HullWhiteParams::new(0.05, 0.0099255).unwrap(), curve)
    }

    #[test]
    fn test_dispatch_matches_inner_hull_white() {
        let inner = hull_white();
        let wrapped = Process1D::from(inner.clone());
        assert_eq!(wrapped.name(), "HW1F");
        assert_eq!(wrapped.initial_value(), inner.initial_value());
        assert_eq!(
            wrapped.evolve(0.5, 0.02, 0.01, 1.3),
            inner.evolve(0.5, 0.02, 0.01, 1.3)
        );
        assert_eq!(wrapped.variance(0.5, 0.02, 0.01), inner.variance(0.5, 0.02, 0.01));
    }

    #[test]
    fn test_dispatch_matches_inner_gbm() {
        let inner = GbmProcess::new(GbmParams::new(0.01, 0.01, 0.0099255).unwrap())
            .with_discretisation(Discretisation::Exact);
        let wrapped: Process1D<f64> = inner.clone().into();
        assert_eq!(wrapped.name(), "GBM");
        assert_eq!(wrapped.drift(0.0, 2.0), inner.drift(0.0, 2.0));
        assert_eq!(wrapped.diffusion(0.0, 2.0), inner.diffusion(0.0, 2.0));
        assert_eq!(
            wrapped.evolve(0.0, 0.01, 0.1, -0.4),
            inner.evolve(0.0, 0.01, 0.1, -0.4)
        );
    }

    #[test]
    fn test_heterogeneous_vec() {
        let processes: Vec<Process1D<f64>> = vec![
            hull_white().into(),
            GbmProcess::new(GbmParams::new(0.01, 0.01, 0.0099255).unwrap()).into(),
        ];
        let names: Vec<_> = processes.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["HW1F", "GBM"]);
    }
}
