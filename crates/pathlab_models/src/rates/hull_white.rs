//! Hull-White one-factor short rate process.
//!
//! ```text
//! dr(t) = [theta(t) - a * r(t)] * dt + sigma * dW(t)
//! ```
//! where:
//! - a = mean reversion speed (must be positive)
//! - sigma = volatility (must be positive)
//! - theta(t) = drift fitted to the initial forward curve f(0, t)
//!
//! ## Exact transition
//!
//! With `alpha(t) = f(0, t) + sigma^2 / (2 a^2) * (1 - exp(-a t))^2` the short
//! rate is Gaussian over any step:
//! ```text
//! E[r(t0 + dt)]  = r0 exp(-a dt) + alpha(t0 + dt) - alpha(t0) exp(-a dt)
//! sd[r(t0 + dt)] = sigma * sqrt((1 - exp(-2 a dt)) / (2 a))
//! ```
//! so a path driven by zero shocks traces `alpha(t)` exactly.
//!
//! ## Usage
//!
//! ```
//! use pathlab_core::market_data::curves::FlatForward;
//! use pathlab_core::types::{Date, DayCountConvention};
//! use pathlab_models::rates::hull_white::{HullWhiteParams, HullWhiteProcess};
//! use pathlab_models::process::StochasticProcess1D;
//!
//! let today = Date::from_ymd(2018, 11, 30).unwrap();
//! let curve = FlatForward::new(today, 0.01_f64, DayCountConvention::Actual360);
//! let hw = HullWhiteProcess::new(HullWhiteParams::new(0.05, 0.0099255).unwrap(), curve);
//!
//! assert!((hw.initial_value() - 0.01).abs() < 1e-12);
//! let next = hw.evolve(0.0, hw.initial_value(), 1.0 / 365.0, 0.0);
//! assert!((next - hw.alpha(1.0 / 365.0)).abs() < 1e-12);
//! ```

use pathlab_core::market_data::curves::{FlatForward, YieldCurve};
use pathlab_core::traits::{lit, Float};

use crate::error::ModelError;
use crate::process::{Discretisation, StochasticProcess1D};

/// Hull-White parameters.
///
/// # Fields
///
/// * `mean_reversion` - Mean reversion speed (a), must be positive
/// * `volatility` - Short rate volatility (sigma), must be positive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HullWhiteParams<T: Float> {
    /// Mean reversion speed (a > 0)
    pub mean_reversion: T,
    /// Volatility of short rate (sigma > 0)
    pub volatility: T,
}

impl<T: Float> HullWhiteParams<T> {
    /// Create Hull-White parameters with validation.
    ///
    /// # Example
    ///
    /// ```
    /// use pathlab_models::rates::hull_white::HullWhiteParams;
    ///
    /// assert!(HullWhiteParams::new(0.05_f64, 0.01).is_ok());
    /// assert!(HullWhiteParams::new(-0.05_f64, 0.01).is_err());
    /// ```
    pub fn new(mean_reversion: T, volatility: T) -> Result<Self, ModelError> {
        if !(mean_reversion > T::zero() && mean_reversion.is_finite()) {
            return Err(ModelError::invalid(
                "mean_reversion",
                format!(
                    "must be positive, got {}",
                    mean_reversion.to_f64().unwrap_or(f64::NAN)
                ),
            ));
        }
        if !(volatility > T::zero() && volatility.is_finite()) {
            return Err(ModelError::invalid(
                "volatility",
                format!(
                    "must be positive, got {}",
                    volatility.to_f64().unwrap_or(f64::NAN)
                ),
            ));
        }
        Ok(Self {
            mean_reversion,
            volatility,
        })
    }
}

/// Hull-White one-factor process fitted to a flat forward curve.
#[derive(Clone, Debug, PartialEq)]
pub struct HullWhiteProcess<T: Float> {
    params: HullWhiteParams<T>,
    curve: FlatForward<T>,
    discretisation: Discretisation,
}

impl<T: Float> HullWhiteProcess<T> {
    /// Process with the exact Gaussian transition.
    pub fn new(params: HullWhiteParams<T>, curve: FlatForward<T>) -> Self {
        Self {
            params,
            curve,
            discretisation: Discretisation::Exact,
        }
    }

    /// Select the transition.
    pub fn with_discretisation(mut self, discretisation: Discretisation) -> Self {
        self.discretisation = discretisation;
        self
    }

    /// Model parameters.
    pub fn params(&self) -> &HullWhiteParams<T> {
        &self.params
    }

    /// Initial forward curve.
    pub fn curve(&self) -> &FlatForward<T> {
        &self.curve
    }

    /// Active transition.
    pub fn discretisation(&self) -> Discretisation {
        self.discretisation
    }

    /// Instantaneous forward `f(0, t)`; times before the reference date read
    /// the curve at zero.
    fn forward(&self, t: T) -> T {
        self.curve
            .instantaneous_forward(t.max(T::zero()))
            .unwrap_or_else(|_| self.curve.rate())
    }

    /// Mean of the short rate at `t` seen from `t = 0`.
    pub fn alpha(&self, t: T) -> T {
        let a = self.params.mean_reversion;
        let sigma = self.params.volatility;
        let two: T = lit(2.0);
        let decay = T::one() - (-a * t).exp();
        self.forward(t) + sigma * sigma / (two * a * a) * decay * decay
    }

    /// Drift term `theta(t)` that fits the initial curve.
    ///
    /// `theta(t) = df(0,t)/dt + a f(0,t) + sigma^2 / (2a) (1 - exp(-2at))`
    pub fn theta(&self, t: T) -> T {
        let a = self.params.mean_reversion;
        let sigma = self.params.volatility;
        let two: T = lit(2.0);
        let h: T = lit(1e-4);
        let slope = if t > h {
            (self.forward(t + h) - self.forward(t - h)) / (two * h)
        } else {
            (self.forward(t + h) - self.forward(t)) / h
        };
        slope
            + a * self.forward(t)
            + sigma * sigma / (two * a) * (T::one() - (-two * a * t).exp())
    }
}

impl<T: Float> StochasticProcess1D<T> for HullWhiteProcess<T> {
    fn name(&self) -> &'static str {
        "HW1F"
    }

    fn initial_value(&self) -> T {
        self.forward(T::zero())
    }

    fn drift(&self, t: T, x: T) -> T {
        self.theta(t) - self.params.mean_reversion * x
    }

    fn diffusion(&self, _t: T, _x: T) -> T {
        self.params.volatility
    }

    fn expectation(&self, t0: T, x0: T, dt: T) -> T {
        match self.discretisation {
            Discretisation::Euler => x0 + self.drift(t0, x0) * dt,
            Discretisation::Exact => {
                let decay = (-self.params.mean_reversion * dt).exp();
                x0 * decay + self.alpha(t0 + dt) - self.alpha(t0) * decay
            }
        }
    }

    fn std_deviation(&self, t0: T, x0: T, dt: T) -> T {
        match self.discretisation {
            Discretisation::Euler => self.diffusion(t0, x0) * dt.sqrt(),
            Discretisation::Exact => {
                let a = self.params.mean_reversion;
                let two: T = lit(2.0);
                let var = (T::one() - (-two * a * dt).exp()) / (two * a);
                self.params.volatility * var.sqrt()
            }
        }
    }
}
