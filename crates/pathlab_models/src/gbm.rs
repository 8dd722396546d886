//! Geometric Brownian Motion.
//!
//! ```text
//! dS = mu * S * dt + sigma * S * dW
//! ```
//!
//! Two transitions are available:
//! - `Euler` (default): level-space step, `S + mu S dt + sigma S sqrt(dt) dW`
//! - `Exact`: log-space solution, `S exp((mu - sigma^2/2) dt + sigma sqrt(dt) dW)`
//!
//! The Euler step is the default because it is the transition a generic
//! level-space GBM process uses; the log-space step keeps paths positive for
//! any step size.

use pathlab_core::traits::{lit, Float};

use crate::error::ModelError;
use crate::process::{Discretisation, StochasticProcess1D};

/// GBM parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GbmParams<T: Float> {
    /// Initial value S(0)
    pub initial_value: T,
    /// Drift mu (annualised)
    pub drift: T,
    /// Volatility sigma (annualised)
    pub volatility: T,
}

impl<T: Float> GbmParams<T> {
    /// Create GBM parameters with validation.
    ///
    /// # Errors
    /// `ModelError::InvalidParameter` if `initial_value <= 0`, `volatility < 0`
    /// or any input is not finite.
    pub fn new(initial_value: T, drift: T, volatility: T) -> Result<Self, ModelError> {
        if !(initial_value > T::zero() && initial_value.is_finite()) {
            return Err(ModelError::invalid(
                "initial_value",
                format!(
                    "must be positive, got {}",
                    initial_value.to_f64().unwrap_or(f64::NAN)
                ),
            ));
        }
        if !drift.is_finite() {
            return Err(ModelError::invalid("drift", "must be finite"));
        }
        if !(volatility >= T::zero() && volatility.is_finite()) {
            return Err(ModelError::invalid(
                "volatility",
                format!(
                    "must be non-negative, got {}",
                    volatility.to_f64().unwrap_or(f64::NAN)
                ),
            ));
        }
        Ok(Self {
            initial_value,
            drift,
            volatility,
        })
    }
}

/// Geometric Brownian Motion process.
#[derive(Clone, Debug, PartialEq)]
pub struct GbmProcess<T: Float> {
    params: GbmParams<T>,
    discretisation: Discretisation,
}

impl<T: Float> GbmProcess<T> {
    /// GBM with the Euler transition.
    pub fn new(params: GbmParams<T>) -> Self {
        Self {
            params,
            discretisation: Discretisation::Euler,
        }
    }

    /// Select the transition.
    pub fn with_discretisation(mut self, discretisation: Discretisation) -> Self {
        self.discretisation = discretisation;
        self
    }

    /// Model parameters.
    pub fn params(&self) -> &GbmParams<T> {
        &self.params
    }

    /// Active transition.
    pub fn discretisation(&self) -> Discretisation {
        self.discretisation
    }
}

impl<T: Float> StochasticProcess1D<T> for GbmProcess<T> {
    fn name(&self) -> &'static str {
        "GBM"
    }

    fn initial_value(&self) -> T {
        self.params.initial_value
    }

    fn drift(&self, _t: T, x: T) -> T {
        self.params.drift * x
    }

    fn diffusion(&self, _t: T, x: T) -> T {
        self.params.volatility * x
    }

    fn expectation(&self, t0: T, x0: T, dt: T) -> T {
        match self.discretisation {
            Discretisation::Euler => x0 + self.drift(t0, x0) * dt,
            Discretisation::Exact => x0 * (self.params.drift * dt).exp(),
        }
    }

    fn std_deviation(&self, t0: T, x0: T, dt: T) -> T {
        match self.discretisation {
            Discretisation::Euler => self.diffusion(t0, x0) * dt.sqrt(),
            Discretisation::Exact => {
                let sigma = self.params.volatility;
                let growth = (self.params.drift * dt).exp();
                x0 * growth * ((sigma * sigma * dt).exp() - T::one()).sqrt()
            }
        }
    }

    fn evolve(&self, t0: T, x0: T, dt: T, dw: T) -> T {
        match self.discretisation {
            Discretisation::Euler => {
                self.expectation(t0, x0, dt) + self.std_deviation(t0, x0, dt) * dw
            }
            Discretisation::Exact => {
                let sigma = self.params.volatility;
                let half: T = lit(0.5);
                let drift = (self.params.drift - half * sigma * sigma) * dt;
                let diffusion = sigma * dt.sqrt() * dw;
                x0 * (drift + diffusion).exp()
            }
        }
    }
}
