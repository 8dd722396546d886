//! Unified interface for one-dimensional stochastic processes.
//!
//! A process follows
//! ```text
//! dx = mu(t, x) dt + sigma(t, x) dW
//! ```
//! and is advanced over a time step by
//! ```text
//! x(t0 + dt) = E[x(t0 + dt) | x(t0) = x0] + sd(t0, x0, dt) * dw,   dw ~ N(0, 1)
//! ```
//! The default `expectation` and `std_deviation` are the Euler ones; processes
//! with a closed-form transition override them.

use pathlab_core::traits::Float;

/// How a process computes its one-step transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Discretisation {
    /// Euler-Maruyama: `x0 + mu dt`, `sigma sqrt(dt)`.
    Euler,
    /// Closed-form transition density where the process has one.
    #[default]
    Exact,
}

impl Discretisation {
    /// Lowercase name, as written in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            Discretisation::Euler => "euler",
            Discretisation::Exact => "exact",
        }
    }
}

/// One-dimensional Ito process.
///
/// # Type Parameters
/// * `T` - Float type (f64 or f32)
///
/// # Static Dispatch Only
/// Combine processes through [`crate::process_enum::Process1D`], not trait
/// objects.
pub trait StochasticProcess1D<T: Float> {
    /// Short name used in logs and chart titles.
    fn name(&self) -> &'static str;

    /// Value of the process at `t = 0`.
    fn initial_value(&self) -> T;

    /// Drift coefficient `mu(t, x)`.
    fn drift(&self, t: T, x: T) -> T;

    /// Diffusion coefficient `sigma(t, x)`.
    fn diffusion(&self, t: T, x: T) -> T;

    /// Conditional expectation of `x(t0 + dt)` given `x(t0) = x0`.
    fn expectation(&self, t0: T, x0: T, dt: T) -> T {
        x0 + self.drift(t0, x0) * dt
    }

    /// Conditional standard deviation of `x(t0 + dt)` given `x(t0) = x0`.
    fn std_deviation(&self, t0: T, x0: T, dt: T) -> T {
        self.diffusion(t0, x0) * dt.sqrt()
    }

    /// Conditional variance of `x(t0 + dt)` given `x(t0) = x0`.
    fn variance(&self, t0: T, x0: T, dt: T) -> T {
        let sd = self.std_deviation(t0, x0, dt);
        sd * sd
    }

    /// Advance `x0` from `t0` to `t0 + dt` with the standard normal draw `dw`.
    fn evolve(&self, t0: T, x0: T, dt: T, dw: T) -> T {
        self.expectation(t0, x0, dt) + self.std_deviation(t0, x0, dt) * dw
    }
}
