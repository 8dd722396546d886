//! Correlated one-dimensional processes driven together.
//!
//! Each step draws one independent standard normal per process, correlates
//! them with the square root of the correlation matrix and hands component
//! `i` to process `i`:
//! ```text
//! dz = L dw,   x_i(t0 + dt) = evolve_i(t0, x_i, dt, dz_i)
//! ```

use pathlab_core::traits::Float;

use crate::correlation::{CholeskyFactor, CorrelationMatrix};
use crate::error::ModelError;
use crate::process::StochasticProcess1D;
use crate::process_enum::Process1D;

/// Array of processes sharing correlated Brownian drivers.
#[derive(Clone, Debug)]
pub struct ProcessArray<T: Float> {
    processes: Vec<Process1D<T>>,
    correlation: CorrelationMatrix<T>,
    sqrt_correlation: CholeskyFactor<T>,
}

impl<T: Float> ProcessArray<T> {
    /// Combine `processes` under `correlation`.
    ///
    /// # Errors
    ///
    /// - `EmptyProcessArray` for an empty list
    /// - `DimensionMismatch` if the correlation dimension differs from the
    ///   number of processes
    /// - `Correlation` if the matrix is not positive semi-definite
    ///
    /// # Example
    ///
    /// ```
    /// use pathlab_models::correlation::CorrelationMatrix;
    /// use pathlab_models::gbm::{GbmParams, GbmProcess};
    /// use pathlab_models::process_array::ProcessArray;
    ///
    /// let gbm = GbmProcess::new(GbmParams::new(1.0_f64, 0.0, 0.2).unwrap());
    /// let array = ProcessArray::new(
    ///     vec![gbm.clone().into(), gbm.into()],
    ///     CorrelationMatrix::two_factor(1.0).unwrap(),
    /// )
    /// .unwrap();
    /// assert_eq!(array.size(), 2);
    /// ```
    pub fn new(
        processes: Vec<Process1D<T>>,
        correlation: CorrelationMatrix<T>,
    ) -> Result<Self, ModelError> {
        if processes.is_empty() {
            return Err(ModelError::EmptyProcessArray);
        }
        if processes.len() != correlation.dim() {
            return Err(ModelError::DimensionMismatch {
                processes: processes.len(),
                correlation: correlation.dim(),
            });
        }
        let sqrt_correlation = correlation.pseudo_sqrt()?;
        Ok(Self {
            processes,
            correlation,
            sqrt_correlation,
        })
    }

    /// Number of processes.
    pub fn size(&self) -> usize {
        self.processes.len()
    }

    /// Number of Brownian factors consumed per step (one per process).
    pub fn factors(&self) -> usize {
        self.sqrt_correlation.dim()
    }

    /// Initial value of every process.
    pub fn initial_values(&self) -> Vec<T> {
        self.processes.iter().map(|p| p.initial_value()).collect()
    }

    /// Process `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= self.size()`.
    pub fn process(&self, i: usize) -> &Process1D<T> {
        &self.processes[i]
    }

    /// All processes in order.
    pub fn processes(&self) -> &[Process1D<T>] {
        &self.processes
    }

    /// Correlation between the processes' drivers.
    pub fn correlation(&self) -> &CorrelationMatrix<T> {
        &self.correlation
    }

    /// Advance every process one step from `x0` at `t0`, writing into `out`.
    ///
    /// `dw` holds independent standard normals, one per process.
    ///
    /// # Panics
    ///
    /// Panics if `x0`, `dw` or `out` is shorter than `self.size()`.
    pub fn evolve(&self, t0: T, x0: &[T], dt: T, dw: &[T], out: &mut [T]) {
        let n = self.size();
        assert!(
            x0.len() >= n && dw.len() >= n && out.len() >= n,
            "State buffers ({}, {}, {}) are shorter than process count {}",
            x0.len(),
            dw.len(),
            out.len(),
            n
        );

        // out holds the correlated shocks until each is consumed in place
        self.sqrt_correlation.transform_into(dw, out);
        for (i, process) in self.processes.iter().enumerate() {
            out[i] = process.evolve(t0, x0[i], dt, out[i]);
        }
    }
}
