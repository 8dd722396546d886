//! Correlation matrices and their lower-triangular square roots.
//!
//! Independent standard normals `z` become correlated normals `w = L z` where
//! `C = L L^T`. Two factorisations are offered:
//!
//! - [`CorrelationMatrix::cholesky`]: strict, positive definite input only
//! - [`CorrelationMatrix::pseudo_sqrt`]: accepts positive semi-definite input
//!   such as `rho = 1`, where a vanishing pivot yields a zero column
//!
//! ## Example
//!
//! ```
//! use pathlab_models::correlation::CorrelationMatrix;
//!
//! let corr = CorrelationMatrix::two_factor(1.0_f64).unwrap();
//! assert!(corr.cholesky().is_err());
//!
//! let root = corr.pseudo_sqrt().unwrap();
//! let w = root.transform(&[0.7, -2.0]);
//! assert_eq!(w[0], w[1]);
//! ```

use pathlab_core::traits::{lit, Float};

use crate::error::CorrelationError;

const TOLERANCE: f64 = 1e-10;

/// Validated correlation matrix.
///
/// - Square and symmetric
/// - Diagonal elements equal to 1.0
/// - Off-diagonal elements finite and in [-1, 1]
#[derive(Clone, Debug, PartialEq)]
pub struct CorrelationMatrix<T: Float> {
    /// Matrix elements in row-major order
    data: Vec<T>,
    /// Matrix dimension (n x n)
    dim: usize,
}

impl<T: Float> CorrelationMatrix<T> {
    /// Create a correlation matrix from row-major data.
    ///
    /// # Errors
    ///
    /// - `InvalidDimensions` unless `data.len() == dim * dim`
    /// - `InvalidDiagonal` for a diagonal element other than 1
    /// - `NotSymmetric` for `C[i][j] != C[j][i]`
    /// - `OutOfRange` for an off-diagonal element outside [-1, 1] or NaN
    pub fn new(data: &[T], dim: usize) -> Result<Self, CorrelationError> {
        let expected = dim * dim;
        if data.len() != expected {
            return Err(CorrelationError::InvalidDimensions {
                expected,
                got: data.len(),
            });
        }

        let one = T::one();
        let epsilon: T = lit(TOLERANCE);

        for i in 0..dim {
            let diag = data[i * dim + i];
            if !((diag - one).abs() <= epsilon) {
                return Err(CorrelationError::InvalidDiagonal {
                    index: i,
                    value: diag.to_f64().unwrap_or(f64::NAN),
                });
            }
        }

        for i in 0..dim {
            for j in (i + 1)..dim {
                let val_ij = data[i * dim + j];
                let val_ji = data[j * dim + i];

                if !(val_ij.abs() <= one) {
                    return Err(CorrelationError::OutOfRange {
                        i,
                        j,
                        value: val_ij.to_f64().unwrap_or(f64::NAN),
                    });
                }
                if !((val_ij - val_ji).abs() <= epsilon) {
                    return Err(CorrelationError::NotSymmetric { i, j });
                }
            }
        }

        Ok(Self {
            data: data.to_vec(),
            dim,
        })
    }

    /// Identity correlation (independent factors).
    pub fn identity(dim: usize) -> Self {
        let mut data = vec![T::zero(); dim * dim];
        for i in 0..dim {
            data[i * dim + i] = T::one();
        }
        Self { data, dim }
    }

    /// `[[1, rho], [rho, 1]]`.
    pub fn two_factor(rho: T) -> Result<Self, CorrelationError> {
        Self::new(&[T::one(), rho, rho, T::one()], 2)
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j).
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[i * self.dim + j]
    }

    /// Strict Cholesky decomposition, `C = L L^T`.
    ///
    /// Fails with `NotPositiveDefinite` on any non-positive pivot, so singular
    /// matrices such as `rho = 1` are rejected.
    pub fn cholesky(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let mut lower = vec![T::zero(); n * n];

        for i in 0..n {
            for j in 0..=i {
                let mut sum = T::zero();
                for k in 0..j {
                    sum = sum + lower[i * n + k] * lower[j * n + k];
                }

                if j == i {
                    let diag = self.get(i, i) - sum;
                    if diag <= T::zero() {
                        return Err(CorrelationError::NotPositiveDefinite);
                    }
                    lower[i * n + i] = diag.sqrt();
                } else {
                    lower[i * n + j] = (self.get(i, j) - sum) / lower[j * n + j];
                }
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }

    /// Lower-triangular square root that tolerates positive semi-definite
    /// input.
    ///
    /// A pivot in `[-1e-10, 1e-10]` is treated as zero and its column below
    /// the diagonal left at zero; the factor still satisfies `C = L L^T`.
    ///
    /// # Errors
    ///
    /// `NotPositiveSemiDefinite` when a pivot falls below `-1e-10`.
    pub fn pseudo_sqrt(&self) -> Result<CholeskyFactor<T>, CorrelationError> {
        let n = self.dim;
        let tolerance: T = lit(TOLERANCE);
        let mut lower = vec![T::zero(); n * n];

        for j in 0..n {
            let mut sum = T::zero();
            for k in 0..j {
                let l_jk = lower[j * n + k];
                sum = sum + l_jk * l_jk;
            }
            let residual = self.get(j, j) - sum;

            if residual < -tolerance {
                return Err(CorrelationError::NotPositiveSemiDefinite {
                    index: j,
                    residual: residual.to_f64().unwrap_or(f64::NAN),
                });
            }
            if residual <= tolerance {
                // column stays zero
                continue;
            }

            let l_jj = residual.sqrt();
            lower[j * n + j] = l_jj;
            for i in (j + 1)..n {
                let mut acc = T::zero();
                for k in 0..j {
                    acc = acc + lower[i * n + k] * lower[j * n + k];
                }
                lower[i * n + j] = (self.get(i, j) - acc) / l_jj;
            }
        }

        Ok(CholeskyFactor { data: lower, dim: n })
    }
}

/// Lower-triangular factor `L` of a correlation matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct CholeskyFactor<T: Float> {
    /// Lower triangular elements (row-major)
    data: Vec<T>,
    /// Matrix dimension
    dim: usize,
}

impl<T: Float> CholeskyFactor<T> {
    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Element at (i, j); zero above the diagonal.
    pub fn get(&self, i: usize, j: usize) -> T {
        if j > i {
            T::zero()
        } else {
            self.data[i * self.dim + j]
        }
    }

    /// `w = L z` into a new vector.
    ///
    /// # Panics
    ///
    /// Panics if `z.len() < self.dim()`.
    pub fn transform(&self, z: &[T]) -> Vec<T> {
        let mut w = vec![T::zero(); self.dim];
        self.transform_into(z, &mut w);
        w
    }

    /// `w = L z` into a caller-provided buffer.
    ///
    /// # Panics
    ///
    /// Panics if `z` or `out` is shorter than `self.dim()`.
    pub fn transform_into(&self, z: &[T], out: &mut [T]) {
        assert!(
            z.len() >= self.dim && out.len() >= self.dim,
            "Buffer lengths ({}, {}) are less than matrix dimension {}",
            z.len(),
            out.len(),
            self.dim
        );

        let n = self.dim;
        for i in 0..n {
            let mut sum = T::zero();
            for j in 0..=i {
                sum = sum + self.data[i * n + j] * z[j];
            }
            out[i] = sum;
        }
    }
}
