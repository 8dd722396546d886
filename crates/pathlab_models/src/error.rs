//! Error types for process construction and correlation.

use thiserror::Error;

/// Correlation matrix validation and factorisation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CorrelationError {
    /// Strict Cholesky hit a non-positive pivot.
    #[error("Correlation matrix is not positive definite")]
    NotPositiveDefinite,

    /// Residual pivot below tolerance: the matrix is not a valid correlation.
    #[error("Correlation matrix is not positive semi-definite (pivot {index}: {residual})")]
    NotPositiveSemiDefinite {
        /// Pivot index
        index: usize,
        /// Offending residual
        residual: f64,
    },

    /// Element count does not match `dim * dim`.
    #[error("Invalid matrix dimensions: expected {expected} elements, got {got}")]
    InvalidDimensions {
        /// Expected element count
        expected: usize,
        /// Actual element count
        got: usize,
    },

    /// Diagonal element differs from 1.
    #[error("Diagonal element at index {index} is {value}, expected 1.0")]
    InvalidDiagonal {
        /// Diagonal index
        index: usize,
        /// Offending value
        value: f64,
    },

    /// `C[i][j] != C[j][i]`.
    #[error("Matrix is not symmetric at ({i}, {j})")]
    NotSymmetric {
        /// Row
        i: usize,
        /// Column
        j: usize,
    },

    /// Off-diagonal element outside [-1, 1] or not finite.
    #[error("Correlation at ({i}, {j}) is {value}, must be in [-1, 1]")]
    OutOfRange {
        /// Row
        i: usize,
        /// Column
        j: usize,
        /// Offending value
        value: f64,
    },
}

/// Process construction errors.
///
/// # Examples
///
/// ```
/// use pathlab_models::error::ModelError;
///
/// let err = ModelError::InvalidParameter {
///     name: "volatility",
///     reason: "must be positive, got -0.1".to_string(),
/// };
/// assert!(err.to_string().contains("volatility"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A model parameter is out of its valid domain.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Why it was rejected
        reason: String,
    },

    /// Correlation dimension differs from the number of processes.
    #[error("Dimension mismatch: {processes} processes, correlation of dimension {correlation}")]
    DimensionMismatch {
        /// Number of processes
        processes: usize,
        /// Correlation matrix dimension
        correlation: usize,
    },

    /// A process array was built from an empty list.
    #[error("Process array needs at least one process")]
    EmptyProcessArray,

    /// Correlation matrix failure.
    #[error(transparent)]
    Correlation(#[from] CorrelationError),
}

impl ModelError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
