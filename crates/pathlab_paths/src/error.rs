//! Error types for simulation configuration and path storage.

use thiserror::Error;

/// Simulation configuration errors, raised by the builder.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, 1_000_000].
    #[error("Invalid path count {0}: must be in range [1, 1_000_000]")]
    InvalidPathCount(usize),

    /// A required field was never set.
    #[error("Missing required parameter '{0}'")]
    MissingParameter(&'static str),
}

/// Path storage errors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PathError {
    /// Flat buffer length does not match the requested shape.
    #[error("Shape mismatch: expected {expected} values, got {got}")]
    ShapeMismatch {
        /// `n_paths * n_times`
        expected: usize,
        /// Buffer length
        got: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidPathCount(0);
        assert!(err.to_string().contains("Invalid path count 0"));

        let err = ConfigError::MissingParameter("n_paths");
        assert!(err.to_string().contains("n_paths"));
    }

    #[test]
    fn test_path_error_display() {
        let err = PathError::ShapeMismatch {
            expected: 10,
            got: 9,
        };
        assert_eq!(err.to_string(), "Shape mismatch: expected 10 values, got 9");
    }
}
