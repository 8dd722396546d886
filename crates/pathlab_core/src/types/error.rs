//! Structured error types for the foundation layer.
//!
//! - `DateError`: Errors from date construction and parsing
//! - `TimeGridError`: Errors from time grid construction

use thiserror::Error;

/// Date construction and parsing errors.
///
/// # Examples
/// ```
/// use pathlab_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Time grid construction errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeGridError {
    /// Grid end time is not positive and finite.
    #[error("Invalid grid end time: {0}")]
    InvalidEnd(f64),

    /// Regular grid requested with zero steps.
    #[error("Time grid needs at least one step")]
    NoSteps,

    /// Explicit grid has fewer than two points.
    #[error("Time grid needs at least two points, got {0}")]
    TooFewPoints(usize),

    /// Explicit grid does not start at zero.
    #[error("Time grid must start at 0, got {0}")]
    NonZeroStart(f64),

    /// Explicit grid is not strictly increasing.
    #[error("Time grid not strictly increasing at index {index}: {previous} >= {current}")]
    NotIncreasing {
        /// Index of the offending point
        index: usize,
        /// Value at `index - 1`
        previous: f64,
        /// Value at `index`
        current: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad input".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad input");
    }

    #[test]
    fn test_time_grid_error_display() {
        let err = TimeGridError::NotIncreasing {
            index: 3,
            previous: 1.0,
            current: 0.5,
        };
        assert!(err.to_string().contains("index 3"));
        assert!(TimeGridError::NoSteps.to_string().contains("at least one step"));
    }
}
