//! Simulation time grids.
//!
//! A [`TimeGrid`] is the sequence of model times, in years, at which paths are
//! sampled. Index 0 is always `t = 0` and holds the initial value of every
//! path; the remaining points are strictly increasing.
//!
//! ```
//! use pathlab_core::time_grid::TimeGrid;
//!
//! let grid = TimeGrid::regular(1.0, 4).unwrap();
//! assert_eq!(grid.times(), &[0.0, 0.25, 0.5, 0.75, 1.0]);
//! assert_eq!(grid.steps(), 4);
//! assert!((grid.dt(1) - 0.25).abs() < 1e-15);
//! ```

use crate::types::TimeGridError;

/// Ordered simulation times starting at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    times: Vec<f64>,
}

impl TimeGrid {
    /// Regular grid with `steps` equal intervals on `[0, end]`.
    ///
    /// The grid has `steps + 1` points and its last point is exactly `end`.
    ///
    /// # Errors
    ///
    /// - `TimeGridError::InvalidEnd` if `end` is not positive and finite
    /// - `TimeGridError::NoSteps` if `steps == 0`
    pub fn regular(end: f64, steps: usize) -> Result<Self, TimeGridError> {
        if !(end > 0.0 && end.is_finite()) {
            return Err(TimeGridError::InvalidEnd(end));
        }
        if steps == 0 {
            return Err(TimeGridError::NoSteps);
        }

        let dt = end / steps as f64;
        let mut times: Vec<f64> = (0..=steps).map(|i| i as f64 * dt).collect();
        times[steps] = end;

        Ok(Self { times })
    }

    /// Grid from explicit times.
    ///
    /// # Errors
    ///
    /// Fails unless the input has at least two points, starts at 0 and is
    /// strictly increasing.
    pub fn from_times(times: Vec<f64>) -> Result<Self, TimeGridError> {
        if times.len() < 2 {
            return Err(TimeGridError::TooFewPoints(times.len()));
        }
        if times[0] != 0.0 {
            return Err(TimeGridError::NonZeroStart(times[0]));
        }
        for (index, pair) in times.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(TimeGridError::NotIncreasing {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(Self { times })
    }

    /// Number of points (steps + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Always false for a constructed grid; provided for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Number of intervals.
    #[inline]
    pub fn steps(&self) -> usize {
        self.times.len() - 1
    }

    /// Time at index `i`, if in range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<f64> {
        self.times.get(i).copied()
    }

    /// All grid times.
    #[inline]
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Final time (maturity).
    #[inline]
    pub fn last(&self) -> f64 {
        self.times[self.times.len() - 1]
    }

    /// Length of the interval ending at point `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i == 0` or `i >= len()`.
    #[inline]
    pub fn dt(&self, i: usize) -> f64 {
        assert!(i >= 1 && i < self.times.len(), "dt index {} out of range", i);
        self.times[i] - self.times[i - 1]
    }

    /// Iterator over grid times.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.times.iter().copied()
    }
}

impl std::ops::Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.times[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_regular_daily_five_years() {
        let grid = TimeGrid::regular(5.0, 5 * 365).unwrap();
        assert_eq!(grid.len(), 1826);
        assert_eq!(grid.steps(), 1825);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid.last(), 5.0);
        assert_relative_eq!(grid.dt(1), 5.0 / 1825.0, epsilon = 1e-15);
    }

    #[test]
    fn test_regular_rejects_bad_input() {
        assert_eq!(TimeGrid::regular(0.0, 10), Err(TimeGridError::InvalidEnd(0.0)));
        assert!(TimeGrid::regular(f64::NAN, 10).is_err());
        assert_eq!(TimeGrid::regular(1.0, 0), Err(TimeGridError::NoSteps));
    }

    #[test]
    fn test_from_times_valid() {
        let grid = TimeGrid::from_times(vec![0.0, 0.5, 2.0]).unwrap();
        assert_eq!(grid.steps(), 2);
        assert_relative_eq!(grid.dt(2), 1.5);
        assert_eq!(grid.get(3), None);
    }

    #[test]
    fn test_from_times_rejects_bad_input() {
        assert_eq!(
            TimeGrid::from_times(vec![0.0]),
            Err(TimeGridError::TooFewPoints(1))
        );
        assert_eq!(
            TimeGrid::from_times(vec![0.1, 0.5]),
            Err(TimeGridError::NonZeroStart(0.1))
        );
        assert!(matches!(
            TimeGrid::from_times(vec![0.0, 0.5, 0.5]),
            Err(TimeGridError::NotIncreasing { index: 2, .. })
        ));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_dt_zero_panics() {
        let grid = TimeGrid::regular(1.0, 2).unwrap();
        let _ = grid.dt(0);
    }

    proptest! {
        #[test]
        fn prop_regular_grid_is_evenly_spaced(end in 0.01f64..50.0, steps in 1usize..2000) {
            let grid = TimeGrid::regular(end, steps).unwrap();
            prop_assert_eq!(grid.len(), steps + 1);
            prop_assert_eq!(grid.last(), end);
            let expected = end / steps as f64;
            for i in 1..grid.len() {
                prop_assert!((grid.dt(i) - expected).abs() < 1e-9 * end.max(1.0));
            }
        }
    }
}
