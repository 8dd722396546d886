//! Path extraction into plain numeric arrays.
//!
//! [`generate_paths`] draws `n` paths from a generator and copies them into
//! row-major storage, branching only on whether the target is a single
//! process or a correlated array.
//!
//! # Memory Layout
//!
//! - [`PathMatrix`]: `data[path * n_times + time]`
//! - [`PathCube`]: `data[(path * n_assets + asset) * n_times + time]`

use pathlab_core::time_grid::TimeGrid;
use pathlab_core::traits::{lit, Float};
use pathlab_models::{Process1D, ProcessArray, StochasticProcess1D};
use tracing::debug;

use crate::error::PathError;
use crate::generator::{MultiPathGenerator, PathGenerator};
use crate::rng::SimRng;

/// What to simulate.
#[derive(Clone, Debug)]
pub enum SimulationTarget<T: Float> {
    /// One process, one path per row.
    Single(Process1D<T>),
    /// Correlated processes, one multi-path per row.
    Correlated(ProcessArray<T>),
}

impl<T: Float> SimulationTarget<T> {
    /// Names of the simulated processes, in storage order.
    pub fn process_names(&self) -> Vec<&'static str> {
        match self {
            SimulationTarget::Single(process) => vec![process.name()],
            SimulationTarget::Correlated(array) => {
                array.processes().iter().map(|p| p.name()).collect()
            }
        }
    }
}

impl<T: Float> From<Process1D<T>> for SimulationTarget<T> {
    fn from(process: Process1D<T>) -> Self {
        SimulationTarget::Single(process)
    }
}

impl<T: Float> From<ProcessArray<T>> for SimulationTarget<T> {
    fn from(array: ProcessArray<T>) -> Self {
        SimulationTarget::Correlated(array)
    }
}

/// `(n_paths, n_times)` paths of one process.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix<T: Float> {
    data: Vec<T>,
    n_paths: usize,
    n_times: usize,
}

impl<T: Float> PathMatrix<T> {
    /// Matrix from row-major data.
    ///
    /// # Errors
    ///
    /// `PathError::ShapeMismatch` unless `data.len() == n_paths * n_times`.
    pub fn from_vec(data: Vec<T>, n_paths: usize, n_times: usize) -> Result<Self, PathError> {
        let expected = n_paths * n_times;
        if data.len() != expected {
            return Err(PathError::ShapeMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            data,
            n_paths,
            n_times,
        })
    }

    /// `(n_paths, n_times)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.n_paths, self.n_times)
    }

    /// Value of path `i` at grid point `k`.
    #[inline]
    pub fn get(&self, i: usize, k: usize) -> T {
        self.data[i * self.n_times + k]
    }

    /// Path `i`.
    #[inline]
    pub fn path(&self, i: usize) -> &[T] {
        &self.data[i * self.n_times..(i + 1) * self.n_times]
    }

    /// Iterate over paths.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> + '_ {
        // chunks_exact(0) panics
        self.data.chunks_exact(self.n_times.max(1))
    }

    /// Row-major values.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Smallest and largest value over every path, `None` when empty.
    pub fn value_range(&self) -> Option<(T, T)> {
        let mut values = self.data.iter().copied();
        let first = values.next()?;
        Some(values.fold((first, first), |(lo, hi), x| (lo.min(x), hi.max(x))))
    }

    /// Mean of the final values, `None` when there are no paths.
    pub fn terminal_mean(&self) -> Option<T> {
        if self.n_paths == 0 || self.n_times == 0 {
            return None;
        }
        let sum = self
            .rows()
            .fold(T::zero(), |acc, row| acc + row[self.n_times - 1]);
        Some(sum / lit(self.n_paths as f64))
    }
}

/// `(n_paths, n_assets, n_times)` joint paths of a process array.
#[derive(Clone, Debug, PartialEq)]
pub struct PathCube<T: Float> {
    data: Vec<T>,
    n_paths: usize,
    n_assets: usize,
    n_times: usize,
}

impl<T: Float> PathCube<T> {
    /// `(n_paths, n_assets, n_times)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.n_paths, self.n_assets, self.n_times)
    }

    /// Value of path `i`, process `j`, grid point `k`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize) -> T {
        self.data[(i * self.n_assets + j) * self.n_times + k]
    }

    /// Path `i` of process `j`.
    #[inline]
    pub fn path(&self, i: usize, j: usize) -> &[T] {
        let start = (i * self.n_assets + j) * self.n_times;
        &self.data[start..start + self.n_times]
    }

    /// Copy of every path of process `j`.
    pub fn asset(&self, j: usize) -> PathMatrix<T> {
        let mut data = Vec::with_capacity(self.n_paths * self.n_times);
        for i in 0..self.n_paths {
            data.extend_from_slice(self.path(i, j));
        }
        PathMatrix {
            data,
            n_paths: self.n_paths,
            n_times: self.n_times,
        }
    }
}

/// Result of [`generate_paths`].
#[derive(Clone, Debug, PartialEq)]
pub enum SimulatedPaths<T: Float> {
    /// Paths of a single process.
    Single(PathMatrix<T>),
    /// Joint paths of a process array.
    Correlated(PathCube<T>),
}

impl<T: Float> SimulatedPaths<T> {
    /// Number of simulated paths.
    pub fn n_paths(&self) -> usize {
        match self {
            SimulatedPaths::Single(m) => m.shape().0,
            SimulatedPaths::Correlated(c) => c.shape().0,
        }
    }

    /// Number of grid points per path.
    pub fn n_times(&self) -> usize {
        match self {
            SimulatedPaths::Single(m) => m.shape().1,
            SimulatedPaths::Correlated(c) => c.shape().2,
        }
    }
}

/// Draw `n` paths of `target` along `grid`.
///
/// Every row holds exactly `grid.len()` values aligned with the grid times,
/// the first being the process's initial value. `n == 0` yields an empty
/// array with the right trailing shape.
///
/// # Examples
///
/// ```rust
/// use pathlab_core::time_grid::TimeGrid;
/// use pathlab_models::{GbmParams, GbmProcess, Process1D};
/// use pathlab_paths::paths::{generate_paths, SimulatedPaths, SimulationTarget};
/// use pathlab_paths::rng::SimRng;
///
/// let gbm = Process1D::from(GbmProcess::new(GbmParams::new(0.01, 0.01, 0.0099255).unwrap()));
/// let grid = TimeGrid::regular(5.0, 1825).unwrap();
/// let paths = generate_paths(&SimulationTarget::Single(gbm), &grid, 25, &mut SimRng::from_seed(1));
///
/// match paths {
///     SimulatedPaths::Single(matrix) => assert_eq!(matrix.shape(), (25, 1826)),
///     SimulatedPaths::Correlated(_) => unreachable!(),
/// }
/// ```
pub fn generate_paths<T: Float>(
    target: &SimulationTarget<T>,
    grid: &TimeGrid,
    n: usize,
    rng: &mut SimRng,
) -> SimulatedPaths<T> {
    match target {
        SimulationTarget::Single(process) => {
            SimulatedPaths::Single(generate_single(process, grid, n, rng))
        }
        SimulationTarget::Correlated(array) => {
            SimulatedPaths::Correlated(generate_correlated(array, grid, n, rng))
        }
    }
}

/// Draw `n` paths of a single process into a `(n, grid.len())` matrix.
pub fn generate_single<T: Float>(
    process: &Process1D<T>,
    grid: &TimeGrid,
    n: usize,
    rng: &mut SimRng,
) -> PathMatrix<T> {
    let n_times = grid.len();
    let mut generator = PathGenerator::new(process, grid);
    let mut data = Vec::with_capacity(n * n_times);
    for _ in 0..n {
        let path = generator.next_path(rng);
        data.extend_from_slice(path.values());
    }
    debug!(
        process = process.name(),
        n_paths = n,
        n_times,
        "extracted single-process paths"
    );
    PathMatrix {
        data,
        n_paths: n,
        n_times,
    }
}

/// Draw `n` joint paths of a process array into a
/// `(n, array.size(), grid.len())` cube.
pub fn generate_correlated<T: Float>(
    array: &ProcessArray<T>,
    grid: &TimeGrid,
    n: usize,
    rng: &mut SimRng,
) -> PathCube<T> {
    let n_times = grid.len();
    let n_assets = array.size();
    let mut generator = MultiPathGenerator::new(array, grid);
    let mut data = Vec::with_capacity(n * n_assets * n_times);
    for _ in 0..n {
        let multi = generator.next_multi_path(rng);
        for j in 0..multi.asset_number() {
            data.extend_from_slice(multi.path(j).values());
        }
    }
    debug!(n_assets, n_paths = n, n_times, "extracted correlated paths");
    PathCube {
        data,
        n_paths: n,
        n_assets,
        n_times,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use pathlab_core::market_data::curves::FlatForward;
    use pathlab_core::types::{Date, DayCountConvention};
    use pathlab_models::{
        CorrelationMatrix, GbmParams, GbmProcess, HullWhiteParams, HullWhiteProcess,
    };

    fn hull_white() -> Process1D<f64> {
        let today = Date::from_ymd(2018, 11, 30).unwrap();
        let curve = FlatForward::new(today, 0.01, DayCountConvention::Actual360);
        HullWhiteProcess::new(HullWhiteParams::new(0.05, 0.0099255).unwrap(), curve).into()
    }

    fn gbm() -> Process1D<f64> {
        GbmProcess::new(GbmParams::new(0.01, 0.01, 0.0099255).unwrap()).into()
    }

    fn array(rho: f64) -> ProcessArray<f64> {
        ProcessArray::new(
            vec![hull_white(), gbm()],
            CorrelationMatrix::two_factor(rho).unwrap(),
        )
        .unwrap()
    }

    fn single(paths: SimulatedPaths<f64>) -> PathMatrix<f64> {
        match paths {
            SimulatedPaths::Single(m) => m,
            SimulatedPaths::Correlated(_) => panic!("expected single-process paths"),
        }
    }

    fn cube(paths: SimulatedPaths<f64>) -> PathCube<f64> {
        match paths {
            SimulatedPaths::Correlated(c) => c,
            SimulatedPaths::Single(_) => panic!("expected correlated paths"),
        }
    }

    #[test]
    fn test_single_fills_every_row() {
        let grid = TimeGrid::regular(1.0, 20).unwrap();
        let target = SimulationTarget::Single(hull_white());
        let m = single(generate_paths(&target, &grid, 7, &mut SimRng::from_seed(1)));
        assert_eq!(m.shape(), (7, 21));
        assert_eq!(m.rows().count(), 7);
        for row in m.rows() {
            assert_eq!(row[0], 0.01);
            assert!(row.iter().all(|x| x.is_finite()));
        }
        // distinct draws per row
        assert_ne!(m.path(0)[20], m.path(6)[20]);
    }

    #[test]
    fn test_correlated_shape_and_initial_values() {
        let grid = TimeGrid::regular(1.0, 10).unwrap();
        let target = SimulationTarget::from(array(0.3));
        let c = cube(generate_paths(&target, &grid, 4, &mut SimRng::from_seed(2)));
        assert_eq!(c.shape(), (4, 2, 11));
        for i in 0..4 {
            assert_eq!(c.get(i, 0, 0), 0.01);
            assert_eq!(c.get(i, 1, 0), 0.01);
            assert_eq!(c.path(i, 1).len(), 11);
        }
    }

    #[test]
    fn test_asset_slice_matches_cube() {
        let grid = TimeGrid::regular(1.0, 5).unwrap();
        let c = cube(generate_paths(
            &SimulationTarget::from(array(0.5)),
            &grid,
            3,
            &mut SimRng::from_seed(3),
        ));
        let gbm_paths = c.asset(1);
        assert_eq!(gbm_paths.shape(), (3, 6));
        for i in 0..3 {
            assert_eq!(gbm_paths.path(i), c.path(i, 1));
        }
    }

    #[test]
    fn test_zero_paths_keep_trailing_shape() {
        let grid = TimeGrid::regular(1.0, 5).unwrap();
        let mut rng = SimRng::from_seed(4);
        let m = single(generate_paths(
            &SimulationTarget::Single(gbm()),
            &grid,
            0,
            &mut rng,
        ));
        assert_eq!(m.shape(), (0, 6));
        assert_eq!(m.rows().count(), 0);
        assert_eq!(m.value_range(), None);
        assert_eq!(m.terminal_mean(), None);

        let c = cube(generate_paths(&SimulationTarget::from(array(0.0)), &grid, 0, &mut rng));
        assert_eq!(c.shape(), (0, 2, 6));
    }

    #[test]
    fn test_same_seed_reproduces() {
        let grid = TimeGrid::regular(1.0, 30).unwrap();
        let target = SimulationTarget::from(array(1.0));
        let a = generate_paths(&target, &grid, 5, &mut SimRng::from_seed(77));
        let b = generate_paths(&target, &grid, 5, &mut SimRng::from_seed(77));
        assert_eq!(a, b);
        assert_eq!(a.n_paths(), 5);
        assert_eq!(a.n_times(), 31);
    }

    #[test]
    fn test_value_range_and_terminal_mean() {
        let m = PathMatrix::from_vec(vec![1.0, 2.0, 3.0, -1.0, 0.5, 5.0], 2, 3).unwrap();
        assert_eq!(m.value_range(), Some((-1.0, 5.0)));
        assert_eq!(m.terminal_mean(), Some(4.0));
        assert_eq!(m.get(1, 2), 5.0);
    }

    #[test]
    fn test_from_vec_rejects_bad_shape() {
        assert_eq!(
            PathMatrix::from_vec(vec![1.0; 5], 2, 3).unwrap_err(),
            PathError::ShapeMismatch {
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn test_process_names() {
        assert_eq!(SimulationTarget::Single(gbm()).process_names(), vec!["GBM"]);
        assert_eq!(
            SimulationTarget::from(array(0.0)).process_names(),
            vec!["HW1F", "GBM"]
        );
    }

    proptest! {
        #[test]
        fn prop_single_shape_and_start(n in 0usize..12, steps in 1usize..60, seed in any::<u64>()) {
            let grid = TimeGrid::regular(1.0, steps).unwrap();
            let target = SimulationTarget::Single(hull_white());
            let m = single(generate_paths(&target, &grid, n, &mut SimRng::from_seed(seed)));
            prop_assert_eq!(m.shape(), (n, grid.len()));
            prop_assert_eq!(m.rows().count(), n);
            for row in m.rows() {
                prop_assert_eq!(row[0], 0.01);
            }
        }

        #[test]
        fn prop_correlated_shape_and_start(
            n in 0usize..8,
            steps in 1usize..40,
            rho in -1.0f64..=1.0,
            seed in any::<u64>(),
        ) {
            let grid = TimeGrid::regular(2.0, steps).unwrap();
            let c = cube(generate_paths(
                &SimulationTarget::from(array(rho)),
                &grid,
                n,
                &mut SimRng::from_seed(seed),
            ));
            prop_assert_eq!(c.shape(), (n, 2, grid.len()));
            for i in 0..n {
                for j in 0..2 {
                    prop_assert_eq!(c.path(i, j)[0], 0.01);
                }
            }
        }
    }
}
