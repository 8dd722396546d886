//! Path generators over a time grid.
//!
//! A generator draws all Gaussian increments a path needs in one batch and
//! walks the process along the grid:
//! ```text
//! x[0] = x0,   x[i] = evolve(t[i-1], x[i-1], t[i] - t[i-1], z[i-1])
//! ```
//! For a process array the batch holds `steps * size` draws consumed
//! step-major: all factors of step 1, then all factors of step 2, and so on.

use pathlab_core::time_grid::TimeGrid;
use pathlab_core::traits::{lit, Float};
use pathlab_models::{Process1D, ProcessArray, StochasticProcess1D};

use crate::rng::SimRng;

/// One simulated path, aligned with the generator's time grid.
#[derive(Clone, Debug, PartialEq)]
pub struct Path<T: Float> {
    values: Vec<T>,
}

impl<T: Float> Path<T> {
    /// Number of grid points.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True for a path without points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Value at grid point `i`.
    #[inline]
    pub fn value(&self, i: usize) -> T {
        self.values[i]
    }

    /// All values.
    #[inline]
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Value at `t = 0`.
    pub fn front(&self) -> Option<T> {
        self.values.first().copied()
    }

    /// Value at maturity.
    pub fn back(&self) -> Option<T> {
        self.values.last().copied()
    }
}

/// Paths of every process of an array, driven by one set of draws.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiPath<T: Float> {
    paths: Vec<Path<T>>,
}

impl<T: Float> MultiPath<T> {
    /// Number of processes.
    #[inline]
    pub fn asset_number(&self) -> usize {
        self.paths.len()
    }

    /// Path of process `j`.
    #[inline]
    pub fn path(&self, j: usize) -> &Path<T> {
        &self.paths[j]
    }

    /// Number of grid points per path.
    pub fn path_len(&self) -> usize {
        self.paths.first().map_or(0, Path::len)
    }
}

/// Generates paths of a single process.
///
/// # Examples
///
/// ```rust
/// use pathlab_core::time_grid::TimeGrid;
/// use pathlab_models::{GbmParams, GbmProcess, Process1D};
/// use pathlab_paths::generator::PathGenerator;
/// use pathlab_paths::rng::SimRng;
///
/// let process = Process1D::from(GbmProcess::new(GbmParams::new(1.0, 0.05, 0.2).unwrap()));
/// let grid = TimeGrid::regular(1.0, 12).unwrap();
/// let mut generator = PathGenerator::new(&process, &grid);
///
/// let path = generator.next_path(&mut SimRng::from_seed(42));
/// assert_eq!(path.len(), 13);
/// assert_eq!(path.value(0), 1.0);
/// ```
#[derive(Debug)]
pub struct PathGenerator<'a, T: Float> {
    process: &'a Process1D<T>,
    grid: &'a TimeGrid,
    normals: Vec<f64>,
}

impl<'a, T: Float> PathGenerator<'a, T> {
    /// Generator for `process` along `grid`.
    pub fn new(process: &'a Process1D<T>, grid: &'a TimeGrid) -> Self {
        Self {
            process,
            grid,
            normals: vec![0.0; grid.steps()],
        }
    }

    /// Time grid the paths are aligned with.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        self.grid
    }

    /// Gaussian draws per path.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.normals.len()
    }

    /// Draw the next path.
    pub fn next_path(&mut self, rng: &mut SimRng) -> Path<T> {
        rng.fill_normal(&mut self.normals);

        let mut values = Vec::with_capacity(self.grid.len());
        let mut x = self.process.initial_value();
        values.push(x);
        for i in 1..self.grid.len() {
            let t0: T = lit(self.grid[i - 1]);
            let dt: T = lit(self.grid.dt(i));
            x = self.process.evolve(t0, x, dt, lit(self.normals[i - 1]));
            values.push(x);
        }

        Path { values }
    }
}

/// Generates joint paths of a correlated process array.
#[derive(Debug)]
pub struct MultiPathGenerator<'a, T: Float> {
    array: &'a ProcessArray<T>,
    grid: &'a TimeGrid,
    normals: Vec<f64>,
    dw: Vec<T>,
    state: Vec<T>,
    next: Vec<T>,
}

impl<'a, T: Float> MultiPathGenerator<'a, T> {
    /// Generator for `array` along `grid`.
    pub fn new(array: &'a ProcessArray<T>, grid: &'a TimeGrid) -> Self {
        let size = array.size();
        Self {
            array,
            grid,
            normals: vec![0.0; grid.steps() * size],
            dw: vec![T::zero(); size],
            state: vec![T::zero(); size],
            next: vec![T::zero(); size],
        }
    }

    /// Time grid the paths are aligned with.
    #[inline]
    pub fn grid(&self) -> &TimeGrid {
        self.grid
    }

    /// Gaussian draws per multi-path, `steps * size`.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.normals.len()
    }

    /// Draw the next multi-path.
    pub fn next_multi_path(&mut self, rng: &mut SimRng) -> MultiPath<T> {
        rng.fill_normal(&mut self.normals);

        let size = self.array.size();
        let len = self.grid.len();
        let mut columns: Vec<Vec<T>> = (0..size).map(|_| Vec::with_capacity(len)).collect();

        for (j, x0) in self.array.initial_values().into_iter().enumerate() {
            self.state[j] = x0;
            columns[j].push(x0);
        }

        for i in 1..len {
            let t0: T = lit(self.grid[i - 1]);
            let dt: T = lit(self.grid.dt(i));
            let draws = &self.normals[(i - 1) * size..i * size];
            for (slot, &z) in self.dw.iter_mut().zip(draws) {
                *slot = lit(z);
            }

            self.array
                .evolve(t0, &self.state, dt, &self.dw, &mut self.next);
            std::mem::swap(&mut self.state, &mut self.next);

            for (column, &x) in columns.iter_mut().zip(&self.state) {
                column.push(x);
            }
        }

        MultiPath {
            paths: columns.into_iter().map(|values| Path { values }).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
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

    #[test]
    fn test_single_path_replays_draws() {
        let process = gbm();
        let grid = TimeGrid::regular(1.0, 4).unwrap();
        let mut generator = PathGenerator::new(&process, &grid);
        assert_eq!(generator.dimension(), 4);

        let path = generator.next_path(&mut SimRng::from_seed(3));

        let mut rng = SimRng::from_seed(3);
        let mut z = [0.0; 4];
        rng.fill_normal(&mut z);
        let mut x = 0.01;
        assert_eq!(path.front(), Some(x));
        for i in 1..5 {
            x = process.evolve(grid[i - 1], x, grid.dt(i), z[i - 1]);
            assert_relative_eq!(path.value(i), x);
        }
        assert_eq!(path.back(), Some(x));
    }

    #[test]
    fn test_consecutive_paths_differ() {
        let process = hull_white();
        let grid = TimeGrid::regular(1.0, 10).unwrap();
        let mut generator = PathGenerator::new(&process, &grid);
        let mut rng = SimRng::from_seed(11);
        let first = generator.next_path(&mut rng);
        let second = generator.next_path(&mut rng);
        assert_eq!(first.value(0), second.value(0));
        assert_ne!(first.back(), second.back());
    }

    #[test]
    fn test_multi_path_consumes_draws_step_major() {
        let array = ProcessArray::new(
            vec![hull_white(), gbm()],
            CorrelationMatrix::identity(2),
        )
        .unwrap();
        let grid = TimeGrid::regular(1.0, 3).unwrap();
        let mut generator = MultiPathGenerator::new(&array, &grid);
        assert_eq!(generator.dimension(), 6);

        let multi = generator.next_multi_path(&mut SimRng::from_seed(5));
        assert_eq!(multi.asset_number(), 2);
        assert_eq!(multi.path_len(), 4);

        let mut rng = SimRng::from_seed(5);
        let mut z = [0.0; 6];
        rng.fill_normal(&mut z);
        // identity correlation: process j sees z[(i-1)*2 + j] at step i
        let mut x = [0.01, 0.01];
        for i in 1..4 {
            for (j, xj) in x.iter_mut().enumerate() {
                *xj = array
                    .process(j)
                    .evolve(grid[i - 1], *xj, grid.dt(i), z[(i - 1) * 2 + j]);
                assert_relative_eq!(multi.path(j).value(i), *xj, epsilon = 1e-15);
            }
        }
    }

    #[test]
    fn test_perfectly_correlated_paths_share_direction() {
        let array = ProcessArray::new(
            vec![gbm(), gbm()],
            CorrelationMatrix::two_factor(1.0).unwrap(),
        )
        .unwrap();
        let grid = TimeGrid::regular(1.0, 50).unwrap();
        let multi = MultiPathGenerator::new(&array, &grid).next_multi_path(&mut SimRng::from_seed(8));
        assert_eq!(multi.path(0), multi.path(1));
    }
}
