//! Backend-neutral figure description.
//!
//! A [`Figure`] is a titled stack of [`Panel`]s sharing one time axis. Each
//! panel holds one [`Series`] per simulated path.

use pathlab_core::time_grid::TimeGrid;
use pathlab_paths::PathMatrix;

use crate::scenario::ScenarioPaths;

/// One path as `(time, value)` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Series label, `path {i}`
    pub label: String,
    /// Points in grid order
    pub points: Vec<(f64, f64)>,
}

/// One subplot.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    /// Panel title (process name)
    pub title: String,
    /// One series per path
    pub series: Vec<Series>,
}

impl Panel {
    /// Panel holding every path of `paths` against the grid times.
    pub fn from_paths(title: impl Into<String>, grid: &TimeGrid, paths: &PathMatrix<f64>) -> Self {
        let times = grid.times();
        let series = paths
            .rows()
            .enumerate()
            .map(|(i, row)| Series {
                label: format!("path {}", i),
                points: times.iter().copied().zip(row.iter().copied()).collect(),
            })
            .collect();
        Self {
            title: title.into(),
            series,
        }
    }

    /// Value bounds over every series, padded by 5% of the range.
    ///
    /// A flat panel gets a unit-width window around its value; an empty one
    /// gets `[0, 1]`.
    pub fn y_bounds(&self) -> [f64; 2] {
        let (lo, hi) = self
            .series
            .iter()
            .flat_map(|s| s.points.iter().map(|&(_, y)| y))
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
                (lo.min(y), hi.max(y))
            });
        if !lo.is_finite() || !hi.is_finite() {
            return [0.0, 1.0];
        }
        let range = hi - lo;
        if range <= f64::EPSILON * hi.abs().max(1.0) {
            return [lo - 0.5, hi + 0.5];
        }
        let pad = 0.05 * range;
        [lo - pad, hi + pad]
    }
}

/// Which figure of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FigureKind {
    /// Each process simulated on its own
    Uncorrelated,
    /// Processes simulated jointly
    Correlated,
}

impl FigureKind {
    /// File stem used for snapshots and exports.
    pub fn file_stem(&self) -> &'static str {
        match self {
            Self::Uncorrelated => "uncorrelated_paths",
            Self::Correlated => "correlated_paths",
        }
    }
}

/// Titled stack of panels over a shared time axis.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    /// Which figure this is
    pub kind: FigureKind,
    /// Figure title
    pub title: String,
    /// Panels, top to bottom
    pub panels: Vec<Panel>,
    /// Shared time axis bounds `[0, maturity]`
    pub x_bounds: [f64; 2],
}

impl Figure {
    /// One panel per independently simulated process.
    pub fn uncorrelated(paths: &ScenarioPaths) -> Self {
        let panels = paths
            .uncorrelated
            .iter()
            .map(|(name, matrix)| Panel::from_paths(*name, &paths.grid, matrix))
            .collect();
        Self {
            kind: FigureKind::Uncorrelated,
            title: uncorrelated_title(paths.n_paths()),
            panels,
            x_bounds: [0.0, paths.grid.last()],
        }
    }

    /// One panel per process of the correlated array.
    pub fn correlated(paths: &ScenarioPaths) -> Self {
        let panels = paths
            .correlated_names
            .iter()
            .enumerate()
            .map(|(j, name)| Panel::from_paths(*name, &paths.grid, &paths.correlated.asset(j)))
            .collect();
        Self {
            kind: FigureKind::Correlated,
            title: correlated_title(paths.n_paths(), paths.rho),
            panels,
            x_bounds: [0.0, paths.grid.last()],
        }
    }

    /// Both figures of a run, uncorrelated first.
    pub fn all(paths: &ScenarioPaths) -> Vec<Self> {
        vec![Self::uncorrelated(paths), Self::correlated(paths)]
    }

    /// Time points of the shared axis, taken from the first series.
    pub fn times(&self) -> Vec<f64> {
        self.panels
            .first()
            .and_then(|p| p.series.first())
            .map(|s| s.points.iter().map(|&(t, _)| t).collect())
            .unwrap_or_default()
    }
}

/// `Uncorrelated paths n={n}`
pub fn uncorrelated_title(n: usize) -> String {
    format!("Uncorrelated paths n={}", n)
}

/// `Correlated paths n={n}, rho={rho}`, rho always with a decimal point.
pub fn correlated_title(n: usize, rho: f64) -> String {
    format!("Correlated paths n={}, rho={}", n, format_rho(rho))
}

fn format_rho(rho: f64) -> String {
    if rho.fract() == 0.0 {
        format!("{:.1}", rho)
    } else {
        format!("{}", rho)
    }
}
