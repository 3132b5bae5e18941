//! # terrain_pathfinding
//!
//! Pathfinding on weighted elevation grids. Implements breadth-first,
//! uniform-cost and A* search over a 4-connected grid where every move costs
//! a base 1 plus the elevation gained by the step. Besides the path itself,
//! every search reports the order in which cells were expanded, which drives
//! the debug visualisations in [render].
//!
//! ```
//! use grid_util::point::Point;
//! use terrain_pathfinding::terrain_grid::{Cell, TerrainGrid};
//! use terrain_pathfinding::{find_path, Algorithm};
//!
//! let grid = TerrainGrid::from_rows(vec![vec![Cell::Elevation(1); 3]]).unwrap();
//! let result = find_path(&grid, Point::new(0, 0), Point::new(2, 0), Algorithm::Ucs, None).unwrap();
//! assert_eq!(result.path.unwrap().len(), 3);
//! ```

pub mod config;
pub mod heuristic;
pub mod map;
pub mod render;
pub mod search;
pub mod solver;
pub mod terrain_grid;

use core::fmt;

use grid_util::point::Point;

pub use crate::heuristic::HeuristicKind;
pub use crate::search::SearchResult;
pub use crate::solver::Algorithm;
pub use crate::terrain_grid::{Cell, TerrainGrid};

use crate::heuristic::Heuristic;
use crate::solver::astar::AstarSolver;
use crate::solver::bfs::BfsSolver;
use crate::solver::ucs::UcsSolver;
use crate::solver::TerrainSolver;

pub(crate) const N_SMALLVEC_SIZE: usize = 4;

/// A configuration the search engine refuses to run. Distinct from a
/// no-path result, which is an ordinary [SearchResult] with an empty path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// A* was requested without a heuristic.
    MissingHeuristic,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::MissingHeuristic => {
                write!(f, "astar requires a heuristic (manhattan or euclidean)")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Runs the selected algorithm from start to goal. The heuristic is required
/// for [Algorithm::Astar] and ignored by the other two algorithms.
pub fn find_path(
    grid: &TerrainGrid,
    start: Point,
    goal: Point,
    algorithm: Algorithm,
    heuristic: Option<HeuristicKind>,
) -> Result<SearchResult, ConfigError> {
    match algorithm {
        Algorithm::Bfs => Ok(BfsSolver.solve(grid, start, goal)),
        Algorithm::Ucs => Ok(UcsSolver.solve(grid, start, goal)),
        Algorithm::Astar => {
            let kind = heuristic.ok_or(ConfigError::MissingHeuristic)?;
            let heuristic: &dyn Heuristic = kind.as_heuristic();
            Ok(AstarSolver::new(heuristic).solve(grid, start, goal))
        }
    }
}
