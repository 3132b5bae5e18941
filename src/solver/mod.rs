use grid_util::point::Point;

use crate::search::SearchResult;
use crate::terrain_grid::TerrainGrid;

pub mod astar;
pub mod bfs;
pub mod ucs;

/// The search algorithm to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Algorithm {
    Bfs,
    Ucs,
    Astar,
}

/// Common interface of the three search algorithms. Solvers hold no state
/// across invocations; every call gets a fresh frontier and visited set, so
/// a solver can be reused freely over the same immutable grid.
pub trait TerrainSolver {
    /// Searches from start to goal, returning the path (if any) together
    /// with the full expansion trace.
    fn solve(&self, grid: &TerrainGrid, start: Point, goal: Point) -> SearchResult;
}
