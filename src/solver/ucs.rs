use grid_util::point::Point;

use crate::search::{run_search, BestFirstFrontier, SearchResult};
use crate::solver::TerrainSolver;
use crate::terrain_grid::TerrainGrid;

/// Uniform-cost search: best-first expansion ordered by accumulated cost.
/// Equal-cost entries are ordered by the lexicographically smallest sequence
/// of direction indices taken from the start, which makes the result a
/// deterministic function of the fixed neighbour enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct UcsSolver;

impl TerrainSolver for UcsSolver {
    fn solve(&self, grid: &TerrainGrid, start: Point, goal: Point) -> SearchResult {
        let (path, process) = run_search(
            &start,
            &goal,
            BestFirstFrontier::new(),
            |cell: &Point| grid.successors(*cell),
            |_: &Point, g: u32| g,
        );
        SearchResult { path, process }
    }
}
