use grid_util::point::Point;

use crate::search::{run_search, FifoFrontier, SearchResult};
use crate::solver::TerrainSolver;
use crate::terrain_grid::TerrainGrid;

/// Breadth-first search. The frontier is a strict FIFO queue, so cells are
/// expanded in discovery order rather than cost order and the returned path
/// minimises the number of steps, not the total cost. Step costs are still
/// tracked, but only to decide whether a cheaper route to an already-seen
/// cell is worth re-queueing; this is intentional, not a defect.
#[derive(Clone, Copy, Debug, Default)]
pub struct BfsSolver;

impl TerrainSolver for BfsSolver {
    fn solve(&self, grid: &TerrainGrid, start: Point, goal: Point) -> SearchResult {
        let (path, process) = run_search(
            &start,
            &goal,
            FifoFrontier::new(),
            |cell: &Point| grid.successors(*cell),
            |_: &Point, _: u32| 0,
        );
        SearchResult { path, process }
    }
}
