use grid_util::point::Point;

use crate::heuristic::Heuristic;
use crate::search::{run_search, BestFirstFrontier, SearchResult};
use crate::solver::TerrainSolver;
use crate::terrain_grid::TerrainGrid;

/// A* search: best-first expansion ordered by `g + h` for a caller-supplied
/// heuristic. Uses the same lexicographic turn-sequence tie-break as UCS on
/// equal priorities, then the smaller accumulated cost.
#[derive(Clone, Copy)]
pub struct AstarSolver<'a> {
    heuristic: &'a dyn Heuristic,
}

impl<'a> AstarSolver<'a> {
    pub fn new(heuristic: &'a dyn Heuristic) -> AstarSolver<'a> {
        AstarSolver { heuristic }
    }
}

impl TerrainSolver for AstarSolver<'_> {
    fn solve(&self, grid: &TerrainGrid, start: Point, goal: Point) -> SearchResult {
        let (path, process) = run_search(
            &start,
            &goal,
            BestFirstFrontier::new(),
            |cell: &Point| grid.successors(*cell),
            |cell: &Point, g: u32| g + self.heuristic.estimate(cell, &goal),
        );
        SearchResult { path, process }
    }
}
