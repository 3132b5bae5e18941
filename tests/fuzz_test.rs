//! Fuzzes the three search algorithms on random elevation grids, checking
//! path validity, the per-algorithm optimality criteria and determinism
//! against each other and against a plain breadth-first reference distance.
use std::collections::VecDeque;

use grid_util::point::Point;
use rand::prelude::*;

use terrain_pathfinding::heuristic::{EuclideanSq, Manhattan};
use terrain_pathfinding::solver::astar::AstarSolver;
use terrain_pathfinding::solver::bfs::BfsSolver;
use terrain_pathfinding::solver::ucs::UcsSolver;
use terrain_pathfinding::solver::TerrainSolver;
use terrain_pathfinding::terrain_grid::{Cell, TerrainGrid};

fn random_grid(w: usize, h: usize, rng: &mut StdRng) -> TerrainGrid {
    let mut rows: Vec<Vec<Cell>> = (0..h)
        .map(|_| {
            (0..w)
                .map(|_| {
                    if rng.gen_bool(0.25) {
                        Cell::Blocked
                    } else {
                        Cell::Elevation(rng.gen_range(0..10))
                    }
                })
                .collect()
        })
        .collect();
    // Keep the corners used as endpoints passable.
    rows[0][0] = Cell::Elevation(1);
    rows[h - 1][w - 1] = Cell::Elevation(1);
    TerrainGrid::from_rows(rows).unwrap()
}

/// Reference edge-count distance via a plain breadth-first traversal.
fn bfs_distance(grid: &TerrainGrid, start: Point, goal: Point) -> Option<usize> {
    let mut dist = vec![vec![usize::MAX; grid.width()]; grid.height()];
    let mut queue = VecDeque::new();
    dist[start.y as usize][start.x as usize] = 0;
    queue.push_back(start);
    while let Some(p) = queue.pop_front() {
        let d = dist[p.y as usize][p.x as usize];
        if p == goal {
            return Some(d);
        }
        for (_, n) in grid.neighbours(p) {
            let slot = &mut dist[n.y as usize][n.x as usize];
            if *slot == usize::MAX {
                *slot = d + 1;
                queue.push_back(n);
            }
        }
    }
    None
}

fn assert_valid_path(grid: &TerrainGrid, start: Point, goal: Point, path: &[Point]) {
    assert_eq!(path.first(), Some(&start));
    assert_eq!(path.last(), Some(&goal));
    for w in path.windows(2) {
        assert_eq!(w[0].manhattan_distance(&w[1]), 1);
        assert!(grid.can_move_to(w[1]));
    }
}

#[test]
fn fuzz_search_properties() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let start = Point::new(0, 0);
        let goal = Point::new(N as i32 - 1, N as i32 - 1);
        let bfs = BfsSolver.solve(&grid, start, goal);
        let ucs = UcsSolver.solve(&grid, start, goal);
        let astar = AstarSolver::new(&Manhattan).solve(&grid, start, goal);

        // A path is found exactly when the endpoints share a component.
        let reachable = grid.reachable(&start, &goal);
        assert_eq!(bfs.path.is_some(), reachable);
        assert_eq!(ucs.path.is_some(), reachable);
        assert_eq!(astar.path.is_some(), reachable);

        if let (Some(b), Some(u), Some(a)) = (&bfs.path, &ucs.path, &astar.path) {
            for path in [b, u, a] {
                assert_valid_path(&grid, start, goal, path);
            }
            // BFS minimises the number of edges.
            let reference = bfs_distance(&grid, start, goal).unwrap();
            assert_eq!(b.len() - 1, reference);
            // UCS and A* with an admissible heuristic agree on the optimal
            // cost, which never exceeds the cost of the BFS path.
            assert_eq!(grid.path_cost(u), grid.path_cost(a));
            assert!(grid.path_cost(u) <= grid.path_cost(b));
        }
    }
}

#[test]
fn searches_are_deterministic() {
    const N: usize = 8;
    const N_GRIDS: usize = 50;
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng);
        let start = Point::new(0, 0);
        let goal = Point::new(N as i32 - 1, N as i32 - 1);
        let astar_manhattan = AstarSolver::new(&Manhattan);
        let astar_euclidean = AstarSolver::new(&EuclideanSq);
        let solvers: [&dyn TerrainSolver; 4] =
            [&BfsSolver, &UcsSolver, &astar_manhattan, &astar_euclidean];
        for solver in solvers {
            let first = solver.solve(&grid, start, goal);
            let second = solver.solve(&grid, start, goal);
            assert_eq!(first, second);
        }
    }
}
