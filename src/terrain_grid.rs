use core::fmt;

use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

use crate::N_SMALLVEC_SIZE;

/// Content of a single grid cell: passable terrain at some elevation, or an
/// impassable blocked cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Elevation(u32),
    Blocked,
}

impl Cell {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }
}

/// The four cardinal moves in their fixed enumeration order: up (row - 1),
/// down (row + 1), left (col - 1), right (col + 1). The position of a move in
/// this table doubles as the tie-break digit recorded on frontier entries, so
/// the order must not change.
pub(crate) const DIRECTIONS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];

/// An immutable rectangular grid of terrain cells. Rows are indexed by `y`,
/// columns by `x`, both 0-based. Connected components over passable cells are
/// computed once at construction with a [UnionFind], so reachability queries
/// need no search.
#[derive(Clone, Debug)]
pub struct TerrainGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    components: UnionFind<usize>,
}

impl TerrainGrid {
    /// Builds a grid from rows of cells. Returns [None] if the input is empty
    /// or the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Option<TerrainGrid> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || rows.iter().any(|row| row.len() != width) {
            return None;
        }
        let cells: Vec<Cell> = rows.into_iter().flatten().collect();
        let mut components = UnionFind::new(width * height);
        for y in 0..height {
            for x in 0..width {
                let ix = y * width + x;
                if cells[ix].is_blocked() {
                    continue;
                }
                // Union with the right and down neighbours only; the cells
                // above and to the left were already linked up.
                if x + 1 < width && !cells[ix + 1].is_blocked() {
                    components.union(ix, ix + 1);
                }
                if y + 1 < height && !cells[ix + width].is_blocked() {
                    components.union(ix, ix + width);
                }
            }
        }
        info!("built {}x{} terrain grid", width, height);
        Some(TerrainGrid {
            width,
            height,
            cells,
            components,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// The cell at `p`. `p` must be in bounds.
    pub fn get(&self, p: Point) -> Cell {
        self.cells[self.get_ix(p)]
    }

    pub fn is_blocked(&self, p: Point) -> bool {
        self.get(p).is_blocked()
    }

    /// The elevation of the cell at `p`, or [None] for a blocked cell.
    pub fn elevation(&self, p: Point) -> Option<u32> {
        match self.get(p) {
            Cell::Elevation(e) => Some(e),
            Cell::Blocked => None,
        }
    }

    pub fn can_move_to(&self, p: Point) -> bool {
        self.in_bounds(p) && !self.is_blocked(p)
    }

    /// Cost of stepping between two adjacent passable cells: a base cost of 1
    /// plus any elevation gained. Downhill and level moves pay only the base.
    pub fn step_cost(&self, from: Point, to: Point) -> u32 {
        let from_elevation = self.elevation(from).unwrap_or(0);
        let to_elevation = self.elevation(to).unwrap_or(0);
        1 + to_elevation.saturating_sub(from_elevation)
    }

    /// Enumerates the passable cardinal neighbours of `p` in the fixed
    /// [DIRECTIONS] order, paired with their direction index.
    pub fn neighbours(&self, p: Point) -> SmallVec<[(u8, Point); N_SMALLVEC_SIZE]> {
        DIRECTIONS
            .iter()
            .enumerate()
            .map(|(i, &(dx, dy))| (i as u8, Point::new(p.x + dx, p.y + dy)))
            .filter(|(_, n)| self.can_move_to(*n))
            .collect()
    }

    /// Neighbours of `p` together with the cost of stepping to them.
    pub fn successors(&self, p: Point) -> SmallVec<[(u8, Point, u32); N_SMALLVEC_SIZE]> {
        self.neighbours(p)
            .into_iter()
            .map(|(dir, n)| (dir, n, self.step_cost(p, n)))
            .collect()
    }

    /// Total cost of a step-by-step path.
    pub fn path_cost(&self, path: &[Point]) -> u32 {
        path.windows(2).map(|w| self.step_cost(w[0], w[1])).sum()
    }

    /// Checks whether two cells lie in the same connected component of
    /// passable cells. A cheap reachability test; it says nothing about cost.
    pub fn reachable(&self, a: &Point, b: &Point) -> bool {
        self.in_bounds(*a)
            && self.in_bounds(*b)
            && !self.is_blocked(*a)
            && !self.is_blocked(*b)
            && self.components.equiv(self.get_ix(*a), self.get_ix(*b))
    }

    fn get_ix(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }
}

impl fmt::Display for TerrainGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for y in 0..self.height {
            let row = (0..self.width)
                .map(|x| match self.get(Point::new(x as i32, y as i32)) {
                    Cell::Elevation(e) => e.to_string(),
                    Cell::Blocked => "X".to_string(),
                })
                .join(" ");
            writeln!(f, "{}", row)?;
        }
        Ok(())
    }
}
