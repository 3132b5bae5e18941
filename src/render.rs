//! Presentation of search results as annotated text grids. Every view is
//! drawn on its own fresh canvas built from the immutable grid and the
//! search result, so markers from one view never leak into another.

use grid_util::point::Point;
use itertools::Itertools;

use crate::search::SearchResult;
use crate::terrain_grid::{Cell, TerrainGrid};

const PATH_MARKER: &str = "*";
const UNVISITED_MARKER: &str = ".";
const BLOCKED_MARKER: &str = "X";

type Canvas = Vec<Vec<String>>;

/// Canvas showing the raw terrain: elevations and blocked markers.
fn terrain_canvas(grid: &TerrainGrid) -> Canvas {
    canvas(grid, |cell| match cell {
        Cell::Elevation(e) => e.to_string(),
        Cell::Blocked => BLOCKED_MARKER.to_string(),
    })
}

/// Canvas for trace statistics: every passable cell starts out unvisited.
fn trace_canvas(grid: &TerrainGrid) -> Canvas {
    canvas(grid, |cell| match cell {
        Cell::Elevation(_) => UNVISITED_MARKER.to_string(),
        Cell::Blocked => BLOCKED_MARKER.to_string(),
    })
}

fn canvas(grid: &TerrainGrid, cell_marker: impl Fn(Cell) -> String) -> Canvas {
    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| cell_marker(grid.get(Point::new(x as i32, y as i32))))
                .collect()
        })
        .collect()
}

fn canvas_to_string(canvas: &Canvas) -> String {
    canvas.iter().map(|row| row.iter().join(" ")).join("\n")
}

/// The grid with the found path overlaid, or `null` when there is no path.
pub fn render_path(grid: &TerrainGrid, path: Option<&[Point]>) -> String {
    match path {
        None => "null".to_string(),
        Some(path) => {
            let mut canvas = terrain_canvas(grid);
            for p in path {
                canvas[p.y as usize][p.x as usize] = PATH_MARKER.to_string();
            }
            canvas_to_string(&canvas)
        }
    }
}

/// How many times each cell was expanded by the search.
pub fn render_visit_counts(grid: &TerrainGrid, process: &[Point]) -> String {
    let mut counts = vec![vec![0u32; grid.width()]; grid.height()];
    for p in process {
        counts[p.y as usize][p.x as usize] += 1;
    }
    let mut canvas = trace_canvas(grid);
    for (y, row) in counts.iter().enumerate() {
        for (x, &count) in row.iter().enumerate() {
            if count > 0 {
                canvas[y][x] = count.to_string();
            }
        }
    }
    canvas_to_string(&canvas)
}

/// The 1-based position in the trace at which each cell was first expanded.
pub fn render_first_visit(grid: &TerrainGrid, process: &[Point]) -> String {
    let mut canvas = trace_canvas(grid);
    for (i, p) in process.iter().enumerate() {
        let slot = &mut canvas[p.y as usize][p.x as usize];
        if *slot == UNVISITED_MARKER {
            *slot = (i + 1).to_string();
        }
    }
    canvas_to_string(&canvas)
}

/// The 1-based position in the trace at which each cell was last expanded.
pub fn render_last_visit(grid: &TerrainGrid, process: &[Point]) -> String {
    let mut canvas = trace_canvas(grid);
    for (i, p) in process.iter().enumerate() {
        canvas[p.y as usize][p.x as usize] = (i + 1).to_string();
    }
    canvas_to_string(&canvas)
}

/// Release-mode output: just the path view.
pub fn render_release(grid: &TerrainGrid, result: &SearchResult) -> String {
    render_path(grid, result.path.as_deref())
}

/// Debug-mode output: the path view plus the three expansion-statistics
/// views derived from the process trace. The statistics are rendered even
/// when no path was found, since the trace is complete on exhaustion.
pub fn render_debug(grid: &TerrainGrid, result: &SearchResult) -> String {
    format!(
        "path:\n{}\n#visits:\n{}\nfirst visit:\n{}\nlast visit:\n{}",
        render_path(grid, result.path.as_deref()),
        render_visit_counts(grid, &result.process),
        render_first_visit(grid, &result.process),
        render_last_visit(grid, &result.process),
    )
}
