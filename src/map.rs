//! Map-file ingestion. All input validation happens here, before any search
//! runs; the grid handed out is guaranteed rectangular with in-bounds
//! endpoints, which the search engine assumes as a precondition.

use core::fmt;
use std::fs;
use std::io;
use std::path::Path;

use grid_util::point::Point;
use log::info;

use crate::terrain_grid::{Cell, TerrainGrid};

/// A parsed scenario: the terrain plus 0-based start and goal cells.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub grid: TerrainGrid,
    pub start: Point,
    pub goal: Point,
}

/// Failure to read or validate a map file.
#[derive(Debug)]
pub enum MapError {
    Io(io::Error),
    /// The file ended before the three header lines.
    MissingHeader,
    /// A header line did not hold exactly two integers (or held non-positive
    /// dimensions).
    InvalidHeader { line: usize },
    /// Fewer terrain rows than the declared row count.
    MissingRows { expected: usize, found: usize },
    /// A terrain row with the wrong number of tokens.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A terrain token that is neither a non-negative integer nor `X`.
    InvalidToken { row: usize, token: String },
    /// A start or goal coordinate outside the declared dimensions.
    EndpointOutOfBounds {
        name: &'static str,
        row: i64,
        col: i64,
    },
}

impl fmt::Display for MapError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MapError::Io(e) => write!(f, "failed to read map file: {}", e),
            MapError::MissingHeader => write!(f, "map file is missing its three header lines"),
            MapError::InvalidHeader { line } => {
                write!(f, "header line {} must hold two positive integers", line)
            }
            MapError::MissingRows { expected, found } => {
                write!(f, "expected {} terrain rows, found {}", expected, found)
            }
            MapError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "terrain row {} holds {} cells, expected {}",
                row, found, expected
            ),
            MapError::InvalidToken { row, token } => write!(
                f,
                "invalid cell token '{}' in terrain row {} (expected an elevation or 'X')",
                token, row
            ),
            MapError::EndpointOutOfBounds { name, row, col } => {
                write!(f, "{} position ({}, {}) is outside the grid", name, row, col)
            }
        }
    }
}

impl std::error::Error for MapError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MapError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for MapError {
    fn from(e: io::Error) -> MapError {
        MapError::Io(e)
    }
}

/// Reads and parses a map file from disk.
pub fn read_map(path: impl AsRef<Path>) -> Result<Scenario, MapError> {
    let text = fs::read_to_string(path)?;
    parse_map(&text)
}

/// Parses map text. Line 1 holds `rows cols`, lines 2 and 3 the 1-based
/// `row col` of start and goal (converted to 0-based here), followed by
/// `rows` lines of `cols` whitespace-separated tokens, each a non-negative
/// elevation or the blocked marker `X`.
pub fn parse_map(text: &str) -> Result<Scenario, MapError> {
    let mut lines = text.lines();
    let (rows, cols) = parse_int_pair(lines.next(), 1)?;
    if rows < 1 || cols < 1 {
        return Err(MapError::InvalidHeader { line: 1 });
    }
    let start = parse_endpoint(lines.next(), 2, "start", rows, cols)?;
    let goal = parse_endpoint(lines.next(), 3, "goal", rows, cols)?;

    let (rows, cols) = (rows as usize, cols as usize);
    let mut cell_rows: Vec<Vec<Cell>> = Vec::with_capacity(rows);
    for r in 0..rows {
        let line = lines.next().ok_or(MapError::MissingRows {
            expected: rows,
            found: r,
        })?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != cols {
            return Err(MapError::RaggedRow {
                row: r + 1,
                expected: cols,
                found: tokens.len(),
            });
        }
        let cells = tokens
            .into_iter()
            .map(|token| parse_cell(token, r + 1))
            .collect::<Result<Vec<Cell>, MapError>>()?;
        cell_rows.push(cells);
    }

    let grid = match TerrainGrid::from_rows(cell_rows) {
        Some(grid) => grid,
        None => return Err(MapError::InvalidHeader { line: 1 }),
    };
    info!("parsed {}x{} map", rows, cols);
    Ok(Scenario { grid, start, goal })
}

fn parse_int_pair(line: Option<&str>, line_no: usize) -> Result<(i64, i64), MapError> {
    let line = line.ok_or(MapError::MissingHeader)?;
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(a), Some(b), None) => {
            let a = a
                .parse()
                .map_err(|_| MapError::InvalidHeader { line: line_no })?;
            let b = b
                .parse()
                .map_err(|_| MapError::InvalidHeader { line: line_no })?;
            Ok((a, b))
        }
        _ => Err(MapError::InvalidHeader { line: line_no }),
    }
}

fn parse_endpoint(
    line: Option<&str>,
    line_no: usize,
    name: &'static str,
    rows: i64,
    cols: i64,
) -> Result<Point, MapError> {
    let (row, col) = parse_int_pair(line, line_no)?;
    if row < 1 || row > rows || col < 1 || col > cols {
        return Err(MapError::EndpointOutOfBounds { name, row, col });
    }
    Ok(Point::new((col - 1) as i32, (row - 1) as i32))
}

fn parse_cell(token: &str, row: usize) -> Result<Cell, MapError> {
    if token == "X" {
        return Ok(Cell::Blocked);
    }
    token
        .parse::<u32>()
        .map(Cell::Elevation)
        .map_err(|_| MapError::InvalidToken {
            row,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "2 3\n1 1\n2 3\n1 2 X\n1 1 1\n";

    #[test]
    fn parses_a_valid_map() {
        let scenario = parse_map(VALID).unwrap();
        assert_eq!(scenario.grid.width(), 3);
        assert_eq!(scenario.grid.height(), 2);
        // 1-based (1, 1) and (2, 3) become 0-based (x, y) points.
        assert_eq!(scenario.start, Point::new(0, 0));
        assert_eq!(scenario.goal, Point::new(2, 1));
        assert_eq!(scenario.grid.get(Point::new(2, 0)), Cell::Blocked);
        assert_eq!(scenario.grid.get(Point::new(1, 0)), Cell::Elevation(2));
    }

    #[test]
    fn rejects_a_bad_cell_token() {
        let text = "1 2\n1 1\n1 2\n1 q\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::InvalidToken { row: 1, .. })
        ));
    }

    #[test]
    fn rejects_a_ragged_row() {
        let text = "2 2\n1 1\n2 2\n1 1\n1\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::RaggedRow {
                row: 2,
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn rejects_missing_rows() {
        let text = "2 2\n1 1\n2 2\n1 1\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::MissingRows {
                expected: 2,
                found: 1
            })
        ));
    }

    #[test]
    fn rejects_out_of_bounds_endpoints() {
        let text = "1 2\n1 3\n1 1\n1 1\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::EndpointOutOfBounds { name: "start", .. })
        ));
        let text = "1 2\n1 1\n0 1\n1 1\n";
        assert!(matches!(
            parse_map(text),
            Err(MapError::EndpointOutOfBounds { name: "goal", .. })
        ));
    }

    #[test]
    fn rejects_a_malformed_header() {
        assert!(matches!(parse_map(""), Err(MapError::MissingHeader)));
        assert!(matches!(
            parse_map("2\n1 1\n2 2\n"),
            Err(MapError::InvalidHeader { line: 1 })
        ));
        assert!(matches!(
            parse_map("0 2\n1 1\n1 1\n"),
            Err(MapError::InvalidHeader { line: 1 })
        ));
    }
}
