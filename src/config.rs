use std::path::PathBuf;

use clap::Parser;

use crate::heuristic::HeuristicKind;
use crate::solver::Algorithm;

/// Output mode: release prints only the annotated path grid, debug adds the
/// expansion-statistics views.
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    Debug,
    Release,
}

/// Command-line configuration. Algorithm, heuristic and mode names are
/// validated here by clap; the search engine only ever sees closed enums.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Output mode.
    #[arg(value_enum)]
    pub mode: Mode,

    /// Path to the map file.
    pub map: PathBuf,

    /// Search algorithm to run.
    #[arg(value_enum)]
    pub algorithm: Algorithm,

    /// Heuristic for A*; required by astar, ignored by bfs and ucs.
    #[arg(value_enum)]
    pub heuristic: Option<HeuristicKind>,
}
