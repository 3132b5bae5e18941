use std::error::Error;
use std::process;

use clap::Parser;

use terrain_pathfinding::config::{Config, Mode};
use terrain_pathfinding::find_path;
use terrain_pathfinding::map::read_map;
use terrain_pathfinding::render::{render_debug, render_release};

fn main() {
    let config = Config::parse();
    match run(&config) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}

fn run(config: &Config) -> Result<String, Box<dyn Error>> {
    let scenario = read_map(&config.map)?;
    let result = find_path(
        &scenario.grid,
        scenario.start,
        scenario.goal,
        config.algorithm,
        config.heuristic,
    )?;
    Ok(match config.mode {
        Mode::Release => render_release(&scenario.grid, &result),
        Mode::Debug => render_debug(&scenario.grid, &result),
    })
}
