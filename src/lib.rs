use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, warn};

pub mod grid;
pub mod logger;
pub mod report;
pub mod solver;

pub use grid::{Grid, GridBuilder, Position, Tile};
pub use report::Outcome;
pub use solver::{solve, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    InconsistentRow(usize, usize), // (expected column count, given column count)
    EmptyMaze,
    NoStartPosition,
    NoEndPosition,
    NoPath,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(expect_col_n, this_col_n) => write!(
                f,
                "Expect {} column(s) in each row, given {}.",
                expect_col_n, this_col_n
            ),
            Error::EmptyMaze => write!(f, "No tile in maze."),
            Error::NoStartPosition => write!(f, "No start position in maze."),
            Error::NoEndPosition => write!(f, "No end position in maze."),
            Error::NoPath => write!(f, "No path from start to end in maze."),
        }
    }
}

impl error::Error for Error {}

impl Error {
    pub fn is_invalid_maze(&self) -> bool {
        !matches!(self, Error::NoPath)
    }
}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    #[arg(default_value = "inputs.txt")]
    pub input_path: PathBuf,
    /// Print a count of solved mazes after the solutions.
    #[arg(long)]
    pub summary: bool,
    /// Log more to stderr, repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug)]
enum MazeState {
    Building(GridBuilder),
    Broken(Error),
}

impl MazeState {
    fn add_row(self, text: &str) -> Self {
        match self {
            MazeState::Building(mut builder) => match builder.add_row(text) {
                Ok(()) => MazeState::Building(builder),
                Err(e) => MazeState::Broken(e),
            },
            broken => broken,
        }
    }

    fn finish(self) -> Result<Grid, Error> {
        match self {
            MazeState::Building(builder) => builder.build(),
            MazeState::Broken(e) => Err(e),
        }
    }
}

/// Splits `text` into mazes on blank lines.
///
/// A malformed maze only spoils its own entry.
pub fn parse_mazes(text: &str) -> Vec<Result<Grid, Error>> {
    let mut cur_maze: Option<MazeState> = None;
    let mut mazes = Vec::new();
    for line in text.lines() {
        let row = line.trim();
        if row.is_empty() {
            if let Some(maze) = cur_maze.take() {
                mazes.push(maze.finish());
            }
        } else {
            let maze = cur_maze
                .take()
                .unwrap_or_else(|| MazeState::Building(GridBuilder::new()));
            cur_maze = Some(maze.add_row(row));
        }
    }

    // Never forget the last one!
    if let Some(maze) = cur_maze.take() {
        mazes.push(maze.finish());
    }

    for (ind, maze) in mazes.iter().enumerate() {
        if let Err(e) = maze {
            warn!("Maze {} is malformed: {}", ind + 1, e);
        }
    }

    mazes
}

pub fn read_mazes<P: AsRef<Path>>(path: P) -> Result<Vec<Result<Grid, Error>>> {
    let text = fs::read_to_string(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let mazes = parse_mazes(&text);
    debug!(
        "Read {} maze(s) from given file({}).",
        mazes.len(),
        path.as_ref().display()
    );

    Ok(mazes)
}
