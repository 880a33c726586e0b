use std::fmt::Display;

use log::info;

use crate::{
    grid::Grid,
    solver::{self, Direction},
    Error,
};

#[derive(Debug)]
pub enum Outcome {
    Solved(Vec<Direction>),
    NoPath,
    Invalid(Error),
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Solved(path) => {
                let labels = path.iter().map(Direction::label).collect::<Vec<_>>();
                write!(f, "[{}]", labels.join(", "))
            }
            Outcome::NoPath => write!(f, "no path exists"),
            Outcome::Invalid(Error::NoStartPosition | Error::NoEndPosition) => {
                write!(f, "invalid maze: start or end missing")
            }
            Outcome::Invalid(e) => write!(f, "invalid maze: {}", e),
        }
    }
}

impl From<Result<Vec<Direction>, Error>> for Outcome {
    fn from(value: Result<Vec<Direction>, Error>) -> Self {
        match value {
            Ok(path) => Outcome::Solved(path),
            Err(e) if e.is_invalid_maze() => Outcome::Invalid(e),
            Err(_) => Outcome::NoPath,
        }
    }
}

impl Outcome {
    pub fn of(maze: &Result<Grid, Error>) -> Self {
        match maze {
            Ok(grid) => Outcome::from(solver::solve(grid)),
            Err(e) => Outcome::Invalid(e.clone()),
        }
    }

    pub fn is_solved(&self) -> bool {
        matches!(self, Outcome::Solved(_))
    }
}

pub fn solve_all(mazes: &[Result<Grid, Error>]) -> Vec<Outcome> {
    let outcomes = mazes.iter().map(Outcome::of).collect::<Vec<_>>();
    info!("{}", summary_line(&outcomes));

    outcomes
}

pub fn solved_n(outcomes: &[Outcome]) -> usize {
    outcomes.iter().filter(|o| o.is_solved()).count()
}

pub fn summary_line(outcomes: &[Outcome]) -> String {
    format!("Solved {} of {} maze(s).", solved_n(outcomes), outcomes.len())
}

pub fn solution_line(maze_ind: usize, outcome: &Outcome) -> String {
    format!("Solution for maze {}: {}", maze_ind + 1, outcome)
}
