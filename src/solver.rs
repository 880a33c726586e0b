use std::{collections::VecDeque, fmt::Display};

use log::{debug, trace};

use crate::{
    grid::{Grid, Position, Tile},
    Error,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Direction {
    // Search order; decides which path wins among equally short ones.
    pub fn all_dirs() -> &'static [Direction] {
        static ALL_DIRECTIONS: [Direction; 4] = [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ];

        &ALL_DIRECTIONS
    }

    pub fn offset(&self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
            Direction::Right => "RIGHT",
        }
    }
}

/// Visited cells of a single search, kept apart from the grid.
#[derive(Debug)]
pub struct VisitMask {
    visited: Vec<bool>,
    row_n: usize,
    col_n: usize,
    visited_n: usize,
}

impl VisitMask {
    pub fn new(grid: &Grid) -> Self {
        Self {
            visited: vec![false; grid.cell_n()],
            row_n: grid.row_n(),
            col_n: grid.col_n(),
            visited_n: 0,
        }
    }

    /// Returns true only the first time `pos` is marked.
    pub fn mark_visited(&mut self, pos: &Position) -> bool {
        match self.ind(pos).and_then(|ind| self.visited.get_mut(ind)) {
            Some(visited) if !*visited => {
                *visited = true;
                self.visited_n += 1;
                true
            }
            _ => false,
        }
    }

    pub fn is_visited(&self, pos: &Position) -> bool {
        self.ind(pos)
            .and_then(|ind| self.visited.get(ind))
            .copied()
            .unwrap_or(false)
    }

    pub fn visited_n(&self) -> usize {
        self.visited_n
    }

    fn ind(&self, pos: &Position) -> Option<usize> {
        if pos.r() < self.row_n && pos.c() < self.col_n {
            Some(pos.r() * self.col_n + pos.c())
        } else {
            None
        }
    }
}

/// Finds a shortest sequence of moves from the start tile to the end tile.
///
/// The first start and end tiles in row-major order are used when a maze holds
/// several of them.
pub fn solve(grid: &Grid) -> Result<Vec<Direction>, Error> {
    let start_pos = grid.locate(Tile::Start).ok_or(Error::NoStartPosition)?;
    let end_pos = grid.locate(Tile::End).ok_or(Error::NoEndPosition)?;

    find_path(grid, &start_pos, &end_pos)
}

pub fn find_path(
    grid: &Grid,
    start_pos: &Position,
    end_pos: &Position,
) -> Result<Vec<Direction>, Error> {
    if !grid.is_passable(start_pos) || !grid.is_passable(end_pos) {
        return Err(Error::NoPath);
    }
    debug!(
        "Searching {}x{} maze from {} to {}.",
        grid.row_n(),
        grid.col_n(),
        start_pos,
        end_pos
    );

    let mut visited = VisitMask::new(grid);
    // Direction of the move that first reached each cell.
    let mut came_by: Vec<Option<Direction>> = vec![None; grid.cell_n()];
    let mut search_positions = VecDeque::from([*start_pos]);
    visited.mark_visited(start_pos);
    while let Some(cur_pos) = search_positions.pop_front() {
        if cur_pos == *end_pos {
            debug!("Reached {} after visiting {} cell(s).", end_pos, visited.visited_n());
            return backtrace(grid, &came_by, start_pos, end_pos);
        }

        for dir in Direction::all_dirs() {
            let Some(next_pos) = cur_pos.neighbor(*dir) else {
                continue;
            };
            if !grid.is_passable(&next_pos) || !visited.mark_visited(&next_pos) {
                continue;
            }

            if let Some(ind) = grid.pos_to_ind(&next_pos) {
                came_by[ind] = Some(*dir);
            }
            search_positions.push_back(next_pos);
        }
    }

    debug!(
        "No path from {} to {}, visited {} cell(s).",
        start_pos,
        end_pos,
        visited.visited_n()
    );
    Err(Error::NoPath)
}

pub fn shortest_distance(grid: &Grid) -> Option<usize> {
    solve(grid).ok().map(|path| path.len())
}

fn backtrace(
    grid: &Grid,
    came_by: &[Option<Direction>],
    start_pos: &Position,
    end_pos: &Position,
) -> Result<Vec<Direction>, Error> {
    let mut path = Vec::new();
    let mut cur_pos = *end_pos;
    while cur_pos != *start_pos {
        let dir = grid
            .pos_to_ind(&cur_pos)
            .and_then(|ind| came_by[ind])
            .ok_or(Error::NoPath)?;
        path.push(dir);
        cur_pos = cur_pos.neighbor(dir.reverse()).ok_or(Error::NoPath)?;
    }
    path.reverse();
    trace!("Backtraced {} move(s) to {}.", path.len(), start_pos);

    Ok(path)
}
