use std::{fmt::Display, str::FromStr};

use crate::{solver::Direction, Error};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    r: usize,
    c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    pub fn r(&self) -> usize {
        self.r
    }

    pub fn c(&self) -> usize {
        self.c
    }

    // Upper bounds are left to the grid.
    pub fn neighbor(&self, dir: Direction) -> Option<Self> {
        let (dr, dc) = dir.offset();
        let r = self.r.checked_add_signed(dr)?;
        let c = self.c.checked_add_signed(dc)?;
        Some(Self::new(r, c))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Open,
    Wall,
    Start,
    End,
}

impl From<char> for Tile {
    fn from(value: char) -> Self {
        match value {
            '#' => Tile::Wall,
            'S' => Tile::Start,
            'E' => Tile::End,
            _ => Tile::Open,
        }
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Open => '.',
            Tile::Wall => '#',
            Tile::Start => 'S',
            Tile::End => 'E',
        };

        write!(f, "{}", tile_char)
    }
}

/// A rectangular maze, stored row-major.
///
/// The grid is never mutated once built, so the same grid can be solved any
/// number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.tiles.chunks(self.col_n).enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for tile in row {
                write!(f, "{}", tile)?;
            }
        }

        Ok(())
    }
}

impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = GridBuilder::new();
        for line in s.lines() {
            builder.add_row(line.trim())?;
        }

        builder.build()
    }
}

impl Grid {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    pub fn cell_n(&self) -> usize {
        self.tiles.len()
    }

    /// First position holding `tile`, scanning row by row.
    pub fn locate(&self, tile: Tile) -> Option<Position> {
        self.tiles
            .iter()
            .position(|t| *t == tile)
            .map(|ind| self.ind_to_pos(ind))
    }

    pub fn is_passable(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| tile != Tile::Wall)
    }

    pub fn tile(&self, pos: &Position) -> Option<Tile> {
        self.pos_to_ind(pos).and_then(|ind| self.tiles.get(ind).copied())
    }

    fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub(crate) fn pos_to_ind(&self, pos: &Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    fn ind_to_pos(&self, ind: usize) -> Position {
        Position::new(ind / self.col_n, ind % self.col_n)
    }
}

#[derive(Debug, Default)]
pub struct GridBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
}

impl GridBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_row(&mut self, text: &str) -> Result<(), Error> {
        let this_col_n = text.chars().count();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(expect_col_n, this_col_n));
        }

        self.tiles.extend(text.chars().map(Tile::from));
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Grid, Error> {
        match self.col_n {
            Some(col_n) if col_n > 0 && self.row_n > 0 => Ok(Grid {
                tiles: self.tiles,
                row_n: self.row_n,
                col_n,
            }),
            _ => Err(Error::EmptyMaze),
        }
    }
}
