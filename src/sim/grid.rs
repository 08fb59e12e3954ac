//! The 5x5 board and its toroidal row/column rotation
//!
//! Cells are indexed `[y][x]`. Blank cells hold `None` and never move; a row
//! or column with blanks rotates only its letter cells among themselves.

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use super::puzzle::Puzzle;
use crate::consts::{GRID_SIZE, LETTER_COUNT};
use crate::{is_blank, wrap_index};

/// A letter on the board. The id is stable across rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    pub id: u8,
    pub letter: u8,
}

/// Common multiple of the 5- and 3-letter band lengths
const BAND_PERIOD: i32 = 15;

/// A whole-band rotation. Positive offsets move right (rows) or down (columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rotation {
    Row { y: usize, offset: i32 },
    Column { x: usize, offset: i32 },
}

impl Rotation {
    pub fn offset(&self) -> i32 {
        match *self {
            Rotation::Row { offset, .. } | Rotation::Column { offset, .. } => offset,
        }
    }

    /// The rotation that undoes this one. The offset is first reduced modulo
    /// 15 (both band lengths divide it), so negation can't overflow.
    pub fn inverse(self) -> Self {
        match self {
            Rotation::Row { y, offset } => Rotation::Row {
                y,
                offset: -(offset % BAND_PERIOD),
            },
            Rotation::Column { x, offset } => Rotation::Column {
                x,
                offset: -(offset % BAND_PERIOD),
            },
        }
    }
}

/// Letter cell coordinates of row `y`, left to right
pub fn row_positions(y: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..GRID_SIZE).filter(move |&x| !is_blank(x, y)).map(move |x| (x, y))
}

/// Letter cell coordinates of column `x`, top to bottom
pub fn column_positions(x: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..GRID_SIZE).filter(move |&y| !is_blank(x, y)).map(move |y| (x, y))
}

/// Letter cell coordinates in row-major order
pub fn letter_positions() -> impl Iterator<Item = (usize, usize)> {
    (0..GRID_SIZE).flat_map(row_positions)
}

/// Board state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Option<Tile>; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// Lay out `puzzle.letters()` permuted by `order` into the letter cells,
    /// row-major. Tile ids follow placement order.
    pub fn initialize(puzzle: &Puzzle, order: &[usize; LETTER_COUNT]) -> Self {
        let mut seen = [false; LETTER_COUNT];
        for &i in order {
            assert!(i < LETTER_COUNT && !seen[i], "order is not a permutation");
            seen[i] = true;
        }

        let letters = puzzle.letters();
        let mut cells = [[None; GRID_SIZE]; GRID_SIZE];
        for (n, (x, y)) in letter_positions().enumerate() {
            cells[y][x] = Some(Tile {
                id: n as u8,
                letter: letters[order[n]],
            });
        }
        Self { cells }
    }

    /// A uniformly shuffled starting board
    pub fn shuffled<R: Rng + ?Sized>(puzzle: &Puzzle, rng: &mut R) -> Self {
        let mut order: [usize; LETTER_COUNT] = std::array::from_fn(|i| i);
        order.shuffle(rng);
        Self::initialize(puzzle, &order)
    }

    /// The board with every slot spelling its puzzle word
    pub fn solved(puzzle: &Puzzle) -> Self {
        let rows = puzzle.rows();
        let columns = puzzle.columns();
        let mut cells = [[None; GRID_SIZE]; GRID_SIZE];
        for (n, (x, y)) in letter_positions().enumerate() {
            let letter = if y % 2 == 0 {
                rows[y / 2].at(x)
            } else {
                columns[x / 2].at(y)
            };
            cells[y][x] = Some(Tile {
                id: n as u8,
                letter,
            });
        }
        Self { cells }
    }

    pub fn tile(&self, x: usize, y: usize) -> Option<Tile> {
        self.cells.get(y)?.get(x).copied().flatten()
    }

    pub fn letter(&self, x: usize, y: usize) -> Option<u8> {
        self.tile(x, y).map(|t| t.letter)
    }

    /// Every tile with its position, row-major
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, Tile)> + '_ {
        letter_positions().filter_map(|(x, y)| self.tile(x, y).map(|t| (x, y, t)))
    }

    pub fn row_tiles(&self, y: usize) -> Vec<Tile> {
        assert!(y < GRID_SIZE, "row {y} out of range");
        row_positions(y).filter_map(|(x, y)| self.tile(x, y)).collect()
    }

    pub fn column_tiles(&self, x: usize) -> Vec<Tile> {
        assert!(x < GRID_SIZE, "column {x} out of range");
        column_positions(x).filter_map(|(x, y)| self.tile(x, y)).collect()
    }

    pub fn row_letters(&self, y: usize) -> Vec<u8> {
        self.row_tiles(y).iter().map(|t| t.letter).collect()
    }

    pub fn column_letters(&self, x: usize) -> Vec<u8> {
        self.column_tiles(x).iter().map(|t| t.letter).collect()
    }

    /// Shift the letters of row `y` right by `offset` (wrapping)
    pub fn rotate_row(&mut self, y: usize, offset: i32) {
        assert!(y < GRID_SIZE, "row {y} out of range");
        let positions: Vec<_> = row_positions(y).collect();
        self.rotate_band(&positions, offset);
    }

    /// Shift the letters of column `x` down by `offset` (wrapping)
    pub fn rotate_column(&mut self, x: usize, offset: i32) {
        assert!(x < GRID_SIZE, "column {x} out of range");
        let positions: Vec<_> = column_positions(x).collect();
        self.rotate_band(&positions, offset);
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Row { y, offset } => self.rotate_row(y, offset),
            Rotation::Column { x, offset } => self.rotate_column(x, offset),
        }
    }

    fn rotate_band(&mut self, positions: &[(usize, usize)], offset: i32) {
        let len = positions.len();
        let shift = wrap_index(offset, len);
        if shift == 0 {
            return;
        }
        let before: Vec<Option<Tile>> = positions.iter().map(|&(x, y)| self.cells[y][x]).collect();
        for (i, tile) in before.into_iter().enumerate() {
            let (x, y) = positions[(i + shift) % len];
            self.cells[y][x] = tile;
        }
    }

    /// All letters, sorted (the board's letter multiset)
    pub fn sorted_letters(&self) -> Vec<u8> {
        let mut letters: Vec<u8> = self.tiles().map(|(_, _, t)| t.letter).collect();
        letters.sort_unstable();
        letters
    }

    /// Blanks empty, every letter cell filled with a distinct tile id, and
    /// exactly the puzzle's letters on the board
    pub fn is_consistent_with(&self, puzzle: &Puzzle) -> bool {
        let mut ids = [false; LETTER_COUNT];
        for y in 0..GRID_SIZE {
            for x in 0..GRID_SIZE {
                match (is_blank(x, y), self.cells[y][x]) {
                    (true, None) => {}
                    (false, Some(tile)) => {
                        let id = tile.id as usize;
                        if id >= LETTER_COUNT || ids[id] {
                            return false;
                        }
                        ids[id] = true;
                    }
                    _ => return false,
                }
            }
        }
        let mut expected = puzzle.letters().to_vec();
        expected.sort_unstable();
        self.sorted_letters() == expected
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(tile) => write!(f, "{}", tile.letter as char)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
