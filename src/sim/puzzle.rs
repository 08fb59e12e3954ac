//! The six-word cross a game is built from
//!
//! ```text
//!   x: 0 1 2 3 4
//! y=0  T T T T T   top
//! y=1  L . C . R
//! y=2  M M M M M   middle
//! y=3  L . C . R
//! y=4  B B B B B   bottom
//!      ^   ^   ^
//!   left center right
//! ```
//!
//! Each row word crosses each column word in exactly one cell, so nine
//! letter equalities bind the six words together.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::LETTER_COUNT;
use crate::words::Word;

/// A crossing whose two words disagree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    #[error("{row} and {column} disagree at ({x}, {y})")]
    Mismatch {
        row: &'static str,
        column: &'static str,
        x: usize,
        y: usize,
    },
}

/// Serialized form, checked on the way in
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PuzzleWords {
    top: Word,
    middle: Word,
    bottom: Word,
    left: Word,
    center: Word,
    right: Word,
}

/// Six words whose crossings agree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PuzzleWords", into = "PuzzleWords")]
pub struct Puzzle {
    top: Word,
    middle: Word,
    bottom: Word,
    left: Word,
    center: Word,
    right: Word,
}

impl Puzzle {
    pub fn new(
        top: Word,
        middle: Word,
        bottom: Word,
        left: Word,
        center: Word,
        right: Word,
    ) -> Result<Self, PuzzleError> {
        let puzzle = Self {
            top,
            middle,
            bottom,
            left,
            center,
            right,
        };
        puzzle.check()?;
        Ok(puzzle)
    }

    fn check(&self) -> Result<(), PuzzleError> {
        let rows = [("top", self.top), ("middle", self.middle), ("bottom", self.bottom)];
        let columns = [("left", self.left), ("center", self.center), ("right", self.right)];
        for (ri, &(row_name, row)) in rows.iter().enumerate() {
            for (ci, &(column_name, column)) in columns.iter().enumerate() {
                // Row ri sits at y = 2*ri, column ci at x = 2*ci
                if row.at(2 * ci) != column.at(2 * ri) {
                    return Err(PuzzleError::Mismatch {
                        row: row_name,
                        column: column_name,
                        x: 2 * ci,
                        y: 2 * ri,
                    });
                }
            }
        }
        Ok(())
    }

    pub fn top(&self) -> Word {
        self.top
    }

    pub fn middle(&self) -> Word {
        self.middle
    }

    pub fn bottom(&self) -> Word {
        self.bottom
    }

    pub fn left(&self) -> Word {
        self.left
    }

    pub fn center(&self) -> Word {
        self.center
    }

    pub fn right(&self) -> Word {
        self.right
    }

    /// Row words top to bottom
    pub fn rows(&self) -> [Word; 3] {
        [self.top, self.middle, self.bottom]
    }

    /// Column words left to right
    pub fn columns(&self) -> [Word; 3] {
        [self.left, self.center, self.right]
    }

    /// The 21 board letters: the three rows in full, then the off-row
    /// letters of each column (indices 1 and 3).
    pub fn letters(&self) -> [u8; LETTER_COUNT] {
        let mut out = [0u8; LETTER_COUNT];
        let mut n = 0;
        for row in self.rows() {
            for &letter in row.letters() {
                out[n] = letter;
                n += 1;
            }
        }
        for column in self.columns() {
            out[n] = column.at(1);
            out[n + 1] = column.at(3);
            n += 2;
        }
        out
    }
}

impl TryFrom<PuzzleWords> for Puzzle {
    type Error = PuzzleError;

    fn try_from(w: PuzzleWords) -> Result<Self, Self::Error> {
        Self::new(w.top, w.middle, w.bottom, w.left, w.center, w.right)
    }
}

impl From<Puzzle> for PuzzleWords {
    fn from(p: Puzzle) -> Self {
        Self {
            top: p.top,
            middle: p.middle,
            bottom: p.bottom,
            left: p.left,
            center: p.center,
            right: p.right,
        }
    }
}
