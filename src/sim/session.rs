//! Per-game state

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::generator::{GenerateError, generate};
use super::grid::Grid;
use super::puzzle::Puzzle;
use crate::words::WordList;

/// Everything needed to resume a game: the seed it came from, the solution,
/// and the board as the player left it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    seed: u64,
    puzzle: Puzzle,
    grid: Grid,
}

impl GameSession {
    /// Generate a puzzle and a shuffled board from one seed
    pub fn generate<W: WordList + ?Sized>(
        words: &W,
        seed: u64,
        max_attempts: u32,
    ) -> Result<Self, GenerateError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let puzzle = generate(words, max_attempts, &mut rng)?;
        let grid = Grid::shuffled(&puzzle, &mut rng);
        Ok(Self { seed, puzzle, grid })
    }

    pub fn new(seed: u64, puzzle: Puzzle, grid: Grid) -> Self {
        Self { seed, puzzle, grid }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The board holds exactly the puzzle's letters with blanks in place
    pub fn is_consistent(&self) -> bool {
        self.grid.is_consistent_with(&self.puzzle)
    }
}
