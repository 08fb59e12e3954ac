//! Word-slot validation
//!
//! Six slots are checked: rows 0, 2, 4 and columns 0, 2, 4. The odd rows and
//! columns hold blanks and are never words.

use serde::{Deserialize, Serialize};

use super::grid::{Grid, Tile, column_positions, row_positions};
use crate::words::WordList;

/// A row or column that should spell a word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Slot {
    Row(usize),
    Column(usize),
}

impl Slot {
    pub const ALL: [Slot; 6] = [
        Slot::Row(0),
        Slot::Row(2),
        Slot::Row(4),
        Slot::Column(0),
        Slot::Column(2),
        Slot::Column(4),
    ];

    /// Cell coordinates in reading order
    pub fn cells(&self) -> Vec<(usize, usize)> {
        match *self {
            Slot::Row(y) => row_positions(y).collect(),
            Slot::Column(x) => column_positions(x).collect(),
        }
    }

    pub fn tiles(&self, grid: &Grid) -> Vec<Tile> {
        match *self {
            Slot::Row(y) => grid.row_tiles(y),
            Slot::Column(x) => grid.column_tiles(x),
        }
    }

    /// The slot's letters as a string
    pub fn word(&self, grid: &Grid) -> String {
        self.tiles(grid).iter().map(|t| t.letter as char).collect()
    }
}

/// Slots currently spelling a dictionary word, in `Slot::ALL` order
pub fn validate<W: WordList + ?Sized>(grid: &Grid, words: &W) -> Vec<Slot> {
    Slot::ALL
        .into_iter()
        .filter(|slot| words.contains(&slot.word(grid)))
        .collect()
}

/// True when all six slots are words
pub fn is_solved<W: WordList + ?Sized>(grid: &Grid, words: &W) -> bool {
    validate(grid, words).len() == Slot::ALL.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::generator::generate;
    use crate::sim::puzzle::tests::house_puzzle;
    use crate::words::Dictionary;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn house_words() -> Dictionary {
        Dictionary::from_text("house scale every haste usage enemy")
    }

    #[test]
    fn test_solved_grid_is_fully_valid() {
        let grid = Grid::solved(&house_puzzle());
        assert_eq!(validate(&grid, &house_words()), Slot::ALL.to_vec());
        assert!(is_solved(&grid, &house_words()));
    }

    #[test]
    fn test_rotation_breaks_slots() {
        let mut grid = Grid::solved(&house_puzzle());
        grid.rotate_row(0, 1);
        // "ehous" is not a word, and every column now has a wrong first letter
        assert_eq!(
            validate(&grid, &house_words()),
            vec![Slot::Row(2), Slot::Row(4)]
        );
        assert!(!is_solved(&grid, &house_words()));
    }

    #[test]
    fn test_slot_words() {
        let grid = Grid::solved(&house_puzzle());
        assert_eq!(Slot::Column(2).word(&grid), "usage");
        assert_eq!(
            Slot::Column(4).cells(),
            vec![(4, 0), (4, 1), (4, 2), (4, 3), (4, 4)]
        );
    }

    #[test]
    fn test_generated_solution_validates() {
        let words = Dictionary::bundled();
        for seed in 0..5 {
            let puzzle = generate(&words, 1000, &mut Pcg32::seed_from_u64(seed)).unwrap();
            assert!(is_solved(&Grid::solved(&puzzle), &words));
        }
    }

    #[test]
    fn test_empty_dictionary_validates_nothing() {
        let grid = Grid::solved(&house_puzzle());
        assert!(validate(&grid, &Dictionary::default()).is_empty());
    }
}
