//! Retained in-memory renderer
//!
//! Keeps the last state the simulation pushed: cell positions, drag offsets
//! and highlighted cells. Prints as a text board.

use std::collections::{HashMap, HashSet};
use std::fmt;

use glam::Vec2;

use super::{CellId, Renderer};
use crate::consts::GRID_SIZE;

/// One rendered cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewCell {
    pub letter: char,
    pub x: i32,
    pub y: i32,
    pub offset: Vec2,
}

#[derive(Debug, Clone, Default)]
pub struct BoardView {
    cells: HashMap<CellId, ViewCell>,
    valid: HashSet<CellId>,
}

impl BoardView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, id: CellId) -> Option<&ViewCell> {
        self.cells.get(&id)
    }

    pub fn offset(&self, id: CellId) -> Option<Vec2> {
        self.cells.get(&id).map(|c| c.offset)
    }

    pub fn is_valid(&self, id: CellId) -> bool {
        self.valid.contains(&id)
    }

    pub fn valid_count(&self) -> usize {
        self.valid.len()
    }

    pub fn phantom_count(&self) -> usize {
        self.cells
            .keys()
            .filter(|id| matches!(id, CellId::Phantom(_)))
            .count()
    }

    /// Tile placed at board position (x, y)
    pub fn tile_at(&self, x: i32, y: i32) -> Option<(CellId, &ViewCell)> {
        self.cells
            .iter()
            .find(|(id, c)| matches!(id, CellId::Tile(_)) && c.x == x && c.y == y)
            .map(|(id, c)| (*id, c))
    }
}

impl Renderer for BoardView {
    fn place_cell(&mut self, id: CellId, letter: char, x: i32, y: i32) {
        let offset = self.cells.get(&id).map(|c| c.offset).unwrap_or(Vec2::ZERO);
        self.cells.insert(
            id,
            ViewCell {
                letter,
                x,
                y,
                offset,
            },
        );
    }

    fn remove_cell(&mut self, id: CellId) {
        self.cells.remove(&id);
        self.valid.remove(&id);
    }

    fn set_cell_offset(&mut self, id: CellId, dx: f32, dy: f32) {
        if let Some(cell) = self.cells.get_mut(&id) {
            cell.offset = Vec2::new(dx, dy);
        }
    }

    fn mark_valid(&mut self, cells: &[CellId]) {
        self.valid.extend(cells.iter().copied());
    }

    fn clear_valid(&mut self) {
        self.valid.clear();
    }
}

/// Valid cells print uppercase, empty positions as '.'
impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..GRID_SIZE as i32 {
            for x in 0..GRID_SIZE as i32 {
                match self.tile_at(x, y) {
                    Some((id, cell)) if self.is_valid(id) => {
                        write!(f, "{}", cell.letter.to_ascii_uppercase())?
                    }
                    Some((_, cell)) => write!(f, "{}", cell.letter)?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
