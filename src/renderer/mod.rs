//! Rendering capability
//!
//! The simulation never draws. It tells a `Renderer` where cells are, how far
//! they are visually displaced during a drag, and which cells belong to a
//! valid word. DOM, canvas or terminal backends implement this trait.

pub mod board_view;

pub use board_view::{BoardView, ViewCell};

use crate::sim::grid::Grid;

/// Identity of a rendered cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellId {
    /// A board tile, by tile id
    Tile(u8),
    /// A drag-preview phantom, by phantom index
    Phantom(u8),
}

pub trait Renderer {
    /// Place (or move) a cell at board coordinates. Phantom cells may sit
    /// outside 0..5.
    fn place_cell(&mut self, id: CellId, letter: char, x: i32, y: i32);

    fn remove_cell(&mut self, id: CellId);

    /// Visual displacement in pixels, on top of the placed position
    fn set_cell_offset(&mut self, id: CellId, dx: f32, dy: f32);

    fn mark_valid(&mut self, cells: &[CellId]);

    fn clear_valid(&mut self);
}

/// Place every tile at its grid position
pub fn layout<R: Renderer + ?Sized>(grid: &Grid, renderer: &mut R) {
    for (x, y, tile) in grid.tiles() {
        renderer.place_cell(CellId::Tile(tile.id), tile.letter as char, x as i32, y as i32);
    }
}
