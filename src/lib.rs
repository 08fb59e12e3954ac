//! Rotaword - A word-cross tile puzzle with rotating rows and columns
//!
//! Core modules:
//! - `words`: Word type and the dictionary capability
//! - `sim`: Deterministic puzzle logic (generation, grid, validation, gestures)
//! - `renderer`: Rendering capability driven by the simulation
//! - `persistence`: Versioned save/load with corruption recovery
//! - `platform`: Browser/native platform abstraction
//! - `game`: Single controller tying a session to input and rendering

pub mod game;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod words;

pub use game::Game;
pub use settings::Settings;
pub use words::{Dictionary, Word, WordList};

/// Game configuration constants
pub mod consts {
    /// Board edge length in cells
    pub const GRID_SIZE: usize = 5;
    /// Letters per word (and per slot)
    pub const WORD_LEN: usize = 5;
    /// Letter cells on the board (25 minus the blanks)
    pub const LETTER_COUNT: usize = 21;
    /// Fixed blank positions as (x, y)
    pub const BLANKS: [(usize, usize); 4] = [(1, 1), (3, 1), (1, 3), (3, 3)];

    /// Pixels per cell when mapping pointer deltas to cell movement
    pub const CELL_SIZE_PX: f32 = 100.0;
    /// A drag must exceed this many pixels before its axis locks
    pub const DRAG_COMMIT_THRESHOLD_PX: f32 = 5.0;

    /// Phantom cells rendered around a dragged band
    pub const PHANTOM_COUNT: usize = 20;
    /// Band position of the first phantom cell
    pub const PHANTOM_WINDOW_START: i32 = -10;

    /// Generator attempts before giving up
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 1000;
}

/// Wrap an index into [0, len)
#[inline]
pub fn wrap_index(index: i32, len: usize) -> usize {
    assert!(len > 0, "cannot wrap into an empty band");
    index.rem_euclid(len as i32) as usize
}

/// Whether a cell is one of the fixed blanks
#[inline]
pub fn is_blank(x: usize, y: usize) -> bool {
    x % 2 == 1 && y % 2 == 1
}
