//! Puzzle simulation
//!
//! All game logic lives here. This module must stay pure and deterministic:
//! - Seeded RNG only (injected, never global)
//! - Grid mutated only by whole-band rotation
//! - No platform dependencies; drawing goes through `Renderer`

pub mod generator;
pub mod gesture;
pub mod grid;
pub mod puzzle;
pub mod session;
pub mod validate;

pub use generator::{GenerateError, generate};
pub use gesture::{
    Axis, DragSession, DragUpdate, GestureController, GestureState, PhantomBand, PhantomCell,
    PointerEvent, PointerKind, phantom_position,
};
pub use grid::{Grid, Rotation, Tile};
pub use puzzle::{Puzzle, PuzzleError};
pub use session::GameSession;
pub use validate::{Slot, is_solved, validate};
