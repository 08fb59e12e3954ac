//! Game controller
//!
//! Owns the current session, the gesture state machine, the dictionary and
//! the renderer. Every release is followed by validation and a fresh
//! highlight of the valid slots.

use glam::Vec2;

use crate::persistence::{self, Storage, StorageError};
use crate::renderer::{CellId, Renderer, layout};
use crate::settings::Settings;
use crate::sim::{
    GameSession, GenerateError, GestureController, Grid, PointerEvent, PointerKind, Rotation,
    Slot, validate,
};
use crate::words::WordList;

pub struct Game<W: WordList, R: Renderer> {
    words: W,
    renderer: R,
    settings: Settings,
    session: GameSession,
    gestures: GestureController,
    valid: Vec<Slot>,
}

impl<W: WordList, R: Renderer> Game<W, R> {
    /// Start a fresh game from `seed`
    pub fn new_game(
        words: W,
        renderer: R,
        settings: Settings,
        seed: u64,
    ) -> Result<Self, GenerateError> {
        let session = GameSession::generate(&words, seed, settings.max_generation_attempts)?;
        log::info!("New game (seed {})", seed);
        Ok(Self::resume(words, renderer, settings, session))
    }

    /// Continue an existing session
    pub fn resume(words: W, renderer: R, settings: Settings, session: GameSession) -> Self {
        let gestures = GestureController::from_settings(&settings);
        let mut game = Self {
            words,
            renderer,
            settings,
            session,
            gestures,
            valid: Vec::new(),
        };
        game.relayout();
        game
    }

    /// Resume the saved game if there is a sound one, otherwise start fresh
    pub fn restore_or_new(
        words: W,
        renderer: R,
        settings: Settings,
        storage: &dyn Storage,
        seed: u64,
    ) -> Result<Self, GenerateError> {
        match persistence::load_session(storage) {
            Some(session) => Ok(Self::resume(words, renderer, settings, session)),
            None => Self::new_game(words, renderer, settings, seed),
        }
    }

    /// Replace the session with a new puzzle. On failure the current game is
    /// left as it was.
    pub fn reset(&mut self, seed: u64) -> Result<(), GenerateError> {
        let session =
            GameSession::generate(&self.words, seed, self.settings.max_generation_attempts)?;
        self.gestures.cancel(self.session.grid(), &mut self.renderer);
        self.session = session;
        log::info!("New game (seed {})", seed);
        self.relayout();
        Ok(())
    }

    pub fn save(&self, storage: &mut dyn Storage) -> Result<(), StorageError> {
        persistence::save_session(storage, &self.session)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn grid(&self) -> &Grid {
        self.session.grid()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn words(&self) -> &W {
        &self.words
    }

    pub fn gestures(&self) -> &GestureController {
        &self.gestures
    }

    /// Slots spelling a word as of the last commit
    pub fn valid_slots(&self) -> &[Slot] {
        &self.valid
    }

    pub fn is_solved(&self) -> bool {
        self.valid.len() == Slot::ALL.len()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) -> bool {
        self.gestures.pointer_down(self.session.grid(), Vec2::new(x, y))
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.gestures
            .pointer_move(self.session.grid(), Vec2::new(x, y), &mut self.renderer);
    }

    /// Finish the drag, returning the rotation it committed. Highlighting is
    /// recomputed on every release.
    pub fn pointer_up(&mut self) -> Option<Rotation> {
        let rotation = self
            .gestures
            .pointer_up(self.session.grid_mut(), &mut self.renderer);
        self.highlight();
        rotation
    }

    pub fn handle(&mut self, event: PointerEvent) -> Option<Rotation> {
        let Vec2 { x, y } = event.position;
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(x, y);
                None
            }
            PointerKind::Move => {
                self.pointer_move(x, y);
                None
            }
            PointerKind::Up => self.pointer_up(),
        }
    }

    /// `handle`, then save if the event committed a rotation. A failed save
    /// is logged and play goes on.
    pub fn handle_and_save(
        &mut self,
        event: PointerEvent,
        storage: &mut dyn Storage,
    ) -> Option<Rotation> {
        let rotation = self.handle(event);
        if rotation.is_some() {
            if let Err(e) = self.save(storage) {
                log::warn!("Could not save: {}", e);
            }
        }
        rotation
    }

    fn relayout(&mut self) {
        layout(self.session.grid(), &mut self.renderer);
        self.highlight();
    }

    fn highlight(&mut self) {
        let was_solved = self.is_solved();
        let grid = self.session.grid();
        self.valid = validate(grid, &self.words);

        self.renderer.clear_valid();
        for slot in &self.valid {
            let cells: Vec<CellId> = slot
                .tiles(grid)
                .iter()
                .map(|tile| CellId::Tile(tile.id))
                .collect();
            self.renderer.mark_valid(&cells);
        }

        if self.is_solved() && !was_solved {
            log::info!("Puzzle solved (seed {})", self.session.seed());
        }
    }
}
