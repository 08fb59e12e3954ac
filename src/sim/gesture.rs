//! Pointer drag to band rotation
//!
//! ```text
//! Idle -> Dragging(axis: None) -> Dragging(axis: Some) -> Idle
//!             \--------------------------------------------/
//!                    (release before the threshold)
//! ```
//!
//! A drag picks up the row and the column through the pressed cell. Until the
//! pointer has moved more than the threshold along one axis, either band may
//! be previewed; after that the axis is locked for the rest of the gesture.
//! The grid is only touched on release.
//!
//! While locked, twenty phantom cells continue the dragged band on both sides
//! (band positions -10..=-1 and 5..=14), each showing the band letter at its
//! position modulo 5, so the band looks endless however far it is dragged.

use glam::{IVec2, Vec2};

use super::grid::{Grid, Rotation, Tile};
use crate::consts::{
    CELL_SIZE_PX, DRAG_COMMIT_THRESHOLD_PX, GRID_SIZE, PHANTOM_COUNT, PHANTOM_WINDOW_START,
};
use crate::renderer::{CellId, Renderer, layout};
use crate::settings::Settings;
use crate::{is_blank, wrap_index};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerKind {
    Down,
    Move,
    Up,
}

/// A pointer event in board pixels (origin at the top-left of cell (0, 0))
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerKind,
    pub position: Vec2,
}

impl PointerEvent {
    pub fn down(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Down,
            position: Vec2::new(x, y),
        }
    }

    pub fn moved(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Move,
            position: Vec2::new(x, y),
        }
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self {
            kind: PointerKind::Up,
            position: Vec2::new(x, y),
        }
    }
}

/// A preview cell beyond the board edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhantomCell {
    pub letter: u8,
    pub x: i32,
    pub y: i32,
}

/// Band position of phantom `index`: -10..=-1, then 5..=14
pub fn phantom_position(index: usize) -> i32 {
    let p = PHANTOM_WINDOW_START + index as i32;
    if p >= 0 { p + GRID_SIZE as i32 } else { p }
}

/// Phantom cells for one session, allocated up front and hidden until the
/// axis locks
#[derive(Debug, Clone)]
pub struct PhantomBand {
    cells: [PhantomCell; PHANTOM_COUNT],
    revealed: bool,
}

impl PhantomBand {
    fn hidden() -> Self {
        Self {
            cells: [PhantomCell {
                letter: 0,
                x: 0,
                y: 0,
            }; PHANTOM_COUNT],
            revealed: false,
        }
    }

    /// Fill the band with the wrapped continuation of `letters`
    fn reveal(&mut self, axis: Axis, anchor: (usize, usize), letters: &[u8]) {
        let (ax, ay) = (anchor.0 as i32, anchor.1 as i32);
        for (i, cell) in self.cells.iter_mut().enumerate() {
            let p = phantom_position(i);
            let (x, y) = match axis {
                Axis::Horizontal => (p, ay),
                Axis::Vertical => (ax, p),
            };
            *cell = PhantomCell {
                letter: letters[wrap_index(p, letters.len())],
                x,
                y,
            };
        }
        self.revealed = true;
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn cells(&self) -> &[PhantomCell] {
        &self.cells
    }
}

/// What a single pointer move changed
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragUpdate {
    /// Axis being previewed, if either component dominates
    pub dominant: Option<Axis>,
    /// Pixel offset for the previewed band (zero off-axis)
    pub offset: Vec2,
    /// The axis locked on this move
    pub committed: bool,
    /// Whole cells the band would rotate by if released now
    pub movement: IVec2,
}

/// State of one drag, from pointer-down to pointer-up
#[derive(Debug, Clone)]
pub struct DragSession {
    anchor: (usize, usize),
    start: Vec2,
    delta: Vec2,
    axis: Option<Axis>,
    dominant: Option<Axis>,
    movement: IVec2,
    phantoms: PhantomBand,
}

impl DragSession {
    pub fn new(anchor: (usize, usize), start: Vec2) -> Self {
        Self {
            anchor,
            start,
            delta: Vec2::ZERO,
            axis: None,
            dominant: None,
            movement: IVec2::ZERO,
            phantoms: PhantomBand::hidden(),
        }
    }

    pub fn anchor(&self) -> (usize, usize) {
        self.anchor
    }

    /// Locked axis, if the threshold has been crossed
    pub fn axis(&self) -> Option<Axis> {
        self.axis
    }

    pub fn dominant(&self) -> Option<Axis> {
        self.dominant
    }

    pub fn delta(&self) -> Vec2 {
        self.delta
    }

    pub fn movement(&self) -> IVec2 {
        self.movement
    }

    pub fn phantoms(&self) -> &PhantomBand {
        &self.phantoms
    }

    /// Advance the session to a new pointer position. Reads the grid only to
    /// fill phantom letters when the axis locks.
    pub fn update(
        &mut self,
        grid: &Grid,
        position: Vec2,
        cell_size: f32,
        threshold: f32,
    ) -> DragUpdate {
        let (ax, ay) = self.anchor;
        let mut delta = position - self.start;

        match self.axis {
            Some(Axis::Horizontal) => delta.y = 0.0,
            Some(Axis::Vertical) => delta.x = 0.0,
            None => {}
        }
        // A blank-holding column can't carry the drag, only the row can
        if ax % 2 == 1 {
            delta.y = 0.0;
        }
        if ay % 2 == 1 {
            delta.x = 0.0;
        }

        let dominant = if delta.x.abs() > delta.y.abs() {
            Some(Axis::Horizontal)
        } else if delta.y.abs() > delta.x.abs() {
            Some(Axis::Vertical)
        } else {
            None
        };

        let mut committed = false;
        match dominant {
            Some(Axis::Horizontal) => {
                delta.y = 0.0;
                if self.axis.is_none() && delta.x.abs() > threshold {
                    self.axis = Some(Axis::Horizontal);
                    self.phantoms
                        .reveal(Axis::Horizontal, self.anchor, &grid.row_letters(ay));
                    committed = true;
                }
            }
            Some(Axis::Vertical) => {
                delta.x = 0.0;
                if self.axis.is_none() && delta.y.abs() > threshold {
                    self.axis = Some(Axis::Vertical);
                    self.phantoms
                        .reveal(Axis::Vertical, self.anchor, &grid.column_letters(ax));
                    committed = true;
                }
            }
            None => delta = Vec2::ZERO,
        }

        self.delta = delta;
        self.dominant = dominant;
        self.movement = if self.axis.is_some() {
            (delta / cell_size).round().as_ivec2()
        } else {
            IVec2::ZERO
        };

        DragUpdate {
            dominant,
            offset: delta,
            committed,
            movement: self.movement,
        }
    }

    /// The rotation a release would commit right now
    pub fn rotation(&self) -> Option<Rotation> {
        let (ax, ay) = self.anchor;
        match self.axis {
            Some(Axis::Horizontal) if self.movement.x != 0 => Some(Rotation::Row {
                y: ay,
                offset: self.movement.x,
            }),
            Some(Axis::Vertical) if self.movement.y != 0 => Some(Rotation::Column {
                x: ax,
                offset: self.movement.y,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Dragging(DragSession),
}

/// Turns pointer events into previews and committed rotations
#[derive(Debug, Clone)]
pub struct GestureController {
    state: GestureState,
    cell_size: f32,
    threshold: f32,
}

impl Default for GestureController {
    fn default() -> Self {
        Self::new(CELL_SIZE_PX, DRAG_COMMIT_THRESHOLD_PX)
    }
}

impl GestureController {
    pub fn new(cell_size: f32, threshold: f32) -> Self {
        assert!(cell_size > 0.0, "cell size must be positive");
        assert!(threshold >= 0.0, "drag threshold must not be negative");
        Self {
            state: GestureState::Idle,
            cell_size,
            threshold,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.cell_size_px, settings.drag_threshold_px)
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn session(&self) -> Option<&DragSession> {
        match &self.state {
            GestureState::Dragging(session) => Some(session),
            GestureState::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.session().is_some()
    }

    /// Letter cell under a board position
    pub fn cell_at(&self, grid: &Grid, position: Vec2) -> Option<(usize, usize)> {
        if !position.is_finite() || position.x < 0.0 || position.y < 0.0 {
            return None;
        }
        let x = (position.x / self.cell_size) as usize;
        let y = (position.y / self.cell_size) as usize;
        if x >= GRID_SIZE || y >= GRID_SIZE || is_blank(x, y) {
            return None;
        }
        grid.tile(x, y).map(|_| (x, y))
    }

    /// Dispatch one event. Returns the rotation committed by a release.
    pub fn handle<R: Renderer + ?Sized>(
        &mut self,
        event: PointerEvent,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> Option<Rotation> {
        match event.kind {
            PointerKind::Down => {
                self.pointer_down(grid, event.position);
                None
            }
            PointerKind::Move => {
                self.pointer_move(grid, event.position, renderer);
                None
            }
            PointerKind::Up => self.pointer_up(grid, renderer),
        }
    }

    /// Start a drag on the cell under `position`. Ignored while a drag is
    /// already running or when the position isn't over a letter.
    pub fn pointer_down(&mut self, grid: &Grid, position: Vec2) -> bool {
        if self.is_dragging() {
            log::debug!("Ignoring pointer down during an active drag");
            return false;
        }
        let Some(anchor) = self.cell_at(grid, position) else {
            return false;
        };
        self.state = GestureState::Dragging(DragSession::new(anchor, position));
        true
    }

    pub fn pointer_move<R: Renderer + ?Sized>(
        &mut self,
        grid: &Grid,
        position: Vec2,
        renderer: &mut R,
    ) {
        let (cell_size, threshold) = (self.cell_size, self.threshold);
        let GestureState::Dragging(session) = &mut self.state else {
            return;
        };
        let update = session.update(grid, position, cell_size, threshold);
        if update.committed {
            log::debug!(
                "Drag at {:?} locked to {:?}",
                session.anchor(),
                session.axis()
            );
        }
        apply_preview(session, &update, grid, renderer);
    }

    /// End the drag: drop the preview and commit any whole-cell movement
    pub fn pointer_up<R: Renderer + ?Sized>(
        &mut self,
        grid: &mut Grid,
        renderer: &mut R,
    ) -> Option<Rotation> {
        let GestureState::Dragging(session) = std::mem::take(&mut self.state) else {
            return None;
        };
        clear_preview(&session, grid, renderer);

        let rotation = session.rotation();
        if let Some(rotation) = rotation {
            grid.rotate(rotation);
            log::debug!("Committed {:?}", rotation);
        }
        layout(grid, renderer);
        rotation
    }

    /// Drop the current drag without committing anything
    pub fn cancel<R: Renderer + ?Sized>(&mut self, grid: &Grid, renderer: &mut R) {
        if let GestureState::Dragging(session) = std::mem::take(&mut self.state) {
            clear_preview(&session, grid, renderer);
        }
    }
}

fn clear_preview<R: Renderer + ?Sized>(session: &DragSession, grid: &Grid, renderer: &mut R) {
    if session.phantoms().is_revealed() {
        for i in 0..PHANTOM_COUNT {
            renderer.remove_cell(CellId::Phantom(i as u8));
        }
    }
    let (ax, ay) = session.anchor();
    offset_band(renderer, &grid.row_tiles(ay), Vec2::ZERO);
    offset_band(renderer, &grid.column_tiles(ax), Vec2::ZERO);
}

fn offset_band<R: Renderer + ?Sized>(renderer: &mut R, tiles: &[Tile], offset: Vec2) {
    for tile in tiles {
        renderer.set_cell_offset(CellId::Tile(tile.id), offset.x, offset.y);
    }
}

/// Push one move's preview to the renderer. The crossing band is reset before
/// the dragged band is offset, so the shared anchor tile follows the drag.
fn apply_preview<R: Renderer + ?Sized>(
    session: &DragSession,
    update: &DragUpdate,
    grid: &Grid,
    renderer: &mut R,
) {
    let (ax, ay) = session.anchor();
    let row = grid.row_tiles(ay);
    let column = grid.column_tiles(ax);

    if update.committed {
        for (i, cell) in session.phantoms().cells().iter().enumerate() {
            renderer.place_cell(CellId::Phantom(i as u8), cell.letter as char, cell.x, cell.y);
        }
    }

    match update.dominant {
        Some(Axis::Horizontal) => {
            offset_band(renderer, &column, Vec2::ZERO);
            offset_band(renderer, &row, update.offset);
        }
        Some(Axis::Vertical) => {
            offset_band(renderer, &row, Vec2::ZERO);
            offset_band(renderer, &column, update.offset);
        }
        None => {
            offset_band(renderer, &row, Vec2::ZERO);
            offset_band(renderer, &column, Vec2::ZERO);
        }
    }

    if session.phantoms().is_revealed() {
        for i in 0..PHANTOM_COUNT {
            renderer.set_cell_offset(CellId::Phantom(i as u8), update.offset.x, update.offset.y);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::BoardView;
    use crate::sim::puzzle::tests::house_puzzle;
    use proptest::prelude::*;

    fn setup() -> (GestureController, Grid, BoardView) {
        let grid = Grid::solved(&house_puzzle());
        let mut view = BoardView::new();
        layout(&grid, &mut view);
        (GestureController::default(), grid, view)
    }

    fn rotated(letters: &[u8], k: i32) -> Vec<u8> {
        let mut out = letters.to_vec();
        for (i, &letter) in letters.iter().enumerate() {
            out[wrap_index(i as i32 + k, letters.len())] = letter;
        }
        out
    }

    fn drag(
        gestures: &mut GestureController,
        grid: &mut Grid,
        view: &mut BoardView,
        from: (f32, f32),
        path: &[(f32, f32)],
    ) -> Option<Rotation> {
        gestures.handle(PointerEvent::down(from.0, from.1), grid, view);
        for &(x, y) in path {
            gestures.handle(PointerEvent::moved(x, y), grid, view);
        }
        let last = path.last().copied().unwrap_or(from);
        gestures.handle(PointerEvent::up(last.0, last.1), grid, view)
    }

    #[test]
    fn test_phantom_positions() {
        let positions: Vec<i32> = (0..PHANTOM_COUNT).map(phantom_position).collect();
        assert_eq!(positions[0], -10);
        assert_eq!(positions[9], -1);
        assert_eq!(positions[10], 5);
        assert_eq!(positions[19], 14);
    }

    #[test]
    fn test_drag_row_two_by_250() {
        let (mut gestures, mut grid, mut view) = setup();
        let before = grid.row_letters(2);

        let rotation = drag(
            &mut gestures,
            &mut grid,
            &mut view,
            (50.0, 250.0),
            &[(53.0, 250.0), (120.0, 252.0), (300.0, 251.0)],
        );

        assert_eq!(rotation, Some(Rotation::Row { y: 2, offset: 3 }));
        assert_eq!(grid.row_letters(2), rotated(&before, 3));
        assert_eq!(grid.row_letters(2), b"alesc".to_vec());
        assert!(!gestures.is_dragging());
        assert_eq!(view.phantom_count(), 0);
    }

    #[test]
    fn test_negative_drag_rounds_away_from_zero() {
        let (mut gestures, mut grid, mut view) = setup();
        let before = grid.column_letters(4);
        let rotation = drag(
            &mut gestures,
            &mut grid,
            &mut view,
            (450.0, 450.0),
            &[(450.0, 400.0), (452.0, 290.0)],
        );
        assert_eq!(rotation, Some(Rotation::Column { x: 4, offset: -2 }));
        assert_eq!(grid.column_letters(4), rotated(&before, -2));
    }

    #[test]
    fn test_below_threshold_is_noop() {
        let (mut gestures, mut grid, mut view) = setup();
        let before = grid.clone();

        gestures.handle(PointerEvent::down(250.0, 250.0), &mut grid, &mut view);
        gestures.handle(PointerEvent::moved(254.0, 252.0), &mut grid, &mut view);

        // Row preview follows the pointer even before the axis locks
        let session = gestures.session().unwrap();
        assert_eq!(session.axis(), None);
        assert_eq!(session.dominant(), Some(Axis::Horizontal));
        let anchor = grid.tile(2, 2).unwrap();
        assert_eq!(
            view.offset(CellId::Tile(anchor.id)),
            Some(Vec2::new(4.0, 0.0))
        );
        assert_eq!(view.phantom_count(), 0);

        let rotation = gestures.handle(PointerEvent::up(254.0, 252.0), &mut grid, &mut view);
        assert_eq!(rotation, None);
        assert_eq!(grid, before);
        assert_eq!(view.offset(CellId::Tile(anchor.id)), Some(Vec2::ZERO));
    }

    #[test]
    fn test_dominance_switches_before_lock() {
        let (mut gestures, mut grid, mut view) = setup();
        gestures.pointer_down(&grid, Vec2::new(50.0, 50.0));

        gestures.pointer_move(&grid, Vec2::new(53.0, 50.0), &mut view);
        let row_tile = grid.tile(3, 0).unwrap();
        let column_tile = grid.tile(0, 3).unwrap();
        assert_eq!(view.offset(CellId::Tile(row_tile.id)), Some(Vec2::new(3.0, 0.0)));

        gestures.pointer_move(&grid, Vec2::new(51.0, 54.0), &mut view);
        assert_eq!(view.offset(CellId::Tile(row_tile.id)), Some(Vec2::ZERO));
        assert_eq!(
            view.offset(CellId::Tile(column_tile.id)),
            Some(Vec2::new(0.0, 4.0))
        );

        // A tie previews nothing
        gestures.pointer_move(&grid, Vec2::new(52.0, 52.0), &mut view);
        assert_eq!(view.offset(CellId::Tile(column_tile.id)), Some(Vec2::ZERO));
        assert_eq!(gestures.session().unwrap().dominant(), None);
    }

    #[test]
    fn test_lock_reveals_wrapped_phantoms() {
        let (mut gestures, mut grid, mut view) = setup();
        gestures.handle(PointerEvent::down(250.0, 250.0), &mut grid, &mut view);
        gestures.handle(PointerEvent::moved(290.0, 250.0), &mut grid, &mut view);

        let session = gestures.session().unwrap();
        assert_eq!(session.axis(), Some(Axis::Horizontal));
        assert!(session.phantoms().is_revealed());
        assert_eq!(view.phantom_count(), PHANTOM_COUNT);

        // Row 2 is "scale"
        let first = view.cell(CellId::Phantom(0)).unwrap();
        assert_eq!((first.letter, first.x, first.y), ('s', -10, 2));
        let before_edge = view.cell(CellId::Phantom(9)).unwrap();
        assert_eq!((before_edge.letter, before_edge.x), ('e', -1));
        let after_edge = view.cell(CellId::Phantom(10)).unwrap();
        assert_eq!((after_edge.letter, after_edge.x), ('s', 5));
        let last = view.cell(CellId::Phantom(19)).unwrap();
        assert_eq!((last.letter, last.x), ('e', 14));
        for i in 0..PHANTOM_COUNT {
            let cell = session.phantoms().cells()[i];
            assert_eq!(cell.letter, b"scale"[i % 5]);
            assert_eq!(view.offset(CellId::Phantom(i as u8)), Some(Vec2::new(40.0, 0.0)));
        }

        // Preview only; nothing committed yet
        assert_eq!(grid, Grid::solved(&house_puzzle()));

        gestures.handle(PointerEvent::up(290.0, 250.0), &mut grid, &mut view);
        assert_eq!(view.phantom_count(), 0);
    }

    #[test]
    fn test_locked_axis_ignores_cross_movement() {
        let (mut gestures, mut grid, mut view) = setup();
        let rotation = drag(
            &mut gestures,
            &mut grid,
            &mut view,
            (250.0, 250.0),
            &[(260.0, 250.0), (262.0, 700.0), (380.0, 900.0)],
        );
        assert_eq!(rotation, Some(Rotation::Row { y: 2, offset: 1 }));
    }

    #[test]
    fn test_fixed_column_anchor_only_rotates_row() {
        let (mut gestures, mut grid, mut view) = setup();
        // (1, 0) sits above a blank
        gestures.handle(PointerEvent::down(150.0, 50.0), &mut grid, &mut view);
        gestures.handle(PointerEvent::moved(150.0, 450.0), &mut grid, &mut view);
        assert_eq!(gestures.session().unwrap().dominant(), None);
        gestures.handle(PointerEvent::moved(350.0, 450.0), &mut grid, &mut view);
        let rotation = gestures.handle(PointerEvent::up(350.0, 450.0), &mut grid, &mut view);
        assert_eq!(rotation, Some(Rotation::Row { y: 0, offset: 2 }));
    }

    #[test]
    fn test_fixed_row_anchor_only_rotates_column() {
        let (mut gestures, mut grid, mut view) = setup();
        // (0, 1) sits left of a blank
        let rotation = drag(
            &mut gestures,
            &mut grid,
            &mut view,
            (50.0, 150.0),
            &[(400.0, 150.0), (400.0, 260.0)],
        );
        assert_eq!(rotation, Some(Rotation::Column { x: 0, offset: 1 }));
    }

    #[test]
    fn test_pointer_down_targets() {
        let (mut gestures, grid, _) = setup();
        assert!(!gestures.pointer_down(&grid, Vec2::new(150.0, 150.0)));
        assert!(!gestures.pointer_down(&grid, Vec2::new(-1.0, 10.0)));
        assert!(!gestures.pointer_down(&grid, Vec2::new(10.0, 500.0)));
        assert!(!gestures.pointer_down(&grid, Vec2::new(f32::NAN, 10.0)));

        assert!(gestures.pointer_down(&grid, Vec2::new(10.0, 10.0)));
        assert!(!gestures.pointer_down(&grid, Vec2::new(450.0, 450.0)));
        assert_eq!(gestures.session().unwrap().anchor(), (0, 0));
    }

    #[test]
    fn test_cancel_discards_preview() {
        let (mut gestures, mut grid, mut view) = setup();
        gestures.handle(PointerEvent::down(250.0, 50.0), &mut grid, &mut view);
        gestures.handle(PointerEvent::moved(250.0, 320.0), &mut grid, &mut view);
        assert_eq!(view.phantom_count(), PHANTOM_COUNT);

        gestures.cancel(&grid, &mut view);
        assert!(!gestures.is_dragging());
        assert_eq!(view.phantom_count(), 0);
        assert_eq!(grid, Grid::solved(&house_puzzle()));
        let tile = grid.tile(2, 4).unwrap();
        assert_eq!(view.offset(CellId::Tile(tile.id)), Some(Vec2::ZERO));
    }

    #[test]
    fn test_up_without_down() {
        let (mut gestures, mut grid, mut view) = setup();
        assert_eq!(gestures.pointer_up(&mut grid, &mut view), None);
        gestures.pointer_move(&grid, Vec2::new(10.0, 10.0), &mut view);
        assert!(!gestures.is_dragging());
    }

    #[test]
    fn test_from_settings() {
        let settings = Settings {
            cell_size_px: 40.0,
            drag_threshold_px: 2.0,
            ..Settings::default()
        };
        let mut gestures = GestureController::from_settings(&settings);
        let mut grid = Grid::solved(&house_puzzle());
        let mut view = BoardView::new();
        let rotation = drag(
            &mut gestures,
            &mut grid,
            &mut view,
            (20.0, 20.0),
            &[(20.0, 100.0)],
        );
        assert_eq!(rotation, Some(Rotation::Column { x: 0, offset: 2 }));
    }

    fn path_strategy() -> impl Strategy<Value = Vec<(f32, f32)>> {
        prop::collection::vec((-600.0f32..600.0, -600.0f32..600.0), 1..12)
    }

    proptest! {
        #[test]
        fn one_band_per_gesture(
            cell in (0usize..5, 0usize..5).prop_filter("letter cell", |&(x, y)| !is_blank(x, y)),
            path in path_strategy(),
        ) {
            let (mut gestures, mut grid, mut view) = setup();
            let before = grid.clone();
            let start = (cell.0 as f32 * 100.0 + 50.0, cell.1 as f32 * 100.0 + 50.0);
            let path: Vec<_> = path.iter().map(|(dx, dy)| (start.0 + dx, start.1 + dy)).collect();

            let rotation = drag(&mut gestures, &mut grid, &mut view, start, &path);

            let mut expected = before.clone();
            if let Some(rotation) = rotation {
                match rotation {
                    Rotation::Row { y, .. } => prop_assert_eq!(y, cell.1),
                    Rotation::Column { x, .. } => prop_assert_eq!(x, cell.0),
                }
                expected.rotate(rotation);
            }
            prop_assert_eq!(grid, expected);
            prop_assert_eq!(view.phantom_count(), 0);
        }

        #[test]
        fn small_drags_never_commit(
            path in prop::collection::vec((-5.0f32..=5.0, -5.0f32..=5.0), 1..12),
        ) {
            let (mut gestures, mut grid, mut view) = setup();
            let before = grid.clone();
            let path: Vec<_> = path.iter().map(|(dx, dy)| (250.0 + dx, 250.0 + dy)).collect();
            let rotation = drag(&mut gestures, &mut grid, &mut view, (250.0, 250.0), &path);
            prop_assert_eq!(rotation, None);
            prop_assert_eq!(grid, before);
        }
    }
}
