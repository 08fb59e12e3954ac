//! Rotaword entry points
//!
//! Natively this is a text demo: it restores or creates a game, prints the
//! board, replays one drag and saves. The web build restores the same game
//! from LocalStorage, feeds it document mouse events and saves after every
//! committed rotation.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use rotaword::persistence::Storage;
    use rotaword::renderer::BoardView;
    use rotaword::sim::PointerEvent;
    use rotaword::{Dictionary, Game, Settings, platform};
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, MouseEvent};

    /// Element whose top-left corner is board pixel (0, 0)
    const BOARD_ELEMENT_ID: &str = "game";

    /// The running game and where it is saved
    struct App {
        game: Game<Dictionary, BoardView>,
        storage: Box<dyn Storage>,
    }

    impl App {
        fn handle(&mut self, event: PointerEvent) {
            if let Some(rotation) = self.game.handle_and_save(event, &mut *self.storage) {
                log::info!("{:?}\n{}", rotation, self.game.renderer());
                if self.game.is_solved() {
                    log::info!("Solved!");
                }
            }
        }
    }

    /// Client coordinates relative to the board element, or to the page when
    /// there is no board element
    fn board_position(document: &Document, event: &MouseEvent) -> (f32, f32) {
        let (x, y) = (event.client_x() as f32, event.client_y() as f32);
        match document.get_element_by_id(BOARD_ELEMENT_ID) {
            Some(board) => {
                let rect = board.get_bounding_client_rect();
                (x - rect.left() as f32, y - rect.top() as f32)
            }
            None => (x, y),
        }
    }

    fn listen(
        document: &Document,
        name: &str,
        to_event: fn(f32, f32) -> PointerEvent,
        app: Rc<RefCell<App>>,
    ) {
        let target = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let (x, y) = board_position(&target, &event);
            app.borrow_mut().handle(to_event(x, y));
        });
        let _ = document.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
        closure.forget();
    }

    pub fn run() {
        platform::init_logging();
        log::info!("Rotaword starting...");

        let mut storage = platform::default_storage();
        let settings = Settings::load(&*storage);
        let game = match Game::restore_or_new(
            Dictionary::bundled(),
            BoardView::new(),
            settings,
            &*storage,
            platform::clock_seed(),
        ) {
            Ok(game) => game,
            Err(e) => {
                log::error!("Could not start a game: {}", e);
                return;
            }
        };
        log::info!("Board:\n{}", game.renderer());
        if let Err(e) = game.save(&mut *storage) {
            log::warn!("Could not save: {}", e);
        }

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to listen on");
            return;
        };
        let app = Rc::new(RefCell::new(App { game, storage }));
        listen(&document, "mousedown", PointerEvent::down, app.clone());
        listen(&document, "mousemove", PointerEvent::moved, app.clone());
        listen(&document, "mouseup", PointerEvent::up, app);

        log::info!("Rotaword running!");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use rotaword::renderer::BoardView;
    use rotaword::sim::PointerEvent;
    use rotaword::{Dictionary, Game, Settings, platform};

    platform::init_logging();
    log::info!("Rotaword (native) starting...");

    let words = match std::env::var_os("ROTAWORD_WORDS") {
        Some(path) => match Dictionary::load(&path) {
            Ok(words) => words,
            Err(e) => {
                log::error!("Could not read word list {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => Dictionary::bundled(),
    };
    log::info!("{} words loaded", words.len());

    let seed = match std::env::var("ROTAWORD_SEED") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(seed) => seed,
            Err(e) => {
                log::warn!("Ignoring ROTAWORD_SEED={:?}: {}", raw, e);
                platform::clock_seed()
            }
        },
        Err(_) => platform::clock_seed(),
    };

    let mut storage = platform::default_storage();
    let settings = Settings::load(&*storage);
    let mut game = match Game::restore_or_new(words, BoardView::new(), settings, &*storage, seed)
    {
        Ok(game) => game,
        Err(e) => {
            log::error!("Could not start a game: {}", e);
            std::process::exit(1);
        }
    };

    println!("Seed {}\n{}", game.session().seed(), game.renderer());

    // Drag the middle row one cell to the right, grabbing its first letter
    let cell = game.settings().cell_size_px;
    let (x, y) = (cell * 0.5, cell * 2.5);
    let script = [
        PointerEvent::down(x, y),
        PointerEvent::moved(x + cell * 0.25, y),
        PointerEvent::moved(x + cell * 0.8, y + 3.0),
        PointerEvent::up(x + cell, y),
    ];
    for event in script {
        if let Some(rotation) = game.handle(event) {
            println!("Applied {:?}", rotation);
        }
    }
    println!("{}", game.renderer());

    let grid = game.grid();
    for slot in game.valid_slots() {
        println!("{:?}: {}", slot, slot.word(grid));
    }
    if game.is_solved() {
        println!("Solved!");
    }

    if let Err(e) = game.save(&mut *storage) {
        log::error!("Could not save: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main
}
