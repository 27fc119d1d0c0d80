//! Neon Snake entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use neon_snake::GameLoop;
    use neon_snake::consts::UNIT_SIZE;
    use neon_snake::platform::{
        Command, KeyValueStore, LocalStorage, MemoryStore, command_for_key,
        command_for_speed_attr,
    };
    use neon_snake::renderer::{CanvasRenderer, build_frame};
    use neon_snake::sim::Board;

    type Store = Box<dyn KeyValueStore>;

    /// Game instance holding all state
    struct Game {
        game: GameLoop<Store>,
        renderer: CanvasRenderer,
        last_time: f64,
        // Last values pushed to the DOM
        shown_score: Option<u64>,
        shown_best: Option<u64>,
        shown_tick_ms: Option<u32>,
    }

    impl Game {
        fn new(store: Store, renderer: CanvasRenderer, seed: u64) -> Self {
            let (width, height) = renderer.size;
            let board = Board::fit(width, height, UNIT_SIZE);
            log::info!("Board {}x{} cells", board.columns(), board.rows());
            Self {
                game: GameLoop::with_board(store, board, seed),
                renderer,
                last_time: 0.0,
                shown_score: None,
                shown_best: None,
                shown_tick_ms: None,
            }
        }

        /// Run due ticks for the time since the last frame
        fn update(&mut self, time: f64) {
            let elapsed = if self.last_time > 0.0 {
                time - self.last_time
            } else {
                0.0
            };
            self.last_time = time;

            let outcome = self.game.update(elapsed);
            if outcome.game_over() {
                log::info!("Final score {}", self.game.score());
            }
        }

        fn render(&self) {
            let frame = build_frame(self.game.state());
            if let Err(e) = self.renderer.render(&frame) {
                log::warn!("Render error: {:?}", e);
            }
        }

        /// Update score labels and the active level button
        fn update_hud(&mut self, document: &Document) {
            let score = self.game.score();
            if self.shown_score != Some(score) {
                if let Some(el) = document.get_element_by_id("scoreText") {
                    el.set_text_content(Some(&score.to_string()));
                }
                self.shown_score = Some(score);
            }

            let best = self.game.best_score();
            if self.shown_best != Some(best) {
                if let Some(el) = document.get_element_by_id("bestScoreText") {
                    el.set_text_content(Some(&best.to_string()));
                }
                self.shown_best = Some(best);
            }

            let tick_ms = self.game.tick_ms();
            if self.shown_tick_ms != Some(tick_ms) {
                for btn in level_buttons(document) {
                    let active = btn
                        .get_attribute("data-speed")
                        .and_then(|v| v.trim().parse::<u32>().ok())
                        == Some(tick_ms);
                    let _ = btn.class_list().toggle_with_force("active", active);
                }
                self.shown_tick_ms = Some(tick_ms);
            }
        }
    }

    fn level_buttons(document: &Document) -> Vec<Element> {
        let Ok(nodes) = document.query_selector_all(".levelBtn") else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn open_store() -> Store {
        match LocalStorage::open() {
            Ok(storage) => Box::new(storage),
            Err(e) => {
                log::warn!("{}; best score will not be kept", e);
                Box::new(MemoryStore::new())
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);

        log::info!("Neon Snake starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameBoard")
            .ok_or("no #gameBoard canvas")?
            .dyn_into()?;
        let renderer = CanvasRenderer::new(&canvas)?;
        log::info!("Canvas {}x{}", renderer.size.0, renderer.size.1);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(open_store(), renderer, seed)));
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone())?;
        setup_reset_button(&document, game.clone())?;
        setup_level_buttons(&document, game.clone())?;

        {
            let mut g = game.borrow_mut();
            g.render();
            g.update_hud(&document);
        }
        request_animation_frame(game);

        log::info!("Neon Snake running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or("no window")?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let Some(command) = command_for_key(&event.key()) else {
                return;
            };
            // Keep arrow keys from scrolling the page
            if matches!(command, Command::Turn(_)) {
                event.prevent_default();
            }
            game.borrow_mut().game.apply(command);
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_reset_button(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let Some(btn) = document.get_element_by_id("resetBtn") else {
            log::warn!("No #resetBtn; restart with R or Enter");
            return Ok(());
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            game.borrow_mut().game.apply(Command::Restart);
        });
        btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn setup_level_buttons(document: &Document, game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        for btn in level_buttons(document) {
            let Some(command) = btn
                .get_attribute("data-speed")
                .and_then(|value| command_for_speed_attr(&value))
            else {
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().game.apply(command);
            });
            btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        {
            let mut g = game.borrow_mut();
            g.update(time);
            g.render();
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                g.update_hud(&document);
            }
        }

        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use neon_snake::GameLoop;
    use neon_snake::platform::MemoryStore;

    env_logger::init();
    log::info!("Neon Snake (native) starting...");
    log::info!("Native mode runs a headless demo - run with `trunk serve` for the web version");

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let mut game = GameLoop::new(MemoryStore::new(), seed);
    let period = f64::from(game.tick_ms());

    while game.is_running() && game.state().ticks < 2_000 {
        if let Some(direction) = demo::sweep(game.state()) {
            game.set_direction(direction);
        }
        game.update(period);
    }

    println!(
        "Demo finished after {} ticks: score {}, length {}",
        game.state().ticks,
        game.score(),
        game.state().snake.len()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use neon_snake::sim::{Direction, GameState};

    /// Serpentine sweep: cross each row, drop one, come back
    pub fn sweep(state: &GameState) -> Option<Direction> {
        let head = state.head();
        let last = state.board.width - state.board.unit;
        match state.direction()? {
            Direction::Right if head.x >= last => Some(Direction::Down),
            Direction::Left if head.x <= 0 => Some(Direction::Down),
            Direction::Down if head.x >= last => Some(Direction::Left),
            Direction::Down => Some(Direction::Right),
            _ => None,
        }
    }
}
