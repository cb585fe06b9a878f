//! Petal Dash entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use petal_dash::assets;
    use petal_dash::highscores::HighScore;
    use petal_dash::render::Renderer;
    use petal_dash::sim::{GameState, InputEvent, apply_input, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: Renderer,
        canvas: HtmlCanvasElement,
        high_score: HighScore,
    }

    impl Game {
        /// One frame: update then draw, persisting the best score when a
        /// run ends.
        fn frame(&mut self) {
            let was_over = self.state.game_over;
            tick(&mut self.state);
            if self.state.game_over && !was_over && self.high_score.record(self.state.score) {
                self.high_score.save();
            }
            self.renderer.render(&self.state);
        }

        fn input(&mut self, event: InputEvent) {
            apply_input(&mut self.state, event);
        }

        fn resize(&mut self, width: f32, height: f32) {
            self.canvas.set_width(width as u32);
            self.canvas.set_height(height as u32);
            self.state.resize(width, height);
        }
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Petal Dash starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Size the canvas to the full viewport
        let width = window.inner_width()?.as_f64().unwrap_or(800.0);
        let height = window.inner_height()?.as_f64().unwrap_or(600.0);
        canvas.set_width(width as u32);
        canvas.set_height(height as u32);

        // The loop starts only once every sprite has decoded
        let sprites = assets::load_sprites().await?;
        let renderer = Renderer::new(&canvas, sprites)?;

        let seed = js_sys::Date::now() as u64;
        let mut state = GameState::new(seed, width as f32, height as f32);
        let high_score = HighScore::load();
        state.best_score = high_score.best;

        log::info!("Game initialized with seed {seed}");

        let game = Rc::new(RefCell::new(Game {
            state,
            renderer,
            canvas: canvas.clone(),
            high_score,
        }));

        setup_input_handlers(&canvas, game.clone());
        setup_resize_handler(game.clone());

        request_animation_frame(game);

        log::info!("Petal Dash running!");
        Ok(())
    }

    /// The jump key plus the two duck-key aliases
    fn key_to_event(key: &str) -> Option<InputEvent> {
        match key {
            "ArrowUp" | " " => Some(InputEvent::Jump),
            "ArrowDown" | "s" | "S" => Some(InputEvent::DuckStart),
            _ => None,
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key press
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                if let Some(ev) = key_to_event(&event.key()) {
                    g.input(ev);
                } else if g.state.game_over {
                    // Any other key counts as a generic press for restart
                    g.input(InputEvent::Pointer);
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key release (duck key only)
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if matches!(event.key().as_str(), "ArrowDown" | "s" | "S") {
                    game.borrow_mut().input(InputEvent::DuckEnd);
                }
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Click
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                game.borrow_mut().input(InputEvent::Pointer);
            });
            let _ = canvas
                .add_event_listener_with_callback("mousedown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let window = web_sys::window().unwrap();
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(800.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(600.0);
            game.borrow_mut().resize(width as f32, height as f32);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game.borrow_mut().frame();
            request_animation_frame(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("startup failed: {e:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use petal_dash::sim::{GameState, InputEvent, apply_input, tick};

    env_logger::init();
    log::info!("Petal Dash (native) starting...");
    log::info!("The playable build targets wasm32 - run with `trunk serve`");

    // Headless smoke run: hop through a few waves of obstacles
    let mut state = GameState::new(42, 800.0, 600.0);
    for frame in 0..3600u32 {
        if !state.player.airborne && frame % 40 == 0 {
            apply_input(&mut state, InputEvent::Jump);
        }
        tick(&mut state);
        if state.game_over {
            break;
        }
    }
    println!(
        "headless run: score {} level {} over {} frames (game over: {})",
        state.score, state.level, state.frame, state.game_over
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
