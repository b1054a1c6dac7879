//! Drone Defense entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use drone_defense::consts::*;
    use drone_defense::input::{self, Keyboard};
    use drone_defense::render::CanvasRenderer;
    use drone_defense::settings::Settings;
    use drone_defense::sim::{GameState, advance};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        renderer: CanvasRenderer,
        keyboard: Keyboard,
        settings: Settings,
        last_time: f64,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
    }

    impl Game {
        fn new(seed: u64, renderer: CanvasRenderer, keyboard: Keyboard) -> Self {
            Self {
                state: GameState::new(seed),
                renderer,
                keyboard,
                settings: Settings::load(),
                last_time: 0.0,
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
            }
        }

        /// One scheduler tick: sample input, advance, render
        fn frame(&mut self, now: f64) {
            let dt_ms = if self.last_time == 0.0 {
                TICK_PERIOD_MS
            } else {
                (now - self.last_time).min(MAX_FRAME_DT as f64 * 1000.0)
            };
            self.last_time = now;

            let input = input::combine(
                self.keyboard.sample(),
                input::gamepad::sample(self.settings.gamepad_deadzone),
            );
            self.state = advance(&self.state, &input, (dt_ms / 1000.0) as f32);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = now;
            self.frame_index = (self.frame_index + 1) % 60;
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 && now > oldest {
                self.fps = (60_000.0 / (now - oldest)).round() as u32;
            }

            self.renderer.clear();
            if let Err(e) = self.renderer.draw(&self.state, &self.settings, self.fps) {
                log::warn!("Render error: {e:?}");
            }
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drone Defense starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("canvas")
            .ok_or_else(|| JsValue::from_str("no #canvas element"))?
            .dyn_into()
            .map_err(|_| JsValue::from_str("#canvas is not a canvas"))?;

        canvas.set_width(ARENA_WIDTH as u32);
        canvas.set_height(ARENA_HEIGHT as u32);

        // Fatal if the 2D context cannot be acquired
        let renderer = CanvasRenderer::new(&canvas).inspect_err(|e| {
            log::error!("Failed to acquire 2d context: {e:?}");
        })?;
        let keyboard = Keyboard::attach(&window);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game::new(seed, renderer, keyboard)));
        log::info!("Game initialized with seed: {}", seed);

        setup_pause_key(game.clone());
        setup_auto_pause(game.clone());
        request_animation_frame(game);

        log::info!("Drone Defense running!");
        Ok(())
    }

    /// P toggles the simulation freeze
    fn setup_pause_key(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            if event.code() == "KeyP" {
                let mut g = game.borrow_mut();
                g.state.is_paused = !g.state.is_paused;
                log::info!(
                    "{}",
                    if g.state.is_paused { "Paused" } else { "Resumed" }
                );
            }
        });
        let _ = window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Freeze when the tab is hidden
    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();
        let document_clone = document.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                let mut g = game.borrow_mut();
                if !g.state.is_paused {
                    g.state.is_paused = true;
                    log::info!("Auto-paused (tab hidden)");
                }
            }
        });
        let _ = document
            .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Drive the game from requestAnimationFrame
    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
        let holder_clone = holder.clone();

        *holder.borrow_mut() = Some(Closure::new(move |time: f64| {
            game.borrow_mut().frame(time);
            schedule(holder_clone.borrow().as_ref().unwrap());
        }));
        schedule(holder.borrow().as_ref().unwrap());
    }

    fn schedule(closure: &Closure<dyn FnMut(f64)>) {
        web_sys::window()
            .unwrap()
            .request_animation_frame(closure.as_ref().unchecked_ref())
            .expect("requestAnimationFrame failed");
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drone_defense::sim::{Buttons, GameState, InputState, advance};

    env_logger::init();

    // Headless demo: hold fire for thirty simulated seconds and report.
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xD20_5E);
    log::info!("Drone Defense headless run, seed {}", seed);

    let input = InputState {
        buttons: Buttons {
            shoot: true,
            jump: false,
        },
        ..Default::default()
    };

    let mut state = GameState::new(seed);
    for _ in 0..(30 * 60) {
        state = advance(&state, &input, 1.0 / 60.0);
    }

    println!(
        "t={:.1}s score={} drones={} projectiles={} formations={}",
        state.game_time,
        state.score,
        state.drones.len(),
        state.projectiles.len(),
        state.spawning.active_formations.len(),
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
