//! Egg Invaders entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use egg_invaders::Settings;
    use egg_invaders::renderer::CanvasSurface;
    use egg_invaders::sim::{FrameInput, FrameOutcome, GameState, frame, movement_tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        surface: CanvasSurface,
        /// Keys currently held (`KeyboardEvent.key` values)
        keys_held: HashSet<String>,
        /// Fire pressed since the last frame
        fire_pending: bool,
        /// Handle of the formation movement interval
        movement_timer: Option<i32>,
    }

    impl Game {
        fn input(&self) -> FrameInput {
            let held = |keys: &[&str]| keys.iter().any(|k| self.keys_held.contains(*k));
            FrameInput {
                left: held(&["a", "A", "ArrowLeft"]),
                right: held(&["d", "D", "ArrowRight"]),
                fire: self.fire_pending,
            }
        }
    }

    /// Read optional JSON settings embedded in the page
    fn load_settings(document: &web_sys::Document) -> Settings {
        match document
            .get_element_by_id("game-config")
            .and_then(|el| el.text_content())
        {
            Some(json) if !json.trim().is_empty() => Settings::from_json_or_default(&json),
            _ => {
                log::info!("No #game-config found, using default settings");
                Settings::default()
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Egg Invaders starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .query_selector("canvas")
            .ok()
            .flatten()
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let settings = load_settings(&document);
        let field = Vec2::new(canvas.width() as f32, canvas.height() as f32);
        let surface = match CanvasSurface::new(&canvas, &settings) {
            Ok(surface) => surface,
            Err(e) => {
                log::error!("Failed to set up canvas: {e:?}");
                return;
            }
        };

        let tick_period = settings.formation.tick_period_ms;
        let game = Rc::new(RefCell::new(Game {
            state: GameState::new(field, settings),
            surface,
            keys_held: HashSet::new(),
            fire_pending: false,
            movement_timer: None,
        }));

        log::info!("Field {}x{}", field.x, field.y);

        setup_input_handlers(game.clone());
        setup_movement_timer(game.clone(), tick_period);

        // Start game loop
        request_animation_frame(game);

        log::info!("Egg Invaders running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let mut g = game.borrow_mut();
                let key = event.key();
                if key == " " {
                    event.prevent_default();
                    if !event.repeat() {
                        g.fire_pending = true;
                    }
                }
                g.keys_held.insert(key);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().keys_held.remove(&event.key());
            });
            let _ =
                window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_movement_timer(game: Rc<RefCell<Game>>, period_ms: f64) {
        let window = web_sys::window().unwrap();
        let timer_game = game.clone();
        let closure = Closure::<dyn FnMut()>::new(move || {
            let now = web_sys::window()
                .and_then(|w| w.performance())
                .map(|p| p.now())
                .unwrap_or_default();
            movement_tick(&mut timer_game.borrow_mut().state, now);
        });
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            period_ms as i32,
        ) {
            Ok(handle) => game.borrow_mut().movement_timer = Some(handle),
            Err(e) => log::error!("Failed to start movement timer: {e:?}"),
        }
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let outcome = {
            let mut g = game.borrow_mut();
            let input = g.input();
            let Game { state, surface, .. } = &mut *g;
            let outcome = frame(state, &input, time, surface);

            // Clear one-shot input after processing
            g.fire_pending = false;
            outcome
        };

        match outcome {
            FrameOutcome::Continue => request_animation_frame(game),
            FrameOutcome::Victory => show_victory(&game),
            FrameOutcome::Halted => {}
        }
    }

    /// Reveal the victory banner and stop the movement timer
    fn show_victory(game: &Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        if let Some(handle) = game.borrow_mut().movement_timer.take() {
            window.clear_interval_with_handle(handle);
        }

        let banner = window
            .document()
            .and_then(|d| d.query_selector(".victory").ok().flatten())
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        match banner {
            Some(el) => {
                let _ = el.style().set_property("visibility", "visible");
            }
            None => log::warn!("No .victory element to show"),
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Egg Invaders (native) starting...");
    log::info!("Native mode runs a headless autopilot session - serve the wasm build to play");

    let settings = match std::env::args().nth(1) {
        Some(path) => match egg_invaders::Settings::from_file(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                egg_invaders::Settings::default()
            }
        },
        None => egg_invaders::Settings::default(),
    };

    autopilot(settings);
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play a full game at 60 Hz with a simple tracking pilot
#[cfg(not(target_arch = "wasm32"))]
fn autopilot(settings: egg_invaders::Settings) {
    use egg_invaders::renderer::RecordingSurface;
    use egg_invaders::sim::{FrameInput, FrameOutcome, GameState, frame, movement_tick};
    use glam::Vec2;

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_FRAMES: u64 = 60 * 60 * 10;

    let tick_period = settings.formation.tick_period_ms;
    let mut state = GameState::new(Vec2::new(1280.0, 720.0), settings);
    let mut surface = RecordingSurface::new();
    let mut next_tick = tick_period;

    for n in 0..MAX_FRAMES {
        let now = n as f64 * FRAME_MS;
        while now >= next_tick {
            movement_tick(&mut state, next_tick);
            next_tick += tick_period;
        }

        let target = state
            .formation
            .enemies
            .first()
            .map(|e| e.body.center_x())
            .unwrap_or_default();
        let player_x = state.player.body.center_x();
        let input = FrameInput {
            left: player_x > target + 2.0,
            right: player_x < target - 2.0,
            fire: (player_x - target).abs() < 20.0,
        };

        surface.commands.clear();
        match frame(&mut state, &input, now, &mut surface) {
            FrameOutcome::Continue => {}
            FrameOutcome::Victory | FrameOutcome::Halted => break,
        }
        log::trace!("frame {n}: {} draw calls", surface.commands_since_clear());
    }

    if state.is_over() {
        println!(
            "Victory in {} frames ({:.1}s), {} kills",
            state.frame_count,
            state.frame_count as f64 * FRAME_MS / 1000.0,
            state.kills
        );
    } else {
        println!(
            "Autopilot gave up after {} frames with {} enemies left",
            state.frame_count,
            state.formation.len()
        );
    }
}
