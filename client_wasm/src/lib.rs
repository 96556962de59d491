//! Browser client for local two-player Pong
//!
//! Draws on a 2D canvas, plays Web Audio blips and reads the keyboard.
//! Browsers cannot block, so the fixed-timestep loop is driven by
//! `setTimeout`: each callback resumes the pacer, runs one tick and
//! schedules itself for the time left in the slot.

mod audio;
mod canvas;
mod error;
mod input;
mod logging;

use std::cell::RefCell;
use std::rc::Rc;

use game_core::{Config, GameLoop, LoopState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Performance, Window};

pub use audio::WebAudio;
pub use canvas::{CanvasSurface, CanvasText};
pub use error::ClientError;
pub use input::KeyboardInput;

/// Id of the `<canvas>` element the game draws into
const CANVAS_ID: &str = "pong";

/// Main client state
struct Client {
    game: Option<GameLoop<CanvasText>>,
    canvas: CanvasSurface,
    audio: WebAudio,
    input: KeyboardInput,
    performance: Performance,
}

impl Client {
    fn new(window: &Window) -> Result<Self, ClientError> {
        let document = window.document().ok_or(ClientError::NoDocument)?;
        let performance = window.performance().ok_or(ClientError::NoPerformance)?;
        let config = Config::new();

        let mut canvas =
            CanvasSurface::attach(&document, CANVAS_ID, config.arena_width, config.arena_height)?;
        let audio = WebAudio::new()?;
        let input = KeyboardInput::attach(window)?;

        let now = performance.now() as u32;
        let game = GameLoop::new(&mut canvas, now);

        Ok(Self {
            game: Some(game),
            canvas,
            audio,
            input,
            performance,
        })
    }

    fn now(&self) -> u32 {
        self.performance.now() as u32
    }

    /// Run one tick. Returns the delay before the next one, or `None` once stopped.
    fn frame(&mut self) -> Option<u32> {
        let game = self.game.as_mut()?;
        match game.tick(&mut self.canvas, &mut self.audio, &mut self.input) {
            LoopState::Running => Some(game.time_left(self.performance.now() as u32)),
            LoopState::Stopped => {
                self.shutdown();
                None
            }
        }
    }

    fn resume(&mut self) {
        let now = self.now();
        if let Some(game) = self.game.as_mut() {
            game.resume(now);
        }
    }

    /// Release everything in a fixed order: score text, input, audio, canvas
    fn shutdown(&mut self) {
        if let Some(game) = self.game.take() {
            let state = game.shutdown(&mut self.canvas);
            tracing::info!(
                player_one = state.score.player_one,
                player_two = state.score.player_two,
                "final score"
            );
        }
        self.input.detach();
        self.audio.close();
        self.canvas.release();
    }
}

type TickCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

fn schedule(window: &Window, callback: &TickCallback, delay: u32) {
    if let Some(callback) = callback.borrow().as_ref() {
        let scheduled = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            i32::try_from(delay).unwrap_or(i32::MAX),
        );
        if let Err(e) = scheduled {
            tracing::error!(error = %error::describe(&e), "failed to schedule next tick");
        }
    }
}

fn run(window: Window, client: Client) {
    let client = Rc::new(RefCell::new(client));
    let callback: TickCallback = Rc::new(RefCell::new(None));

    let handle = Rc::clone(&callback);
    let tick_client = Rc::clone(&client);
    let tick_window = window.clone();
    *callback.borrow_mut() = Some(Closure::new(move || {
        let next = {
            let mut client = tick_client.borrow_mut();
            client.resume();
            client.frame()
        };
        match next {
            Some(delay) => schedule(&tick_window, &handle, delay),
            // Stopped: drop our handle so the closure is freed after it returns
            None => drop(handle.borrow_mut().take()),
        }
    }));

    // First tick runs right away, the pacer was started when the loop was built
    let first = client.borrow_mut().frame();
    match first {
        Some(delay) => schedule(&window, &callback, delay),
        None => drop(callback.borrow_mut().take()),
    }
}

/// Entry point, called by the wasm-bindgen glue once the module loads
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();

    let window = web_sys::window().ok_or(ClientError::NoWindow)?;
    let client = Client::new(&window).inspect_err(|e| {
        tracing::error!(error = %e, "client startup failed");
    })?;
    tracing::info!("pong client started");

    run(window, client);
    Ok(())
}
