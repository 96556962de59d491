//! Keyboard input handling

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use game_core::{InputEvent, InputSource, Key};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, KeyboardEvent, Window};

use crate::error::{describe, ClientError};

/// Map a `KeyboardEvent.key` value to a game key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        _ => None,
    }
}

/// Handle key down event; Escape quits
pub fn handle_key_down(key: &str) -> Option<InputEvent> {
    if key == "Escape" {
        return Some(InputEvent::Quit);
    }
    key_from_name(key).map(InputEvent::KeyDown)
}

/// Handle key up event
pub fn handle_key_up(key: &str) -> Option<InputEvent> {
    key_from_name(key).map(InputEvent::KeyUp)
}

type Listener = Closure<dyn FnMut(Event)>;

/// DOM listeners feeding a queue that the game loop drains once per tick
pub struct KeyboardInput {
    window: Window,
    queue: Rc<RefCell<VecDeque<InputEvent>>>,
    listeners: Vec<(&'static str, Listener)>,
}

impl KeyboardInput {
    pub fn attach(window: &Window) -> Result<Self, ClientError> {
        let mut input = Self {
            window: window.clone(),
            queue: Rc::new(RefCell::new(VecDeque::new())),
            listeners: Vec::new(),
        };

        input.listen("keydown", |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| handle_key_down(&e.key()))
        })?;
        input.listen("keyup", |event| {
            event
                .dyn_ref::<KeyboardEvent>()
                .and_then(|e| handle_key_up(&e.key()))
        })?;
        // Leaving the page is the browser's close button
        input.listen("pagehide", |_| Some(InputEvent::Quit))?;

        Ok(input)
    }

    fn listen<F>(&mut self, kind: &'static str, translate: F) -> Result<(), ClientError>
    where
        F: Fn(&Event) -> Option<InputEvent> + 'static,
    {
        let queue = Rc::clone(&self.queue);
        let listener = Listener::new(move |event: Event| {
            if let Some(input) = translate(&event) {
                // Arrow keys would otherwise scroll the page
                event.prevent_default();
                queue.borrow_mut().push_back(input);
            }
        });

        self.window
            .add_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            .map_err(|e| ClientError::Listener {
                event: kind,
                reason: describe(&e),
            })?;
        self.listeners.push((kind, listener));
        Ok(())
    }

    pub fn detach(&mut self) {
        for (kind, listener) in self.listeners.drain(..) {
            if let Err(e) = self
                .window
                .remove_event_listener_with_callback(kind, listener.as_ref().unchecked_ref())
            {
                tracing::warn!(event = kind, error = %describe(&e), "failed to remove listener");
            }
        }
        self.queue.borrow_mut().clear();
    }
}

impl InputSource for KeyboardInput {
    fn poll_event(&mut self) -> Option<InputEvent> {
        self.queue.borrow_mut().pop_front()
    }
}
