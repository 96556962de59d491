//! Contracts the game loop consumes from its host.
//!
//! The core never touches a window, speaker or keyboard directly. A host
//! implements these traits (the browser client does it over a canvas and
//! the Web Audio API, tests do it with recording fakes) and hands them to
//! [`GameLoop`](crate::GameLoop) every tick.

use crate::Rect;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Short sound effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sound {
    Paddle,
    Wall,
}

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
}

/// Discrete input events, drained once per tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(Key),
    KeyUp(Key),
}

/// Rendered text plus its size in pixels
#[derive(Debug, Clone, PartialEq)]
pub struct TextImage<T> {
    pub texture: T,
    pub width: i32,
    pub height: i32,
}

/// Fixed-size drawing surface
pub trait Canvas {
    type Texture;

    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn draw_point(&mut self, x: i32, y: i32, color: Color);
    fn render_text(&mut self, text: &str, color: Color) -> TextImage<Self::Texture>;
    fn copy(&mut self, texture: &Self::Texture, dest: Rect);
    fn destroy_texture(&mut self, texture: Self::Texture);
    fn present(&mut self);
}

/// Fire-and-forget sound playback
pub trait Audio {
    fn play(&mut self, sound: Sound);
}

/// Non-blocking event source
pub trait InputSource {
    fn poll_event(&mut self) -> Option<InputEvent>;
}

/// Monotonic millisecond clock
pub trait Clock {
    fn ticks(&self) -> u32;
    fn delay(&mut self, ms: u32);
}
