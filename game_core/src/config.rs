use crate::{Params, Player, Rect};

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: i32,
    pub arena_height: i32,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_margin: i32,
    pub paddle_speed: i32,
    pub ball_width: i32,
    pub ball_height: i32,
    pub ball_speed: f32,
    pub ball_speed_increment: f32,
    pub ball_deflection: f32,
    pub score_y: i32,
    pub center_line_stride: i32,
    pub tick_interval_ms: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_speed: Params::PADDLE_SPEED,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_deflection: Params::BALL_DEFLECTION,
            score_y: Params::SCORE_Y,
            center_line_stride: Params::CENTER_LINE_STRIDE,
            tick_interval_ms: Params::TICK_INTERVAL_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting rectangle for a paddle, vertically centered
    pub fn paddle_spawn(&self, player: Player) -> Rect {
        let x = match player {
            Player::One => self.paddle_margin,
            Player::Two => self.arena_width - self.paddle_width - self.paddle_margin,
        };
        let y = self.arena_height / 2 - self.paddle_height / 2;
        Rect::new(x, y, self.paddle_width, self.paddle_height)
    }

    /// Ball serve point, also used to re-center after a point
    pub fn ball_spawn(&self) -> Rect {
        Rect::new(
            self.arena_width / 2 + self.ball_width / 2,
            self.arena_height / 2 - self.ball_height / 2,
            self.ball_width,
            self.ball_height,
        )
    }

    /// Keep a paddle fully inside the playfield
    pub fn clamp_paddle(&self, rect: Rect) -> Rect {
        let max_x = (self.arena_width - rect.w).max(0);
        let max_y = (self.arena_height - rect.h).max(0);
        Rect {
            x: rect.x.clamp(0, max_x),
            y: rect.y.clamp(0, max_y),
            ..rect
        }
    }

    /// Anchor of the score text for a player
    pub fn score_anchor(&self, player: Player) -> (i32, i32) {
        match player {
            Player::One => (self.arena_width / 4, self.score_y),
            Player::Two => (3 * self.arena_width / 4, self.score_y),
        }
    }
}
