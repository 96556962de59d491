/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Playfield (pixels)
    pub const ARENA_WIDTH: i32 = 1024;
    pub const ARENA_HEIGHT: i32 = 768;

    // Paddle
    pub const PADDLE_WIDTH: i32 = 10;
    pub const PADDLE_HEIGHT: i32 = 100;
    pub const PADDLE_MARGIN: i32 = 10; // gap between paddle and side wall
    pub const PADDLE_SPEED: i32 = 10; // pixels per tick

    // Ball
    pub const BALL_WIDTH: i32 = 10;
    pub const BALL_HEIGHT: i32 = 10;
    pub const BALL_SPEED: f32 = 10.0; // pixels per tick
    pub const BALL_SPEED_INCREMENT: f32 = 0.1; // added on every paddle contact
    pub const BALL_DEFLECTION: f32 = 0.75; // vertical share of speed on edge hits

    // Scoreboard
    pub const SCORE_Y: i32 = 20;

    // Center line: pixel rows whose index is a multiple of this are skipped
    pub const CENTER_LINE_STRIDE: i32 = 3;

    // Loop
    pub const TICK_INTERVAL_MS: u32 = 30;
}
