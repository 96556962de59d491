use crate::systems::CollisionType;
use crate::{Config, Player};

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player_one: u32, // Left player score
    pub player_two: u32, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, player: Player) {
        match player {
            Player::One => self.player_one += 1,
            Player::Two => self.player_two += 1,
        }
    }

    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::One => self.player_one,
            Player::Two => self.player_two,
        }
    }
}

/// Ball speed scalar, ramped up on every paddle contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSpeed {
    pub current: f32,
    base: f32,
    increment: f32,
}

impl BallSpeed {
    pub fn new(base: f32, increment: f32) -> Self {
        Self {
            current: base,
            base,
            increment,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.ball_speed, config.ball_speed_increment)
    }

    pub fn base(&self) -> f32 {
        self.base
    }

    pub fn accelerate(&mut self) -> f32 {
        self.current += self.increment;
        self.current
    }

    pub fn reset(&mut self) {
        self.current = self.base;
    }
}

/// Something that happened during a tick and needs an effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Ball left through the right edge, player one scores
    ScoredLeft,
    /// Ball left through the left edge, player two scores
    ScoredRight,
    WallBounceTop,
    WallBounceBottom,
    PaddleHit(CollisionType),
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    list: Vec<GameEvent>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    pub fn push(&mut self, event: GameEvent) {
        self.list.push(event);
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameEvent> {
        self.list.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn contains(&self, event: GameEvent) -> bool {
        self.list.contains(&event)
    }

    pub fn score_changed(&self) -> bool {
        self.list
            .iter()
            .any(|e| matches!(e, GameEvent::ScoredLeft | GameEvent::ScoredRight))
    }
}
