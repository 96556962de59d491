use glam::IVec2;
use hecs::World;

use crate::systems::ingest_input;
use crate::{
    create_ball, create_paddle, Ball, BallSpeed, Config, Events, InputEvent, Paddle, Player,
    Score,
};

/// Everything that changes while the game runs
pub struct GameState {
    pub world: World,
    pub config: Config,
    pub score: Score,
    pub ball_speed: BallSpeed,
    pub events: Events,
}

impl GameState {
    pub fn new() -> Self {
        Self::with_config(Config::new())
    }

    /// Paddles centered on their side, ball at the serve point heading right
    pub fn with_config(config: Config) -> Self {
        let mut world = World::new();
        create_paddle(&mut world, Player::One, config.paddle_spawn(Player::One));
        create_paddle(&mut world, Player::Two, config.paddle_spawn(Player::Two));

        let ball_speed = BallSpeed::from_config(&config);
        let serve = IVec2::new(ball_speed.current as i32, 0);
        create_ball(&mut world, config.ball_spawn(), serve);

        Self {
            world,
            config,
            score: Score::new(),
            ball_speed,
            events: Events::new(),
        }
    }

    pub fn handle_input(&mut self, event: InputEvent) {
        ingest_input(&mut self.world, event, &self.config);
    }

    pub fn step(&mut self) {
        crate::step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.ball_speed,
            &mut self.events,
        );
    }

    pub fn paddle(&self, player: Player) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player == player)
            .map(|(_e, p)| *p)
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
    }

    /// Replace the ball's position and direction
    pub fn set_ball(&mut self, new_ball: Ball) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            *ball = new_ball;
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
