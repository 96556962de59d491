pub mod components;
pub mod config;
pub mod game_loop;
pub mod params;
pub mod platform;
pub mod render;
pub mod resources;
pub mod state;
pub mod systems;

pub use components::*;
pub use config::*;
pub use game_loop::*;
pub use params::*;
pub use platform::*;
pub use render::*;
pub use resources::*;
pub use state::*;

use glam::IVec2;
use hecs::World;
use systems::*;

/// Advance the simulation by one tick (input is applied before this runs)
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    ball_speed: &mut BallSpeed,
    events: &mut Events,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Move paddles (clamped to the playfield)
    move_paddles(world, config);

    // 2. Move ball
    move_ball(world);

    // 3. Walls and goal lines
    check_boundaries(world, config, score, ball_speed, events);

    // 4. Paddle contacts, left paddle first
    check_collisions(world, config, ball_speed, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, player: Player, rect: Rect) -> hecs::Entity {
    world.spawn((Paddle::new(player, rect),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, rect: Rect, dir: IVec2) -> hecs::Entity {
    world.spawn((Ball::new(rect, dir),))
}
