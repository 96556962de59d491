use crate::{Ball, Config, Paddle};
use hecs::World;

/// Apply paddle movement, then keep each paddle inside the playfield
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        paddle.rect = config.clamp_paddle(paddle.rect.translated(paddle.dir));
    }
}

/// Move ball by its direction
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.rect = ball.rect.translated(ball.dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Player, Rect};
    use glam::IVec2;

    #[test]
    fn test_paddle_moves_and_clamps_at_top() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Player::One, Rect::new(10, 5, 10, 100));
        world.get::<&mut Paddle>(entity).unwrap().dir = IVec2::new(0, -10);

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().rect.y, 0);
    }

    #[test]
    fn test_paddle_clamps_at_bottom() {
        let mut world = World::new();
        let config = Config::new();
        let entity = create_paddle(&mut world, Player::Two, Rect::new(1004, 665, 10, 100));
        world.get::<&mut Paddle>(entity).unwrap().dir = IVec2::new(0, 10);

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().rect.y, 668);
    }

    #[test]
    fn test_idle_paddle_stays_put() {
        let mut world = World::new();
        let config = Config::new();
        let spawn = config.paddle_spawn(Player::One);
        let entity = create_paddle(&mut world, Player::One, spawn);

        move_paddles(&mut world, &config);

        assert_eq!(world.get::<&Paddle>(entity).unwrap().rect, spawn);
    }

    #[test]
    fn test_ball_moves_by_direction() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Rect::new(100, 100, 10, 10), IVec2::new(-10, 7));

        move_ball(&mut world);

        assert_eq!(
            world.get::<&Ball>(entity).unwrap().rect,
            Rect::new(90, 107, 10, 10)
        );
    }
}
