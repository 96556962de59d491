use crate::systems::collide_with_paddle;
use crate::{Ball, BallSpeed, Config, Events, GameEvent, Paddle, Player, Rect};
use hecs::World;

/// Where on the paddle the ball landed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionType {
    #[default]
    None,
    Top,
    Middle,
    Bottom,
}

/// Result of testing the ball against one paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Contact {
    pub kind: CollisionType,
    /// Horizontal shift that moves the ball flush with the paddle face
    pub penetration: i32,
}

impl Contact {
    pub fn is_hit(&self) -> bool {
        self.kind != CollisionType::None
    }
}

/// AABB test of the ball against a paddle.
///
/// The paddle face used for penetration is picked from the ball's horizontal
/// direction: moving left means it is hitting a left paddle's right face.
/// Bands are measured from the paddle bottom; a ball bottom sitting exactly on
/// a band boundary falls through to `Bottom`.
pub fn check_paddle_collision(ball: &Ball, paddle: &Rect) -> Contact {
    if !ball.rect.overlaps(paddle) {
        return Contact::default();
    }

    let penetration = match ball.dir.x.signum() {
        -1 => paddle.right() - ball.rect.left(),
        1 => paddle.left() - ball.rect.right(),
        _ => 0,
    };

    let paddle_top = paddle.top() as f32;
    let paddle_bottom = paddle.bottom() as f32;
    let paddle_height = paddle.h as f32;
    let range_upper = paddle_bottom - 2.0 * paddle_height / 3.0;
    let range_middle = paddle_bottom - paddle_height / 3.0;
    let ball_bottom = ball.rect.bottom() as f32;

    let kind = if ball_bottom > paddle_top && ball_bottom < range_upper {
        CollisionType::Top
    } else if ball_bottom > range_upper && ball_bottom < range_middle {
        CollisionType::Middle
    } else {
        CollisionType::Bottom
    };

    Contact { kind, penetration }
}

/// Check the ball against paddle one, then paddle two. The first hit wins.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    ball_speed: &mut BallSpeed,
    events: &mut Events,
) {
    let mut paddles: Vec<(Player, Rect)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.player, p.rect))
        .collect();
    paddles.sort_by_key(|(player, _)| *player);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (player, paddle) in &paddles {
            let contact = check_paddle_collision(ball, paddle);
            if !contact.is_hit() {
                continue;
            }

            let speed = ball_speed.accelerate();
            *ball = collide_with_paddle(*ball, &contact, speed, config.ball_deflection);
            tracing::debug!(?player, ?contact, speed, "ball hit paddle");
            events.push(GameEvent::PaddleHit(contact.kind));
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::IVec2;

    fn ball_at(x: i32, y: i32, dir_x: i32) -> Ball {
        Ball::new(Rect::new(x, y, 10, 10), IVec2::new(dir_x, 0))
    }

    #[test]
    fn test_no_contact_without_overlap() {
        let paddle = Rect::new(10, 334, 10, 100);
        assert_eq!(
            check_paddle_collision(&ball_at(500, 350, -10), &paddle),
            Contact::default()
        );
        // Overlapping horizontally but below the paddle
        assert!(!check_paddle_collision(&ball_at(12, 434, -10), &paddle).is_hit());
        // Overlapping vertically but just past the face
        assert!(!check_paddle_collision(&ball_at(20, 350, -10), &paddle).is_hit());
    }

    #[test]
    fn test_penetration_left_paddle() {
        let paddle = Rect::new(10, 334, 10, 100);
        let contact = check_paddle_collision(&ball_at(17, 375, -10), &paddle);
        assert_eq!(contact.penetration, 3);
    }

    #[test]
    fn test_penetration_right_paddle() {
        let paddle = Rect::new(1004, 334, 10, 100);
        let contact = check_paddle_collision(&ball_at(998, 375, 10), &paddle);
        assert_eq!(contact.penetration, -4);
    }

    #[test]
    fn test_bands_on_default_paddle() {
        // bottom = 434, upper band boundary ~367.3, middle boundary ~400.7
        let paddle = Rect::new(10, 334, 10, 100);
        let kind = |ball_bottom: i32| {
            check_paddle_collision(&ball_at(15, ball_bottom - 10, -10), &paddle).kind
        };
        assert_eq!(kind(335), CollisionType::Top);
        assert_eq!(kind(367), CollisionType::Top);
        assert_eq!(kind(368), CollisionType::Middle);
        assert_eq!(kind(400), CollisionType::Middle);
        assert_eq!(kind(401), CollisionType::Bottom);
        assert_eq!(kind(443), CollisionType::Bottom);
    }

    #[test]
    fn test_band_boundaries_are_strict() {
        // Height divisible by 3 puts the boundaries on whole pixels: 33 and 66
        let paddle = Rect::new(10, 0, 10, 99);
        let kind = |ball_bottom: i32| {
            check_paddle_collision(&ball_at(15, ball_bottom - 10, -10), &paddle).kind
        };
        assert_eq!(kind(32), CollisionType::Top);
        assert_ne!(kind(33), CollisionType::Top);
        assert_eq!(kind(33), CollisionType::Bottom);
        assert_eq!(kind(34), CollisionType::Middle);
        assert_eq!(kind(65), CollisionType::Middle);
        assert_eq!(kind(66), CollisionType::Bottom);
    }

    #[test]
    fn test_left_paddle_checked_first() {
        let mut world = World::new();
        let config = Config::new();
        let mut speed = BallSpeed::from_config(&config);
        let mut events = Events::new();
        // Narrow playfield so one ball overlaps both paddles
        create_paddle(&mut world, Player::Two, Rect::new(20, 0, 10, 100));
        create_paddle(&mut world, Player::One, Rect::new(10, 0, 10, 100));
        create_ball(&mut world, Rect::new(15, 40, 10, 10), IVec2::new(-10, 0));

        check_collisions(&mut world, &config, &mut speed, &mut events);

        let hits = events
            .iter()
            .filter(|e| matches!(e, GameEvent::PaddleHit(_)))
            .count();
        assert_eq!(hits, 1, "only one paddle may respond per tick");
        assert!((speed.current - (config.ball_speed + config.ball_speed_increment)).abs() < 1e-4);
        let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap();
        assert_eq!(ball.rect.x, 20, "pushed out of paddle one's right face");
        assert_eq!(ball.dir.x, 10);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let mut world = World::new();
        let config = Config::new();
        let mut speed = BallSpeed::from_config(&config);
        let mut events = Events::new();
        create_paddle(&mut world, Player::One, config.paddle_spawn(Player::One));

        check_collisions(&mut world, &config, &mut speed, &mut events);

        assert!(events.is_empty());
        assert_eq!(speed.current, config.ball_speed);
    }
}
