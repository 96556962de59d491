use crate::systems::{CollisionType, Contact};
use crate::Ball;

/// Reflect the ball off a paddle.
///
/// `speed` is the already ramped-up scalar; directions are integral, so it is
/// truncated toward zero when written into the ball's direction. A `Middle`
/// hit keeps whatever vertical direction the ball already had.
pub fn collide_with_paddle(ball: Ball, contact: &Contact, speed: f32, deflection: f32) -> Ball {
    let mut ball = ball;
    ball.rect.x += contact.penetration;

    let magnitude = speed as i32;
    ball.dir.x = if ball.dir.x < 0 {
        magnitude
    } else {
        -magnitude
    };

    match contact.kind {
        CollisionType::Top => ball.dir.y = (-deflection * speed) as i32,
        CollisionType::Bottom => ball.dir.y = (deflection * speed) as i32,
        CollisionType::Middle | CollisionType::None => {}
    }

    ball
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;
    use glam::IVec2;

    fn contact(kind: CollisionType, penetration: i32) -> Contact {
        Contact { kind, penetration }
    }

    #[test]
    fn test_top_hit_deflects_upward() {
        let ball = Ball::new(Rect::new(17, 340, 10, 10), IVec2::new(-10, 0));

        let ball = collide_with_paddle(ball, &contact(CollisionType::Top, 3), 10.1, 0.75);

        assert_eq!(ball.rect.x, 20);
        assert_eq!(ball.dir, IVec2::new(10, -7));
    }

    #[test]
    fn test_bottom_hit_deflects_downward() {
        let ball = Ball::new(Rect::new(998, 420, 10, 10), IVec2::new(12, 0));

        let ball = collide_with_paddle(ball, &contact(CollisionType::Bottom, -4), 12.0, 0.75);

        assert_eq!(ball.rect.x, 994);
        assert_eq!(ball.dir, IVec2::new(-12, 9));
    }

    #[test]
    fn test_middle_hit_keeps_vertical_direction() {
        let ball = Ball::new(Rect::new(17, 380, 10, 10), IVec2::new(-10, 5));

        let ball = collide_with_paddle(ball, &contact(CollisionType::Middle, 3), 10.1, 0.75);

        assert_eq!(ball.dir, IVec2::new(10, 5));
    }

    #[test]
    fn test_speed_truncates_into_direction() {
        let ball = Ball::new(Rect::new(17, 380, 10, 10), IVec2::new(-10, 0));

        let ball = collide_with_paddle(ball, &contact(CollisionType::Bottom, 3), 10.9, 0.75);

        assert_eq!(ball.dir, IVec2::new(10, 8));
    }
}
