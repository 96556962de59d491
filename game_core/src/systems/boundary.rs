use crate::{Ball, BallSpeed, Config, Events, GameEvent, Player, Score};
use hecs::World;

/// Corrected ball plus what happened at the edges this tick
#[derive(Debug, Clone, PartialEq)]
pub struct BoundsOutcome {
    pub ball: Ball,
    pub events: Vec<GameEvent>,
}

/// Re-center the ball after a point and serve it at `serve_speed`.
///
/// The horizontal sign flips relative to the direction the ball had when it
/// crossed the edge, so it heads back toward the player who just scored.
fn serve(ball: Ball, serve_speed: i32, config: &Config) -> Ball {
    let mut ball = ball;
    ball.dir.x = if ball.dir.x < 0 {
        serve_speed
    } else {
        -serve_speed
    };
    ball.dir.y = 0;
    ball.rect = config.ball_spawn();
    ball
}

/// Walls and goal lines. Every rule is checked against the ball as left by
/// the previous one; none of them short-circuits the others.
pub fn resolve_ball_bounds(ball: Ball, base_speed: f32, config: &Config) -> BoundsOutcome {
    let mut ball = ball;
    let mut events = Vec::new();
    let serve_speed = base_speed as i32;

    if ball.rect.left() < 0 {
        ball = serve(ball, serve_speed, config);
        events.push(GameEvent::ScoredRight);
    }
    if ball.rect.right() > config.arena_width {
        ball = serve(ball, serve_speed, config);
        events.push(GameEvent::ScoredLeft);
    }
    if ball.rect.top() < 0 {
        ball.rect.y = 0;
        ball.dir.y = -ball.dir.y;
        events.push(GameEvent::WallBounceTop);
    }
    if ball.rect.bottom() > config.arena_height {
        ball.rect.y = config.arena_height - ball.rect.h;
        ball.dir.y = -ball.dir.y;
        events.push(GameEvent::WallBounceBottom);
    }

    BoundsOutcome { ball, events }
}

/// Apply wall bounces and scoring to the ball, score and ball speed
pub fn check_boundaries(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    ball_speed: &mut BallSpeed,
    events: &mut Events,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let outcome = resolve_ball_bounds(*ball, ball_speed.base(), config);
        *ball = outcome.ball;

        for event in outcome.events {
            match event {
                GameEvent::ScoredLeft | GameEvent::ScoredRight => {
                    let scorer = if event == GameEvent::ScoredLeft {
                        Player::One
                    } else {
                        Player::Two
                    };
                    score.increment(scorer);
                    ball_speed.reset();
                    tracing::info!(
                        ?scorer,
                        player_one = score.player_one,
                        player_two = score.player_two,
                        "point scored"
                    );
                }
                GameEvent::WallBounceTop | GameEvent::WallBounceBottom => {
                    tracing::debug!(?event, y = ball.rect.y, "ball bounced off wall");
                }
                GameEvent::PaddleHit(_) => {}
            }
            events.push(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Rect};
    use glam::IVec2;

    fn setup_world() -> (World, Config, Score, BallSpeed, Events) {
        let config = Config::new();
        let speed = BallSpeed::from_config(&config);
        (World::new(), config, Score::new(), speed, Events::new())
    }

    fn ball_of(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_player_two_scores_when_ball_exits_left() {
        let config = Config::new();
        for x in [-1, -7, -40] {
            let ball = Ball::new(Rect::new(x, 200, 10, 10), IVec2::new(-12, 5));

            let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

            assert_eq!(outcome.events, vec![GameEvent::ScoredRight]);
            assert_eq!(outcome.ball.rect, config.ball_spawn());
            // Preserved serve rule: the sign flips away from the exit direction
            assert_eq!(outcome.ball.dir, IVec2::new(10, 0));
        }
    }

    #[test]
    fn test_player_one_scores_when_ball_exits_right() {
        let config = Config::new();
        let ball = Ball::new(Rect::new(1020, 200, 10, 10), IVec2::new(11, -3));

        let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

        assert_eq!(outcome.events, vec![GameEvent::ScoredLeft]);
        assert_eq!(outcome.ball.rect, config.ball_spawn());
        assert_eq!(outcome.ball.dir, IVec2::new(-10, 0));
    }

    #[test]
    fn test_ball_at_right_edge_is_still_in_play() {
        let config = Config::new();
        let ball = Ball::new(Rect::new(1014, 200, 10, 10), IVec2::new(10, 0));

        let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

        assert!(outcome.events.is_empty());
        assert_eq!(outcome.ball, ball);
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let config = Config::new();
        let ball = Ball::new(Rect::new(300, -4, 10, 10), IVec2::new(10, -7));

        let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

        assert_eq!(outcome.events, vec![GameEvent::WallBounceTop]);
        assert_eq!(outcome.ball.rect.y, 0);
        assert_eq!(outcome.ball.dir, IVec2::new(10, 7));
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let config = Config::new();
        let ball = Ball::new(Rect::new(300, 762, 10, 10), IVec2::new(-10, 7));

        let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

        assert_eq!(outcome.events, vec![GameEvent::WallBounceBottom]);
        assert_eq!(outcome.ball.rect.y, 758);
        assert_eq!(outcome.ball.dir, IVec2::new(-10, -7));
    }

    #[test]
    fn test_corner_exit_evaluates_every_rule() {
        // A playfield shorter than the ball makes both vertical rules fire after the reset
        let config = Config {
            arena_height: 8,
            ..Config::new()
        };
        let ball = Ball::new(Rect::new(-3, -3, 10, 10), IVec2::new(-10, -7));

        let outcome = resolve_ball_bounds(ball, config.ball_speed, &config);

        assert_eq!(
            outcome.events,
            vec![
                GameEvent::ScoredRight,
                GameEvent::WallBounceTop,
                GameEvent::WallBounceBottom
            ]
        );
        assert_eq!(outcome.ball.rect.y, -2);
    }

    #[test]
    fn test_scoring_updates_score_and_resets_speed() {
        let (mut world, config, mut score, mut speed, mut events) = setup_world();
        speed.accelerate();
        speed.accelerate();
        create_ball(&mut world, Rect::new(-2, 300, 10, 10), IVec2::new(-10, 3));

        check_boundaries(&mut world, &config, &mut score, &mut speed, &mut events);

        assert_eq!(score.player_two, 1, "Right player should score");
        assert_eq!(score.player_one, 0, "Left player should not score");
        assert_eq!(speed.current, config.ball_speed);
        assert!(events.contains(GameEvent::ScoredRight));
        assert_eq!(ball_of(&world).rect, config.ball_spawn());
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut speed, mut events) = setup_world();
        let entity = create_ball(&mut world, Rect::new(1020, 300, 10, 10), IVec2::new(10, 0));

        check_boundaries(&mut world, &config, &mut score, &mut speed, &mut events);
        world.get::<&mut Ball>(entity).unwrap().rect.x = 1030;
        check_boundaries(&mut world, &config, &mut score, &mut speed, &mut events);

        assert_eq!(score.player_one, 2, "Scores should accumulate");
        assert_eq!(score.player_two, 0);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut speed, mut events) = setup_world();
        create_ball(&mut world, config.ball_spawn(), IVec2::new(10, 4));

        check_boundaries(&mut world, &config, &mut score, &mut speed, &mut events);

        assert_eq!(score, Score::new());
        assert!(events.is_empty());
    }
}
