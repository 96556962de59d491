use hecs::World;

use crate::{Config, InputEvent, Key, Paddle, Player};

/// Paddle a key steers and the sign of the direction it asks for
fn key_binding(key: Key) -> (Player, i32) {
    match key {
        Key::W => (Player::One, -1),
        Key::S => (Player::One, 1),
        Key::Up => (Player::Two, -1),
        Key::Down => (Player::Two, 1),
    }
}

/// Handle key down: the pressed key overwrites the current direction
pub fn handle_key_down(key: Key, paddle_speed: i32) -> i32 {
    let (_, sign) = key_binding(key);
    sign * paddle_speed
}

/// Handle key up: only stop if the released key is the one currently steering
pub fn handle_key_up(key: Key, current_dir: i32) -> i32 {
    let (_, sign) = key_binding(key);
    if current_dir.signum() == sign {
        0
    } else {
        current_dir
    }
}

/// Apply a key event to the paddle it is bound to. Quit is handled by the loop.
pub fn ingest_input(world: &mut World, event: InputEvent, config: &Config) {
    let (key, pressed) = match event {
        InputEvent::KeyDown(key) => (key, true),
        InputEvent::KeyUp(key) => (key, false),
        InputEvent::Quit => return,
    };
    let (player, _) = key_binding(key);

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player != player {
            continue;
        }
        paddle.dir.y = if pressed {
            handle_key_down(key, config.paddle_speed)
        } else {
            handle_key_up(key, paddle.dir.y)
        };
    }
}
