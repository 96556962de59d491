use crate::{Canvas, Color, Config, GameState, Player, Rect, Score, TextImage};

/// Score text for both players, rendered once per score change
pub struct Scoreboard<T> {
    player_one: Option<TextImage<T>>,
    player_two: Option<TextImage<T>>,
}

impl<T> Scoreboard<T> {
    pub fn new<C: Canvas<Texture = T>>(canvas: &mut C, score: &Score) -> Self {
        let mut scoreboard = Self {
            player_one: None,
            player_two: None,
        };
        scoreboard.refresh(canvas, score);
        scoreboard
    }

    /// Re-render both numbers, releasing the previous textures first
    pub fn refresh<C: Canvas<Texture = T>>(&mut self, canvas: &mut C, score: &Score) {
        self.release(canvas);
        let mut render =
            |player| Some(canvas.render_text(&score.get(player).to_string(), Color::WHITE));
        self.player_one = render(Player::One);
        self.player_two = render(Player::Two);
    }

    pub fn draw<C: Canvas<Texture = T>>(&self, canvas: &mut C, config: &Config) {
        for (player, image) in [
            (Player::One, &self.player_one),
            (Player::Two, &self.player_two),
        ] {
            if let Some(image) = image {
                let (x, y) = config.score_anchor(player);
                canvas.copy(&image.texture, Rect::new(x, y, image.width, image.height));
            }
        }
    }

    pub fn release<C: Canvas<Texture = T>>(&mut self, canvas: &mut C) {
        for image in [self.player_one.take(), self.player_two.take()]
            .into_iter()
            .flatten()
        {
            canvas.destroy_texture(image.texture);
        }
    }
}

/// Compose and present one frame
pub fn draw_frame<C: Canvas>(canvas: &mut C, state: &GameState, scoreboard: &Scoreboard<C::Texture>) {
    let config = &state.config;

    canvas.clear(Color::BLACK);
    scoreboard.draw(canvas, config);

    for player in [Player::One, Player::Two] {
        if let Some(paddle) = state.paddle(player) {
            canvas.fill_rect(paddle.rect, Color::WHITE);
        }
    }
    if let Some(ball) = state.ball() {
        canvas.fill_rect(ball.rect, Color::WHITE);
    }

    draw_center_line(canvas, config);
    canvas.present();
}

/// Dashed net: every row except each `center_line_stride`-th one
fn draw_center_line<C: Canvas>(canvas: &mut C, config: &Config) {
    let x = config.arena_width / 2;
    for y in (0..config.arena_height).filter(|y| y % config.center_line_stride != 0) {
        canvas.draw_point(x, y, Color::WHITE);
    }
}
