//! Fixed-timestep driver: input, physics, effects, render, pacing.

use crate::{
    draw_frame, Audio, Canvas, Clock, GameEvent, GameState, InputEvent, InputSource, Scoreboard,
    Sound,
};

/// Loop lifecycle; `Stopped` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Stopped,
}

/// Tick deadline tracking.
///
/// Deadlines sit on a fixed grid of `interval` steps, so waking a little
/// late from a sleep does not shift later ticks. Only when a whole slot is
/// missed does the grid restart from "now", with no back-to-back catch-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pacer {
    interval: u32,
    next_time: u32,
}

impl Pacer {
    pub fn new(interval: u32, now: u32) -> Self {
        Self {
            interval,
            next_time: now.saturating_add(interval),
        }
    }

    /// Milliseconds until the current deadline, zero if already past it
    pub fn time_left(&self, now: u32) -> u32 {
        self.next_time.saturating_sub(now)
    }

    /// Move to the following deadline
    pub fn advance(&mut self, now: u32) {
        let following = self.next_time.saturating_add(self.interval);
        if now >= following {
            tracing::trace!(late_by = now - self.next_time, "tick overran its slot");
            self.next_time = now.saturating_add(self.interval);
        } else {
            self.next_time = following;
        }
    }
}

pub struct GameLoop<T> {
    pub state: GameState,
    scoreboard: Scoreboard<T>,
    pacer: Pacer,
    status: LoopState,
}

impl<T> GameLoop<T> {
    pub fn new<C: Canvas<Texture = T>>(canvas: &mut C, now: u32) -> Self {
        Self::with_state(GameState::new(), canvas, now)
    }

    pub fn with_state<C: Canvas<Texture = T>>(state: GameState, canvas: &mut C, now: u32) -> Self {
        let scoreboard = Scoreboard::new(canvas, &state.score);
        let pacer = Pacer::new(state.config.tick_interval_ms, now);
        tracing::info!(
            width = state.config.arena_width,
            height = state.config.arena_height,
            tick_ms = state.config.tick_interval_ms,
            "game loop ready"
        );
        Self {
            state,
            scoreboard,
            pacer,
            status: LoopState::Running,
        }
    }

    pub fn status(&self) -> LoopState {
        self.status
    }

    /// One full iteration. A quit event still lets this tick finish.
    pub fn tick<C, A, I>(&mut self, canvas: &mut C, audio: &mut A, input: &mut I) -> LoopState
    where
        C: Canvas<Texture = T>,
        A: Audio,
        I: InputSource,
    {
        if self.status == LoopState::Stopped {
            return self.status;
        }

        while let Some(event) = input.poll_event() {
            match event {
                InputEvent::Quit => self.status = LoopState::Stopped,
                other => self.state.handle_input(other),
            }
        }

        self.state.step();
        self.apply_effects(canvas, audio);
        draw_frame(canvas, &self.state, &self.scoreboard);

        if self.status == LoopState::Stopped {
            tracing::info!("quit requested, stopping game loop");
        }
        self.status
    }

    /// Sounds and score text for whatever the last step reported
    fn apply_effects<C, A>(&mut self, canvas: &mut C, audio: &mut A)
    where
        C: Canvas<Texture = T>,
        A: Audio,
    {
        for event in self.state.events.iter() {
            match event {
                GameEvent::WallBounceTop | GameEvent::WallBounceBottom => audio.play(Sound::Wall),
                GameEvent::PaddleHit(_) => audio.play(Sound::Paddle),
                GameEvent::ScoredLeft | GameEvent::ScoredRight => {}
            }
        }

        if self.state.events.score_changed() {
            self.scoreboard.refresh(canvas, &self.state.score);
        }
    }

    /// Delay owed before the next tick
    pub fn time_left(&self, now: u32) -> u32 {
        self.pacer.time_left(now)
    }

    /// Call after the delay, right before the next tick
    pub fn resume(&mut self, now: u32) {
        self.pacer.advance(now);
    }

    /// Blocking driver: tick, sleep out the rest of the slot, repeat until quit
    pub fn run<C, A, I, K>(&mut self, canvas: &mut C, audio: &mut A, input: &mut I, clock: &mut K)
    where
        C: Canvas<Texture = T>,
        A: Audio,
        I: InputSource,
        K: Clock,
    {
        tracing::info!("game loop running");
        while self.tick(canvas, audio, input) == LoopState::Running {
            let wait = self.time_left(clock.ticks());
            clock.delay(wait);
            self.resume(clock.ticks());
        }
    }

    /// Release the score textures and hand back the final state
    pub fn shutdown<C: Canvas<Texture = T>>(mut self, canvas: &mut C) -> GameState {
        self.scoreboard.release(canvas);
        tracing::info!(
            player_one = self.state.score.player_one,
            player_two = self.state.score.player_two,
            "game loop shut down"
        );
        self.state
    }
}
