use game_core::{Audio, Sound};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, AudioContextState, AudioScheduledSourceNode, OscillatorType};

use crate::error::{describe, ClientError};

const VOLUME: f32 = 0.15;

/// Frequency (Hz) and length (seconds) of each effect
pub fn tone(sound: Sound) -> (f32, f64) {
    match sound {
        Sound::Paddle => (440.0, 0.06),
        Sound::Wall => (220.0, 0.06),
    }
}

/// Synthesized blips over the Web Audio API. Every play gets its own
/// oscillator, so overlapping sounds never wait on each other.
pub struct WebAudio {
    ctx: AudioContext,
}

impl WebAudio {
    pub fn new() -> Result<Self, ClientError> {
        let ctx = AudioContext::new().map_err(|e| ClientError::Audio(describe(&e)))?;
        Ok(Self { ctx })
    }

    fn blip(&self, frequency: f32, duration: f64) -> Result<(), JsValue> {
        // Browsers keep the context suspended until the first user gesture
        if self.ctx.state() == AudioContextState::Suspended {
            let _ = self.ctx.resume()?;
        }

        let oscillator = self.ctx.create_oscillator()?;
        oscillator.set_type(OscillatorType::Square);
        oscillator.frequency().set_value(frequency);

        let gain = self.ctx.create_gain()?;
        gain.gain().set_value(VOLUME);

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.ctx.destination())?;

        let source: &AudioScheduledSourceNode = &oscillator;
        let now = self.ctx.current_time();
        source.start()?;
        source.stop_with_when(now + duration)?;
        Ok(())
    }

    pub fn close(&mut self) {
        if let Err(e) = self.ctx.close() {
            tracing::warn!(error = %describe(&e), "failed to close audio context");
        }
    }
}

impl Audio for WebAudio {
    fn play(&mut self, sound: Sound) {
        let (frequency, duration) = tone(sound);
        if let Err(e) = self.blip(frequency, duration) {
            tracing::warn!(?sound, error = %describe(&e), "sound playback failed");
        }
    }
}
