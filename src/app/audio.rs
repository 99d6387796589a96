// src/app/audio.rs
//! 演出ごとに Web Audio でピコっと短い音を鳴らすよ！🔊

use log::warn;
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

use crate::presentation::EffectKind;

const TONE_GAIN: f32 = 0.08;

/// 演出ごとの音 (周波数 Hz, 長さ 秒, 波形)。
pub fn tone_for(kind: EffectKind) -> (f32, f64, OscillatorType) {
    match kind {
        EffectKind::Flip => (520.0, 0.06, OscillatorType::Triangle),
        EffectKind::Match => (880.0, 0.15, OscillatorType::Sine),
        EffectKind::Mismatch => (180.0, 0.20, OscillatorType::Square),
        EffectKind::Win => (1046.5, 0.45, OscillatorType::Sine),
    }
}

pub struct EffectTones {
    context: AudioContext,
}

impl EffectTones {
    pub fn new() -> Result<Self, JsValue> {
        Ok(Self { context: AudioContext::new()? })
    }

    /// 鳴らしっぱなし。失敗しても warn を出すだけ！
    pub fn play(&self, kind: EffectKind) {
        if let Err(e) = self.play_tone(kind) {
            warn!("EffectTones: failed to play {:?}: {:?}", kind, e);
        }
    }

    fn play_tone(&self, kind: EffectKind) -> Result<(), JsValue> {
        // ユーザー操作前に作られた AudioContext は suspended なので起こしておく。
        // 返ってくる Promise は待たない (待たなくても音はそのうち鳴る)
        self.context.resume().map(drop)?;

        let (frequency, duration, wave) = tone_for(kind);
        let oscillator = self.context.create_oscillator()?;
        oscillator.set_type(wave);
        oscillator.frequency().set_value(frequency);

        let gain = self.context.create_gain()?;
        gain.gain().set_value(TONE_GAIN);

        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&self.context.destination())?;

        let now = self.context.current_time();
        oscillator.start()?;
        oscillator.stop_with_when(now + duration)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_effect_has_a_short_audible_tone() {
        for kind in [EffectKind::Flip, EffectKind::Match, EffectKind::Mismatch, EffectKind::Win] {
            let (frequency, duration, _) = tone_for(kind);
            assert!(frequency > 20.0 && frequency < 20_000.0);
            assert!(duration > 0.0 && duration < 1.0);
        }
        // はずれは低い音！
        assert!(tone_for(EffectKind::Mismatch).0 < tone_for(EffectKind::Match).0);
    }
}
