// SPDX-License-Identifier: MPL-2.0
//! Chime synthesis.

use crate::domain::audio::Tone;
use std::f32::consts::TAU;

/// Ratio between the two notes of the chime (a perfect fifth).
const SECOND_NOTE_RATIO: f32 = 1.5;

/// Attack length; avoids a click at note onset.
const ATTACK_SECS: f32 = 0.005;

/// Renders the chime as interleaved f32 samples in `[-1.0, 1.0]`.
///
/// The first half plays `tone.frequency_hz`, the second half its fifth. Each
/// note has a short linear attack and an exponential decay. Volume follows the
/// same quadratic curve as a perceptual volume slider.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn render_chime(tone: &Tone, sample_rate: u32, channels: u16) -> Vec<f32> {
    let channels = usize::from(channels.max(1));
    let rate = sample_rate.max(1) as f32;
    let frames = (tone.length.as_secs_f32() * rate).round() as usize;
    let gain = tone.volume.value() * tone.volume.value();

    let note_frames = (frames / 2).max(1);
    let mut samples = Vec::with_capacity(frames * channels);

    for frame in 0..frames {
        let (frequency, frame_in_note) = if frame < note_frames {
            (tone.frequency_hz, frame)
        } else {
            (tone.frequency_hz * SECOND_NOTE_RATIO, frame - note_frames)
        };

        let t = frame_in_note as f32 / rate;
        let note_secs = note_frames as f32 / rate;
        let attack = (t / ATTACK_SECS).min(1.0);
        let decay = (-4.0 * t / note_secs).exp();
        let value = (TAU * frequency * t).sin() * attack * decay * gain;

        let value = value.clamp(-1.0, 1.0);
        samples.extend(std::iter::repeat_n(value, channels));
    }

    samples
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::audio::Volume;
    use std::time::Duration;

    fn tone(volume: f32) -> Tone {
        Tone {
            frequency_hz: 880.0,
            length: Duration::from_millis(200),
            volume: Volume::new(volume),
        }
    }

    #[test]
    fn sample_count_matches_length_and_channels() {
        let samples = render_chime(&tone(0.8), 48_000, 2);
        assert_eq!(samples.len(), 48_000 / 5 * 2);
    }

    #[test]
    fn channels_are_interleaved_copies() {
        let samples = render_chime(&tone(0.8), 44_100, 2);
        for frame in samples.chunks(2) {
            assert_eq!(frame[0], frame[1]);
        }
    }

    #[test]
    fn samples_stay_within_gain() {
        let samples = render_chime(&tone(0.5), 44_100, 1);
        let peak = samples.iter().fold(0.0_f32, |acc, s| acc.max(s.abs()));
        assert!(peak > 0.0);
        assert!(peak <= 0.25 + f32::EPSILON);
    }

    #[test]
    fn starts_silent_to_avoid_clicks() {
        let samples = render_chime(&tone(1.0), 44_100, 1);
        assert!(samples[0].abs() < 1e-6);
    }

    #[test]
    fn muted_tone_renders_silence() {
        let samples = render_chime(&tone(0.0), 44_100, 1);
        assert!(samples.iter().all(|s| *s == 0.0));
    }
}
