//! Loop generation entry points.
//!
//! Rendering runs in two passes. The dry signal is a pure function of the
//! sample index, so it is evaluated in parallel. The feedback delay and
//! master gain then run sequentially over the dry buffer. The result is
//! identical to evaluating every stage sample by sample in index order.

use infinidisc_core::{derive_key, record_key, RandomStream};
use rayon::prelude::*;

use crate::config::SynthConfig;
use crate::effects::FeedbackDelay;
use crate::error::AudioResult;
use crate::mixer;
use crate::params::MusicalParams;
use crate::synthesis::Voices;
use crate::wav::AudioClip;

/// Tap length of the feedback delay in seconds.
pub const DELAY_SECONDS: f64 = 0.18;
/// Feedback level of the delay tap.
pub const DELAY_FEEDBACK: f64 = 0.22;
/// Gain applied to every mixed sample.
pub const MASTER_GAIN: f64 = 0.65;
/// Peak level after normalization.
pub const NORMALIZE_TARGET: f64 = 0.92;
/// Buffers with a peak at or below this level are not normalized.
pub const NORMALIZE_FLOOR: f64 = 0.01;

/// A rendered mono loop.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBuffer {
    /// Normalized samples in `[-1, 1]`.
    pub samples: Vec<f64>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Musical parameters drawn from the seed.
    pub params: MusicalParams,
    /// Peak level before normalization.
    pub raw_peak: f64,
}

impl SampleBuffer {
    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the buffer holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Renders the loop for `seed` at the default 44.1 kHz / 14 s format.
pub fn synthesize(seed: &str) -> SampleBuffer {
    let config = SynthConfig::default();
    render(&config, &loop_delay(config.sample_rate), seed)
}

/// Renders the loop for `seed` using `config`.
pub fn synthesize_with(config: &SynthConfig, seed: &str) -> AudioResult<SampleBuffer> {
    config.validate()?;
    let delay = FeedbackDelay::new(
        DELAY_SECONDS,
        config.sample_rate,
        DELAY_FEEDBACK,
        MASTER_GAIN,
    )?;
    Ok(render(config, &delay, seed))
}

/// Seed of the loop attached to record `index`.
pub fn audio_seed(user_seed: &str, index: u64) -> String {
    derive_key(&record_key(user_seed, index), &["audio"])
}

/// Renders and encodes the loop for record `index`.
pub fn render_audio(config: &SynthConfig, user_seed: &str, index: u64) -> AudioResult<AudioClip> {
    let buffer = synthesize_with(config, &audio_seed(user_seed, index))?;
    AudioClip::from_mono(&buffer.samples, buffer.sample_rate)
}

/// The loop's delay stage. All of its constants are in range.
fn loop_delay(sample_rate: u32) -> FeedbackDelay {
    FeedbackDelay {
        delay_samples: (sample_rate as f64 * DELAY_SECONDS).round() as usize,
        feedback: DELAY_FEEDBACK,
        output_gain: MASTER_GAIN,
    }
}

fn render(config: &SynthConfig, delay: &FeedbackDelay, seed: &str) -> SampleBuffer {
    let params = MusicalParams::draw(&mut RandomStream::from_seed(seed));
    let voices = Voices::new(params);
    let sample_rate = config.sample_rate as f64;

    let dry: Vec<f64> = (0..config.num_samples())
        .into_par_iter()
        .map(|i| voices.dry(i as f64 / sample_rate))
        .collect();

    let mut samples = delay.process(&dry);
    let raw_peak = mixer::normalize(&mut samples, NORMALIZE_TARGET, NORMALIZE_FLOOR);

    SampleBuffer {
        samples,
        sample_rate: config.sample_rate,
        params,
        raw_peak,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{envelope, oscillator};
    use infinidisc_core::theory::note_to_freq;
    use std::f64::consts::PI;

    fn short() -> SynthConfig {
        SynthConfig {
            sample_rate: 8000,
            duration_seconds: 1.5,
        }
    }

    /// Sample-by-sample reference renderer.
    fn render_sequential(config: &SynthConfig, seed: &str) -> Vec<f64> {
        let p = MusicalParams::draw(&mut RandomStream::from_seed(seed));
        let scale = p.scale.intervals();
        let rate = config.sample_rate as f64;
        let beat = 60.0 / p.tempo as f64;
        let chord_dur = beat * 4.0;
        let arp_dur = beat / 3.0;
        let delay = (rate * 0.18).round() as usize;

        let n = config.num_samples();
        let mut samples = vec![0.0; n];
        for i in 0..n {
            let t = i as f64 / rate;
            let shift = p.progression.degrees[(t / chord_dur).floor() as usize % 4];
            let mut mix = 0.0;
            for deg in [0, 2, 4, 7] {
                let note = scale[(shift + deg) % scale.len()];
                let phase = t * note_to_freq(p.root + note) * 2.0 * PI;
                let wave = phase.sin() * 0.55 + oscillator::square(phase) * 0.2;
                mix += wave * envelope::chord((t % chord_dur) / chord_dur) * 0.18;
            }
            let step = (t / arp_dur).floor() as usize;
            let idx = scale[(step * 3 + step / 4) % scale.len()];
            let melody = p.root + 12 + idx + if step % 3 == 1 { 12 } else { 0 };
            let m_phase = t * note_to_freq(melody) * 2.0 * PI;
            let m_age = (t % arp_dur) / arp_dur;
            let m_env = (1.0 - m_age).powf(4.5) * 1.4;
            mix += m_phase.sin() * m_env * 0.25;
            if i >= delay {
                mix += samples[i - delay] * 0.22;
            }
            samples[i] = mix * 0.65;
        }
        mixer::normalize(&mut samples, 0.92, 0.01);
        samples
    }

    #[test]
    fn test_two_pass_matches_sequential() {
        for seed in ["abc-0-audio", "xyz-7-audio", ""] {
            let buffer = synthesize_with(&short(), seed).unwrap();
            let expected = render_sequential(&short(), seed);
            assert_eq!(buffer.samples, expected, "seed {:?}", seed);
        }
    }

    #[test]
    fn test_normalized_peak() {
        let buffer = synthesize_with(&short(), "peak").unwrap();
        assert!(buffer.raw_peak > NORMALIZE_FLOOR);
        assert!((mixer::peak(&buffer.samples) - NORMALIZE_TARGET).abs() < 1e-9);
    }

    #[test]
    fn test_loop_delay_matches_validated_delay() {
        for rate in [8000, 22_050, 44_100, 48_000] {
            let checked = FeedbackDelay::new(DELAY_SECONDS, rate, DELAY_FEEDBACK, MASTER_GAIN);
            assert_eq!(checked.unwrap(), loop_delay(rate));
        }
    }

    #[test]
    fn test_synthesize_matches_default_config() {
        let config = SynthConfig {
            duration_seconds: 14.0,
            sample_rate: 44_100,
        };
        let a = synthesize("abc-0-audio");
        let b = synthesize_with(&config, "abc-0-audio").unwrap();
        assert_eq!(a.len(), 617_400);
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SynthConfig {
            sample_rate: 0,
            duration_seconds: 1.0,
        };
        assert!(synthesize_with(&config, "abc").is_err());
    }

    #[test]
    fn test_audio_seed() {
        assert_eq!(audio_seed("abc", 0), "abc-0-audio");
        assert_eq!(audio_seed("", 12), "-12-audio");
    }

    #[test]
    fn test_render_audio_uses_record_seed() {
        let clip = render_audio(&short(), "abc", 0).unwrap();
        let direct = synthesize_with(&short(), "abc-0-audio").unwrap();
        let expected = AudioClip::from_mono(&direct.samples, 8000).unwrap();
        assert_eq!(clip, expected);
    }
}
