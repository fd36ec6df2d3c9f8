//! Single-tap feedback delay.
//!
//! The tap reads from the already-processed output, so each output sample
//! depends on the one `delay_samples` earlier. The pass is strictly sequential
//! in index order.

use crate::error::{AudioError, AudioResult};

/// A feedback delay followed by an output gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeedbackDelay {
    /// Tap distance in samples.
    pub delay_samples: usize,
    /// Level of the delayed output fed back into the mix.
    pub feedback: f64,
    /// Gain applied to the mix after the tap is added.
    pub output_gain: f64,
}

impl FeedbackDelay {
    /// Creates a delay with a tap `seconds` long at `sample_rate`.
    pub fn new(
        seconds: f64,
        sample_rate: u32,
        feedback: f64,
        output_gain: f64,
    ) -> AudioResult<Self> {
        if !(0.0..=2.0).contains(&seconds) {
            return Err(AudioError::invalid_param(
                "delay.seconds",
                format!("must be 0-2, got {}", seconds),
            ));
        }
        if !(0.0..=0.95).contains(&feedback) {
            return Err(AudioError::invalid_param(
                "delay.feedback",
                format!("must be 0.0-0.95, got {}", feedback),
            ));
        }
        if !output_gain.is_finite() {
            return Err(AudioError::invalid_param(
                "delay.output_gain",
                format!("must be finite, got {}", output_gain),
            ));
        }
        Ok(Self {
            delay_samples: (sample_rate as f64 * seconds).round() as usize,
            feedback,
            output_gain,
        })
    }

    /// Processes a dry buffer into a new output buffer.
    ///
    /// `out[i] = (dry[i] + out[i - delay] * feedback) * output_gain`, with the
    /// tap omitted while `i < delay`.
    pub fn process(&self, dry: &[f64]) -> Vec<f64> {
        let mut out: Vec<f64> = Vec::with_capacity(dry.len());
        for (i, &sample) in dry.iter().enumerate() {
            let mut mix = sample;
            if self.delay_samples > 0 && i >= self.delay_samples {
                mix += out[i - self.delay_samples] * self.feedback;
            }
            out.push(mix * self.output_gain);
        }
        out
    }
}
