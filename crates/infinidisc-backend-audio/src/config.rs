//! Synthesizer configuration.

use serde::{Deserialize, Serialize};

use crate::error::{AudioError, AudioResult};

/// Default output sample rate in Hz.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default loop length in seconds.
pub const DEFAULT_DURATION_SECONDS: f64 = 14.0;

/// Output format of the synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SynthConfig {
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Loop length in seconds.
    pub duration_seconds: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration_seconds: DEFAULT_DURATION_SECONDS,
        }
    }
}

impl SynthConfig {
    /// Checks that the configuration can produce a buffer.
    pub fn validate(&self) -> AudioResult<()> {
        if self.sample_rate == 0 {
            return Err(AudioError::InvalidSampleRate {
                rate: self.sample_rate,
            });
        }
        if !self.duration_seconds.is_finite() || self.duration_seconds <= 0.0 {
            return Err(AudioError::InvalidDuration {
                duration: self.duration_seconds,
            });
        }
        if self.num_samples() == 0 {
            return Err(AudioError::invalid_param(
                "duration_seconds",
                format!(
                    "{} s at {} Hz yields no samples",
                    self.duration_seconds, self.sample_rate
                ),
            ));
        }
        Ok(())
    }

    /// Number of samples in one rendered loop.
    pub fn num_samples(&self) -> usize {
        (self.sample_rate as f64 * self.duration_seconds).round() as usize
    }
}
