//! Encoded audio result.

use serde::Serialize;

use super::writer::{encode, HEADER_LEN};
use crate::error::AudioResult;

/// An encoded loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AudioClip {
    /// Complete WAV file bytes.
    #[serde(skip)]
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of the PCM data only.
    pub pcm_hash: String,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Number of samples.
    pub num_samples: usize,
}

impl AudioClip {
    /// Encodes mono samples.
    ///
    /// `pcm_hash` covers every byte after the fixed-size header, which is
    /// exactly the `data` chunk body.
    pub fn from_mono(samples: &[f64], sample_rate: u32) -> AudioResult<Self> {
        let wav_data = encode(samples, sample_rate)?;
        let pcm_hash = blake3::hash(&wav_data[HEADER_LEN..]).to_hex().to_string();
        Ok(Self {
            wav_data,
            pcm_hash,
            sample_rate,
            num_samples: samples.len(),
        })
    }

    /// Length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_samples as f64 / self.sample_rate as f64
    }
}
