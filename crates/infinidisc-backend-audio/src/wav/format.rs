//! The `fmt ` chunk of a mono 16-bit PCM file.

use crate::error::{AudioError, AudioResult};

/// Channel count written by the encoder.
pub const CHANNELS: u16 = 1;

/// Sample width written by the encoder.
pub const BITS_PER_SAMPLE: u16 = 16;

/// Bytes per sample frame.
pub const BLOCK_ALIGN: u16 = CHANNELS * BITS_PER_SAMPLE / 8;

/// Length of the `fmt ` chunk payload.
pub const FMT_CHUNK_LEN: u32 = 16;

const FORMAT_TAG_PCM: u16 = 1;

/// Stream parameters for a mono 16-bit file.
///
/// Only the sample rate varies; a value is constructed only when the derived
/// byte rate fits the header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WavFormat {
    sample_rate: u32,
    byte_rate: u32,
}

impl WavFormat {
    /// Validates `sample_rate` and builds the format.
    pub fn mono(sample_rate: u32) -> AudioResult<Self> {
        let byte_rate = sample_rate
            .checked_mul(BLOCK_ALIGN as u32)
            .filter(|_| sample_rate > 0)
            .ok_or(AudioError::InvalidSampleRate { rate: sample_rate })?;
        Ok(Self {
            sample_rate,
            byte_rate,
        })
    }

    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bytes per second of audio.
    pub fn byte_rate(&self) -> u32 {
        self.byte_rate
    }

    /// The 16-byte `fmt ` payload, little-endian.
    pub fn fmt_payload(&self) -> [u8; FMT_CHUNK_LEN as usize] {
        let mut out = [0u8; FMT_CHUNK_LEN as usize];
        out[0..2].copy_from_slice(&FORMAT_TAG_PCM.to_le_bytes());
        out[2..4].copy_from_slice(&CHANNELS.to_le_bytes());
        out[4..8].copy_from_slice(&self.sample_rate.to_le_bytes());
        out[8..12].copy_from_slice(&self.byte_rate.to_le_bytes());
        out[12..14].copy_from_slice(&BLOCK_ALIGN.to_le_bytes());
        out[14..16].copy_from_slice(&BITS_PER_SAMPLE.to_le_bytes());
        out
    }
}
