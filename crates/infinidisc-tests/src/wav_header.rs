//! Independent WAV header decoder.
//!
//! Reads the canonical 44-byte RIFF header field by field so encoder output
//! can be checked without trusting the encoder's own constants.

use thiserror::Error;

/// Length of the canonical PCM header.
pub const HEADER_LEN: usize = 44;

/// Fields of a canonical PCM WAV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WavInfo {
    pub riff_size: u32,
    pub audio_format: u16,
    pub channels: u16,
    pub sample_rate: u32,
    pub byte_rate: u32,
    pub block_align: u16,
    pub bits_per_sample: u16,
    pub data_size: u32,
}

/// A malformed header.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WavHeaderError {
    #[error("file too short: {0} bytes (minimum 44)")]
    TooShort(usize),
    #[error("expected {expected:?} at offset {offset}")]
    BadTag {
        offset: usize,
        expected: &'static str,
    },
}

fn u16_at(data: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([data[offset], data[offset + 1]])
}

fn u32_at(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Parses the header of `data`.
pub fn parse_wav_header(data: &[u8]) -> Result<WavInfo, WavHeaderError> {
    if data.len() < HEADER_LEN {
        return Err(WavHeaderError::TooShort(data.len()));
    }
    for (offset, expected) in [(0, "RIFF"), (8, "WAVE"), (12, "fmt "), (36, "data")] {
        if &data[offset..offset + 4] != expected.as_bytes() {
            return Err(WavHeaderError::BadTag { offset, expected });
        }
    }

    Ok(WavInfo {
        riff_size: u32_at(data, 4),
        audio_format: u16_at(data, 20),
        channels: u16_at(data, 22),
        sample_rate: u32_at(data, 24),
        byte_rate: u32_at(data, 28),
        block_align: u16_at(data, 32),
        bits_per_sample: u16_at(data, 34),
        data_size: u32_at(data, 40),
    })
}

/// Locates the body of the `data` chunk by walking the RIFF chunk list.
///
/// Unlike [`parse_wav_header`] this does not assume the canonical layout, so
/// it also finds the samples when other chunks precede `data`. Returns `None`
/// for anything that is not a well-formed RIFF/WAVE file.
pub fn data_chunk(data: &[u8]) -> Option<&[u8]> {
    if data.get(0..4)? != b"RIFF" || data.get(8..12)? != b"WAVE" {
        return None;
    }
    let mut pos = 12;
    while let Some(id) = data.get(pos..pos + 4) {
        let size = u32_at(data.get(pos..pos + 8)?, 4) as usize;
        let body = pos + 8;
        let end = body.checked_add(size)?;
        if id == b"data" {
            return data.get(body..end);
        }
        pos = end + size % 2;
    }
    None
}

/// BLAKE3 hex digest of the `data` chunk body.
pub fn data_chunk_hash(data: &[u8]) -> Option<String> {
    data_chunk(data).map(|body| blake3::hash(body).to_hex().to_string())
}

/// Decodes the 16-bit PCM body as samples in `[-1, 1]`.
pub fn pcm16_samples(data: &[u8]) -> Vec<f64> {
    data[HEADER_LEN.min(data.len())..]
        .chunks_exact(2)
        .map(|b| i16::from_le_bytes([b[0], b[1]]) as f64 / 32767.0)
        .collect()
}
