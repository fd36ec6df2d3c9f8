//! Header writing and PCM conversion.

use std::io::{self, Write};

use super::format::{WavFormat, BLOCK_ALIGN, FMT_CHUNK_LEN};
use crate::error::{AudioError, AudioResult};

/// Size of the RIFF/WAVE header in bytes.
pub const HEADER_LEN: usize = 44;

/// Writes a complete WAV file to a writer.
///
/// The caller guarantees that `pcm_data` fits a RIFF chunk; [`encode`] checks
/// this before calling.
pub fn write_wav<W: Write>(writer: &mut W, format: &WavFormat, pcm_data: &[u8]) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // everything after the RIFF size field

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(b"WAVE")?;

    writer.write_all(b"fmt ")?;
    writer.write_all(&FMT_CHUNK_LEN.to_le_bytes())?;
    writer.write_all(&format.fmt_payload())?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_all(&data_size.to_le_bytes())?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Converts samples to 16-bit little-endian PCM.
///
/// Each sample is clamped to `[-1, 1]`, scaled by 32767 and floored. NaN
/// samples encode as silence.
pub fn samples_to_pcm16(samples: &[f64]) -> Vec<u8> {
    let mut pcm = Vec::with_capacity(samples.len() * 2);
    for &sample in samples {
        let clipped = if sample.is_nan() {
            0.0
        } else {
            sample.clamp(-1.0, 1.0)
        };
        let value = (clipped * 32767.0).floor() as i16;
        pcm.extend_from_slice(&value.to_le_bytes());
    }
    pcm
}

/// Encodes mono samples as a WAV file.
pub fn encode(samples: &[f64], sample_rate: u32) -> AudioResult<Vec<u8>> {
    let format = WavFormat::mono(sample_rate)?;
    let fits = samples
        .len()
        .checked_mul(BLOCK_ALIGN as usize)
        .and_then(|size| u32::try_from(size).ok())
        .and_then(|size| size.checked_add(36))
        .is_some();
    if !fits {
        return Err(AudioError::DataTooLarge {
            samples: samples.len(),
        });
    }

    let pcm = samples_to_pcm16(samples);
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm.len());
    write_wav(&mut buffer, &format, &pcm)?;
    Ok(buffer)
}
