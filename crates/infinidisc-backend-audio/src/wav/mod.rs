//! Deterministic WAV encoder.
//!
//! Writes the canonical 44-byte RIFF/WAVE header followed by 16-bit
//! little-endian PCM. Nothing time- or host-dependent is written, so equal
//! sample buffers always encode to equal bytes.

mod format;
mod result;
mod writer;


pub use format::WavFormat;
pub use result::AudioClip;
pub use writer::{encode, samples_to_pcm16, write_wav, HEADER_LEN};
