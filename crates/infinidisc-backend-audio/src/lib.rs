//! infinidisc audio backend.
//!
//! Renders the short instrumental loop attached to each catalog record and
//! encodes it as a mono 16-bit WAV file.
//!
//! # Determinism
//!
//! A loop is a pure function of its seed string: the musical parameters are
//! drawn from a [`RandomStream`](infinidisc_core::RandomStream) seeded with it
//! and everything after that is arithmetic on the sample index. Equal seeds
//! produce equal sample buffers and byte-identical WAV files.
//!
//! # Example
//!
//! ```no_run
//! use infinidisc_backend_audio::{encode, synthesize};
//!
//! let buffer = synthesize("abc-0-audio");
//! let wav = encode(&buffer.samples, buffer.sample_rate).unwrap();
//! assert_eq!(wav.len(), 44 + 617_400 * 2);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - entry points ([`synthesize`], [`render_audio`])
//! - [`params`] - musical parameters drawn per seed
//! - [`synthesis`] - pad and arpeggio voices
//! - [`oscillator`], [`envelope`] - waveform and amplitude primitives
//! - [`effects`] - feedback delay
//! - [`mixer`] - peak normalization
//! - [`wav`] - deterministic WAV encoder

pub mod config;
pub mod effects;
pub mod envelope;
pub mod error;
pub mod generate;
pub mod mixer;
pub mod oscillator;
pub mod params;
pub mod synthesis;
pub mod wav;

pub use config::SynthConfig;
pub use error::{AudioError, AudioResult};
pub use generate::{audio_seed, render_audio, synthesize, synthesize_with, SampleBuffer};
pub use params::MusicalParams;
pub use wav::{encode, AudioClip, WavFormat};
