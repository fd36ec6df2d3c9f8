//! infinidisc End-to-End Test Infrastructure
//!
//! Cross-crate checks of the catalog's observable guarantees:
//!
//! - **Determinism**: equal inputs give byte-identical records, WAV and PNG files
//! - **Field independence**: `averageLikes` only ever changes `likes`
//! - **Format**: WAV headers are decoded independently of the encoder
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p infinidisc-tests
//! ```

pub mod determinism;
pub mod wav_header;
