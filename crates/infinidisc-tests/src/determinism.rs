//! Repeat-and-compare checks for generated media.
//!
//! A generator closure is invoked several times; every output must match the
//! first one byte for byte. On success the caller gets a [`Fingerprint`] of
//! the output, on failure a [`Divergence`] saying where the runs split.

use thiserror::Error;

/// Length and BLAKE3 digest of a repeatable output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fingerprint {
    pub len: usize,
    pub hash: String,
}

impl Fingerprint {
    pub fn of(bytes: &[u8]) -> Self {
        Self {
            len: bytes.len(),
            hash: blake3::hash(bytes).to_hex().to_string(),
        }
    }
}

/// Where a later run stopped matching the first.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Divergence {
    #[error("run {run}: byte {offset} was 0x{actual:02X}, first run had 0x{expected:02X}")]
    Byte {
        run: usize,
        offset: usize,
        expected: u8,
        actual: u8,
    },
    #[error("run {run}: produced {actual} bytes, first run had {expected}")]
    Length {
        run: usize,
        expected: usize,
        actual: usize,
    },
}

impl Divergence {
    /// Index of the run that diverged (the first run is 0).
    pub fn run(&self) -> usize {
        match self {
            Divergence::Byte { run, .. } | Divergence::Length { run, .. } => *run,
        }
    }
}

/// Compares one later output against the first.
///
/// A differing byte inside the common prefix wins over a length mismatch.
pub fn compare(expected: &[u8], actual: &[u8], run: usize) -> Result<(), Divergence> {
    if let Some(offset) = expected.iter().zip(actual).position(|(e, a)| e != a) {
        return Err(Divergence::Byte {
            run,
            offset,
            expected: expected[offset],
            actual: actual[offset],
        });
    }
    if expected.len() != actual.len() {
        return Err(Divergence::Length {
            run,
            expected: expected.len(),
            actual: actual.len(),
        });
    }
    Ok(())
}

/// Calls `generate` `runs` times (at least twice) and requires equal bytes.
pub fn check_repeatable<F, O>(runs: usize, generate: F) -> Result<Fingerprint, Divergence>
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    let first = generate();
    let first = first.as_ref();
    for run in 1..runs.max(2) {
        compare(first, generate().as_ref(), run)?;
    }
    Ok(Fingerprint::of(first))
}

/// Declares a `#[test]` that renders `$generate` three times and panics on
/// the first divergence. The expression must evaluate to `AsRef<[u8]>`.
#[macro_export]
macro_rules! test_determinism {
    ($name:ident, $generate:expr) => {
        #[test]
        fn $name() {
            if let Err(divergence) = $crate::determinism::check_repeatable(3, || $generate) {
                panic!("{} is not repeatable: {}", stringify!($name), divergence);
            }
        }
    };
}
