//! String-seeded random streams and seed key derivation.
//!
//! All randomness in infinidisc flows through this module to ensure
//! deterministic output. A derivation key string is hashed with BLAKE3 and the
//! first 8 bytes (little-endian) seed a PCG32 generator. Keys are built by
//! joining a base seed and label parts with [`KEY_SEPARATOR`], so every field
//! and media type of a record reads from its own independent stream.
//!
//! The algorithm is fixed: BLAKE3 key hash, `Pcg32::seed_from_u64`, and
//! `rand`'s standard `f64` sampling (53 random mantissa bits, `[0, 1)`).

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Separator placed between the base seed and each label part.
pub const KEY_SEPARATOR: char = '-';

/// A source of uniformly distributed values in `[0, 1)`.
///
/// Consumers depend on this trait rather than on [`RandomStream`] so that
/// tests can substitute scripted draws.
pub trait RandomSource {
    /// Returns the next value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns a uniform index in `0..len`.
    ///
    /// Computed as `floor(u * len)`, clamped so a draw can never reach `len`.
    /// `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "next_index requires a non-empty range");
        let idx = (self.next_f64() * len as f64).floor() as usize;
        idx.min(len.saturating_sub(1))
    }

    /// Returns `true` when the next draw is below `probability`.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// A deterministic stream of `f64` values initialized from a seed string.
#[derive(Debug, Clone)]
pub struct RandomStream {
    inner: Pcg32,
}

impl RandomStream {
    /// Creates a stream from an arbitrary seed string.
    pub fn from_seed(seed: &str) -> Self {
        let hash = blake3::hash(seed.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&hash.as_bytes()[0..8]);
        Self {
            inner: Pcg32::seed_from_u64(u64::from_le_bytes(bytes)),
        }
    }
}

impl RandomSource for RandomStream {
    #[inline]
    fn next_f64(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Builds the per-record base key, `"<userSeed>-<index>"`.
pub fn record_key(user_seed: &str, index: u64) -> String {
    format!("{}{}{}", user_seed, KEY_SEPARATOR, index)
}

/// Joins a base seed and label parts into a single derivation key.
///
/// # Example
/// ```
/// use infinidisc_core::seed::derive_key;
///
/// assert_eq!(derive_key("abc-0", &["likes", "5"]), "abc-0-likes-5");
/// assert_eq!(derive_key("abc-0", &[]), "abc-0");
/// ```
pub fn derive_key(base_seed: &str, labels: &[&str]) -> String {
    let extra: usize = labels.iter().map(|l| l.len() + 1).sum();
    let mut key = String::with_capacity(base_seed.len() + extra);
    key.push_str(base_seed);
    for label in labels {
        key.push(KEY_SEPARATOR);
        key.push_str(label);
    }
    key
}

/// Derives an independent random stream for `base_seed` and `labels`.
pub fn derive_stream(base_seed: &str, labels: &[&str]) -> RandomStream {
    RandomStream::from_seed(&derive_key(base_seed, labels))
}

/// Hashes a key into an unsigned 32-bit integer.
///
/// A rolling polynomial hash over the UTF-16 code units of `key`: the running
/// value is multiplied by 31, the code unit added, the result wrapped to a
/// signed 32-bit integer, and the absolute value of the final hash returned.
///
/// # Example
/// ```
/// use infinidisc_core::seed::hash_to_integer;
///
/// assert_eq!(hash_to_integer(""), 0);
/// assert_eq!(hash_to_integer("a"), 97);
/// assert_eq!(hash_to_integer("abc"), 96354);
/// ```
pub fn hash_to_integer(key: &str) -> u32 {
    let hash = key
        .encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32));
    hash.unsigned_abs()
}

/// Formats a float label the way the key scheme expects.
///
/// Integral values drop their fractional part (`5.0` becomes `"5"`), so keys
/// agree with the shortest round-trip rendering of the number.
pub fn float_label(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stream_determinism() {
        let mut a = RandomStream::from_seed("abc-0");
        let mut b = RandomStream::from_seed("abc-0");

        let values_a: Vec<f64> = (0..100).map(|_| a.next_f64()).collect();
        let values_b: Vec<f64> = (0..100).map(|_| b.next_f64()).collect();

        assert_eq!(values_a, values_b);
    }

    #[test]
    fn test_stream_range() {
        let mut stream = RandomStream::from_seed("range");
        for _ in 0..10_000 {
            let v = stream.next_f64();
            assert!((0.0..1.0).contains(&v), "value out of range: {}", v);
        }
    }

    #[test]
    fn test_different_labels_produce_different_sequences() {
        let mut title = derive_stream("abc-0", &["title"]);
        let mut artist = derive_stream("abc-0", &["artist"]);

        let values_title: Vec<f64> = (0..10).map(|_| title.next_f64()).collect();
        let values_artist: Vec<f64> = (0..10).map(|_| artist.next_f64()).collect();

        assert_ne!(values_title, values_artist);
    }

    #[test]
    fn test_short_numeric_seeds_are_independent() {
        // "1-2" and "12" differ only by the separator
        let mut a = derive_stream("1", &["2"]);
        let mut b = RandomStream::from_seed("12");
        assert_ne!(a.next_f64(), b.next_f64());

        let mut c = derive_stream(&record_key("7", 1), &["likes", "5"]);
        let mut d = derive_stream(&record_key("7", 1), &["likes", "5.5"]);
        assert_ne!(c.next_f64(), d.next_f64());
    }

    #[test]
    fn test_derive_key_layout() {
        assert_eq!(record_key("abc", 42), "abc-42");
        assert_eq!(derive_key("abc-42", &["audio"]), "abc-42-audio");
        assert_eq!(derive_key("", &["x"]), "-x");
    }

    #[test]
    fn test_hash_to_integer_matches_rolling_hash() {
        assert_eq!(hash_to_integer(""), 0);
        assert_eq!(hash_to_integer("a"), 97);
        assert_eq!(hash_to_integer("ab"), 97 * 31 + 98);
        assert_eq!(hash_to_integer("abc"), 96354);
        assert_eq!(hash_to_integer("abc-0"), hash_to_integer("abc-0"));
    }

    #[test]
    fn test_hash_to_integer_wraps_and_takes_absolute_value() {
        // Long inputs overflow i32 many times over; the result stays defined.
        let long = "the quick brown fox jumps over the lazy dog".repeat(8);
        let h = hash_to_integer(&long);
        assert_eq!(h, hash_to_integer(&long));

        let signed = long
            .encode_utf16()
            .fold(0i32, |acc, u| acc.wrapping_mul(31).wrapping_add(u as i32));
        assert_eq!(h, signed.unsigned_abs());
    }

    #[test]
    fn test_hash_to_integer_uses_utf16_units() {
        // U+00FC is a single UTF-16 unit with value 252
        assert_eq!(hash_to_integer("\u{fc}"), 252);
    }

    #[test]
    fn test_float_label() {
        assert_eq!(float_label(5.0), "5");
        assert_eq!(float_label(5.5), "5.5");
        assert_eq!(float_label(0.0), "0");
    }

    #[test]
    fn test_next_index_bounds() {
        struct Fixed(f64);
        impl RandomSource for Fixed {
            fn next_f64(&mut self) -> f64 {
                self.0
            }
        }

        assert_eq!(Fixed(0.0).next_index(4), 0);
        assert_eq!(Fixed(0.2499).next_index(4), 0);
        assert_eq!(Fixed(0.25).next_index(4), 1);
        assert_eq!(Fixed(0.999_999_999).next_index(4), 3);
        assert!(Fixed(0.29).chance(0.3));
        assert!(!Fixed(0.3).chance(0.3));
    }

    #[test]
    fn test_create_rng_determinism() {
        let mut a = create_rng(42);
        let mut b = create_rng(42);
        let va: Vec<u32> = (0..10).map(|_| a.gen()).collect();
        let vb: Vec<u32> = (0..10).map(|_| b.gen()).collect();
        assert_eq!(va, vb);
    }
}
