//! Likes estimation.
//!
//! Likes follow an exponential distribution whose mean is
//! `averageLikes + 0.1`, floored to an integer. The `+ 0.1` offset keeps the
//! rate finite at `averageLikes = 0` and is part of the observable
//! distribution.

use infinidisc_core::RandomSource;

/// Offset added to the requested average before inverting it into a rate.
pub const RATE_OFFSET: f64 = 0.1;

/// Draws a likes count from `stream` for the requested average.
///
/// Uses the inverse CDF of the exponential distribution:
/// `floor(-ln(1 - u) / rate)` with `rate = 1 / (average_likes + 0.1)`.
/// `u` lies in `[0, 1)`, so `1 - u` is in `(0, 1]` and the logarithm is
/// finite. NaN and negative intermediate values map to 0, and an infinite
/// draw saturates at `u64::MAX`.
pub fn estimate_likes<R: RandomSource + ?Sized>(stream: &mut R, average_likes: f64) -> u64 {
    let rate = 1.0 / (average_likes + RATE_OFFSET);
    let u = stream.next_f64();
    let draw = -(1.0 - u).ln() / rate;

    if draw.is_nan() || draw <= 0.0 {
        return 0;
    }
    if draw.is_infinite() {
        return u64::MAX;
    }
    draw.floor() as u64
}
