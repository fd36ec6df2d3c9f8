//! Waveform primitives.
//!
//! Oscillators here are stateless: the phase is computed directly from the
//! absolute time, so any sample can be evaluated without rendering the ones
//! before it.

use std::f64::consts::PI;

/// 2π.
pub const TWO_PI: f64 = 2.0 * PI;

/// Weight of the sine component in the pad waveform.
pub const PAD_SINE_WEIGHT: f64 = 0.55;
/// Weight of the square component in the pad waveform.
pub const PAD_SQUARE_WEIGHT: f64 = 0.2;

/// Phase in radians of a tone at `freq` Hz after `t` seconds.
#[inline]
pub fn phase_at(t: f64, freq: f64) -> f64 {
    t * freq * 2.0 * PI
}

/// Sine of a phase.
#[inline]
pub fn sine(phase: f64) -> f64 {
    phase.sin()
}

/// Naive square wave: +1 for the first half of each cycle, -1 for the second.
#[inline]
pub fn square(phase: f64) -> f64 {
    if phase % TWO_PI < PI {
        1.0
    } else {
        -1.0
    }
}

/// Sine blended with a quieter square, used by the chord pad.
#[inline]
pub fn pad(phase: f64) -> f64 {
    sine(phase) * PAD_SINE_WEIGHT + square(phase) * PAD_SQUARE_WEIGHT
}
