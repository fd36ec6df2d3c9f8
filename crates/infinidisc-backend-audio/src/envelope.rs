//! Amplitude envelopes.
//!
//! Both envelopes are functions of a note's local age in `[0, 1)`: the time
//! since the note started divided by its length.

/// Fraction of a chord spent in the linear attack.
pub const CHORD_ATTACK: f64 = 0.08;
/// Exponent of the chord decay curve.
pub const CHORD_DECAY_POWER: f64 = 3.2;
/// Exponent of the arpeggio pluck decay.
pub const PLUCK_DECAY_POWER: f64 = 4.5;
/// Peak level of the arpeggio pluck.
pub const PLUCK_LEVEL: f64 = 1.4;

/// Position of `t` within the current note of length `duration`, in `[0, 1)`.
#[inline]
pub fn local_age(t: f64, duration: f64) -> f64 {
    (t % duration) / duration
}

/// Chord envelope: linear rise over the first 8% combined with a power decay.
#[inline]
pub fn chord(age: f64) -> f64 {
    let attack = if age < CHORD_ATTACK {
        age / CHORD_ATTACK
    } else {
        1.0
    };
    (1.0 - age).powf(CHORD_DECAY_POWER) * attack
}

/// Pluck envelope: instant attack followed by a steep power decay.
#[inline]
pub fn pluck(age: f64) -> f64 {
    (1.0 - age).powf(PLUCK_DECAY_POWER) * PLUCK_LEVEL
}
