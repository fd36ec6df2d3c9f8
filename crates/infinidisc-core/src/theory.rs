//! Scales and chord progressions used for synthesis pitch math.
//!
//! These tables are immutable. Synthesis draws a scale and a progression by
//! index, so the order of [`SCALES`] and [`CHORD_PROGRESSIONS`] is part of the
//! reproducibility contract.

use serde::{Deserialize, Serialize};

/// A named scale, stored as semitone offsets from a root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scale {
    /// Ionian major (7 notes).
    Major,
    /// Natural minor (7 notes).
    Minor,
    /// Major pentatonic (5 notes).
    Pentatonic,
    /// Minor blues (6 notes).
    Blues,
}

/// All scales in selection order.
pub const SCALES: [Scale; 4] = [Scale::Major, Scale::Minor, Scale::Pentatonic, Scale::Blues];

const MAJOR: &[i32] = &[0, 2, 4, 5, 7, 9, 11];
const MINOR: &[i32] = &[0, 2, 3, 5, 7, 8, 10];
const PENTATONIC: &[i32] = &[0, 2, 4, 7, 9];
const BLUES: &[i32] = &[0, 3, 5, 6, 7, 10];

impl Scale {
    /// Semitone offsets from the root, ascending.
    pub fn intervals(&self) -> &'static [i32] {
        match self {
            Scale::Major => MAJOR,
            Scale::Minor => MINOR,
            Scale::Pentatonic => PENTATONIC,
            Scale::Blues => BLUES,
        }
    }

    /// Number of notes in the scale.
    pub fn len(&self) -> usize {
        self.intervals().len()
    }

    /// Always false; every scale has notes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maps a scale degree to a semitone offset.
    ///
    /// Degrees wrap modulo the scale length without adding octaves, so degree
    /// 7 of a major scale is the root again.
    pub fn semitone(&self, degree: usize) -> i32 {
        let intervals = self.intervals();
        intervals[degree % intervals.len()]
    }

    /// Lowercase name of the scale.
    pub fn name(&self) -> &'static str {
        match self {
            Scale::Major => "major",
            Scale::Minor => "minor",
            Scale::Pentatonic => "pentatonic",
            Scale::Blues => "blues",
        }
    }
}

/// A progression of four scale degrees, one per bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChordProgression {
    /// Roman-numeral label.
    pub name: &'static str,
    /// Scale-degree shift of each chord root.
    pub degrees: [usize; 4],
}

impl ChordProgression {
    /// Returns the degree shift for a bar, wrapping around the progression.
    pub fn degree_at(&self, bar: usize) -> usize {
        self.degrees[bar % self.degrees.len()]
    }

    /// Number of chords in the progression.
    pub fn len(&self) -> usize {
        self.degrees.len()
    }

    /// Always false; every progression has chords.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// All progressions in selection order.
pub const CHORD_PROGRESSIONS: [ChordProgression; 4] = [
    ChordProgression {
        name: "I-IV-V-I",
        degrees: [0, 3, 4, 0],
    },
    ChordProgression {
        name: "I-vi-IV-V",
        degrees: [0, 5, 3, 4],
    },
    ChordProgression {
        name: "I-V-vi-IV",
        degrees: [0, 4, 5, 3],
    },
    ChordProgression {
        name: "I-IV-I-V",
        degrees: [0, 3, 0, 4],
    },
];

/// Convert a MIDI-style note number to frequency in Hz.
///
/// Uses the standard formula: f = 440 * 2^((n-69)/12). Notes outside the
/// MIDI range 0-127 are accepted.
///
/// ```
/// use infinidisc_core::theory::note_to_freq;
///
/// assert!((note_to_freq(69) - 440.0).abs() < 1e-9);
/// assert!((note_to_freq(60) - 261.626).abs() < 0.01);
/// ```
pub fn note_to_freq(note: i32) -> f64 {
    440.0 * 2.0_f64.powf((note as f64 - 69.0) / 12.0)
}
