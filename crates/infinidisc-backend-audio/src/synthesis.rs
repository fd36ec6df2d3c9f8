//! Pad and arpeggio voices.
//!
//! [`Voices`] evaluates the dry signal at an absolute time. Every value is a
//! pure function of `t` and the loop's [`MusicalParams`], so the dry buffer
//! can be rendered in any order.

use infinidisc_core::theory::note_to_freq;

use crate::envelope::{self, local_age};
use crate::oscillator::{self, phase_at};
use crate::params::MusicalParams;

/// Scale-degree offsets of the pad chord: root, third, fifth and the
/// degree seven steps up.
pub const CHORD_VOICING: [usize; 4] = [0, 2, 4, 7];
/// Level of each pad voice.
pub const CHORD_VOICE_GAIN: f64 = 0.18;
/// Level of the arpeggio.
pub const ARP_GAIN: f64 = 0.25;
/// Semitones between the pad root and the arpeggio register.
pub const ARP_REGISTER: i32 = 12;
/// Extra octave applied on every third step, starting with the second.
pub const ARP_OCTAVE_JUMP: i32 = 12;

/// The two voices of a loop.
#[derive(Debug, Clone, Copy)]
pub struct Voices {
    params: MusicalParams,
    chord_duration: f64,
    arp_duration: f64,
}

impl Voices {
    /// Prepares the voices for `params`.
    pub fn new(params: MusicalParams) -> Self {
        Self {
            params,
            chord_duration: params.chord_duration(),
            arp_duration: params.arp_duration(),
        }
    }

    /// Musical parameters the voices play.
    pub fn params(&self) -> &MusicalParams {
        &self.params
    }

    /// Pad chord at time `t`.
    pub fn chord(&self, t: f64) -> f64 {
        let bar = (t / self.chord_duration).floor() as usize;
        let shift = self.params.progression.degree_at(bar);
        let env = envelope::chord(local_age(t, self.chord_duration));

        let mut mix = 0.0;
        for degree in CHORD_VOICING {
            let note = self.params.scale.semitone(shift + degree);
            let phase = phase_at(t, note_to_freq(self.params.root + note));
            mix += oscillator::pad(phase) * env * CHORD_VOICE_GAIN;
        }
        mix
    }

    /// MIDI note of the arpeggio step containing time `t`.
    pub fn arp_note(&self, t: f64) -> i32 {
        let step = (t / self.arp_duration).floor() as usize;
        let degree = step * 3 + step / 4;
        let jump = if step % 3 == 1 { ARP_OCTAVE_JUMP } else { 0 };
        self.params.root + ARP_REGISTER + self.params.scale.semitone(degree) + jump
    }

    /// Arpeggio at time `t`.
    pub fn arpeggio(&self, t: f64) -> f64 {
        let phase = phase_at(t, note_to_freq(self.arp_note(t)));
        let env = envelope::pluck(local_age(t, self.arp_duration));
        oscillator::sine(phase) * env * ARP_GAIN
    }

    /// Pad plus arpeggio at time `t`.
    pub fn dry(&self, t: f64) -> f64 {
        self.chord(t) + self.arpeggio(t)
    }
}
