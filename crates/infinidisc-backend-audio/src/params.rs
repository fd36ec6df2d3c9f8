//! Musical parameters of a loop.
//!
//! Parameters are drawn once per seed, in a fixed order: scale, root, tempo,
//! progression. Reordering the draws changes every generated loop.

use infinidisc_core::{ChordProgression, RandomSource, Scale, CHORD_PROGRESSIONS, SCALES};

/// Lowest root note (MIDI C3).
pub const ROOT_BASE: i32 = 48;
/// Number of possible root notes above [`ROOT_BASE`].
pub const ROOT_SPAN: usize = 20;
/// Slowest tempo in BPM.
pub const TEMPO_BASE: u32 = 78;
/// Number of possible tempos above [`TEMPO_BASE`].
pub const TEMPO_SPAN: usize = 55;

/// Beats per chord.
pub const BEATS_PER_CHORD: f64 = 4.0;
/// Arpeggio steps per beat.
pub const ARP_STEPS_PER_BEAT: f64 = 3.0;

/// The fixed musical choices of one loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MusicalParams {
    /// Scale used by both layers.
    pub scale: Scale,
    /// Root note in MIDI units.
    pub root: i32,
    /// Tempo in beats per minute.
    pub tempo: u32,
    /// Chord progression of the pad layer.
    pub progression: ChordProgression,
}

impl MusicalParams {
    /// Draws the parameters from `stream`.
    pub fn draw<R: RandomSource + ?Sized>(stream: &mut R) -> Self {
        let scale = SCALES[stream.next_index(SCALES.len())];
        let root = ROOT_BASE + stream.next_index(ROOT_SPAN) as i32;
        let tempo = TEMPO_BASE + stream.next_index(TEMPO_SPAN) as u32;
        let progression = CHORD_PROGRESSIONS[stream.next_index(CHORD_PROGRESSIONS.len())];
        Self {
            scale,
            root,
            tempo,
            progression,
        }
    }

    /// Length of one beat in seconds.
    pub fn beat_duration(&self) -> f64 {
        60.0 / self.tempo as f64
    }

    /// Length of one chord in seconds.
    pub fn chord_duration(&self) -> f64 {
        self.beat_duration() * BEATS_PER_CHORD
    }

    /// Length of one arpeggio step in seconds.
    pub fn arp_duration(&self) -> f64 {
        self.beat_duration() / ARP_STEPS_PER_BEAT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use infinidisc_core::RandomStream;

    struct Fixed(f64);

    impl RandomSource for Fixed {
        fn next_f64(&mut self) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_lowest_draws() {
        let params = MusicalParams::draw(&mut Fixed(0.0));
        assert_eq!(params.scale, Scale::Major);
        assert_eq!(params.root, 48);
        assert_eq!(params.tempo, 78);
        assert_eq!(params.progression, CHORD_PROGRESSIONS[0]);
    }

    #[test]
    fn test_highest_draws() {
        let params = MusicalParams::draw(&mut Fixed(0.999_999));
        assert_eq!(params.scale, Scale::Blues);
        assert_eq!(params.root, 67);
        assert_eq!(params.tempo, 132);
        assert_eq!(params.progression, CHORD_PROGRESSIONS[3]);
    }

    #[test]
    fn test_durations() {
        let params = MusicalParams {
            tempo: 120,
            ..MusicalParams::draw(&mut Fixed(0.0))
        };
        assert_eq!(params.beat_duration(), 0.5);
        assert_eq!(params.chord_duration(), 2.0);
        assert!((params.arp_duration() - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_draw_is_deterministic() {
        let a = MusicalParams::draw(&mut RandomStream::from_seed("abc-0-audio"));
        let b = MusicalParams::draw(&mut RandomStream::from_seed("abc-0-audio"));
        assert_eq!(a, b);
        assert!((48..68).contains(&a.root));
        assert!((78..133).contains(&a.tempo));
    }
}
