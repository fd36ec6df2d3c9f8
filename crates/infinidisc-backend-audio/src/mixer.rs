//! Peak measurement and normalization.

/// Largest absolute sample value, or 0 for an empty buffer.
pub fn peak(samples: &[f64]) -> f64 {
    samples
        .iter()
        .map(|s| s.abs())
        .fold(0.0_f64, |a, b| a.max(b))
}

/// Scales `samples` so their peak equals `target`.
///
/// Buffers whose peak is at or below `floor` are left untouched, so
/// near-silence is never amplified. Returns the peak measured before scaling.
pub fn normalize(samples: &mut [f64], target: f64, floor: f64) -> f64 {
    let current_peak = peak(samples);
    if current_peak > floor {
        let gain = target / current_peak;
        for sample in samples.iter_mut() {
            *sample *= gain;
        }
    }
    current_peak
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak() {
        assert_eq!(peak(&[]), 0.0);
        assert_eq!(peak(&[0.1, -0.7, 0.3]), 0.7);
    }

    #[test]
    fn test_normalize_scales_to_target() {
        let mut samples = vec![0.5, -0.25, 0.1];
        let before = normalize(&mut samples, 0.92, 0.01);
        assert_eq!(before, 0.5);
        assert!((peak(&samples) - 0.92).abs() < 1e-12);
        assert!((samples[1] + 0.46).abs() < 1e-12);
    }

    #[test]
    fn test_quiet_buffer_is_untouched() {
        let original = vec![0.005, -0.01, 0.002];
        let mut samples = original.clone();
        let before = normalize(&mut samples, 0.92, 0.01);
        assert_eq!(before, 0.01);
        assert_eq!(samples, original);
    }
}
