//! Peak-frequency estimation
//!
//! Returns the frequency of the strongest bin in the magnitude spectrum of a
//! zero-padded segment. The estimate is quantised to the bin grid, so it is
//! accurate to within one bin width (`sample_rate / padded_len`).
//!
//! # Example
//!
//! ```
//! use auditory_dsp::features::spectrum::estimate_peak;
//!
//! let sample_rate = 8000;
//! let segment: Vec<f32> = (0..1024)
//!     .map(|i| (2.0 * std::f32::consts::PI * 1000.0 * i as f32 / sample_rate as f32).sin())
//!     .collect();
//!
//! let peak = estimate_peak(&segment, sample_rate)?;
//! assert!((peak - 1000.0).abs() < 1e-3);
//! # Ok::<(), auditory_dsp::AnalysisError>(())
//! ```

use super::fft::{compute_spectrum, compute_spectrum_with_len};
use super::PeakEstimate;
use crate::error::AnalysisError;

/// Estimate the dominant frequency of a segment in Hz
///
/// The result is always in `[0, sample_rate / 2]`. 0 Hz is a legitimate
/// answer for a segment with a strong DC offset or a fundamental below one
/// bin width.
///
/// An all-zero segment returns 0 Hz; that value carries no physical meaning.
/// Use [`estimate_peak_detailed`] to tell it apart through
/// [`PeakEstimate::degenerate`].
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the segment is empty, the sample
/// rate is 0, or any sample is NaN or infinite.
pub fn estimate_peak(segment: &[f32], sample_rate: u32) -> Result<f32, AnalysisError> {
    estimate_peak_detailed(segment, sample_rate).map(|peak| peak.frequency_hz)
}

/// Estimate the dominant frequency and report the bin it came from
///
/// # Errors
///
/// Same as [`estimate_peak`].
pub fn estimate_peak_detailed(
    segment: &[f32],
    sample_rate: u32,
) -> Result<PeakEstimate, AnalysisError> {
    let peak = compute_spectrum(segment, sample_rate)?.peak();
    log_peak(&peak);
    Ok(peak)
}

/// Estimate the dominant frequency using at least `fft_len` FFT points
///
/// Used when a batch of segments must share one frequency grid. The segment
/// is padded to `padded_fft_len(max(segment.len(), fft_len))`.
///
/// # Errors
///
/// Same as [`estimate_peak`].
pub fn estimate_peak_with_len(
    segment: &[f32],
    sample_rate: u32,
    fft_len: usize,
) -> Result<PeakEstimate, AnalysisError> {
    let peak = compute_spectrum_with_len(segment, sample_rate, fft_len)?.peak();
    log_peak(&peak);
    Ok(peak)
}

fn log_peak(peak: &PeakEstimate) {
    if peak.degenerate {
        log::warn!(
            "Spectrum is all zero (N={}), peak at 0 Hz is not meaningful",
            peak.padded_len
        );
    } else {
        log::debug!(
            "Peak at bin {} = {:.2} Hz (magnitude {:.4}, resolution {:.2} Hz)",
            peak.bin_index,
            peak.frequency_hz,
            peak.magnitude,
            peak.bin_width_hz
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::PI;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_short_440hz_segment() {
        // 100 samples pad to 128, bin width 44100 / 128 ≈ 344.5 Hz
        let segment = sine(440.0, 44100, 100);
        let peak = estimate_peak_detailed(&segment, 44100).unwrap();

        assert_eq!(peak.padded_len, 128);
        assert!(
            (peak.frequency_hz - 440.0).abs() <= 44100.0 / 128.0,
            "Peak should be within one bin of 440 Hz, got {:.2}",
            peak.frequency_hz
        );
        assert!(!peak.degenerate);
    }

    #[test]
    fn test_sine_within_one_bin() {
        let sample_rate = 44100;
        for &(freq, len) in &[
            (110.0, 4096),
            (261.63, 8000),
            (440.0, 2048),
            (1318.5, 3000),
            (5000.0, 512),
        ] {
            let peak = estimate_peak_detailed(&sine(freq, sample_rate, len), sample_rate).unwrap();
            assert!(
                (peak.frequency_hz - freq).abs() <= peak.bin_width_hz,
                "{} Hz over {} samples estimated as {:.2} Hz (bin width {:.2})",
                freq,
                len,
                peak.frequency_hz,
                peak.bin_width_hz
            );
        }
    }

    #[test]
    fn test_peak_within_nyquist() {
        // Alternating samples put all energy at Nyquist
        let segment: Vec<f32> = (0..64).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let peak = estimate_peak(&segment, 1000).unwrap();
        assert_eq!(peak, 500.0);

        let noisy: Vec<f32> = (0..777).map(|i| ((i * 7919) % 101) as f32 / 50.0 - 1.0).collect();
        let peak = estimate_peak(&noisy, 48000).unwrap();
        assert!((0.0..=24000.0).contains(&peak));
    }

    #[test]
    fn test_dc_offset_is_valid_peak() {
        let peak = estimate_peak_detailed(&[1.0, 1.0, 1.0, 1.0], 44100).unwrap();
        assert_eq!(peak.bin_index, 0);
        assert_eq!(peak.frequency_hz, 0.0);
        assert!(!peak.degenerate);
    }

    #[test]
    fn test_all_zero_segment_is_degenerate() {
        let peak = estimate_peak_detailed(&vec![0.0; 300], 44100).unwrap();
        assert_eq!(peak.bin_index, 0);
        assert_eq!(peak.frequency_hz, 0.0);
        assert!(peak.degenerate);
    }

    #[test]
    fn test_single_sample() {
        let peak = estimate_peak_detailed(&[0.3], 44100).unwrap();
        assert_eq!(peak.padded_len, 1);
        assert_eq!(peak.frequency_hz, 0.0);
    }

    #[test]
    fn test_power_of_two_not_padded_again() {
        let peak = estimate_peak_detailed(&sine(440.0, 44100, 1024), 44100).unwrap();
        assert_eq!(peak.padded_len, 1024);
    }

    #[test]
    fn test_common_length_refines_grid() {
        let segment = sine(440.0, 44100, 1000);
        let own = estimate_peak_with_len(&segment, 44100, 0).unwrap();
        let shared = estimate_peak_with_len(&segment, 44100, 16384).unwrap();

        assert_eq!(own.padded_len, 1024);
        assert_eq!(shared.padded_len, 16384);
        assert!(shared.bin_width_hz < own.bin_width_hz);
        assert!((shared.frequency_hz - 440.0).abs() <= shared.bin_width_hz);
    }

    #[test]
    fn test_empty_segment_is_invalid() {
        let result = estimate_peak(&[], 44100);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }

    #[test]
    fn test_invalid_sample_rate() {
        let result = estimate_peak(&[0.1, 0.2, 0.3], 0);
        assert!(matches!(result, Err(AnalysisError::InvalidInput(_))));
    }
}
