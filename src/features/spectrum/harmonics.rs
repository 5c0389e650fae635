//! Harmonic partial search
//!
//! Given a detected fundamental, look for energy at its integer multiples.
//!
//! # Algorithm
//!
//! 1. Normalise magnitudes so the strongest bin is 1.0
//! 2. For k = 2..=num_peaks, take the bin nearest `k * fundamental`
//! 3. Stop once the target passes the highest bin frequency
//! 4. Accept the bin if it lies within `rel_tol * target` of the target and its
//!    normalised magnitude reaches `threshold`
//!
//! Partials that fail the test are skipped, not replaced, so the result may
//! have gaps (e.g. `[f, 3f]` for a square-like tone).

use super::fft::Spectrum;

/// Harmonic search parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicConfig {
    /// Highest partial number to look for, fundamental included (default: 4)
    pub num_peaks: usize,

    /// Minimum magnitude relative to the spectrum maximum (default: 0.001)
    pub threshold: f32,

    /// Allowed distance from the ideal partial, relative to its frequency (default: 0.05)
    pub rel_tol: f32,
}

impl Default for HarmonicConfig {
    fn default() -> Self {
        Self {
            num_peaks: 4,
            threshold: 0.001,
            rel_tol: 0.05,
        }
    }
}

/// Find harmonic partials of `fundamental_hz` in a spectrum
///
/// # Returns
///
/// Frequencies of the accepted partials in Hz, starting with the fundamental
/// itself. A non-positive fundamental or an all-zero spectrum returns just the
/// fundamental.
///
/// # Example
///
/// ```
/// use auditory_dsp::features::spectrum::{compute_spectrum, find_harmonic_peaks, HarmonicConfig};
///
/// let sr = 8000;
/// let tone: Vec<f32> = (0..1024)
///     .map(|i| {
///         let t = i as f32 / sr as f32;
///         let w = 2.0 * std::f32::consts::PI * 500.0 * t;
///         w.sin() + 0.5 * (2.0 * w).sin()
///     })
///     .collect();
///
/// let spectrum = compute_spectrum(&tone, sr)?;
/// let partials = find_harmonic_peaks(&spectrum, 500.0, HarmonicConfig::default());
/// assert_eq!(&partials[..2], &[500.0, 1000.0]);
/// # Ok::<(), auditory_dsp::AnalysisError>(())
/// ```
pub fn find_harmonic_peaks(
    spectrum: &Spectrum,
    fundamental_hz: f32,
    config: HarmonicConfig,
) -> Vec<f32> {
    log::debug!(
        "Searching {} partials of {:.2} Hz (threshold={}, rel_tol={})",
        config.num_peaks,
        fundamental_hz,
        config.threshold,
        config.rel_tol
    );

    let mut peaks = vec![fundamental_hz];

    let max_magnitude = spectrum.max_magnitude();
    if fundamental_hz <= 0.0 || max_magnitude <= 0.0 {
        return peaks;
    }

    let highest_hz = spectrum.frequency_of(spectrum.len() - 1);
    let magnitudes = spectrum.magnitudes();

    for k in 2..=config.num_peaks {
        let target = k as f32 * fundamental_hz;
        if target > highest_hz {
            break;
        }

        let bin = spectrum.nearest_bin(target);
        let bin_hz = spectrum.frequency_of(bin);
        let normalized = magnitudes[bin] / max_magnitude;

        if (bin_hz - target).abs() <= config.rel_tol * target && normalized >= config.threshold {
            peaks.push(bin_hz);
        }
    }

    log::debug!("Found {} partials: {:?}", peaks.len(), peaks);
    peaks
}
