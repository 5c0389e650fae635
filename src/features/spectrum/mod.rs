//! Spectral analysis modules
//!
//! Turn a segment of samples into a frequency estimate:
//! - Zero-padding to power-of-two FFT lengths
//! - One-sided magnitude spectrum
//! - Peak-frequency estimation
//! - Harmonic partial search

pub mod fft;
pub mod harmonics;
pub mod padding;
pub mod peak;

use serde::{Deserialize, Serialize};

pub use fft::{compute_spectrum, compute_spectrum_with_len, Spectrum};
pub use harmonics::{find_harmonic_peaks, HarmonicConfig};
pub use padding::{padded_fft_len, zero_pad};
pub use peak::{estimate_peak, estimate_peak_detailed, estimate_peak_with_len};

/// Result of a peak-frequency search
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PeakEstimate {
    /// Peak frequency in Hz (`bin_index * sample_rate / padded_len`)
    pub frequency_hz: f32,

    /// Index of the strongest bin (first one on ties)
    pub bin_index: usize,

    /// Magnitude of the strongest bin
    pub magnitude: f32,

    /// Frequency resolution in Hz
    pub bin_width_hz: f32,

    /// FFT length after zero-padding
    pub padded_len: usize,

    /// Spectrum was all zero
    ///
    /// The reported peak is then bin 0 and says nothing about the signal.
    pub degenerate: bool,
}
