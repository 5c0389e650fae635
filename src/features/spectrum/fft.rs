//! Magnitude spectrum of a zero-padded segment
//!
//! # Algorithm
//!
//! 1. Validate the segment (non-empty, finite samples, sample rate > 0)
//! 2. Zero-pad to the next power of two (or a caller-supplied common length)
//! 3. Forward FFT of the padded real signal
//! 4. Keep the non-negative frequency bins `0..=N/2` and take their magnitude
//!
//! Bin `k` sits at `k * sample_rate / N` Hz, so the last bin is exactly the
//! Nyquist frequency.

use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::padding::{padded_fft_len, zero_pad};
use super::PeakEstimate;
use crate::error::AnalysisError;

/// One-sided magnitude spectrum
///
/// Holds `floor(N/2) + 1` magnitudes for an FFT of length `N`, in ascending
/// frequency order. Every magnitude is `>= 0`. Only built by
/// [`compute_spectrum`] and [`compute_spectrum_with_len`].
#[derive(Debug, Clone, PartialEq)]
pub struct Spectrum {
    magnitudes: Vec<f32>,
    padded_len: usize,
    sample_rate: u32,
}

impl Spectrum {
    /// Number of bins (`floor(padded_len / 2) + 1`)
    pub fn len(&self) -> usize {
        self.magnitudes.len()
    }

    /// Always false: a spectrum has at least the DC bin
    pub fn is_empty(&self) -> bool {
        self.magnitudes.is_empty()
    }

    /// FFT length the segment was padded to
    pub fn padded_len(&self) -> usize {
        self.padded_len
    }

    /// Sample rate of the source segment in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Bin magnitudes, DC first
    pub fn magnitudes(&self) -> &[f32] {
        &self.magnitudes
    }

    /// Frequency resolution in Hz (`sample_rate / padded_len`)
    pub fn bin_width_hz(&self) -> f32 {
        if self.padded_len == 0 {
            return 0.0;
        }
        self.sample_rate as f32 / self.padded_len as f32
    }

    /// Centre frequency of `bin` in Hz
    pub fn frequency_of(&self, bin: usize) -> f32 {
        bin as f32 * self.bin_width_hz()
    }

    /// Centre frequencies of all bins, ascending
    pub fn frequencies(&self) -> Vec<f32> {
        (0..self.len()).map(|bin| self.frequency_of(bin)).collect()
    }

    /// Largest bin magnitude
    pub fn max_magnitude(&self) -> f32 {
        self.magnitudes.iter().copied().fold(0.0f32, f32::max)
    }

    /// Index of the largest magnitude, first occurrence on ties
    pub fn peak_bin(&self) -> usize {
        let mut best_bin = 0;
        let mut best_magnitude = f32::NEG_INFINITY;

        for (bin, &magnitude) in self.magnitudes.iter().enumerate() {
            if magnitude > best_magnitude {
                best_bin = bin;
                best_magnitude = magnitude;
            }
        }

        best_bin
    }

    /// Bin whose centre frequency is closest to `frequency_hz`
    ///
    /// Lower bin wins when two bins are equally close.
    pub fn nearest_bin(&self, frequency_hz: f32) -> usize {
        let mut best_bin = 0;
        let mut best_distance = f32::INFINITY;

        for bin in 0..self.len() {
            let distance = (self.frequency_of(bin) - frequency_hz).abs();
            if distance < best_distance {
                best_bin = bin;
                best_distance = distance;
            }
        }

        best_bin
    }

    /// Peak search over this spectrum
    ///
    /// A spectrum whose magnitudes are all zero still reports bin 0, flagged
    /// as [`PeakEstimate::degenerate`].
    pub fn peak(&self) -> PeakEstimate {
        let bin_index = self.peak_bin();
        let magnitude = self.magnitudes.get(bin_index).copied().unwrap_or(0.0);

        PeakEstimate {
            frequency_hz: self.frequency_of(bin_index),
            bin_index,
            magnitude,
            bin_width_hz: self.bin_width_hz(),
            padded_len: self.padded_len,
            degenerate: magnitude <= 0.0,
        }
    }
}

/// Reject segments the transform cannot give a meaningful answer for
pub(crate) fn validate_segment(segment: &[f32], sample_rate: u32) -> Result<(), AnalysisError> {
    if segment.is_empty() {
        return Err(AnalysisError::InvalidInput("Empty segment".to_string()));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    if let Some(index) = segment.iter().position(|s| !s.is_finite()) {
        return Err(AnalysisError::InvalidInput(format!(
            "Non-finite sample at index {}: {}",
            index, segment[index]
        )));
    }

    Ok(())
}

/// Compute the magnitude spectrum of a segment
///
/// The segment is padded to the next power of two of its own length.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` for an empty segment, a zero sample
/// rate, or NaN/infinite samples.
pub fn compute_spectrum(segment: &[f32], sample_rate: u32) -> Result<Spectrum, AnalysisError> {
    compute_spectrum_with_len(segment, sample_rate, 0)
}

/// Compute the magnitude spectrum using at least `fft_len` points
///
/// The FFT length is `padded_fft_len(max(segment.len(), fft_len))`, which lets
/// a batch of segments share one frequency grid. `fft_len = 0` behaves like
/// [`compute_spectrum`].
///
/// # Errors
///
/// Same as [`compute_spectrum`].
pub fn compute_spectrum_with_len(
    segment: &[f32],
    sample_rate: u32,
    fft_len: usize,
) -> Result<Spectrum, AnalysisError> {
    log::debug!(
        "Computing spectrum: {} samples at {} Hz, min FFT length {}",
        segment.len(),
        sample_rate,
        fft_len
    );

    validate_segment(segment, sample_rate)?;

    let padded_len = padded_fft_len(segment.len().max(fft_len));
    let mut buffer: Vec<Complex<f32>> = zero_pad(segment, padded_len)
        .into_iter()
        .map(|s| Complex::new(s, 0.0))
        .collect();

    let mut planner = FftPlanner::new();
    let fft = planner.plan_fft_forward(padded_len);
    fft.process(&mut buffer);

    let magnitudes: Vec<f32> = buffer[..padded_len / 2 + 1]
        .iter()
        .map(|c| c.norm())
        .collect();

    Ok(Spectrum {
        magnitudes,
        padded_len,
        sample_rate,
    })
}
