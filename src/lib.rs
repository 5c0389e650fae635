//! # Auditory DSP
//!
//! Note extraction from recorded audio by spectral peak-picking.
//!
//! ## Features
//!
//! - **Peak-Frequency Estimation**: argmax of the magnitude spectrum of a zero-padded segment
//! - **Segmentation**: cut a clip into notes from a list of time splits
//! - **Note Naming**: nearest equal-tempered note with cents deviation
//! - **Melody/Bass Split**: classify notes by a pitch threshold
//! - **Harmonics**: locate integer partials of each detected fundamental
//!
//! ## Quick Start
//!
//! ```no_run
//! use auditory_dsp::{analyze_segments, AnalysisConfig, TimeSplit};
//!
//! // Load audio samples (mono, f32, normalized)
//! let samples: Vec<f32> = vec![]; // Your audio data
//! let sample_rate = 44100;
//! let splits = vec![TimeSplit::new(0.0, 0.5), TimeSplit::new(0.5, 1.0)];
//!
//! // Analyze
//! let result = analyze_segments(&samples, sample_rate, &splits, AnalysisConfig::default())?;
//!
//! for note in result.melody() {
//!     println!("{:.2} Hz: {:?}", note.frequency_hz(), note.note);
//! }
//! # Ok::<(), auditory_dsp::AnalysisError>(())
//! ```
//!
//! ## Architecture
//!
//! The analysis pipeline follows this flow:
//!
//! ```text
//! Samples → Segmentation → Zero-padding → FFT → Peak Bin → Note Naming → Output
//! ```
//!
//! A single segment can be analysed directly with
//! [`estimate_peak`](features::spectrum::estimate_peak).

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod features;
pub mod preprocessing;

// Re-export main types
pub use analysis::batch::find_peak_frequencies;
pub use analysis::metadata::{AnalysisFlag, AnalysisMetadata};
pub use analysis::report::format_note_table;
pub use analysis::result::{NoteAnalysis, SegmentNote};
pub use config::AnalysisConfig;
pub use error::AnalysisError;
pub use features::notes::{NoteName, Voice};
pub use features::spectrum::{estimate_peak, estimate_peak_detailed, zero_pad, PeakEstimate};
pub use preprocessing::segmentation::TimeSplit;

use features::spectrum::padded_fft_len;

/// Main analysis function
///
/// Splits the samples at the given times, estimates the peak frequency of
/// every segment and names the resulting notes.
///
/// # Arguments
///
/// * `samples` - Mono audio samples
/// * `sample_rate` - Sample rate in Hz (typically 44100 or 48000)
/// * `splits` - Start and end time of each note
/// * `config` - Analysis configuration parameters
///
/// # Returns
///
/// `NoteAnalysis` with one `SegmentNote` per non-empty segment. Splits that
/// miss the audio are reported as `AnalysisFlag::EmptySegment`; all-zero
/// segments as `AnalysisFlag::DegenerateSpectrum`.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the samples are empty or contain
/// NaN/infinite values anywhere in the clip, the sample rate is 0, no split
/// overlaps the audio, a split is malformed, or the configuration holds a
/// non-positive reference pitch.
///
/// # Example
///
/// ```
/// use auditory_dsp::{analyze_segments, AnalysisConfig, TimeSplit};
///
/// let sample_rate = 8000;
/// let samples: Vec<f32> = (0..8000)
///     .map(|i| (2.0 * std::f32::consts::PI * 440.0 * i as f32 / sample_rate as f32).sin())
///     .collect();
///
/// let result = analyze_segments(&samples, sample_rate, &[TimeSplit::new(0.0, 1.0)], AnalysisConfig::default())?;
/// assert_eq!(result.notes[0].note.as_ref().unwrap().label(), "A4");
/// # Ok::<(), auditory_dsp::AnalysisError>(())
/// ```
pub fn analyze_segments(
    samples: &[f32],
    sample_rate: u32,
    splits: &[TimeSplit],
    config: AnalysisConfig,
) -> Result<NoteAnalysis, AnalysisError> {
    use std::time::Instant;
    let start_time = Instant::now();

    log::debug!(
        "Starting note extraction: {} samples at {} Hz, {} splits",
        samples.len(),
        sample_rate,
        splits.len()
    );

    if samples.is_empty() {
        return Err(AnalysisError::InvalidInput("Empty audio samples".to_string()));
    }

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput("Invalid sample rate".to_string()));
    }

    if let Some(index) = samples.iter().position(|s| !s.is_finite()) {
        return Err(AnalysisError::InvalidInput(format!(
            "Non-finite sample at index {}: {}",
            index, samples[index]
        )));
    }

    if !(config.reference_a4_hz.is_finite() && config.reference_a4_hz > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid reference pitch: {} Hz",
            config.reference_a4_hz
        )));
    }

    // 1. Segmentation
    use preprocessing::segmentation::split_into_segments;
    let segments = split_into_segments(samples, sample_rate, splits)?;

    let mut flags = Vec::new();
    let mut non_empty = Vec::with_capacity(segments.len());
    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() {
            log::warn!("Segment {} is empty, skipping", index + 1);
            flags.push(AnalysisFlag::EmptySegment(index));
        } else {
            non_empty.push((index, *segment));
        }
    }

    if non_empty.is_empty() {
        return Err(AnalysisError::InvalidInput(
            "No time split overlaps the audio".to_string(),
        ));
    }

    // 2. Common FFT length
    let longest = non_empty.iter().map(|(_, s)| s.len()).max().unwrap_or(0);
    let common_fft_len = config.pad_to_longest.then(|| padded_fft_len(longest));
    if let Some(fft_len) = common_fft_len {
        log::debug!("Longest segment {} samples, padding all to {}", longest, fft_len);
    }

    // 3. Peaks, notes, harmonics
    let notes = analysis::batch::analyze_indexed(
        &non_empty,
        sample_rate,
        common_fft_len.unwrap_or(0),
        &config,
    )?;

    for note in &notes {
        if note.peak.degenerate {
            log::warn!("Segment {} is silent, peak has no pitch", note.index + 1);
            flags.push(AnalysisFlag::DegenerateSpectrum(note.index));
        }
    }
    flags.sort_by_key(|flag| match flag {
        AnalysisFlag::EmptySegment(i) | AnalysisFlag::DegenerateSpectrum(i) => *i,
    });

    let peak_frequencies: Vec<f32> = notes.iter().map(|n| n.frequency_hz()).collect();

    let processing_time_ms = start_time.elapsed().as_secs_f32() * 1000.0;

    log::debug!(
        "Extracted {} notes ({} flagged) in {:.2} ms",
        notes.len(),
        flags.len(),
        processing_time_ms
    );

    Ok(NoteAnalysis {
        notes,
        peak_frequencies,
        metadata: AnalysisMetadata {
            duration_seconds: samples.len() as f32 / sample_rate as f32,
            sample_rate,
            segment_count: splits.len(),
            common_fft_len,
            processing_time_ms,
            flags,
            ..AnalysisMetadata::default()
        },
    })
}
