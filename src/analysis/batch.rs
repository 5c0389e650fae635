//! Peak estimation across many segments
//!
//! Segments are independent, so the batch can run on the rayon thread pool.
//! Results always come back in input order.

use rayon::prelude::*;

use super::result::SegmentNote;
use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::features::notes::{classify_voice, frequency_to_note};
use crate::features::spectrum::{
    compute_spectrum_with_len, estimate_peak_with_len, find_harmonic_peaks, PeakEstimate,
};

/// Estimate the peak of every segment
///
/// # Arguments
///
/// * `segments` - Non-empty segments
/// * `sample_rate` - Sample rate in Hz
/// * `fft_len` - Minimum FFT length shared by all segments (0 = per segment)
/// * `parallel` - Run on the rayon thread pool
///
/// # Errors
///
/// Fails on the first segment `estimate_peak` rejects.
pub fn find_peak_frequencies(
    segments: &[&[f32]],
    sample_rate: u32,
    fft_len: usize,
    parallel: bool,
) -> Result<Vec<PeakEstimate>, AnalysisError> {
    log::debug!(
        "Estimating peaks of {} segments (fft_len={}, parallel={})",
        segments.len(),
        fft_len,
        parallel
    );

    run_batch(segments, parallel, |segment| {
        estimate_peak_with_len(segment, sample_rate, fft_len)
    })
}

/// Map `f` over `items` in order, on the rayon pool when `parallel` is set
///
/// Stops at the first error.
fn run_batch<I, T, F>(items: &[I], parallel: bool, f: F) -> Result<Vec<T>, AnalysisError>
where
    I: Sync,
    T: Send,
    F: Fn(&I) -> Result<T, AnalysisError> + Sync + Send,
{
    if parallel {
        items.par_iter().map(f).collect()
    } else {
        items.iter().map(f).collect()
    }
}

/// Analyse indexed segments into notes
///
/// Runs the same estimator and dispatch as [`find_peak_frequencies`], but
/// keeps each spectrum around for naming and the harmonic search.
pub(crate) fn analyze_indexed(
    segments: &[(usize, &[f32])],
    sample_rate: u32,
    fft_len: usize,
    config: &AnalysisConfig,
) -> Result<Vec<SegmentNote>, AnalysisError> {
    run_batch(segments, config.parallel, |&(index, segment)| {
        analyze_segment(index, segment, sample_rate, fft_len, config)
    })
}

fn analyze_segment(
    index: usize,
    segment: &[f32],
    sample_rate: u32,
    fft_len: usize,
    config: &AnalysisConfig,
) -> Result<SegmentNote, AnalysisError> {
    let spectrum = compute_spectrum_with_len(segment, sample_rate, fft_len)?;
    let peak = spectrum.peak();

    let note = if peak.degenerate || peak.frequency_hz <= 0.0 {
        None
    } else {
        Some(frequency_to_note(peak.frequency_hz, config.reference_a4_hz)?)
    };

    let harmonics = match config.harmonics {
        Some(harmonic_config) if !peak.degenerate => {
            find_harmonic_peaks(&spectrum, peak.frequency_hz, harmonic_config)
        }
        _ => vec![],
    };

    Ok(SegmentNote {
        index,
        peak,
        note,
        voice: classify_voice(peak.frequency_hz, config.melody_threshold_hz),
        harmonics,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::notes::Voice;
    use std::f32::consts::PI;

    fn sine(freq: f32, sample_rate: u32, len: usize) -> Vec<f32> {
        (0..len)
            .map(|i| (2.0 * PI * freq * i as f32 / sample_rate as f32).sin())
            .collect()
    }

    #[test]
    fn test_batch_preserves_order() {
        let a = sine(220.0, 44100, 4096);
        let b = sine(880.0, 44100, 4096);
        let c = sine(440.0, 44100, 4096);
        let segments = vec![a.as_slice(), b.as_slice(), c.as_slice()];

        let serial = find_peak_frequencies(&segments, 44100, 0, false).unwrap();
        let parallel = find_peak_frequencies(&segments, 44100, 0, true).unwrap();

        assert_eq!(serial, parallel);
        for (peak, expected) in serial.iter().zip([220.0, 880.0, 440.0]) {
            assert!((peak.frequency_hz - expected).abs() <= peak.bin_width_hz);
        }
    }

    #[test]
    fn test_batch_rejects_empty_segment() {
        let a = sine(220.0, 44100, 1024);
        let empty: &[f32] = &[];
        let segments = vec![a.as_slice(), empty];
        assert!(matches!(
            find_peak_frequencies(&segments, 44100, 0, false),
            Err(AnalysisError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_segment_note_fields() {
        let tone = sine(440.0, 44100, 8192);
        let silence = vec![0.0; 2048];
        let segments = vec![(0, tone.as_slice()), (3, silence.as_slice())];

        let notes = analyze_indexed(&segments, 44100, 0, &AnalysisConfig::default()).unwrap();

        assert_eq!(notes[0].index, 0);
        assert_eq!(notes[0].note.as_ref().map(|n| n.label()), Some("A4".to_string()));
        assert_eq!(notes[0].voice, Voice::Melody);
        assert_eq!(notes[0].harmonics.first().copied(), Some(notes[0].frequency_hz()));

        assert_eq!(notes[1].index, 3);
        assert!(notes[1].peak.degenerate);
        assert!(notes[1].note.is_none());
        assert!(notes[1].harmonics.is_empty());
        assert_eq!(notes[1].voice, Voice::Bass);
    }

    #[test]
    fn test_pipeline_peaks_match_batch_estimator() {
        let a = sine(330.0, 8000, 3000);
        let b = sine(1250.0, 8000, 1500);
        let segments = [(0, a.as_slice()), (1, b.as_slice())];

        for parallel in [false, true] {
            let config = AnalysisConfig {
                parallel,
                ..AnalysisConfig::default()
            };
            let notes = analyze_indexed(&segments, 8000, 4096, &config).unwrap();
            let peaks =
                find_peak_frequencies(&[a.as_slice(), b.as_slice()], 8000, 4096, parallel).unwrap();

            let from_notes: Vec<PeakEstimate> = notes.iter().map(|n| n.peak).collect();
            assert_eq!(from_notes, peaks);
        }
    }

    #[test]
    fn test_voice_follows_measured_peak_at_threshold() {
        // Half a second of C4 at 44.1 kHz pads to 32768 points (~1.346 Hz bins).
        // The nearest bin is 194, about 261.1 Hz, just under the 261.63 Hz split.
        let c4 = sine(261.63, 44100, 22050);
        let d4 = sine(293.66, 44100, 22050);
        let segments = [(0, c4.as_slice()), (1, d4.as_slice())];

        let notes = analyze_indexed(&segments, 44100, 0, &AnalysisConfig::default()).unwrap();

        assert_eq!(notes[0].peak.padded_len, 32768);
        assert_eq!(notes[0].peak.bin_index, 194);
        assert!(notes[0].frequency_hz() < 261.63);
        assert_eq!(notes[0].note.as_ref().map(|n| n.label()), Some("C4".to_string()));
        assert_eq!(notes[0].voice, Voice::Bass);

        assert_eq!(notes[1].note.as_ref().map(|n| n.label()), Some("D4".to_string()));
        assert_eq!(notes[1].voice, Voice::Melody);
    }
}
