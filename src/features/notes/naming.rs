//! Equal-tempered note naming
//!
//! Maps a frequency to the nearest note of 12-tone equal temperament relative
//! to a reference A4, using MIDI numbering (A4 = 69):
//!
//! ```text
//! midi   = 69 + 12 * log2(f / a4)
//! ideal  = a4 * 2^((round(midi) - 69) / 12)
//! cents  = 1200 * log2(f / ideal)
//! ```

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

const NOTE_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

const A4_MIDI: i32 = 69;

/// Nearest equal-tempered note of a measured frequency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteName {
    /// Pitch class, sharp spelling ("C", "C#", ..., "B")
    pub name: String,

    /// Octave in scientific pitch notation (A4 = 440 Hz is octave 4)
    pub octave: i32,

    /// MIDI note number (may fall outside 0..=127 for extreme frequencies)
    pub midi: i32,

    /// Frequency of the note in Hz
    pub ideal_frequency_hz: f32,

    /// Measured minus ideal pitch in cents, within ±50
    pub deviation_cents: f32,
}

impl NoteName {
    /// Name with octave, e.g. "A4" or "C#3"
    pub fn label(&self) -> String {
        format!("{}{}", self.name, self.octave)
    }
}

/// Find the nearest note to `frequency_hz`
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the frequency or reference pitch
/// is not a positive finite number. 0 Hz has no pitch.
///
/// # Example
///
/// ```
/// use auditory_dsp::features::notes::frequency_to_note;
///
/// let note = frequency_to_note(261.63, 440.0)?;
/// assert_eq!(note.label(), "C4");
/// assert!(note.deviation_cents.abs() < 0.1);
/// # Ok::<(), auditory_dsp::AnalysisError>(())
/// ```
pub fn frequency_to_note(frequency_hz: f32, reference_a4_hz: f32) -> Result<NoteName, AnalysisError> {
    if !(reference_a4_hz.is_finite() && reference_a4_hz > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Invalid reference pitch: {} Hz",
            reference_a4_hz
        )));
    }

    if !(frequency_hz.is_finite() && frequency_hz > 0.0) {
        return Err(AnalysisError::InvalidInput(format!(
            "Cannot name frequency: {} Hz",
            frequency_hz
        )));
    }

    // f64 keeps the cents deviation stable for very low and very high notes
    let ratio = frequency_hz as f64 / reference_a4_hz as f64;
    let exact_midi = A4_MIDI as f64 + 12.0 * ratio.log2();
    let midi = exact_midi.round() as i32;

    let ideal = reference_a4_hz as f64 * 2f64.powf((midi - A4_MIDI) as f64 / 12.0);
    let cents = 1200.0 * (frequency_hz as f64 / ideal).log2();

    Ok(NoteName {
        name: NOTE_NAMES[midi.rem_euclid(12) as usize].to_string(),
        octave: midi.div_euclid(12) - 1,
        midi,
        ideal_frequency_hz: ideal as f32,
        deviation_cents: cents as f32,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_note() {
        let note = frequency_to_note(440.0, 440.0).unwrap();
        assert_eq!(note.name, "A");
        assert_eq!(note.octave, 4);
        assert_eq!(note.midi, 69);
        assert!((note.ideal_frequency_hz - 440.0).abs() < 1e-3);
        assert!(note.deviation_cents.abs() < 1e-3);
    }

    #[test]
    fn test_common_notes() {
        let cases = [
            (261.63, "C4"),
            (466.16, "A#4"),
            (329.63, "E4"),
            (110.0, "A2"),
            (65.41, "C2"),
            (1318.51, "E6"),
            (27.5, "A0"),
        ];

        for (freq, label) in cases {
            let note = frequency_to_note(freq, 440.0).unwrap();
            assert_eq!(note.label(), label, "{} Hz", freq);
            assert!(note.deviation_cents.abs() < 1.0, "{} Hz off by {} cents", freq, note.deviation_cents);
        }
    }

    #[test]
    fn test_octave_boundary() {
        // B3 and C4 sit on either side of the octave change
        assert_eq!(frequency_to_note(246.94, 440.0).unwrap().label(), "B3");
        assert_eq!(frequency_to_note(261.63, 440.0).unwrap().label(), "C4");
    }

    #[test]
    fn test_deviation_sign_and_range() {
        // 10 Hz sharp of A4 is about +39 cents
        let sharp = frequency_to_note(450.0, 440.0).unwrap();
        assert_eq!(sharp.label(), "A4");
        assert!(sharp.deviation_cents > 38.0 && sharp.deviation_cents < 40.0);

        let flat = frequency_to_note(430.0, 440.0).unwrap();
        assert_eq!(flat.label(), "A4");
        assert!(flat.deviation_cents < -39.0 && flat.deviation_cents > -41.0);

        // Past the quarter-tone the next note wins
        let next = frequency_to_note(455.0, 440.0).unwrap();
        assert_eq!(next.label(), "A#4");
        assert!(next.deviation_cents.abs() <= 50.0);
    }

    #[test]
    fn test_alternate_reference() {
        let note = frequency_to_note(432.0, 432.0).unwrap();
        assert_eq!(note.label(), "A4");
        assert!(note.deviation_cents.abs() < 1e-3);
    }

    #[test]
    fn test_sub_audio_octaves() {
        // MIDI 0 is C-1 at ~8.18 Hz
        let note = frequency_to_note(8.18, 440.0).unwrap();
        assert_eq!(note.midi, 0);
        assert_eq!(note.label(), "C-1");

        let note = frequency_to_note(7.7, 440.0).unwrap();
        assert_eq!(note.midi, -1);
        assert_eq!(note.label(), "B-2");
    }

    #[test]
    fn test_invalid_frequencies() {
        for freq in [0.0, -440.0, f32::NAN, f32::INFINITY] {
            assert!(matches!(
                frequency_to_note(freq, 440.0),
                Err(AnalysisError::InvalidInput(_))
            ));
        }
        assert!(frequency_to_note(440.0, 0.0).is_err());
    }
}
