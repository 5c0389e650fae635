//! Melody/bass separation by pitch

use serde::{Deserialize, Serialize};

/// Part of the arrangement a note belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Voice {
    /// At or above the melody threshold
    Melody,
    /// Below the melody threshold
    Bass,
}

/// Assign a peak frequency to melody or bass
///
/// Frequencies equal to the threshold count as melody.
///
/// # Example
///
/// ```
/// use auditory_dsp::features::notes::{classify_voice, Voice};
///
/// assert_eq!(classify_voice(261.63, 261.63), Voice::Melody);
/// assert_eq!(classify_voice(130.81, 261.63), Voice::Bass);
/// ```
pub fn classify_voice(frequency_hz: f32, melody_threshold_hz: f32) -> Voice {
    if frequency_hz >= melody_threshold_hz {
        Voice::Melody
    } else {
        Voice::Bass
    }
}
