//! Analysis result types

use serde::{Deserialize, Serialize};

use super::metadata::AnalysisMetadata;
use crate::features::notes::{NoteName, Voice};
use crate::features::spectrum::PeakEstimate;

/// One analysed segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentNote {
    /// Index of the time split this segment came from
    pub index: usize,

    /// Peak search result
    pub peak: PeakEstimate,

    /// Nearest note, `None` for a 0 Hz or degenerate peak
    pub note: Option<NoteName>,

    /// Melody or bass
    pub voice: Voice,

    /// Harmonic partials found above the peak, fundamental first
    ///
    /// Empty when harmonic search is disabled.
    pub harmonics: Vec<f32>,
}

impl SegmentNote {
    /// Measured peak frequency in Hz
    pub fn frequency_hz(&self) -> f32 {
        self.peak.frequency_hz
    }
}

/// Complete note extraction result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NoteAnalysis {
    /// Every non-empty segment, in split order
    pub notes: Vec<SegmentNote>,

    /// Peak frequency of each entry in `notes`, same order
    pub peak_frequencies: Vec<f32>,

    /// Analysis metadata
    pub metadata: AnalysisMetadata,
}

impl NoteAnalysis {
    /// Segments classified as melody
    pub fn melody(&self) -> Vec<&SegmentNote> {
        self.voice(Voice::Melody)
    }

    /// Segments classified as bass
    pub fn bass(&self) -> Vec<&SegmentNote> {
        self.voice(Voice::Bass)
    }

    fn voice(&self, voice: Voice) -> Vec<&SegmentNote> {
        self.notes.iter().filter(|n| n.voice == voice).collect()
    }
}
