//! Analysis metadata structures

use serde::{Deserialize, Serialize};

/// Condition noticed while analysing a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AnalysisFlag {
    /// Time split did not overlap the audio; segment skipped
    EmptySegment(usize),

    /// Segment was all zero; its 0 Hz peak has no pitch
    DegenerateSpectrum(usize),
}

/// Analysis metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisMetadata {
    /// Audio duration in seconds
    pub duration_seconds: f32,

    /// Sample rate in Hz
    pub sample_rate: u32,

    /// Number of time splits requested
    pub segment_count: usize,

    /// FFT length shared by all segments, `None` when each used its own
    #[serde(skip_serializing_if = "Option::is_none")]
    pub common_fft_len: Option<usize>,

    /// Processing time in milliseconds
    pub processing_time_ms: f32,

    /// Algorithm version
    pub algorithm_version: String,

    /// Analysis flags
    pub flags: Vec<AnalysisFlag>,
}

impl Default for AnalysisMetadata {
    fn default() -> Self {
        Self {
            duration_seconds: 0.0,
            sample_rate: 0,
            segment_count: 0,
            common_fft_len: None,
            processing_time_ms: 0.0,
            algorithm_version: env!("CARGO_PKG_VERSION").to_string(),
            flags: vec![],
        }
    }
}
