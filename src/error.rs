//! Error types for the note extraction engine

use std::fmt;

/// Errors that can occur during audio analysis
///
/// An all-zero segment is not an error: its spectrum is uniformly zero and the
/// peak search reports bin 0 with
/// [`PeakEstimate::degenerate`](crate::features::spectrum::PeakEstimate::degenerate)
/// set instead.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    /// Invalid input parameters
    InvalidInput(String),

    /// PCM decoding error
    DecodingError(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalysisError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            AnalysisError::DecodingError(msg) => write!(f, "Decoding error: {}", msg),
        }
    }
}

impl std::error::Error for AnalysisError {}
