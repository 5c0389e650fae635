//! Time-split segmentation
//!
//! Cuts a clip into note segments from a list of `(start, end)` times in
//! seconds. Splits that fall outside the clip yield empty segments so that
//! segment `i` always corresponds to split `i`.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Start and end of one segment in seconds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeSplit {
    /// Segment start in seconds
    pub start_seconds: f64,
    /// Segment end in seconds (exclusive)
    pub end_seconds: f64,
}

impl TimeSplit {
    /// Create a split from start and end times in seconds
    pub fn new(start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            start_seconds,
            end_seconds,
        }
    }

    /// Sample range `[start, end)` of this split, clamped to `len` samples
    ///
    /// Returns `start..start` when the clamped range is empty.
    pub fn sample_range(&self, sample_rate: u32, len: usize) -> std::ops::Range<usize> {
        let to_index = |seconds: f64| (seconds * sample_rate as f64).floor() as usize;

        let start = to_index(self.start_seconds);
        let end = to_index(self.end_seconds).min(len);

        if end > start {
            start..end
        } else {
            start..start
        }
    }

    fn validate(&self, index: usize) -> Result<(), AnalysisError> {
        let valid = self.start_seconds.is_finite()
            && self.end_seconds.is_finite()
            && self.start_seconds >= 0.0
            && self.end_seconds >= self.start_seconds;

        if valid {
            Ok(())
        } else {
            Err(AnalysisError::InvalidInput(format!(
                "Invalid time split {}: {}s to {}s",
                index, self.start_seconds, self.end_seconds
            )))
        }
    }
}

impl From<(f64, f64)> for TimeSplit {
    fn from((start_seconds, end_seconds): (f64, f64)) -> Self {
        Self::new(start_seconds, end_seconds)
    }
}

/// Cut `samples` into one segment per time split
///
/// # Returns
///
/// Borrowed segments in split order. A split that starts at or past the end
/// of the clip gives an empty segment.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the sample rate is 0 or a split
/// has negative or non-finite times or ends before it starts.
pub fn split_into_segments<'a>(
    samples: &'a [f32],
    sample_rate: u32,
    splits: &[TimeSplit],
) -> Result<Vec<&'a [f32]>, AnalysisError> {
    log::debug!(
        "Splitting {} samples at {} Hz into {} segments",
        samples.len(),
        sample_rate,
        splits.len()
    );

    if sample_rate == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid sample rate: 0".to_string(),
        ));
    }

    splits
        .iter()
        .enumerate()
        .map(|(index, split)| -> Result<&'a [f32], AnalysisError> {
            split.validate(index)?;
            let range = split.sample_range(sample_rate, samples.len());
            if range.is_empty() {
                Ok(&samples[..0])
            } else {
                Ok(&samples[range])
            }
        })
        .collect()
}
