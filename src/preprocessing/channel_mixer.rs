//! Channel mixing utilities (stereo to mono conversion)

use crate::error::AnalysisError;

/// Channel mixing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelMixMode {
    /// Simple average: (L + R) / 2
    Mono,
    /// Left channel only
    Left,
    /// Right channel only
    Right,
    /// Keep the channel with more energy
    Dominant,
}

/// Split interleaved frames into one vector per channel
///
/// A trailing partial frame is dropped.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if `channels` is 0.
pub fn deinterleave(samples: &[f32], channels: usize) -> Result<Vec<Vec<f32>>, AnalysisError> {
    if channels == 0 {
        return Err(AnalysisError::InvalidInput(
            "Invalid channel count: 0".to_string(),
        ));
    }

    let frames = samples.len() / channels;
    let mut split = vec![Vec::with_capacity(frames); channels];

    for frame in samples.chunks_exact(channels) {
        for (channel, &sample) in split.iter_mut().zip(frame) {
            channel.push(sample);
        }
    }

    Ok(split)
}

/// Convert stereo to mono
///
/// # Arguments
///
/// * `left` - Left channel samples
/// * `right` - Right channel samples
/// * `mode` - Mixing mode
///
/// # Returns
///
/// Mono samples
///
/// # Errors
///
/// Returns `AnalysisError::InvalidInput` if the channels differ in length.
pub fn stereo_to_mono(
    left: &[f32],
    right: &[f32],
    mode: ChannelMixMode,
) -> Result<Vec<f32>, AnalysisError> {
    log::debug!("Converting stereo to mono using {:?}", mode);

    if left.len() != right.len() {
        return Err(AnalysisError::InvalidInput(format!(
            "Channel length mismatch: left={}, right={}",
            left.len(),
            right.len()
        )));
    }

    let mono = match mode {
        ChannelMixMode::Mono => left
            .iter()
            .zip(right)
            .map(|(l, r)| (l + r) / 2.0)
            .collect(),
        ChannelMixMode::Left => left.to_vec(),
        ChannelMixMode::Right => right.to_vec(),
        ChannelMixMode::Dominant => {
            let energy = |channel: &[f32]| channel.iter().map(|s| s * s).sum::<f32>();
            if energy(left) >= energy(right) {
                left.to_vec()
            } else {
                right.to_vec()
            }
        }
    };

    Ok(mono)
}
