//! PCM sample decoding
//!
//! Converts raw integer PCM frames (as read from a WAV data chunk) into
//! normalised `f32` samples. Opening and parsing files is left to the caller.

use crate::error::AnalysisError;

const I16_SCALE: f32 = 32768.0;

/// Decode little-endian PCM bytes to samples in `[-1.0, 1.0)`
///
/// Supported widths:
/// - 1 byte: unsigned 8-bit, re-centred as `(u8 - 128) << 8`
/// - 2 bytes: signed 16-bit little-endian
///
/// Both are brought to the 16-bit range first and then divided by 32768, so
/// 8-bit and 16-bit sources share one scale.
///
/// # Errors
///
/// Returns `AnalysisError::DecodingError` for any other sample width or a
/// byte count that is not a whole number of samples.
///
/// # Example
///
/// ```
/// use auditory_dsp::preprocessing::pcm::decode_pcm;
///
/// let samples = decode_pcm(&[0x00, 0x40, 0x00, 0xC0], 2)?;
/// assert_eq!(samples, vec![0.5, -0.5]);
/// # Ok::<(), auditory_dsp::AnalysisError>(())
/// ```
pub fn decode_pcm(bytes: &[u8], sample_width_bytes: u16) -> Result<Vec<f32>, AnalysisError> {
    log::debug!(
        "Decoding {} bytes of {}-bit PCM",
        bytes.len(),
        sample_width_bytes as u32 * 8
    );

    match sample_width_bytes {
        1 => Ok(bytes
            .iter()
            .map(|&b| ((b as i16 - 128) << 8) as f32 / I16_SCALE)
            .collect()),
        2 => {
            if bytes.len() % 2 != 0 {
                return Err(AnalysisError::DecodingError(format!(
                    "Truncated 16-bit PCM: {} bytes",
                    bytes.len()
                )));
            }

            Ok(bytes
                .chunks_exact(2)
                .map(|pair| i16::from_le_bytes([pair[0], pair[1]]) as f32 / I16_SCALE)
                .collect())
        }
        width => Err(AnalysisError::DecodingError(format!(
            "Unsupported sample width: {} bits",
            width as u32 * 8
        ))),
    }
}
