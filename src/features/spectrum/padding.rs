//! Zero-padding to FFT lengths
//!
//! Segments are padded on the right with zeros up to a power-of-two length
//! before the transform. Padding never truncates.

/// FFT length used for a segment of `len` samples
///
/// Returns the smallest power of two that is `>= len`. Lengths 0 and 1 both
/// map to 1, and a length that is already a power of two is returned as is.
///
/// # Example
///
/// ```
/// use auditory_dsp::features::spectrum::padding::padded_fft_len;
///
/// assert_eq!(padded_fft_len(100), 128);
/// assert_eq!(padded_fft_len(128), 128);
/// assert_eq!(padded_fft_len(0), 1);
/// ```
pub fn padded_fft_len(len: usize) -> usize {
    len.next_power_of_two()
}

/// Zero-pad a segment on the right to `target_length`
///
/// Original samples keep their positions and the remainder is filled with
/// zeros. When `target_length <= segment.len()` the segment is returned
/// unchanged.
///
/// # Example
///
/// ```
/// use auditory_dsp::features::spectrum::padding::zero_pad;
///
/// assert_eq!(zero_pad(&[1.0, 2.0], 4), vec![1.0, 2.0, 0.0, 0.0]);
/// assert_eq!(zero_pad(&[1.0, 2.0, 3.0], 2), vec![1.0, 2.0, 3.0]);
/// ```
pub fn zero_pad(segment: &[f32], target_length: usize) -> Vec<f32> {
    if target_length <= segment.len() {
        return segment.to_vec();
    }

    let mut padded = Vec::with_capacity(target_length);
    padded.extend_from_slice(segment);
    padded.resize(target_length, 0.0);
    padded
}
