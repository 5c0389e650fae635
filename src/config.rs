//! Configuration parameters for note extraction

use crate::features::spectrum::harmonics::HarmonicConfig;

/// Analysis configuration parameters
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    // Note naming
    /// Reference pitch for A4 in Hz (default: 440.0)
    pub reference_a4_hz: f32,

    /// Frequencies at or above this are melody, below are bass (default: 261.63 Hz, C4)
    pub melody_threshold_hz: f32,

    // FFT
    /// Pad every segment to the power of two of the longest segment (default: true)
    ///
    /// When false each segment is padded to its own next power of two, which
    /// gives short segments a coarser frequency grid.
    pub pad_to_longest: bool,

    /// Estimate segment peaks on the rayon thread pool (default: false)
    pub parallel: bool,

    // Harmonics
    /// Harmonic partial search, `None` to skip (default: enabled, 4 partials)
    pub harmonics: Option<HarmonicConfig>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            reference_a4_hz: 440.0,
            melody_threshold_hz: 261.63,
            pad_to_longest: true,
            parallel: false,
            harmonics: Some(HarmonicConfig::default()),
        }
    }
}
