//! Feature extraction modules
//!
//! This module contains the note extraction algorithms:
//! - Spectrum computation and peak-frequency estimation
//! - Harmonic partial search
//! - Note naming and melody/bass classification

pub mod notes;
pub mod spectrum;
