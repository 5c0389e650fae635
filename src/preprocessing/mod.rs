//! Audio preprocessing modules
//!
//! This module contains utilities for preparing audio for analysis:
//! - PCM decoding (8-bit and 16-bit)
//! - Channel mixing (stereo to mono)
//! - Time-split segmentation

pub mod channel_mixer;
pub mod pcm;
pub mod segmentation;
