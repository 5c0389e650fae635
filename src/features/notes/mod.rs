//! Note naming modules
//!
//! Turn peak frequencies into musical notes:
//! - Nearest equal-tempered note with cents deviation
//! - Melody/bass classification

pub mod naming;
pub mod voice;

pub use naming::{frequency_to_note, NoteName};
pub use voice::{classify_voice, Voice};
