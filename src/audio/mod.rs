//! Audio module.
//!
//! Provides bell tone synthesis, host playback, and WAV export.

pub mod output;
pub mod tone;
pub mod wav;

// Re-export commonly used items
pub use output::{AudioOutput, HostOutput, OutputGuard, UnavailableOutput};
pub use tone::{bell_tone, ToneBuffer, ToneSpec, SAMPLE_RATE};
pub use wav::write_wav;
