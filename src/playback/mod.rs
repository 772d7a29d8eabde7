//! Playback scheduling.
//!
//! - [`Cue`]: which sound to play
//! - [`Delay`]: how long to wait first
//! - [`Dispatcher`]: runs the wait and the play on a detached task

mod cue;
mod dispatcher;

pub use cue::{Cue, Delay};
pub use dispatcher::{Dispatcher, PlaybackSource};
