//! santa-bells: play bells and gongs on the host over HTTP.
//!
//! A request to `/bells` or `/gong` is acknowledged right away and the sound
//! is played later by a detached task, after an optional `wait` in seconds.
//! When the recorded bells file is missing a bell tone is synthesized.
//!
//! # Modules
//!
//! - [`audio`]: Tone synthesis, host output, WAV export
//! - [`playback`]: Delayed fire-and-forget dispatch (Cue, Delay, Dispatcher)
//! - [`http`]: Routes, handlers and server lifecycle
//! - [`config`]: Runtime configuration (ServerConfig)
//! - [`error`]: Error types and codes (BellsError, ErrorCode)
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use santa_bells::{audio::HostOutput, playback::{Cue, Delay, Dispatcher}};
//!
//! let (_guard, output) = HostOutput::open_default()?;
//! let dispatcher = Dispatcher::new(Arc::new(output), "christmas-bells-05.mp3");
//! dispatcher.schedule(Cue::Gong, Delay::from_secs(2));
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod logging;
pub mod playback;

// Re-export commonly used types at crate root for convenience
pub use config::ServerConfig;
pub use error::{BellsError, ErrorCode, Result};
pub use playback::{Cue, Delay, Dispatcher, PlaybackSource};
