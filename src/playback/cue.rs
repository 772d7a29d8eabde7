//! What to play and when.

use std::fmt;
use std::time::Duration;

use serde::Deserialize;

/// A sound a client can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cue {
    /// The recorded bells, or the synthesized tone when no recording exists.
    Bells,
    /// Always the synthesized tone.
    Gong,
}

impl Cue {
    /// Returns the string representation of the cue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Cue::Bells => "bells",
            Cue::Gong => "gong",
        }
    }

    /// Subject used in acknowledgment messages.
    pub fn subject(&self) -> &'static str {
        match self {
            Cue::Bells => "Sound",
            Cue::Gong => "Gong",
        }
    }
}

impl fmt::Display for Cue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whole seconds to wait before playing.
///
/// Unsigned, so a negative value never survives deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct Delay(u64);

impl Delay {
    pub const fn from_secs(secs: u64) -> Self {
        Delay(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    pub fn as_duration(&self) -> Duration {
        Duration::from_secs(self.0)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Delay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}
