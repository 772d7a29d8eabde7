//! Request and response bodies.

use serde::{Deserialize, Serialize};

use crate::playback::{Cue, Delay};

/// Query string accepted by the cue endpoints.
///
/// `wait` is unsigned, so negative or non-numeric values are rejected by the
/// extractor with 400 before a handler runs.
#[derive(Debug, Default, Deserialize)]
pub struct WaitQuery {
    #[serde(default)]
    pub wait: Delay,
}

/// Outcome reported by an acknowledgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
}

/// Body returned as soon as a cue has been scheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgment {
    pub status: AckStatus,
    pub message: String,
}

impl Acknowledgment {
    /// Acknowledges that `cue` will play after `delay`.
    pub fn scheduled(cue: Cue, delay: Delay) -> Self {
        Self {
            status: AckStatus::Success,
            message: format!("{} scheduled to play in {}", cue.subject(), delay),
        }
    }
}

/// Body of the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResult {
    pub status: String,
}
