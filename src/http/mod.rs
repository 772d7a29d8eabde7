//! HTTP interface.
//!
//! Endpoints:
//! - `GET /bells?wait=N`: schedule the bells
//! - `GET /gong?wait=N`: schedule the synthesized gong
//! - `GET /health`: liveness check
//!
//! Both cue endpoints answer immediately; playback happens on a detached task.

pub mod routes;
pub mod server;
pub mod types;

// Re-export commonly used types
pub use routes::router;
pub use server::{run_server, serve, AppState};
pub use types::{AckStatus, Acknowledgment, HealthResult, WaitQuery};
