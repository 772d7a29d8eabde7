//! Route table and handlers.

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};

use super::server::AppState;
use super::types::{Acknowledgment, HealthResult, WaitQuery};
use crate::playback::Cue;

/// Builds the router for all endpoints.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/bells", get(handle_bells))
        .route("/gong", get(handle_gong))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Schedules the bells (recorded file, or the synthesized tone without one).
async fn handle_bells(
    State(state): State<AppState>,
    Query(query): Query<WaitQuery>,
) -> Json<Acknowledgment> {
    Json(schedule(&state, Cue::Bells, query))
}

/// Schedules the synthesized gong.
async fn handle_gong(
    State(state): State<AppState>,
    Query(query): Query<WaitQuery>,
) -> Json<Acknowledgment> {
    Json(schedule(&state, Cue::Gong, query))
}

/// Health check.
async fn handle_health() -> Json<HealthResult> {
    Json(HealthResult {
        status: "ok".to_string(),
    })
}

fn schedule(state: &AppState, cue: Cue, query: WaitQuery) -> Acknowledgment {
    // Detached: the response never waits on playback.
    drop(state.dispatcher.schedule(cue, query.wait));
    Acknowledgment::scheduled(cue, query.wait)
}
