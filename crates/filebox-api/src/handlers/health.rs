//! Health check handler.

use axum::Json;
use axum::extract::State;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// Probes the session and document stores; a store that errors reports
/// as unavailable rather than failing the endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let redis = state.sessions.health_check().await.unwrap_or(false);
    let db = state.files.health_check().await.unwrap_or(false);
    Json(HealthResponse { redis, db })
}
