//! Route definitions for the Filebox HTTP API.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(file_routes())
        .merge(health_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// File record CRUD, visibility toggles, and content retrieval.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/files", post(handlers::file::upload))
        .route("/files", get(handlers::file::list))
        .route("/files/{id}", get(handlers::file::show))
        .route("/files/{id}/publish", put(handlers::file::publish))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish))
        .route("/files/{id}/data", get(handlers::file::data))
}

/// Store reachability probe.
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
