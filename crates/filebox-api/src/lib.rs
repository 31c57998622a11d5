//! # filebox-api
//!
//! HTTP API layer for Filebox built on Axum.
//!
//! Provides the REST endpoints for file records and content, the
//! token-based auth extractors, request/response DTOs, middleware, and
//! the mapping from domain errors to HTTP responses.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
