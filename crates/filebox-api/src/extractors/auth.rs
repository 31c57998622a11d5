//! Token extractors — pull the session token from the `X-Token` header
//! and resolve it to a caller identity.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use filebox_core::error::AppError;
use filebox_core::types::UserId;
use filebox_service::Caller;

use crate::error::ApiError;
use crate::state::AppState;

const TOKEN_HEADER: &str = "x-token";

/// Extracted authenticated caller, required.
///
/// Rejects with `401 Unauthorized` when the header is missing, empty,
/// or does not resolve to an identity in the session store.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Caller);

impl std::ops::Deref for AuthUser {
    type Target = Caller;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Extracted caller for endpoints that also serve anonymous requests.
///
/// A missing or unresolvable token yields `None` instead of rejecting;
/// only a session-store failure surfaces as an error.
#[derive(Debug, Clone, Copy)]
pub struct MaybeAuthUser(pub Option<Caller>);

async fn resolve_token(parts: &Parts, state: &AppState) -> Result<Option<UserId>, AppError> {
    let token = match parts.headers.get(TOKEN_HEADER).and_then(|v| v.to_str().ok()) {
        Some(t) if !t.is_empty() => t,
        _ => return Ok(None),
    };
    state.sessions.resolve(token).await
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        match resolve_token(parts, state).await? {
            Some(user_id) => Ok(AuthUser(Caller::new(user_id))),
            None => Err(ApiError(AppError::unauthorized("Unauthorized"))),
        }
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = resolve_token(parts, state).await?.map(Caller::new);
        Ok(MaybeAuthUser(caller))
    }
}
