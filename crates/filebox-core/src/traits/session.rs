//! Session store trait for resolving authentication tokens.

use async_trait::async_trait;

use crate::result::AppResult;
use crate::types::UserId;

/// Read-only store mapping an opaque token to a user identity.
///
/// Resolution is a single read per request with no caching layer in this
/// core. Implementations exist for Redis and for an in-memory map used in
/// tests; the trait is defined here and implemented in `filebox-auth`.
#[async_trait]
pub trait SessionStore: Send + Sync + 'static {
    /// Resolve a token to the user it authenticates, if any.
    async fn resolve(&self, token: &str) -> AppResult<Option<UserId>>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
