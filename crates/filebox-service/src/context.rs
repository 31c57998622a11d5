//! Request context carrying the authenticated caller identity.

use serde::{Deserialize, Serialize};

use filebox_core::types::UserId;

/// The identity resolved from a presented token via the session store.
///
/// Constructed by the API layer's extractors and passed into service
/// methods so every operation knows *who* is acting. Operations that
/// allow anonymous access take an `Option<&Caller>` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Caller {
    /// The authenticated user's id.
    pub user_id: UserId,
}

impl Caller {
    /// Create a caller context for a resolved identity.
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}
