//! In-memory session store for deterministic tests.

use async_trait::async_trait;
use dashmap::DashMap;

use filebox_core::result::AppResult;
use filebox_core::traits::SessionStore;
use filebox_core::types::UserId;

/// Session store keeping token mappings in a process-local map.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: DashMap<String, UserId>,
}

impl MemorySessionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token as authenticating `user_id`.
    pub fn insert(&self, token: &str, user_id: UserId) {
        self.sessions.insert(token.to_string(), user_id);
    }

    /// Remove a token mapping.
    pub fn remove(&self, token: &str) {
        self.sessions.remove(token);
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn resolve(&self, token: &str) -> AppResult<Option<UserId>> {
        Ok(self.sessions.get(token).map(|entry| *entry.value()))
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
