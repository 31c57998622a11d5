//! Session store configuration.

use serde::{Deserialize, Serialize};

/// Redis-backed session store settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Redis connection URL.
    pub url: String,
    /// Key prefix under which tokens are stored (`<prefix><token>`).
    pub key_prefix: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            key_prefix: "auth_".to_string(),
        }
    }
}
