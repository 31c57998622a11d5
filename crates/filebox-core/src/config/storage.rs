//! Blob storage configuration.

use serde::{Deserialize, Serialize};

/// Local filesystem blob storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Root directory for stored blobs. Created on demand if absent.
    pub root_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            root_path: "/tmp/filebox".to_string(),
        }
    }
}
