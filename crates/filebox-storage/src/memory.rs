//! In-memory blob store for deterministic tests.

use async_trait::async_trait;
use bytes::Bytes;
use dashmap::DashMap;

use filebox_core::error::AppError;
use filebox_core::result::AppResult;
use filebox_core::traits::BlobStore;

/// Blob store keeping byte payloads in a process-local map.
///
/// Stored paths use a `mem://` scheme so they are recognizably synthetic
/// in test output.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Bytes>,
}

impl MemoryBlobStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop a stored blob, leaving any metadata record dangling.
    pub fn remove(&self, path: &str) {
        self.blobs.remove(path);
    }

    /// Number of stored blobs.
    pub fn len(&self) -> usize {
        self.blobs.len()
    }

    /// Whether the store holds no blobs.
    pub fn is_empty(&self) -> bool {
        self.blobs.is_empty()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn write(&self, key: &str, data: Bytes) -> AppResult<String> {
        let path = format!("mem://{key}");
        self.blobs.insert(path.clone(), data);
        Ok(path)
    }

    async fn read(&self, path: &str) -> AppResult<Bytes> {
        self.blobs
            .get(path)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Blob not found: {path}")))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(self.blobs.contains_key(path))
    }
}
