//! Blob store trait for raw byte persistence.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;

/// Durable storage for raw file bytes, keyed by opaque paths.
///
/// The contract is deliberately narrow: write bytes under a fresh key and
/// get back the stored path, read bytes from a stored path, and probe for
/// existence. The local-filesystem implementation lives in
/// `filebox-storage`, rooted at a configurable directory it creates on
/// demand.
#[async_trait]
pub trait BlobStore: Send + Sync + 'static {
    /// Write `data` under the given key and return the absolute path the
    /// bytes were stored at. Ensures the storage root exists first.
    async fn write(&self, key: &str, data: Bytes) -> AppResult<String>;

    /// Read the full byte content stored at `path`.
    async fn read(&self, path: &str) -> AppResult<Bytes>;

    /// Check whether `path` holds stored bytes.
    async fn exists(&self, path: &str) -> AppResult<bool>;
}
