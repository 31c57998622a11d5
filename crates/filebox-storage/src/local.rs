//! Local filesystem blob store.

use std::path::PathBuf;

use async_trait::async_trait;
use bytes::Bytes;
use tokio::fs;
use tracing::debug;

use filebox_core::error::{AppError, ErrorKind};
use filebox_core::result::AppResult;
use filebox_core::traits::BlobStore;

/// Blob store writing under a configurable root directory.
///
/// The root is created on demand at write time; a missing root is not an
/// error until the first write. Stored paths are absolute and remain
/// valid even if the configured root changes later.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Create a blob store rooted at the given path.
    pub fn new(root_path: &str) -> Self {
        Self {
            root: PathBuf::from(root_path),
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn write(&self, key: &str, data: Bytes) -> AppResult<String> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create storage root: {}", self.root.display()),
                e,
            )
        })?;

        let path = self.root.join(key);
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write blob: {e}"),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Wrote blob");
        Ok(path.to_string_lossy().into_owned())
    }

    async fn read(&self, path: &str) -> AppResult<Bytes> {
        let data = fs::read(path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                AppError::not_found(format!("Blob not found: {path}"))
            } else {
                AppError::with_source(
                    ErrorKind::Storage,
                    format!("Failed to read blob: {path}"),
                    e,
                )
            }
        })?;
        Ok(Bytes::from(data))
    }

    async fn exists(&self, path: &str) -> AppResult<bool> {
        Ok(fs::try_exists(path).await.unwrap_or(false))
    }
}
