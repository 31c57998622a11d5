//! Content retrieval: resolves a record id to raw bytes plus a MIME
//! type, enforcing read authorization along the way.

use std::sync::Arc;

use bytes::Bytes;
use tracing::warn;

use filebox_core::error::AppError;
use filebox_core::result::AppResult;
use filebox_core::traits::BlobStore;
use filebox_database::FileStore;
use filebox_entity::file::FileRecord;

use crate::access::can_read;
use crate::context::Caller;
use crate::file::parse_file_id;

/// Resolved file content, ready to serve.
#[derive(Debug, Clone)]
pub struct FileContent {
    /// The raw bytes, exactly as originally uploaded.
    pub data: Bytes,
    /// MIME type derived from the record's name.
    pub content_type: String,
    /// The record's display name.
    pub name: String,
}

/// Resolves record content through the metadata and blob stores.
#[derive(Clone)]
pub struct ContentService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for ContentService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentService").finish()
    }
}

impl ContentService {
    /// Creates a new content service over the injected stores.
    pub fn new(files: Arc<dyn FileStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { files, blobs }
    }

    /// Fetches the content behind `raw_id` for an optionally
    /// authenticated caller.
    ///
    /// Folders are refused as soon as the record is found: a folder has
    /// no content regardless of who asks or whether it is public. Past
    /// that, every denial that would reveal the existence of a record
    /// the caller may not read — unknown id, private record, dangling
    /// blob reference — collapses into the same `NotFound`.
    pub async fn fetch_content(
        &self,
        caller: Option<&Caller>,
        raw_id: &str,
    ) -> AppResult<FileContent> {
        let id = parse_file_id(raw_id)?;

        let record = self
            .files
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if record.file_type.is_folder() {
            return Err(AppError::no_content("A folder doesn't have content"));
        }

        if !can_read(caller, &record) {
            return Err(AppError::not_found("Not found"));
        }

        // Private records are re-checked with an owner-constrained
        // lookup, so a stale read above cannot leak a record that was
        // made private concurrently.
        if !record.is_public {
            let owner = caller.ok_or_else(|| AppError::not_found("Not found"))?;
            self.files
                .find_owned(id, owner.user_id)
                .await?
                .ok_or_else(|| AppError::not_found("Not found"))?;
        }

        self.resolve_blob(&record).await
    }

    async fn resolve_blob(&self, record: &FileRecord) -> AppResult<FileContent> {
        let path = record
            .local_path
            .as_deref()
            .ok_or_else(|| AppError::not_found("Not found"))?;

        if !matches!(self.blobs.exists(path).await, Ok(true)) {
            warn!(id = %record.id, "File record points at a missing blob");
            return Err(AppError::not_found("Not found"));
        }

        let data = self
            .blobs
            .read(path)
            .await
            .map_err(|_| AppError::not_found("Not found"))?;

        Ok(FileContent {
            data,
            content_type: content_type_for(&record.name),
            name: record.name.clone(),
        })
    }
}

/// MIME type for a file name, falling back to `application/octet-stream`
/// when the extension is unknown or absent.
pub fn content_type_for(name: &str) -> String {
    mime_guess::from_path(name)
        .first_or_octet_stream()
        .to_string()
}
