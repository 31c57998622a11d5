//! File hierarchy manager: record creation, lookup, listing, and
//! visibility toggles.

use std::sync::Arc;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use bytes::Bytes;
use tracing::info;

use filebox_core::error::AppError;
use filebox_core::result::AppResult;
use filebox_core::traits::BlobStore;
use filebox_core::types::{BlobId, PageQuery};
use filebox_database::FileStore;
use filebox_entity::file::{FileRecord, FileType, NewFileRecord, ParentRef};

use crate::access::can_write;
use crate::context::Caller;
use crate::file::parse_file_id;

/// Caller-supplied fields for record creation, before validation.
#[derive(Debug, Clone, Default)]
pub struct CreateRecordRequest {
    /// Display name. Required, non-empty.
    pub name: Option<String>,
    /// Wire-format type string. Required, one of the three variants.
    pub record_type: Option<String>,
    /// Parent reference. Defaults to the root sentinel.
    pub parent: ParentRef,
    /// Initial visibility. Defaults to private.
    pub is_public: bool,
    /// Base64-encoded payload. Required unless creating a folder.
    pub data: Option<String>,
}

/// Manages the folder/file hierarchy and record metadata.
#[derive(Clone)]
pub struct FileService {
    files: Arc<dyn FileStore>,
    blobs: Arc<dyn BlobStore>,
}

impl std::fmt::Debug for FileService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileService").finish()
    }
}

impl FileService {
    /// Creates a new file service over the injected stores.
    pub fn new(files: Arc<dyn FileStore>, blobs: Arc<dyn BlobStore>) -> Self {
        Self { files, blobs }
    }

    /// Creates a folder or uploads a file/image for `caller`.
    ///
    /// Validation runs in a fixed order and the first failure wins:
    /// missing name, missing/invalid type, missing data for non-folders,
    /// unresolvable parent, parent that is not a folder. For non-folders
    /// the blob is written before the metadata record is inserted; a
    /// failed write skips the insert and leaves no metadata behind (the
    /// partially written blob, if any, is not cleaned up).
    pub async fn create_record(
        &self,
        caller: &Caller,
        req: CreateRecordRequest,
    ) -> AppResult<FileRecord> {
        let name = match req.name {
            Some(n) if !n.is_empty() => n,
            _ => return Err(AppError::validation("Missing name")),
        };

        let file_type = req
            .record_type
            .as_deref()
            .and_then(FileType::parse)
            .ok_or_else(|| AppError::validation("Missing type"))?;

        if !file_type.is_folder() && req.data.is_none() {
            return Err(AppError::validation("Missing data"));
        }

        let parent_id = match req.parent {
            ParentRef::Root => None,
            ParentRef::Id(id) => {
                let parent = self
                    .files
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| AppError::validation("Parent not found"))?;
                if !parent.file_type.is_folder() {
                    return Err(AppError::validation("Parent is not a folder"));
                }
                Some(id)
            }
            ParentRef::Literal(_) => return Err(AppError::validation("Parent not found")),
        };

        let local_path = if file_type.is_folder() {
            None
        } else {
            let encoded = req.data.as_deref().unwrap_or_default();
            let decoded = BASE64
                .decode(encoded)
                .map_err(|e| AppError::validation(format!("Invalid base64 data: {e}")))?;

            // The blob id is independent of the record id and fresh per upload.
            let blob_id = BlobId::new();
            let path = self
                .blobs
                .write(&blob_id.to_string(), Bytes::from(decoded))
                .await?;
            Some(path)
        };

        let record = self
            .files
            .insert(NewFileRecord {
                user_id: caller.user_id,
                name,
                file_type,
                is_public: req.is_public,
                parent_id,
                local_path,
            })
            .await?;

        info!(id = %record.id, kind = %record.file_type, "Created file record");
        Ok(record)
    }

    /// Looks up a record owned by `caller`. A missing record, a
    /// malformed id, and a record owned by someone else all yield the
    /// same `NotFound`.
    pub async fn get_record(&self, caller: &Caller, raw_id: &str) -> AppResult<FileRecord> {
        let id = parse_file_id(raw_id)?;
        self.files
            .find_owned(id, caller.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Lists `caller`'s records under a parent, paginated at a fixed 20
    /// per page. A parent reference that is not an identifier misses
    /// leniently with an empty result.
    pub async fn list_records(
        &self,
        caller: &Caller,
        parent: ParentRef,
        page: PageQuery,
    ) -> AppResult<Vec<FileRecord>> {
        let parent_id = match parent {
            ParentRef::Root => None,
            ParentRef::Id(id) => Some(id),
            ParentRef::Literal(_) => return Ok(Vec::new()),
        };

        self.files
            .list_children(caller.user_id, parent_id, &page)
            .await
    }

    /// Sets a record's visibility. Only the owner may toggle it; a
    /// non-owned record is as invisible as a missing one. An empty id
    /// on this path is `Unauthorized`, not `NotFound`.
    ///
    /// The flag is mutated and then the record is re-read under an
    /// ownership constraint before being returned.
    pub async fn set_public(
        &self,
        caller: &Caller,
        raw_id: &str,
        value: bool,
    ) -> AppResult<FileRecord> {
        if raw_id.is_empty() {
            return Err(AppError::unauthorized("Unauthorized"));
        }
        let id = parse_file_id(raw_id)?;

        let record = self
            .files
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))?;
        if !can_write(Some(caller), &record) {
            return Err(AppError::not_found("Not found"));
        }

        self.files.set_public(id, value).await?;

        self.files
            .find_owned(id, caller.user_id)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }
}
