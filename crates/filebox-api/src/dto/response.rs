//! Response body DTOs.

use serde::{Serialize, Serializer};

use filebox_core::types::FileId;
use filebox_entity::file::{FileRecord, FileType};

/// Wire representation of a file record.
///
/// `parentId` serializes asymmetrically: the number `0` for root
/// records and the identifier string otherwise, matching what clients
/// submitted at creation time. The storage path is internal and never
/// appears here.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileResponse {
    pub id: FileId,
    pub user_id: filebox_core::types::UserId,
    pub name: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub is_public: bool,
    #[serde(serialize_with = "serialize_parent_id")]
    pub parent_id: Option<FileId>,
}

impl From<FileRecord> for FileResponse {
    fn from(record: FileRecord) -> Self {
        Self {
            id: record.id,
            user_id: record.user_id,
            name: record.name,
            file_type: record.file_type,
            is_public: record.is_public,
            parent_id: record.parent_id,
        }
    }
}

fn serialize_parent_id<S: Serializer>(
    value: &Option<FileId>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match value {
        Some(id) => serializer.collect_str(id),
        None => serializer.serialize_u64(0),
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Session store reachability.
    pub redis: bool,
    /// Document store reachability.
    pub db: bool,
}
