//! File record model.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use filebox_core::types::{FileId, UserId};

/// The type of a file record.
///
/// `Folder` records are containers with no byte content; `File` and
/// `Image` records are leaves backed by a blob. The type is immutable
/// after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "file_type", rename_all = "lowercase")]
pub enum FileType {
    /// A container; holds child records, never bytes.
    Folder,
    /// A regular file backed by a blob.
    File,
    /// An image backed by a blob.
    Image,
}

impl FileType {
    /// Parse a wire-format type string. Anything outside the three
    /// variants is rejected.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "folder" => Some(Self::Folder),
            "file" => Some(Self::File),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Whether this record type is a container.
    pub fn is_folder(&self) -> bool {
        matches!(self, Self::Folder)
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Folder => write!(f, "folder"),
            Self::File => write!(f, "file"),
            Self::Image => write!(f, "image"),
        }
    }
}

/// A metadata record representing a folder or a file/image.
///
/// Records are created exactly once via upload, never deleted, and the
/// only mutable field post-creation is `is_public`. `local_path` is an
/// opaque handle into the blob store; it is present only on `file`/`image`
/// records and is never serialized into responses.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Unique record identifier, assigned by the document store.
    pub id: FileId,
    /// The owning user.
    pub user_id: UserId,
    /// Display name. Unvalidated for uniqueness or path-safety.
    pub name: String,
    /// Record type; immutable after creation.
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub file_type: FileType,
    /// Whether non-owners may read this record's content.
    pub is_public: bool,
    /// Parent folder, or `None` for the root sentinel.
    #[serde(default)]
    pub parent_id: Option<FileId>,
    /// Blob store path; present only on `file`/`image` records.
    #[serde(skip_serializing, default)]
    pub local_path: Option<String>,
}

/// Data required to insert a new file record. The document store assigns
/// the `id`.
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// The owning user (the resolved caller at creation time).
    pub user_id: UserId,
    /// Display name.
    pub name: String,
    /// Record type.
    pub file_type: FileType,
    /// Initial visibility.
    pub is_public: bool,
    /// Parent folder, or `None` for the root sentinel.
    pub parent_id: Option<FileId>,
    /// Blob store path for `file`/`image` records.
    pub local_path: Option<String>,
}
