//! In-memory file store for deterministic tests.

use std::sync::RwLock;

use async_trait::async_trait;

use filebox_core::error::AppError;
use filebox_core::result::AppResult;
use filebox_core::types::{FileId, PageQuery, UserId};
use filebox_entity::file::{FileRecord, NewFileRecord};

use crate::store::FileStore;

/// File store keeping records in insertion order in process memory.
///
/// Natural iteration order is insertion order, which stands in for the
/// database's unordered scan in tests.
#[derive(Debug, Default)]
pub struct MemoryFileStore {
    records: RwLock<Vec<FileRecord>>,
}

impl MemoryFileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<FileRecord>> {
        self.records.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<FileRecord>> {
        self.records.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl FileStore for MemoryFileStore {
    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        let record = FileRecord {
            id: FileId::new(),
            user_id: record.user_id,
            name: record.name,
            file_type: record.file_type,
            is_public: record.is_public,
            parent_id: record.parent_id,
            local_path: record.local_path,
        };
        self.write().push(record.clone());
        Ok(record)
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        Ok(self.read().iter().find(|r| r.id == id).cloned())
    }

    async fn find_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>> {
        Ok(self
            .read()
            .iter()
            .find(|r| r.id == id && r.user_id == owner)
            .cloned())
    }

    async fn list_children(
        &self,
        owner: UserId,
        parent: Option<FileId>,
        page: &PageQuery,
    ) -> AppResult<Vec<FileRecord>> {
        Ok(self
            .read()
            .iter()
            .filter(|r| r.user_id == owner && r.parent_id == parent)
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .cloned()
            .collect())
    }

    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()> {
        let mut records = self.write();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.is_public = value;
                Ok(())
            }
            None => Err(AppError::database(format!("No record with id {id}"))),
        }
    }

    async fn health_check(&self) -> AppResult<bool> {
        Ok(true)
    }
}
