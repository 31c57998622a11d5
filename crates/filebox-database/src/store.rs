//! Document store trait over the `files` collection.

use async_trait::async_trait;

use filebox_core::result::AppResult;
use filebox_core::types::{FileId, PageQuery, UserId};
use filebox_entity::file::{FileRecord, NewFileRecord};

/// Persistence operations over file records.
///
/// This is the full capability set the services need: insert,
/// find-by-id, owner-constrained find, paginated child listing, and a
/// visibility update. Services hold it as `Arc<dyn FileStore>` so tests
/// can inject [`crate::MemoryFileStore`].
#[async_trait]
pub trait FileStore: Send + Sync + 'static {
    /// Insert a new record and return it with its assigned id.
    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord>;

    /// Find a record by id alone, with no ownership constraint.
    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>>;

    /// Find a record constrained to `(id, owner)`. A miss here does not
    /// reveal whether the record exists under another owner.
    async fn find_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>>;

    /// List the records owned by `owner` under `parent` (`None` = root),
    /// in natural iteration order, paginated.
    async fn list_children(
        &self,
        owner: UserId,
        parent: Option<FileId>,
        page: &PageQuery,
    ) -> AppResult<Vec<FileRecord>>;

    /// Set the `is_public` flag on a record by id. Does not return the
    /// record; callers re-read it afterwards.
    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()>;

    /// Check whether the store is reachable.
    async fn health_check(&self) -> AppResult<bool>;
}
