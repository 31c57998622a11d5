//! PostgreSQL file store implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use filebox_core::error::{AppError, ErrorKind};
use filebox_core::result::AppResult;
use filebox_core::types::{FileId, PageQuery, UserId};
use filebox_entity::file::{FileRecord, NewFileRecord};

use crate::store::FileStore;

/// File store backed by the `files` table in PostgreSQL.
#[derive(Debug, Clone)]
pub struct PgFileStore {
    pool: PgPool,
}

impl PgFileStore {
    /// Create a new store over an existing pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FileStore for PgFileStore {
    async fn insert(&self, record: NewFileRecord) -> AppResult<FileRecord> {
        sqlx::query_as::<_, FileRecord>(
            "INSERT INTO files (user_id, name, type, is_public, parent_id, local_path) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(record.user_id)
        .bind(&record.name)
        .bind(record.file_type)
        .bind(record.is_public)
        .bind(record.parent_id)
        .bind(&record.local_path)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to insert file", e))
    }

    async fn find_by_id(&self, id: FileId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find file", e))
    }

    async fn find_owned(&self, id: FileId, owner: UserId) -> AppResult<Option<FileRecord>> {
        sqlx::query_as::<_, FileRecord>("SELECT * FROM files WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find file by owner", e)
            })
    }

    async fn list_children(
        &self,
        owner: UserId,
        parent: Option<FileId>,
        page: &PageQuery,
    ) -> AppResult<Vec<FileRecord>> {
        sqlx::query_as::<_, FileRecord>(
            "SELECT * FROM files \
             WHERE user_id = $1 AND parent_id IS NOT DISTINCT FROM $2 \
             LIMIT $3 OFFSET $4",
        )
        .bind(owner)
        .bind(parent)
        .bind(page.limit() as i64)
        .bind(page.offset().min(i64::MAX as u64) as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list files", e))
    }

    async fn set_public(&self, id: FileId, value: bool) -> AppResult<()> {
        sqlx::query("UPDATE files SET is_public = $2 WHERE id = $1")
            .bind(id)
            .bind(value)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to update visibility", e)
            })?;
        Ok(())
    }

    async fn health_check(&self) -> AppResult<bool> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await
            .map(|v| v == 1)
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Health check failed", e))
    }
}
