//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use filebox_core::config::AppConfig;
use filebox_core::traits::{BlobStore, SessionStore};
use filebox_database::FileStore;
use filebox_service::file::{ContentService, FileService};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks; the stores are held as
/// trait objects so tests can run against in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Token-to-identity session store.
    pub sessions: Arc<dyn SessionStore>,
    /// File record document store.
    pub files: Arc<dyn FileStore>,
    /// File hierarchy service.
    pub file_service: Arc<FileService>,
    /// Content retrieval service.
    pub content_service: Arc<ContentService>,
}

impl AppState {
    /// Assemble state from the configured stores, wiring the services
    /// over them.
    pub fn new(
        config: Arc<AppConfig>,
        sessions: Arc<dyn SessionStore>,
        files: Arc<dyn FileStore>,
        blobs: Arc<dyn BlobStore>,
    ) -> Self {
        let file_service = Arc::new(FileService::new(files.clone(), blobs.clone()));
        let content_service = Arc::new(ContentService::new(files.clone(), blobs));
        Self {
            config,
            sessions,
            files,
            file_service,
            content_service,
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
