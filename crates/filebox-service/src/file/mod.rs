//! File record services: hierarchy management and content retrieval.

pub mod content;
pub mod service;

pub use content::{ContentService, FileContent};
pub use service::{CreateRecordRequest, FileService};

use filebox_core::error::AppError;
use filebox_core::result::AppResult;
use filebox_core::types::FileId;

/// Parse a path identifier, downgrading malformed input to `NotFound`
/// so an unparseable id never surfaces as an internal error.
pub(crate) fn parse_file_id(raw: &str) -> AppResult<FileId> {
    raw.parse()
        .map_err(|_| AppError::not_found("Not found"))
}
