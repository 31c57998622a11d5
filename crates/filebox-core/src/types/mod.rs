//! Shared domain-neutral types: typed identifiers and pagination.

pub mod id;
pub mod pagination;

pub use id::{BlobId, FileId, UserId};
pub use pagination::{PAGE_SIZE, PageQuery};
