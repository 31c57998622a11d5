//! File record entity.

pub mod model;
pub mod parent;

pub use model::{FileRecord, FileType, NewFileRecord};
pub use parent::ParentRef;
