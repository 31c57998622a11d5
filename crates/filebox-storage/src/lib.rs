//! # filebox-storage
//!
//! Blob store implementations behind [`filebox_core::traits::BlobStore`]:
//! the local filesystem provider used in production and an in-memory
//! provider for tests.

pub mod local;
pub mod memory;

pub use local::LocalBlobStore;
pub use memory::MemoryBlobStore;
