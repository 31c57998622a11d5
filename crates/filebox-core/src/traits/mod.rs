//! Store traits implemented by the infrastructure crates.
//!
//! Services receive these as `Arc<dyn ...>` so that tests can substitute
//! deterministic in-memory fakes.

pub mod session;
pub mod storage;

pub use session::SessionStore;
pub use storage::BlobStore;
