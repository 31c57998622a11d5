//! # filebox-service
//!
//! Business logic for Filebox: the authorization rules, the file
//! hierarchy manager with record CRUD, and the content retrieval
//! resolver. Services operate purely on the injected store traits and
//! hold no cross-request state of their own.

pub mod access;
pub mod context;
pub mod file;

pub use context::Caller;
