//! # filebox-auth
//!
//! Session store implementations. Token issuance lives outside this
//! service; this crate only resolves already-issued tokens to user
//! identities.

pub mod session;

pub use session::memory::MemorySessionStore;
pub use session::redis::RedisSessionStore;
