//! # filebox-database
//!
//! The document store for Filebox file records: the [`store::FileStore`]
//! trait, PostgreSQL connection management, migrations, and the concrete
//! Postgres and in-memory implementations.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod postgres;
pub mod store;

pub use memory::MemoryFileStore;
pub use postgres::PgFileStore;
pub use store::FileStore;
