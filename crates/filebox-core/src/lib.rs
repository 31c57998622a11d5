//! # filebox-core
//!
//! Core crate for Filebox. Contains the injected-store traits,
//! configuration schemas, typed identifiers, pagination types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Filebox crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
