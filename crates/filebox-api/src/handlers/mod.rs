//! HTTP request handlers.

pub mod file;
pub mod health;
