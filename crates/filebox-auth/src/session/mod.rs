//! Session store providers.

pub mod memory;
pub mod redis;
