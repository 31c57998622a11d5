//! Integration test suite entry point.
//!
//! Tests run against the full router wired over in-memory stores, so no
//! Postgres or Redis instance is needed.

mod helpers;

mod content_test;
mod health_test;
mod upload_test;
