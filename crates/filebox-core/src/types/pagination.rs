//! Pagination types for listing endpoints.
//!
//! Listings use a fixed page size of 20 records and zero-based page
//! numbers. There is no total count and no sort guarantee beyond the
//! document store's natural iteration order.

use serde::{Deserialize, Serialize};

/// Fixed number of records per listing page.
pub const PAGE_SIZE: u64 = 20;

/// A zero-based page selector for paginated queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page number (0-based).
    #[serde(default)]
    pub page: u64,
}

impl PageQuery {
    /// Create a page query for the given zero-based page.
    pub fn new(page: u64) -> Self {
        Self { page }
    }

    /// Number of records to skip before this page starts. Saturates so
    /// an absurd page number yields an empty page instead of a panic.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(PAGE_SIZE)
    }

    /// Maximum number of records on this page.
    pub fn limit(&self) -> u64 {
        PAGE_SIZE
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self { page: 0 }
    }
}
