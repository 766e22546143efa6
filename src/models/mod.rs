// Domain models and query DTOs for the salon backend

pub mod auth;
pub mod promotion;
pub mod reservation;
pub mod service_group;

use serde::{Deserialize, Serialize};

pub(crate) fn default_page() -> u32 {
    1
}

pub(crate) fn default_per_page() -> u32 {
    20
}

/// Resolved pagination window.
///
/// Query DTOs carry their own `page`/`per_page` fields (query-string
/// deserialization does not flatten nested structs) and convert here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl Pagination {
    /// Zero-based offset of the first item on this page
    pub fn offset(&self) -> usize {
        ((self.page - 1) as usize).saturating_mul(self.per_page as usize)
    }
}

/// One page of catalog results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: u32,
    pub per_page: u32,
    pub total: usize,
}

impl<T> Page<T> {
    /// Slice a full, already-filtered result set down to one page
    pub fn from_filtered(mut items: Vec<T>, pagination: Pagination) -> Self {
        let total = items.len();
        let start = pagination.offset().min(total);
        let end = start
            .saturating_add(pagination.per_page as usize)
            .min(total);
        let items = items.drain(start..end).collect();

        Self {
            items,
            page: pagination.page,
            per_page: pagination.per_page,
            total,
        }
    }
}
