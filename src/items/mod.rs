//! Item ranges for a page
//!
//! Maps a page number onto item indices, either to slice a local list or to
//! build an offset/limit request for a remote resource.

use crate::error::{PaginationError, Result};
use serde::Serialize;

/// Items per page used when none is configured
pub const DEFAULT_ITEMS_PER_PAGE: u32 = 10;

/// Half-open range `[offset, end)` of item indices on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRange {
    pub offset: u32,
    pub end: u32,
}

impl ItemRange {
    /// Range of items on `page`.
    ///
    /// Pages below 1 are treated as page 1. When `total_count` is known the
    /// range is clamped to it, so pages past the end are empty.
    pub fn for_page(page: u32, items_per_page: u32, total_count: Option<u32>) -> Result<Self> {
        if items_per_page == 0 {
            return Err(PaginationError::not_positive("itemsPerPage"));
        }

        let start = (page.max(1) - 1).saturating_mul(items_per_page);
        let end = start.saturating_add(items_per_page);

        let (offset, end) = match total_count {
            Some(total) => {
                let end = end.min(total);
                (start.min(end), end)
            }
            None => (start, end),
        };

        Ok(Self { offset, end })
    }

    /// Index of the first item
    pub fn offset(&self) -> u32 {
        self.offset
    }

    /// Number of items to request
    pub fn limit(&self) -> u32 {
        self.end - self.offset
    }

    pub fn len(&self) -> usize {
        self.limit() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.offset
    }

    /// Items of `items` that fall on this page
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let end = (self.end as usize).min(items.len());
        let start = (self.offset as usize).min(end);
        &items[start..end]
    }

    /// 1-based first and last item numbers, `None` when empty
    pub fn display_bounds(&self) -> Option<(u32, u32)> {
        if self.is_empty() {
            None
        } else {
            Some((self.offset + 1, self.end))
        }
    }
}
