//! Page-count normalization

use crate::error::{PaginationError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Where the page count comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum PageCountSource {
    /// Page count known directly
    #[serde(rename_all = "camelCase")]
    Pages { page_count: u32 },
    /// Page count derived as `ceil(total_count / items_per_page)`
    #[serde(rename_all = "camelCase")]
    Items { total_count: u32, items_per_page: u32 },
}

impl PageCountSource {
    /// Explicit page count
    pub fn pages(page_count: u32) -> Self {
        Self::Pages { page_count }
    }

    /// Total item count split into pages of `items_per_page`
    pub fn items(total_count: u32, items_per_page: u32) -> Self {
        Self::Items {
            total_count,
            items_per_page,
        }
    }

    /// Pick a source from optional inputs.
    ///
    /// A non-zero `page_count` wins; otherwise both `total_count` and
    /// `items_per_page` must be present.
    pub fn from_parts(
        page_count: Option<u32>,
        total_count: Option<u32>,
        items_per_page: Option<u32>,
    ) -> Result<Self> {
        match (page_count, total_count, items_per_page) {
            (Some(page_count), _, _) if page_count > 0 => Ok(Self::pages(page_count)),
            (_, Some(total_count), Some(items_per_page)) => {
                Ok(Self::items(total_count, items_per_page))
            }
            (Some(_), _, _) => Err(PaginationError::not_positive("pageCount")),
            _ => Err(PaginationError::MissingPageCount),
        }
    }

    /// Resolve to one canonical page count
    pub fn page_count(&self) -> Result<u32> {
        match *self {
            Self::Pages { page_count: 0 } => Err(PaginationError::not_positive("pageCount")),
            Self::Pages { page_count } => Ok(page_count),
            Self::Items {
                items_per_page: 0, ..
            } => Err(PaginationError::not_positive("itemsPerPage")),
            Self::Items {
                total_count,
                items_per_page,
            } => {
                let page_count = total_count.div_ceil(items_per_page);
                debug!(total_count, items_per_page, page_count, "derived page count");
                Ok(page_count)
            }
        }
    }
}
