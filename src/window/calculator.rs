//! Visible page window around the current page

use serde::Serialize;
use smallvec::SmallVec;
use tracing::trace;

/// Ascending run of page numbers; inline up to a padding of 3
pub type PageRun = SmallVec<[u32; 8]>;

/// Contiguous range of page numbers to display
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageWindow {
    /// Lowest page in the window (after clamping)
    pub min_page: u32,
    /// Highest page in the window (after clamping)
    pub max_page: u32,
    /// Pages `min_page..=max_page`, empty when `max_page < min_page`
    pub pages: PageRun,
}

impl PageWindow {
    /// Number of pages in the window
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// True when there is nothing to display (no pages at all)
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Check if a page number is shown in this window
    pub fn contains(&self, page: u32) -> bool {
        !self.is_empty() && page >= self.min_page && page <= self.max_page
    }

    /// Iterate over the visible page numbers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.pages.iter().copied()
    }
}

/// Compute the window of pages to show around `page`.
///
/// The window starts as `page ± page_padding`. Padding that falls below page 1
/// is moved to the top end first; whatever then overshoots `page_count` is
/// moved back to the bottom end, never below page 1. The two passes always run
/// in that order, so a tiny `page_count` with a large padding simply yields
/// `1..=page_count`.
pub fn compute_window(page: u32, page_count: u32, page_padding: u32) -> PageWindow {
    let page = i64::from(page);
    let padding = i64::from(page_padding);
    let last = i64::from(page_count);

    let mut min_page = page - padding;
    let mut max_page = page + padding;

    if min_page < 1 {
        max_page += 1 - min_page;
        min_page = 1;
    }

    if max_page > last {
        min_page = (min_page - (max_page - last)).max(1);
        max_page = last;
    }

    trace!(page, page_count, page_padding, min_page, max_page, "computed page window");

    // Both bounds now lie in [0, page_count]
    let min_page = min_page as u32;
    let max_page = max_page as u32;

    let pages = if max_page >= min_page {
        (min_page..=max_page).collect()
    } else {
        PageRun::new()
    };

    PageWindow {
        min_page,
        max_page,
        pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(window: &PageWindow) -> Vec<u32> {
        window.iter().collect()
    }

    #[test]
    fn test_centered_window() {
        let window = compute_window(5, 10, 2);
        assert_eq!(pages(&window), vec![3, 4, 5, 6, 7]);
        assert_eq!(window.min_page, 3);
        assert_eq!(window.max_page, 7);
    }

    #[test]
    fn test_borrows_padding_at_start() {
        let window = compute_window(1, 10, 2);
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5]);

        let window = compute_window(2, 10, 2);
        assert_eq!(pages(&window), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_borrows_padding_at_end() {
        let window = compute_window(10, 10, 2);
        assert_eq!(pages(&window), vec![6, 7, 8, 9, 10]);

        let window = compute_window(9, 10, 2);
        assert_eq!(pages(&window), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_no_pages() {
        let window = compute_window(5, 0, 2);
        assert!(window.is_empty());
        assert_eq!(window.len(), 0);
        assert!(window.max_page < window.min_page);
        assert!(!window.contains(1));
    }

    #[test]
    fn test_zero_padding() {
        let window = compute_window(4, 10, 0);
        assert_eq!(pages(&window), vec![4]);

        let window = compute_window(1, 0, 0);
        assert!(window.is_empty());
    }

    #[test]
    fn test_page_past_the_end_is_pulled_back() {
        assert_eq!(pages(&compute_window(20, 10, 2)), vec![6, 7, 8, 9, 10]);
        assert_eq!(pages(&compute_window(20, 10, 0)), vec![10]);
    }

    #[test]
    fn test_padding_wider_than_page_count() {
        assert_eq!(pages(&compute_window(2, 3, 5)), vec![1, 2, 3]);
        assert_eq!(pages(&compute_window(1, 1, 4)), vec![1]);
    }

    #[test]
    fn test_extreme_inputs_do_not_overflow() {
        let window = compute_window(u32::MAX, u32::MAX, 0);
        assert_eq!(pages(&window), vec![u32::MAX]);

        let window = compute_window(u32::MAX, 10, 1);
        assert_eq!(pages(&window), vec![8, 9, 10]);
    }

    #[test]
    fn test_contains() {
        let window = compute_window(5, 10, 1);
        assert!(window.contains(4));
        assert!(window.contains(6));
        assert!(!window.contains(3));
        assert!(!window.contains(7));
    }

    #[test]
    fn test_serializes_camel_case() {
        let json = serde_json::to_value(compute_window(1, 2, 1)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "minPage": 1, "maxPage": 2, "pages": [1, 2] })
        );
    }
}
