//! Boundary flags and first/prev/next/last navigation targets

use serde::Serialize;

/// Whether the current page sits on either end of the page range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundaryFlags {
    pub is_first_page: bool,
    /// Always false while the page count is unknown (zero)
    pub is_last_page: bool,
}

impl BoundaryFlags {
    /// Pack into bits: bit 0 = first, bit 1 = last
    pub fn bits(&self) -> u32 {
        u32::from(self.is_first_page) | (u32::from(self.is_last_page) << 1)
    }
}

/// Compute first/last flags for `page`
pub fn compute_boundary_flags(page: u32, page_count: u32) -> BoundaryFlags {
    BoundaryFlags {
        is_first_page: page <= 1,
        is_last_page: page_count > 0 && page >= page_count,
    }
}

/// Target of the "first" control
pub const fn first_page() -> u32 {
    1
}

/// Target of the "prev" control, never below 1
pub fn prev_page(page: u32) -> u32 {
    page.saturating_sub(1).max(1)
}

/// Target of the "next" control.
///
/// Clamped to `page_count` when it is known; with an unknown (zero) count
/// this is just `page + 1`.
pub fn next_page(page: u32, page_count: u32) -> u32 {
    let next = page.saturating_add(1);
    if page_count > 0 {
        next.min(page_count)
    } else {
        next
    }
}

/// Target of the "last" control. Callers guard `page_count > 0`.
pub fn last_page(page_count: u32) -> u32 {
    page_count
}

/// Clamp a page into `[1, max(page_count, 1)]`
pub fn clamp_page(page: u32, page_count: u32) -> u32 {
    page.clamp(1, page_count.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_flags() {
        assert_eq!(
            compute_boundary_flags(1, 10),
            BoundaryFlags {
                is_first_page: true,
                is_last_page: false
            }
        );
        assert_eq!(
            compute_boundary_flags(10, 10),
            BoundaryFlags {
                is_first_page: false,
                is_last_page: true
            }
        );
        assert_eq!(
            compute_boundary_flags(5, 10),
            BoundaryFlags::default()
        );
    }

    #[test]
    fn test_unknown_page_count_is_never_last() {
        let flags = compute_boundary_flags(7, 0);
        assert!(!flags.is_last_page);
        assert!(!flags.is_first_page);
    }

    #[test]
    fn test_single_page_is_both_ends() {
        let flags = compute_boundary_flags(1, 1);
        assert!(flags.is_first_page && flags.is_last_page);
        assert_eq!(flags.bits(), 0b11);
    }

    #[test]
    fn test_next_page() {
        assert_eq!(next_page(3, 10), 4);
        assert_eq!(next_page(10, 10), 10);
        assert_eq!(next_page(12, 10), 10);
        assert_eq!(next_page(3, 0), 4);
        assert_eq!(next_page(u32::MAX, 0), u32::MAX);
    }

    #[test]
    fn test_prev_page() {
        assert_eq!(prev_page(5), 4);
        assert_eq!(prev_page(1), 1);
        assert_eq!(prev_page(0), 1);
    }

    #[test]
    fn test_first_and_last() {
        assert_eq!(first_page(), 1);
        assert_eq!(last_page(42), 42);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 10), 1);
        assert_eq!(clamp_page(11, 10), 10);
        assert_eq!(clamp_page(5, 10), 5);
        assert_eq!(clamp_page(3, 0), 1);
    }
}
