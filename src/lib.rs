//! Page-Window: the arithmetic behind a pagination control
//!
//! This crate provides a pure, stateless pagination core with:
//! - Page window computation (padding borrowed across the ends of the range)
//! - Boundary flags and first/prev/next/last navigation targets
//! - Page-count normalization from page or item counts
//! - A render-ready view model and a flat buffer encoding for WASM
//!
//! The current page is owned by the caller. Every call takes the full input
//! and returns a fresh value, so nothing here needs synchronization.

pub mod config;
pub mod error;
pub mod items;
pub mod state;
pub mod view;
pub mod wasm;
pub mod window;

// Re-export WASM types for direct use
pub use wasm::WasmPagination;

// Re-export primary types
pub use config::PaginationConfig;
pub use error::{PaginationError, Result};
pub use items::ItemRange;
pub use state::{PageCountSource, PaginationState};
pub use view::{ControlSetting, ControlSettings, NavControl, PageItem, PaginationView};
pub use window::{
    clamp_page, compute_boundary_flags, compute_window, first_page, last_page, next_page,
    prev_page, BoundaryFlags, PageWindow,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_browse_item_list() {
        let items: Vec<u32> = (1..=45).collect();
        let config = PaginationConfig::default();

        let mut state = config.state_for_items(1, items.len() as u32).unwrap();
        assert_eq!(state.page_count, 5);

        state = state.navigate(NavControl::Last);
        let range = config.item_range(state.page, Some(45)).unwrap();
        assert_eq!(range.slice(&items), &items[40..]);

        let view = PaginationView::build(&state, &config);
        assert!(view.flags.is_last_page);
        assert_eq!(view.window.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let state = PaginationState::new(6, 12, 2);
        let config = PaginationConfig::default();
        assert_eq!(state.window(), state.window());
        assert_eq!(
            PaginationView::build(&state, &config),
            PaginationView::build(&state, &config)
        );
    }
}
