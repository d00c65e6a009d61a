//! Caller-owned pagination state
//!
//! The current page lives with the caller. A `PaginationState` is a plain
//! value: after a navigation the caller replaces it with `with_page` and asks
//! for a fresh window.

mod source;

pub use source::PageCountSource;

use crate::error::Result;
use crate::view::NavControl;
use crate::window::{self, BoundaryFlags, PageWindow};
use serde::{Deserialize, Serialize};

/// Padding used when none is configured
pub const DEFAULT_PAGE_PADDING: u32 = 2;

/// Snapshot of the inputs to the window calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationState {
    /// Current page (1-based)
    pub page: u32,
    /// Total number of pages, 0 when unknown
    pub page_count: u32,
    /// Pages shown on each side of the current page
    pub page_padding: u32,
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            page: 1,
            page_count: 0,
            page_padding: DEFAULT_PAGE_PADDING,
        }
    }
}

impl PaginationState {
    /// Create a new state
    pub fn new(page: u32, page_count: u32, page_padding: u32) -> Self {
        Self {
            page,
            page_count,
            page_padding,
        }
    }

    /// Create a state, normalizing the page count from `source`
    pub fn resolve(page: u32, source: PageCountSource, page_padding: u32) -> Result<Self> {
        Ok(Self::new(page, source.page_count()?, page_padding))
    }

    /// Same state on a different page
    pub fn with_page(self, page: u32) -> Self {
        Self { page, ..self }
    }

    /// Same state with the page clamped into `[1, max(page_count, 1)]`
    pub fn clamped(self) -> Self {
        self.with_page(window::clamp_page(self.page, self.page_count))
    }

    /// Visible page window
    pub fn window(&self) -> PageWindow {
        window::compute_window(self.page, self.page_count, self.page_padding)
    }

    /// First/last flags for the current page
    pub fn flags(&self) -> BoundaryFlags {
        window::compute_boundary_flags(self.page, self.page_count)
    }

    pub fn first_page(&self) -> u32 {
        window::first_page()
    }

    pub fn prev_page(&self) -> u32 {
        window::prev_page(self.page)
    }

    pub fn next_page(&self) -> u32 {
        window::next_page(self.page, self.page_count)
    }

    pub fn last_page(&self) -> u32 {
        window::last_page(self.page_count)
    }

    /// Page a navigation control leads to.
    ///
    /// `Last` with an unknown page count stays on the current page.
    pub fn target(&self, control: NavControl) -> u32 {
        match control {
            NavControl::First => self.first_page(),
            NavControl::Prev => self.prev_page(),
            NavControl::Next => self.next_page(),
            NavControl::Last if self.page_count == 0 => self.page,
            NavControl::Last => self.last_page(),
        }
    }

    /// Follow a navigation control, returning the new state
    pub fn navigate(self, control: NavControl) -> Self {
        self.with_page(self.target(control))
    }
}
