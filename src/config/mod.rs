//! Pagination control configuration

use crate::error::{PaginationError, Result};
use crate::items::{ItemRange, DEFAULT_ITEMS_PER_PAGE};
use crate::state::{PageCountSource, PaginationState, DEFAULT_PAGE_PADDING};
use crate::view::{ControlSettings, NavControl, RawControl};
use serde::Deserialize;
use tracing::warn;

/// Settings shared by every render of one pagination control
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawConfig")]
pub struct PaginationConfig {
    /// Pages shown on each side of the current page
    pub page_padding: u32,
    /// Page size used when the page count is derived from an item total
    pub items_per_page: u32,
    /// Only show the navigation controls, no page numbers
    pub simple: bool,
    pub controls: ControlSettings,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            page_padding: DEFAULT_PAGE_PADDING,
            items_per_page: DEFAULT_ITEMS_PER_PAGE,
            simple: false,
            controls: ControlSettings::default(),
        }
    }
}

impl PaginationConfig {
    /// Parse a config from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| {
            warn!(error = %e, "rejected pagination config");
            PaginationError::json("pagination config", e)
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check counts that must be positive
    pub fn validate(&self) -> Result<()> {
        if self.items_per_page == 0 {
            warn!("rejected pagination config with zero items per page");
            return Err(PaginationError::not_positive("itemsPerPage"));
        }
        Ok(())
    }

    /// State for `page` with an explicit page count
    pub fn state(&self, page: u32, page_count: u32) -> PaginationState {
        PaginationState::new(page, page_count, self.page_padding)
    }

    /// State for `page` with the page count derived from `total_count`
    pub fn state_for_items(&self, page: u32, total_count: u32) -> Result<PaginationState> {
        PaginationState::resolve(
            page,
            PageCountSource::items(total_count, self.items_per_page),
            self.page_padding,
        )
    }

    /// Items shown on `page`
    pub fn item_range(&self, page: u32, total_count: Option<u32>) -> Result<ItemRange> {
        ItemRange::for_page(page, self.items_per_page, total_count)
    }
}

/// Config as written in JSON, with the legacy control shapes
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct RawConfig {
    page_padding: Option<u32>,
    items_per_page: Option<u32>,
    simple: bool,
    first_btn: Option<RawControl>,
    prev_btn: Option<RawControl>,
    next_btn: Option<RawControl>,
    last_btn: Option<RawControl>,
}

impl From<RawConfig> for PaginationConfig {
    fn from(raw: RawConfig) -> Self {
        let mut controls = ControlSettings::default();
        let settings = [
            (NavControl::First, raw.first_btn),
            (NavControl::Prev, raw.prev_btn),
            (NavControl::Next, raw.next_btn),
            (NavControl::Last, raw.last_btn),
        ];
        for (control, setting) in settings {
            if let Some(setting) = setting {
                controls.set(control, setting.into_setting(control));
            }
        }

        Self {
            page_padding: raw.page_padding.unwrap_or(DEFAULT_PAGE_PADDING),
            items_per_page: raw.items_per_page.unwrap_or(DEFAULT_ITEMS_PER_PAGE),
            simple: raw.simple,
            controls,
        }
    }
}
