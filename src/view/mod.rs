//! Render-ready view model of a pagination control
//!
//! The view lists what a front end should draw, in order, with every label,
//! state and navigation target already resolved. It carries no markup.

mod control;

pub use control::{
    ControlSetting, ControlSettings, NavControl, FIRST_LABEL, LAST_LABEL, NEXT_LABEL, PREV_LABEL,
};
pub(crate) use control::RawControl;

use crate::config::PaginationConfig;
use crate::error::{PaginationError, Result};
use crate::state::PaginationState;
use crate::window::{BoundaryFlags, PageWindow};
use serde::Serialize;
use tracing::debug;

/// A single entry of the pagination control
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum PageItem {
    /// First/prev/next/last button
    Control {
        control: NavControl,
        label: String,
        disabled: bool,
        target: u32,
    },
    /// Numbered page button
    Page { number: u32, active: bool },
}

impl PageItem {
    /// Page this item navigates to
    pub fn target(&self) -> u32 {
        match self {
            Self::Control { target, .. } => *target,
            Self::Page { number, .. } => *number,
        }
    }

    pub fn is_page(&self) -> bool {
        matches!(self, Self::Page { .. })
    }
}

/// Everything needed to draw the control for one state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationView {
    pub page: u32,
    pub page_count: u32,
    pub simple: bool,
    pub flags: BoundaryFlags,
    pub window: PageWindow,
    pub items: Vec<PageItem>,
}

impl PaginationView {
    /// Build the view for `state` using the control settings of `config`
    pub fn build(state: &PaginationState, config: &PaginationConfig) -> Self {
        let flags = state.flags();
        let window = state.window();

        let mut items = Vec::with_capacity(window.len() + NavControl::ALL.len());
        let controls = |leading: bool| {
            NavControl::ALL
                .into_iter()
                .filter(move |control| control.is_leading() == leading)
                .filter_map(move |control| control_item(state, flags, control, config))
        };

        items.extend(controls(true));
        if !config.simple {
            items.extend(window.iter().map(|number| PageItem::Page {
                number,
                active: number == state.page,
            }));
        }
        items.extend(controls(false));

        debug!(
            page = state.page,
            page_count = state.page_count,
            items = items.len(),
            "built pagination view"
        );

        Self {
            page: state.page,
            page_count: state.page_count,
            simple: config.simple,
            flags,
            window,
            items,
        }
    }

    /// Control items only, in display order
    pub fn controls(&self) -> impl Iterator<Item = &PageItem> {
        self.items.iter().filter(|item| !item.is_page())
    }

    /// Numbered page items only
    pub fn pages(&self) -> impl Iterator<Item = &PageItem> {
        self.items.iter().filter(|item| item.is_page())
    }

    /// Find the control item for `control`, if shown
    pub fn control(&self, control: NavControl) -> Option<&PageItem> {
        self.items.iter().find(
            |item| matches!(item, PageItem::Control { control: c, .. } if *c == control),
        )
    }

    /// Serialize to JSON for the JavaScript side
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| PaginationError::json("pagination view", e))
    }
}

fn control_item(
    state: &PaginationState,
    flags: BoundaryFlags,
    control: NavControl,
    config: &PaginationConfig,
) -> Option<PageItem> {
    let (label, always_disabled) = match config.controls.get(control) {
        ControlSetting::Hidden => return None,
        ControlSetting::Enabled(label) => (label.clone(), false),
        ControlSetting::Disabled => (control.default_label().to_string(), true),
    };

    let at_boundary = match control {
        NavControl::First | NavControl::Prev => flags.is_first_page,
        NavControl::Next => flags.is_last_page,
        // Nowhere to jump while the page count is unknown
        NavControl::Last => flags.is_last_page || state.page_count == 0,
    };

    Some(PageItem::Control {
        control,
        label,
        disabled: always_disabled || at_boundary,
        target: state.target(control),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_numbers(view: &PaginationView) -> Vec<u32> {
        view.pages().map(PageItem::target).collect()
    }

    fn is_disabled(view: &PaginationView, control: NavControl) -> bool {
        match view.control(control) {
            Some(PageItem::Control { disabled, .. }) => *disabled,
            _ => panic!("control {control} not shown"),
        }
    }

    #[test]
    fn test_default_view_layout() {
        let state = PaginationState::new(1, 10, 2);
        let view = PaginationView::build(&state, &PaginationConfig::default());

        assert_eq!(view.items.len(), 9);
        assert_eq!(page_numbers(&view), vec![1, 2, 3, 4, 5]);
        assert!(matches!(
            view.items[0],
            PageItem::Control {
                control: NavControl::First,
                ..
            }
        ));
        assert!(matches!(
            view.items[8],
            PageItem::Control {
                control: NavControl::Last,
                target: 10,
                ..
            }
        ));
        assert_eq!(
            view.items[2],
            PageItem::Page {
                number: 1,
                active: true
            }
        );
    }

    #[test]
    fn test_disabled_at_first_page() {
        let view = PaginationView::build(
            &PaginationState::new(1, 10, 2),
            &PaginationConfig::default(),
        );
        assert!(is_disabled(&view, NavControl::First));
        assert!(is_disabled(&view, NavControl::Prev));
        assert!(!is_disabled(&view, NavControl::Next));
        assert!(!is_disabled(&view, NavControl::Last));
    }

    #[test]
    fn test_disabled_at_last_page() {
        let view = PaginationView::build(
            &PaginationState::new(10, 10, 2),
            &PaginationConfig::default(),
        );
        assert!(!is_disabled(&view, NavControl::First));
        assert!(is_disabled(&view, NavControl::Next));
        assert!(is_disabled(&view, NavControl::Last));
        assert_eq!(view.control(NavControl::Next).map(PageItem::target), Some(10));
    }

    #[test]
    fn test_simple_mode_has_no_pages() {
        let config = PaginationConfig {
            simple: true,
            ..PaginationConfig::default()
        };
        let view = PaginationView::build(&PaginationState::new(3, 10, 2), &config);
        assert_eq!(view.pages().count(), 0);
        assert_eq!(view.controls().count(), 4);
        assert_eq!(view.window.len(), 5);
    }

    #[test]
    fn test_hidden_and_disabled_settings() {
        let mut config = PaginationConfig::default();
        config.controls.set(NavControl::First, ControlSetting::Hidden);
        config.controls.set(NavControl::Last, ControlSetting::Hidden);
        config.controls.set(NavControl::Next, ControlSetting::Disabled);
        config
            .controls
            .set(NavControl::Prev, ControlSetting::Enabled("Back".to_string()));

        let view = PaginationView::build(&PaginationState::new(5, 10, 1), &config);
        assert!(view.control(NavControl::First).is_none());
        assert!(view.control(NavControl::Last).is_none());
        assert!(is_disabled(&view, NavControl::Next));
        assert!(matches!(
            view.control(NavControl::Prev),
            Some(PageItem::Control { label, disabled: false, target: 4, .. }) if label == "Back"
        ));
        assert!(matches!(
            view.control(NavControl::Next),
            Some(PageItem::Control { label, .. }) if label == NEXT_LABEL
        ));
    }

    #[test]
    fn test_unknown_page_count() {
        let view = PaginationView::build(
            &PaginationState::new(2, 0, 2),
            &PaginationConfig::default(),
        );
        assert_eq!(view.pages().count(), 0);
        assert!(!is_disabled(&view, NavControl::Next));
        assert!(is_disabled(&view, NavControl::Last));
        assert_eq!(view.control(NavControl::Next).map(PageItem::target), Some(3));
    }

    #[test]
    fn test_json_shape() {
        let view = PaginationView::build(
            &PaginationState::new(1, 1, 0),
            &PaginationConfig::default(),
        );
        let json: serde_json::Value = serde_json::from_str(&view.to_json().unwrap()).unwrap();
        assert_eq!(json["pageCount"], 1);
        assert_eq!(json["flags"]["isLastPage"], true);
        assert_eq!(json["items"][0]["type"], "control");
        assert_eq!(json["items"][0]["control"], "first");
        assert_eq!(json["items"][2]["type"], "page");
        assert_eq!(json["items"][2]["active"], true);
    }
}
