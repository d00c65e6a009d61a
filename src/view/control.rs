//! Navigation controls and their display settings

use crate::error::{PaginationError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default label of the "first" control
pub const FIRST_LABEL: &str = "«« First";
/// Default label of the "prev" control
pub const PREV_LABEL: &str = "« Prev";
/// Default label of the "next" control
pub const NEXT_LABEL: &str = "Next »";
/// Default label of the "last" control
pub const LAST_LABEL: &str = "Last »»";

/// One of the four navigation buttons around the page run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NavControl {
    First,
    Prev,
    Next,
    Last,
}

impl NavControl {
    /// Controls in display order
    pub const ALL: [NavControl; 4] = [Self::First, Self::Prev, Self::Next, Self::Last];

    /// Label used when no custom text is configured
    pub fn default_label(self) -> &'static str {
        match self {
            Self::First => FIRST_LABEL,
            Self::Prev => PREV_LABEL,
            Self::Next => NEXT_LABEL,
            Self::Last => LAST_LABEL,
        }
    }

    /// Numeric code used by the flat buffer
    pub fn code(self) -> u32 {
        match self {
            Self::First => 0,
            Self::Prev => 1,
            Self::Next => 2,
            Self::Last => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Prev => "prev",
            Self::Next => "next",
            Self::Last => "last",
        }
    }

    /// Whether the control sits before the page run
    pub fn is_leading(self) -> bool {
        matches!(self, Self::First | Self::Prev)
    }
}

impl fmt::Display for NavControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NavControl {
    type Err = PaginationError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "firstbtn" => Ok(Self::First),
            "prev" | "previous" | "prevbtn" => Ok(Self::Prev),
            "next" | "nextbtn" => Ok(Self::Next),
            "last" | "lastbtn" => Ok(Self::Last),
            _ => Err(PaginationError::unknown_control(s)),
        }
    }
}

/// How a navigation control is presented
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControlSetting {
    /// Shown with this label, disabled only at the matching boundary
    Enabled(String),
    /// Shown with the default label, never actionable
    Disabled,
    /// Not shown
    Hidden,
}

impl ControlSetting {
    /// Enabled with the control's default label
    pub fn default_for(control: NavControl) -> Self {
        Self::Enabled(control.default_label().to_string())
    }

    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::Hidden)
    }
}

/// Settings for all four controls
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlSettings {
    pub first: ControlSetting,
    pub prev: ControlSetting,
    pub next: ControlSetting,
    pub last: ControlSetting,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            first: ControlSetting::default_for(NavControl::First),
            prev: ControlSetting::default_for(NavControl::Prev),
            next: ControlSetting::default_for(NavControl::Next),
            last: ControlSetting::default_for(NavControl::Last),
        }
    }
}

impl ControlSettings {
    pub fn get(&self, control: NavControl) -> &ControlSetting {
        match control {
            NavControl::First => &self.first,
            NavControl::Prev => &self.prev,
            NavControl::Next => &self.next,
            NavControl::Last => &self.last,
        }
    }

    pub fn set(&mut self, control: NavControl, setting: ControlSetting) {
        match control {
            NavControl::First => self.first = setting,
            NavControl::Prev => self.prev = setting,
            NavControl::Next => self.next = setting,
            NavControl::Last => self.last = setting,
        }
    }
}

/// Control setting as written in JSON: a flag, a label, or `{ "disabled": true }`
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawControl {
    Flag(bool),
    Label(String),
    State { disabled: bool },
}

impl RawControl {
    pub(crate) fn into_setting(self, control: NavControl) -> ControlSetting {
        match self {
            Self::Flag(false) => ControlSetting::Hidden,
            Self::Label(label) if label.is_empty() => ControlSetting::Hidden,
            Self::Label(label) => ControlSetting::Enabled(label),
            Self::State { disabled: true } => ControlSetting::Disabled,
            Self::Flag(true) | Self::State { disabled: false } => {
                ControlSetting::default_for(control)
            }
        }
    }
}
