//! Page-level state shared by the theme and monolith controllers.
//!
//! The browser layer mirrors every field onto `<body>` as a `data-*`
//! attribute so the stylesheet can react to it, but the source of truth is
//! the [`PageState`] value handed to each controller on construction.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::cell::RefCell;
use std::rc::Rc;

/// Light or dark color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Parse the root theme attribute. Anything other than `"light"` is dark.
    #[must_use]
    pub fn from_attr(attr: Option<&str>) -> Self {
        match attr {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Whether the monolith is open (`Active`) or closed (`Rest`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    Active,
    #[default]
    Rest,
}

impl Activation {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Rest => "rest",
        }
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        self == Self::Active
    }
}

/// Whether the navigation links are focusable and clickable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Links {
    Enabled,
    #[default]
    Disabled,
}

impl Links {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }

    #[must_use]
    pub fn from_enabled(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Everything the page knows about its interactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageState {
    pub theme: Theme,
    pub activation: Activation,
    pub links: Links,
}

/// Handle to the page state shared between controllers on the UI thread.
pub type SharedState = Rc<RefCell<PageState>>;

/// Create a fresh shared state with default values.
#[must_use]
pub fn shared() -> SharedState {
    Rc::new(RefCell::new(PageState::default()))
}
