//! Light/dark theme toggle.
//!
//! [`ThemeCore`] owns the theme field of the shared [`PageState`](crate::state::PageState)
//! and computes the toggle control's accessibility attributes. It never
//! touches the DOM; the browser layer writes the returned [`ToggleAttrs`].

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::state::{SharedState, Theme};

/// Attributes to write on the toggle control after a theme change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleAttrs {
    /// Value for `aria-pressed`; true while the light theme is active.
    pub pressed: bool,
    /// Value for `aria-label`, describing the theme a click switches to.
    pub label: &'static str,
}

impl ToggleAttrs {
    #[must_use]
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self { pressed: true, label: "Switch to dark theme" },
            Theme::Dark => Self { pressed: false, label: "Switch to light theme" },
        }
    }

    #[must_use]
    pub fn pressed_str(self) -> &'static str {
        if self.pressed { "true" } else { "false" }
    }
}

pub struct ThemeCore {
    state: SharedState,
}

impl ThemeCore {
    #[must_use]
    pub fn new(state: SharedState) -> Self {
        Self { state }
    }

    /// Adopt the theme found on the page root at load.
    pub fn initialize(&mut self, attr: Option<&str>) -> ToggleAttrs {
        self.apply(Theme::from_attr(attr))
    }

    /// Set the theme and return the toggle attributes that go with it.
    pub fn apply(&mut self, theme: Theme) -> ToggleAttrs {
        self.state.borrow_mut().theme = theme;
        ToggleAttrs::for_theme(theme)
    }

    /// Handle a click on the toggle control.
    pub fn toggle(&mut self) -> ToggleAttrs {
        let next = self.state().toggled();
        log::debug!("theme -> {}", next.as_str());
        self.apply(next)
    }

    #[must_use]
    pub fn state(&self) -> Theme {
        self.state.borrow().theme
    }

    pub fn set_state(&mut self, theme: Theme) {
        self.state.borrow_mut().theme = theme;
    }
}
