//! Shared constants for the site crate.

// ── Markup contract ─────────────────────────────────────────────

/// Body class marking a content page that carries the theme toggle.
pub const PAGE_CLASS: &str = "page";

/// Body class marking the home document that carries the monolith.
pub const HOME_CLASS: &str = "home";

/// Selector for the theme toggle control.
pub const THEME_TOGGLE_SELECTOR: &str = "[data-theme-toggle]";

/// Element id of the monolith.
pub const MONOLITH_ID: &str = "monolith";

/// Selector for the container holding the navigation links.
pub const LINKS_CONTAINER_SELECTOR: &str = ".monolith__links";

/// Selector for the navigation links themselves.
pub const NAV_LINK_SELECTOR: &str = ".monolith__links a";

/// File name of the home document.
pub const HOME_DOCUMENT: &str = "index.html";

// ── Attributes ──────────────────────────────────────────────────

pub const THEME_ATTR: &str = "data-theme";
pub const STATE_ATTR: &str = "data-state";
pub const LINKS_ATTR: &str = "data-links";

// ── Layout ──────────────────────────────────────────────────────

/// Custom property supplying the horizontal gap between a link and the ellipse edge.
pub const NAV_GAP_PROPERTY: &str = "--nav-gap";

// ── Timing ──────────────────────────────────────────────────────

/// Length of the open/close transition in milliseconds. Must match `--transition-ms` in the stylesheet.
pub const TRANSITION_MS: u32 = 650;

/// Fraction of the transition after which revealed links become interactive.
pub const ENABLE_DELAY_RATIO: f64 = 0.35;

/// Media query for the user's reduced-motion preference.
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";
