//! Elliptical row layout for the navigation links.
//!
//! The monolith is drawn as an ellipse inscribed in its bounding box. Each
//! link sits on a horizontal row; the row's usable width is the chord of the
//! ellipse at the link's vertical center, minus the nav gap on both sides.
//!
//! Measurements come from a [`LayoutMetrics`] implementation so the math can
//! run against fixed values in tests.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

use crate::consts::NAV_GAP_PROPERTY;

/// An axis-aligned box in CSS pixels, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// The ellipse inscribed in the monolith's bounding box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    /// Horizontal semi-axis.
    pub a: f64,
    /// Vertical semi-axis.
    pub b: f64,
    /// Vertical center in the same coordinate space as the link boxes.
    pub center_y: f64,
}

impl Ellipse {
    #[must_use]
    pub fn from_rect(rect: &Rect) -> Self {
        let a = rect.width / 2.0;
        let b = rect.height / 2.0;
        Self { a, b, center_y: rect.top + b }
    }

    /// Width of the horizontal chord at offset `y` from the center.
    ///
    /// Zero on or beyond the vertical extent, and for a degenerate ellipse.
    #[must_use]
    pub fn span_at(&self, y: f64) -> f64 {
        let ratio = 1.0 - (y * y) / (self.b * self.b);
        // NaN (b == 0) fails the comparison as well.
        if ratio > 0.0 { 2.0 * self.a * ratio.sqrt() } else { 0.0 }
    }
}

/// Inline sizing for one link row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowFit {
    /// `max-width` in pixels.
    pub max_width: f64,
    /// `padding-inline` in pixels, applied on both sides.
    pub padding_inline: f64,
}

/// Fit one link's row inside the ellipse.
#[must_use]
pub fn fit_row(ellipse: &Ellipse, link: &Rect, gap: f64) -> RowFit {
    let y = link.center_y() - ellipse.center_y;
    let span = ellipse.span_at(y);
    RowFit { max_width: (span - 2.0 * gap).max(0.0), padding_inline: gap }
}

/// Source of resolved style lengths.
pub trait LayoutMetrics {
    /// Resolve a custom property to a pixel length. Returns 0 when it cannot be resolved.
    fn resolve_pixel_length(&self, name: &str) -> f64;
}

/// Compute a [`RowFit`] for every link, in order.
#[must_use]
pub fn compute_row_widths(monolith: &Rect, links: &[Rect], metrics: &dyn LayoutMetrics) -> Vec<RowFit> {
    if links.is_empty() {
        return Vec::new();
    }
    let ellipse = Ellipse::from_rect(monolith);
    let gap = finite_or_zero(metrics.resolve_pixel_length(NAV_GAP_PROPERTY));
    links.iter().map(|link| fit_row(&ellipse, link, gap)).collect()
}

#[must_use]
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Read the leading number of a computed style value such as `"12.5px"`.
///
/// Mirrors `parseFloat`: leading whitespace is skipped and trailing units
/// are ignored. Anything unparsable or non-finite reads as 0.
#[must_use]
pub fn parse_css_px(raw: &str) -> f64 {
    let trimmed = raw.trim_start();
    let numeric_len = trimmed
        .char_indices()
        .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
        .map_or(trimmed.len(), |(i, _)| i);
    let candidate = &trimmed[..numeric_len];
    // Shrink until the prefix parses, e.g. "12e" -> "12".
    (1..=candidate.len())
        .rev()
        .find_map(|end| match candidate[..end].parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => None,
        })
        .map_or(0.0, finite_or_zero)
}

/// Format a length for an inline style property.
#[must_use]
pub fn px(value: f64) -> String {
    format!("{value}px")
}
