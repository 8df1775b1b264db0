// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved viewer colors.

use peniko::Color;
use tracery_style::{Theme, keys};

/// The full set of colors the viewer paints with.
///
/// A palette is resolved from a [`Theme`] once at construction and again on
/// every explicit theme refresh; between refreshes the fields are plain
/// state, so programmatic overrides (via the viewer's color setters or
/// direct assignment) stick until the next refresh reasserts theme values.
/// Keys missing from the theme fall back to the built-in colors below,
/// a light scheme with a blue window marquee and a green crossing marquee.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    /// Background fill behind everything.
    pub background: Color,
    /// Stroke color for entities without an explicit color.
    pub default_line: Color,
    /// Outline color for selected entities.
    pub selection: Color,
    /// Outline color for the hovered entity.
    pub hover: Color,
    /// Minor grid lines.
    pub grid_minor: Color,
    /// Major (every fifth) grid lines.
    pub grid_major: Color,
    /// The world-zero axis lines.
    pub grid_axis: Color,
    /// Interior fill of a window (left-to-right) marquee.
    pub marquee_window_fill: Color,
    /// Outline of a window marquee.
    pub marquee_window_stroke: Color,
    /// Interior fill of a crossing (right-to-left) marquee.
    pub marquee_crossing_fill: Color,
    /// Outline of a crossing marquee.
    pub marquee_crossing_stroke: Color,
}

impl Palette {
    /// Resolve every color from `theme`, using the built-in fallback for
    /// each key the theme does not define.
    #[must_use]
    pub fn resolve(theme: &Theme) -> Self {
        let color = |key, fallback| theme.color(key).unwrap_or(fallback);
        Self {
            background: color(keys::BACKGROUND, Color::WHITE),
            default_line: color(keys::DEFAULT_LINE, Color::BLACK),
            selection: color(keys::SELECTION, Color::from_rgba8(0, 120, 215, 180)),
            hover: color(keys::HOVER, Color::from_rgba8(255, 165, 0, 180)),
            grid_minor: color(keys::GRID_MINOR, Color::from_rgba8(0, 0, 0, 18)),
            grid_major: color(keys::GRID_MAJOR, Color::from_rgba8(0, 0, 0, 35)),
            grid_axis: color(keys::GRID_AXIS, Color::from_rgba8(0, 0, 0, 60)),
            marquee_window_fill: color(
                keys::MARQUEE_WINDOW_FILL,
                Color::from_rgba8(0, 120, 215, 40),
            ),
            marquee_window_stroke: color(
                keys::MARQUEE_WINDOW_STROKE,
                Color::from_rgba8(0, 120, 215, 160),
            ),
            marquee_crossing_fill: color(
                keys::MARQUEE_CROSSING_FILL,
                Color::from_rgba8(0, 180, 0, 40),
            ),
            marquee_crossing_stroke: color(
                keys::MARQUEE_CROSSING_STROKE,
                Color::from_rgba8(0, 180, 0, 160),
            ),
        }
    }
}

impl Default for Palette {
    /// The built-in fallback palette, as resolved from an empty theme.
    fn default() -> Self {
        Self::resolve(&Theme::default())
    }
}
