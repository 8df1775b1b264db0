// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme keys for the entity viewer palette.
//!
//! Every color the viewer paints with can be themed through one of these
//! keys. Components resolve them once at construction and on explicit
//! refresh; any key the theme leaves unset falls back to the component's
//! built-in default. Embedders defining their own keys should start at
//! index 100 to stay clear of this palette.

use crate::ThemeKey;

/// Viewport background fill.
pub const BACKGROUND: ThemeKey = ThemeKey::new(0);

/// Line color for entities without a color override.
pub const DEFAULT_LINE: ThemeKey = ThemeKey::new(1);

/// Outline color for selected entities.
pub const SELECTION: ThemeKey = ThemeKey::new(2);

/// Outline color for the hovered entity.
pub const HOVER: ThemeKey = ThemeKey::new(3);

/// Minor grid lines.
pub const GRID_MINOR: ThemeKey = ThemeKey::new(4);

/// Major grid lines (every fifth).
pub const GRID_MAJOR: ThemeKey = ThemeKey::new(5);

/// The two world-axis lines through the origin.
pub const GRID_AXIS: ThemeKey = ThemeKey::new(6);

/// Interior fill of a window (left-to-right) marquee.
pub const MARQUEE_WINDOW_FILL: ThemeKey = ThemeKey::new(7);

/// Border of a window (left-to-right) marquee.
pub const MARQUEE_WINDOW_STROKE: ThemeKey = ThemeKey::new(8);

/// Interior fill of a crossing (right-to-left) marquee.
pub const MARQUEE_CROSSING_FILL: ThemeKey = ThemeKey::new(9);

/// Dashed border of a crossing (right-to-left) marquee.
pub const MARQUEE_CROSSING_STROKE: ThemeKey = ThemeKey::new(10);
