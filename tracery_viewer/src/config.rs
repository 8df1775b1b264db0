// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable viewer behavior.

/// Tunable knobs for a [`Viewer`](crate::Viewer).
///
/// All fields are plain data; construct one with struct-update syntax over
/// [`ViewerConfig::default`] and pass it to
/// [`Viewer::with_config`](crate::Viewer::with_config), or adjust a live
/// viewer through its setters. Values are stored as given; the paint and
/// pick paths clamp degenerate values defensively where they are consumed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewerConfig {
    /// Desired on-screen distance between adjacent grid lines, in pixels.
    ///
    /// The world-space spacing is snapped to the `{1, 2, 5} × 10^k` ladder
    /// for the current zoom, so the rendered spacing only approximates this.
    pub grid_spacing_px: f64,
    /// Pick slop radius in screen pixels, shared by hover, click, and
    /// crossing-marquee hit tests.
    pub pick_tolerance_px: f64,
    /// Pointer displacement on either axis, in pixels, beyond which a
    /// pressed gesture stops being a click and becomes a marquee drag.
    pub drag_threshold_px: f64,
    /// Zoom factor applied per wheel notch; wheel-up zooms in.
    pub wheel_zoom_per_notch: f64,
    /// Marquee outline width in screen pixels.
    pub marquee_stroke_px: f64,
    /// Dash length of the crossing-marquee outline, in screen pixels.
    pub marquee_dash_px: f64,
    /// Gap length of the crossing-marquee outline, in screen pixels.
    pub marquee_gap_px: f64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            grid_spacing_px: 60.0,
            pick_tolerance_px: 6.0,
            drag_threshold_px: 3.0,
            wheel_zoom_per_notch: 1.12,
            marquee_stroke_px: 1.0,
            marquee_dash_px: 6.0,
            marquee_gap_px: 4.0,
        }
    }
}
