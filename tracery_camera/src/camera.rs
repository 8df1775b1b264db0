// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::grid::nice_step;

/// Pan/zoom camera over a world-space plane.
///
/// `Camera` tracks a viewport size in device pixels and a uniform
/// scale + translation transform mapping world coordinates into it, with the
/// transform origin anchored at the viewport center. It can be used to:
/// - Convert points and rectangles between world and screen coordinates.
/// - Pan, and zoom around a chosen screen point.
/// - Fit a world rectangle into the viewport with pixel padding.
///
/// The vertical flip flag controls whether world Y grows upward on screen
/// (set, the default) or downward (cleared).
#[derive(Clone, Debug)]
pub struct Camera {
    viewport: Size,
    scale: f64,
    translation: Vec2,
    flip_y: bool,
    min_scale: f64,
    max_scale: f64,
    world_to_screen: Affine,
    screen_to_world: Affine,
    invertible: bool,
}

impl Camera {
    /// Creates a new camera over a viewport of the given pixel size.
    ///
    /// - Initial scale is `1.0`, clamped to the range `[1e-6, 1e6]` by
    ///   default.
    /// - Initial translation is zero, so the world origin maps to the
    ///   viewport center.
    /// - The vertical flip starts set (world Y grows upward on screen).
    ///
    /// # Panics
    ///
    /// Panics if either extent of `viewport` is negative or non-finite;
    /// passing a malformed viewport is a programming error, not a runtime
    /// data condition.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut camera = Self {
            viewport: checked_viewport(viewport),
            scale: 1.0,
            translation: Vec2::ZERO,
            flip_y: true,
            min_scale: 1e-6,
            max_scale: 1e6,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
            invertible: true,
        };
        camera.rebuild_transforms();
        camera
    }

    /// Returns the current viewport size in device pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size in device pixels.
    ///
    /// Scale and translation are unchanged; the transform origin follows the
    /// new viewport center.
    ///
    /// # Panics
    ///
    /// Panics if either extent is negative or non-finite.
    pub fn set_viewport(&mut self, viewport: Size) {
        let viewport = checked_viewport(viewport);
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.rebuild_transforms();
    }

    /// Returns the current uniform scale factor (pixels per world unit).
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Sets the scale factor, clamping it into the configured range.
    pub fn set_scale(&mut self, scale: f64) {
        let clamped = scale.clamp(self.min_scale, self.max_scale);
        if (self.scale - clamped).abs() < f64::EPSILON {
            return;
        }
        self.scale = clamped;
        self.rebuild_transforms();
    }

    /// Sets the minimum and maximum scale factors.
    ///
    /// The range is normalized so `min <= max` and floored to keep the scale
    /// strictly positive. The current scale is clamped into the new range.
    pub fn set_scale_limits(&mut self, min: f64, max: f64) {
        let (min, max) = if min <= max { (min, max) } else { (max, min) };
        self.min_scale = min.max(f64::MIN_POSITIVE);
        self.max_scale = max.max(self.min_scale);
        let clamped = self.scale.clamp(self.min_scale, self.max_scale);
        if clamped != self.scale {
            self.scale = clamped;
            self.rebuild_transforms();
        }
    }

    /// Returns the current translation offset in screen pixels.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Returns whether world Y grows upward on screen.
    #[must_use]
    pub fn flip_y(&self) -> bool {
        self.flip_y
    }

    /// Sets the vertical flip flag.
    pub fn set_flip_y(&mut self, flip_y: bool) {
        if self.flip_y != flip_y {
            self.flip_y = flip_y;
            self.rebuild_transforms();
        }
    }

    /// Pans the view by a delta in screen pixels.
    pub fn pan_by(&mut self, delta: Vec2) {
        if delta == Vec2::ZERO {
            return;
        }
        self.translation += delta;
        self.rebuild_transforms();
    }

    /// Zooms around a given anchor point in screen coordinates.
    ///
    /// The world point under `anchor` before the zoom remains under it after
    /// the zoom, so repeated wheel zooms do not drift. Non-positive factors
    /// are ignored, and the resulting scale is clamped into the configured
    /// range.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if !(factor > 0.0 && factor.is_finite()) {
            return;
        }
        let old_scale = self.scale;
        let new_scale = (old_scale * factor).clamp(self.min_scale, self.max_scale);
        if (new_scale - old_scale).abs() < f64::EPSILON {
            return;
        }

        let old_world = self.screen_to_world_point(anchor);
        self.scale = new_scale;
        self.rebuild_transforms();
        let new_anchor = self.world_to_screen_point(old_world);
        self.pan_by(anchor - new_anchor);
    }

    /// Fits the given world rectangle into the viewport, preserving aspect
    /// ratio, with `padding_px` pixels of margin on every side.
    ///
    /// Degenerate bounds are floored to a tiny extent rather than dividing
    /// by zero, and the usable viewport extent is floored at one pixel, so
    /// pathological inputs still land on a finite scale. A zero-area
    /// viewport makes this a no-op.
    pub fn zoom_to_fit(&mut self, world_bounds: Rect, padding_px: f64) {
        if self.viewport.width <= 0.0 || self.viewport.height <= 0.0 {
            return;
        }
        let avail_w = (self.viewport.width - 2.0 * padding_px).max(1.0);
        let avail_h = (self.viewport.height - 2.0 * padding_px).max(1.0);
        let bounds_w = world_bounds.width().abs().max(1e-9);
        let bounds_h = world_bounds.height().abs().max(1e-9);

        let target = (avail_w / bounds_w).min(avail_h / bounds_h);
        self.scale = target.clamp(self.min_scale, self.max_scale);

        // Recenter so the bounds' center lands on the viewport center. The
        // translation is applied before the (possibly flipped) scale, hence
        // the sign split on Y.
        let center = world_bounds.center();
        let ty = if self.flip_y {
            center.y * self.scale
        } else {
            -center.y * self.scale
        };
        self.translation = Vec2::new(-center.x * self.scale, ty);
        self.rebuild_transforms();
    }

    /// The current world→screen transform.
    ///
    /// Renderers can push this once and then work in world coordinates.
    #[must_use]
    pub fn world_to_screen(&self) -> Affine {
        self.world_to_screen
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen_point(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen-space point into world coordinates.
    ///
    /// If the view transform is not invertible (which cannot happen while
    /// the scale stays in a positive range, but is handled defensively),
    /// this returns the world origin.
    #[must_use]
    pub fn screen_to_world_point(&self, pt: Point) -> Point {
        if self.invertible {
            self.screen_to_world * pt
        } else {
            Point::ZERO
        }
    }

    /// Converts a world-space rectangle into its enclosing screen rectangle.
    #[must_use]
    pub fn world_to_screen_rect(&self, rect: Rect) -> Rect {
        enclosing_mapped_rect(self.world_to_screen, rect)
    }

    /// Converts a screen-space rectangle into its enclosing world rectangle.
    #[must_use]
    pub fn screen_to_world_rect(&self, rect: Rect) -> Rect {
        if self.invertible {
            enclosing_mapped_rect(self.screen_to_world, rect)
        } else {
            Rect::ZERO
        }
    }

    /// Returns the world-space rectangle currently visible in the viewport.
    #[must_use]
    pub fn visible_world_rect(&self) -> Rect {
        self.screen_to_world_rect(self.viewport.to_rect())
    }

    /// Returns the current world-units-per-pixel ratio (`1.0 / scale`).
    ///
    /// Useful for choosing world-space stroke widths that render at a fixed
    /// pixel thickness.
    #[must_use]
    pub fn world_units_per_pixel(&self) -> f64 {
        1.0 / self.scale
    }

    /// Returns a “nice” world-space grid spacing for the current scale.
    ///
    /// `spacing_px` is the desired on-screen distance between grid lines;
    /// the result is snapped onto the `{1, 2, 5} × 10^k` ladder so grid
    /// lines stay visually stable across zoom levels. See [`nice_step`].
    #[must_use]
    pub fn grid_spacing_world(&self, spacing_px: f64) -> f64 {
        nice_step(spacing_px * self.world_units_per_pixel())
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            viewport: self.viewport,
            visible_world_rect: self.visible_world_rect(),
            scale: self.scale,
            translation: self.translation,
            flip_y: self.flip_y,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
        }
    }

    fn rebuild_transforms(&mut self) {
        let center = Vec2::new(self.viewport.width * 0.5, self.viewport.height * 0.5);
        let scale_y = if self.flip_y { -self.scale } else { self.scale };
        // World → screen: scale (with optional flip), then translate by pan,
        // then translate into the viewport center.
        self.world_to_screen = Affine::translate(center + self.translation)
            * Affine::scale_non_uniform(self.scale, scale_y);

        let det = self.world_to_screen.determinant();
        if det.is_finite() && det != 0.0 {
            self.screen_to_world = self.world_to_screen.inverse();
            self.invertible = true;
        } else {
            self.screen_to_world = Affine::IDENTITY;
            self.invertible = false;
        }
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current viewport size in device pixels.
    pub viewport: Size,
    /// World-space rectangle currently visible through the viewport.
    pub visible_world_rect: Rect,
    /// Current uniform scale factor.
    pub scale: f64,
    /// Current translation offset in screen pixels.
    pub translation: Vec2,
    /// Whether world Y grows upward on screen.
    pub flip_y: bool,
    /// Minimum scale factor.
    pub min_scale: f64,
    /// Maximum scale factor.
    pub max_scale: f64,
}

fn checked_viewport(viewport: Size) -> Size {
    assert!(
        viewport.width.is_finite() && viewport.height.is_finite(),
        "viewport extents must be finite"
    );
    assert!(
        viewport.width >= 0.0 && viewport.height >= 0.0,
        "viewport extents must not be negative"
    );
    viewport
}

/// Maps the four corners of `rect` and returns their enclosing box.
///
/// Mapping corners individually keeps the result correct when the transform
/// flips an axis, which would produce an unnormalized rectangle otherwise.
fn enclosing_mapped_rect(transform: Affine, rect: Rect) -> Rect {
    let p0 = transform * rect.origin();
    let p1 = transform * Point::new(rect.max_x(), rect.y0);
    let p2 = transform * Point::new(rect.x0, rect.max_y());
    let p3 = transform * Point::new(rect.max_x(), rect.max_y());
    let min_x = p0.x.min(p1.x).min(p2.x).min(p3.x);
    let min_y = p0.y.min(p1.y).min(p2.y).min(p3.y);
    let max_x = p0.x.max(p1.x).max(p2.x).max(p3.x);
    let max_y = p0.y.max(p1.y).max(p2.y).max(p3.y);
    Rect::new(min_x, min_y, max_x, max_y)
}
