// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transient message toasts with explicit-clock lifetimes.
//!
//! A [`ToastQueue`] holds the active toasts; the host measures each
//! message, resolves its [`ToastAnchor`] to an origin, clamps the result
//! onto the right screen with [`screen_for_point`] and [`clamp_into`], and
//! advances lifetimes with [`ToastQueue::tick`] from whatever clock it
//! already has. Lifetimes and elapsed times share one caller-chosen unit,
//! typically seconds.

use alloc::string::String;

use kurbo::{Point, Rect, Size, Vec2};
use peniko::Color;
use smallvec::SmallVec;
use tracery_style::Theme;

use crate::keys;

/// Pointer offset a following toast uses when the host has no opinion,
/// chosen to clear the cursor glyph.
pub const DEFAULT_POINTER_OFFSET: Vec2 = Vec2::new(14.0, 18.0);

/// Where a toast pins itself on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastAnchor {
    /// Top-left corner at a fixed point.
    At(Point),
    /// Centered over an owner rectangle, typically the host window.
    CenteredOn(Rect),
    /// Top-left at the pointer plus an offset, re-resolved every frame so
    /// the toast follows the pointer.
    FollowPointer {
        /// Displacement from the pointer position.
        offset: Vec2,
    },
}

impl ToastAnchor {
    /// Resolves the top-left origin for a toast of `size`.
    ///
    /// `pointer` is only consulted by [`ToastAnchor::FollowPointer`];
    /// fixed anchors ignore it.
    #[must_use]
    pub fn origin(self, size: Size, pointer: Point) -> Point {
        match self {
            Self::At(point) => point,
            Self::CenteredOn(owner) => Point::new(
                owner.x0 + (owner.width() - size.width) / 2.0,
                owner.y0 + (owner.height() - size.height) / 2.0,
            ),
            Self::FollowPointer { offset } => pointer + offset,
        }
    }
}

/// One queued toast message.
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    message: String,
    anchor: ToastAnchor,
    remaining: f64,
}

impl Toast {
    /// Returns the message text.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns where the toast pins itself.
    #[must_use]
    pub fn anchor(&self) -> ToastAnchor {
        self.anchor
    }

    /// Returns the lifetime left before the toast expires.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.remaining
    }

    /// Resolves the background fill for drawing this toast.
    #[must_use]
    pub fn background(&self, theme: &Theme) -> Color {
        theme
            .color(keys::TOAST_BACKGROUND)
            .unwrap_or(Color::from_rgba8(238, 238, 238, 255))
    }

    /// Resolves the message text color.
    #[must_use]
    pub fn text_color(&self, theme: &Theme) -> Color {
        theme.color(keys::TOAST_TEXT).unwrap_or(Color::BLACK)
    }
}

/// The set of live toasts, oldest first.
///
/// The revision counter bumps when a toast appears or expires, so hosts
/// repaint only on changes even while ticking every frame.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    toasts: SmallVec<[Toast; 4]>,
    revision: u64,
}

impl ToastQueue {
    /// Creates an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast for `lifetime` worth of clock.
    ///
    /// A non-positive lifetime expires on the next tick.
    pub fn show(&mut self, message: impl Into<String>, anchor: ToastAnchor, lifetime: f64) {
        self.toasts.push(Toast {
            message: message.into(),
            anchor,
            remaining: lifetime,
        });
        self.bump();
    }

    /// Advances every lifetime by `elapsed` and drops expired toasts.
    ///
    /// Negative elapsed times are treated as zero; time does not run
    /// backwards here.
    pub fn tick(&mut self, elapsed: f64) {
        let elapsed = elapsed.max(0.0);
        let before = self.toasts.len();
        for toast in &mut self.toasts {
            toast.remaining -= elapsed;
        }
        self.toasts.retain(|toast| toast.remaining > 0.0);
        if self.toasts.len() != before {
            self.bump();
        }
    }

    /// Returns the live toasts, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> + '_ {
        self.toasts.iter()
    }

    /// Returns the number of live toasts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    /// Returns `true` when no toasts are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    /// Drops every live toast.
    pub fn clear(&mut self) {
        if self.toasts.is_empty() {
            return;
        }
        self.toasts.clear();
        self.bump();
    }

    /// Returns the revision counter, bumped once per observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

/// Clamps `rect` to lie inside `bounds`, keeping its size.
///
/// When the rect does not fit, the top-left edges win, so at least the
/// start of the message stays readable.
#[must_use]
pub fn clamp_into(rect: Rect, bounds: Rect) -> Rect {
    let x = bounds.x0.max(rect.x0.min(bounds.x1 - rect.width()));
    let y = bounds.y0.max(rect.y0.min(bounds.y1 - rect.height()));
    Rect::new(x, y, x + rect.width(), y + rect.height())
}

/// Picks the screen a point belongs to from a set of screen rectangles.
///
/// Returns the first screen containing `point`; failing that, the screen
/// whose boundary is nearest to it; `None` when `screens` is empty.
#[must_use]
pub fn screen_for_point(point: Point, screens: &[Rect]) -> Option<Rect> {
    let mut best: Option<Rect> = None;
    let mut best_dist = f64::INFINITY;
    for &screen in screens {
        if screen.contains(point) {
            return Some(screen);
        }
        let dx = point.x - point.x.clamp(screen.x0, screen.x1);
        let dy = point.y - point.y.clamp(screen.y0, screen.y1);
        let dist = dx * dx + dy * dy;
        if dist < best_dist {
            best_dist = dist;
            best = Some(screen);
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use kurbo::{Point, Rect, Size, Vec2};

    use super::{DEFAULT_POINTER_OFFSET, ToastAnchor, ToastQueue, clamp_into, screen_for_point};

    #[test]
    fn toasts_expire_in_lifetime_order() {
        let mut queue = ToastQueue::new();
        queue.show("saved", ToastAnchor::At(Point::ZERO), 1.0);
        queue.show("copied", ToastAnchor::At(Point::ZERO), 3.0);
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.revision(), 2);

        queue.tick(2.0);
        let messages: Vec<_> = queue.iter().map(|toast| toast.message()).collect();
        assert_eq!(messages, ["copied"]);
        assert_eq!(queue.revision(), 3);

        queue.tick(2.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn a_tick_without_expiries_does_not_bump() {
        let mut queue = ToastQueue::new();
        queue.show("hi", ToastAnchor::At(Point::ZERO), 5.0);
        let before = queue.revision();
        queue.tick(1.0);
        assert_eq!(queue.revision(), before);
        assert!((queue.iter().next().unwrap().remaining() - 4.0).abs() < 1e-12);
    }

    #[test]
    fn exactly_spent_lifetimes_expire() {
        let mut queue = ToastQueue::new();
        queue.show("gone", ToastAnchor::At(Point::ZERO), 1.0);
        queue.tick(1.0);
        assert!(queue.is_empty());
    }

    #[test]
    fn negative_elapsed_is_ignored() {
        let mut queue = ToastQueue::new();
        queue.show("hi", ToastAnchor::At(Point::ZERO), 1.0);
        queue.tick(-10.0);
        assert_eq!(queue.len(), 1);
        assert!((queue.iter().next().unwrap().remaining() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn clear_empties_and_bumps_once() {
        let mut queue = ToastQueue::new();
        queue.clear();
        assert_eq!(queue.revision(), 0);
        queue.show("hi", ToastAnchor::At(Point::ZERO), 1.0);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.revision(), 2);
    }

    #[test]
    fn anchors_resolve_origins() {
        let size = Size::new(20.0, 10.0);
        let pointer = Point::new(100.0, 200.0);

        let at = ToastAnchor::At(Point::new(5.0, 6.0));
        assert_eq!(at.origin(size, pointer), Point::new(5.0, 6.0));

        let centered = ToastAnchor::CenteredOn(Rect::new(10.0, 10.0, 110.0, 60.0));
        assert_eq!(centered.origin(size, pointer), Point::new(50.0, 30.0));

        let following = ToastAnchor::FollowPointer {
            offset: Vec2::new(14.0, 18.0),
        };
        assert_eq!(following.origin(size, pointer), Point::new(114.0, 218.0));
        assert_eq!(DEFAULT_POINTER_OFFSET, Vec2::new(14.0, 18.0));
    }

    #[test]
    fn clamping_keeps_the_rect_inside() {
        let bounds = Rect::new(0.0, 0.0, 800.0, 600.0);

        let inside = Rect::new(100.0, 100.0, 150.0, 120.0);
        assert_eq!(clamp_into(inside, bounds), inside);

        let off_right = Rect::new(790.0, 10.0, 840.0, 30.0);
        assert_eq!(clamp_into(off_right, bounds), Rect::new(750.0, 10.0, 800.0, 30.0));

        let off_top_left = Rect::new(-20.0, -5.0, 30.0, 15.0);
        assert_eq!(clamp_into(off_top_left, bounds), Rect::new(0.0, 0.0, 50.0, 20.0));
    }

    #[test]
    fn oversized_rects_pin_to_the_leading_edge() {
        let bounds = Rect::new(0.0, 0.0, 100.0, 100.0);
        let wide = Rect::new(40.0, 40.0, 240.0, 70.0);
        let clamped = clamp_into(wide, bounds);
        // Too wide to fit: the left edge wins. The height still fits, so
        // the vertical position is untouched.
        assert_eq!(clamped.origin(), Point::new(0.0, 40.0));
        assert_eq!(clamped.size(), wide.size());
    }

    #[test]
    fn the_containing_screen_wins() {
        let left = Rect::new(0.0, 0.0, 1920.0, 1080.0);
        let right = Rect::new(1920.0, 0.0, 3840.0, 1080.0);
        let screens = [left, right];

        assert_eq!(screen_for_point(Point::new(10.0, 10.0), &screens), Some(left));
        // The shared edge belongs to the screen starting there.
        assert_eq!(screen_for_point(Point::new(1920.0, 10.0), &screens), Some(right));
    }

    #[test]
    fn points_off_every_screen_pick_the_nearest() {
        let left = Rect::new(0.0, 0.0, 100.0, 100.0);
        let right = Rect::new(200.0, 0.0, 300.0, 100.0);
        let screens = [left, right];

        assert_eq!(screen_for_point(Point::new(160.0, 50.0), &screens), Some(right));
        assert_eq!(screen_for_point(Point::new(120.0, 50.0), &screens), Some(left));
        assert_eq!(screen_for_point(Point::new(50.0, -40.0), &screens), Some(left));
    }

    #[test]
    fn no_screens_means_no_answer() {
        assert_eq!(screen_for_point(Point::ZERO, &[]), None);
    }
}
