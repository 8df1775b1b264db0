// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Camera: the pan/zoom view transform for 2D entity viewers.
//!
//! This crate provides a small, headless camera model mapping an unbounded
//! world plane onto a finite viewport expressed in device pixels. It focuses
//! on:
//! - Camera state (uniform scale + translation + optional vertical flip).
//! - Coordinate conversion between world and screen (pixel) space.
//! - Zooming about an arbitrary screen point without drift.
//! - Fitting a world rectangle into the viewport with pixel padding.
//! - Choosing “nice” grid spacings that stay visually stable across zooms.
//!
//! It does **not** own entities, selection, or a rendering backend. Callers
//! are expected to:
//! - Keep their own entity list and derive its world bounds for fitting.
//! - Use [`Camera`] to convert pointer positions into world space for hit
//!   testing.
//! - Drive pan/zoom from input events at a higher layer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use tracery_camera::Camera;
//!
//! // A 400x300 viewport.
//! let mut camera = Camera::new(Size::new(400.0, 300.0));
//!
//! // Fit some content with a 20px margin on every side.
//! camera.zoom_to_fit(Rect::new(0.0, 0.0, 200.0, 100.0), 20.0);
//!
//! // Convert the cursor position into world space (for hit testing, etc.).
//! let world_pt = camera.screen_to_world_point(Point::new(200.0, 150.0));
//! ```
//!
//! ## Design notes
//!
//! - The transform is axis-aligned with a **uniform** scale; the vertical
//!   flip only negates the Y scale. World Y grows upward on screen by
//!   default (the drafting convention); clear the flip for screen-oriented
//!   content.
//! - The world origin of the transform sits at the viewport center, so a
//!   freshly constructed camera shows the world origin mid-viewport.
//! - Scale is clamped into a configurable positive range; degenerate inputs
//!   are floored rather than surfaced as errors.
//! - Rotation is intentionally left out.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod grid;

pub use camera::{Camera, CameraDebugInfo};
pub use grid::{GridTick, GridTicks, nice_step};
