// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Viewer: a headless interactive 2D entity viewer.
//!
//! [`Viewer`] ties the rest of the Tracery stack together: a pan/zoom
//! [`Camera`](tracery_camera::Camera) over an entity list, stroke-accurate
//! picking, interval selection, a grid, and the classic pointer gestures
//! (click, ctrl/shift click, window and crossing marquee, middle-button pan,
//! wheel zoom). It owns no window and calls no toolkit: input arrives as
//! plain [`PointerEvent`]s, output leaves as a stream of draw operations
//! through the [`Surface`] trait, plus a drainable [`ViewerEvent`] queue and
//! a repaint-request flag.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Shape, Size};
//! use tracery_viewer::{
//!     Modifiers, PointerButton, PointerEvent, RecordingSurface, Theme, Viewer, ViewerEvent,
//! };
//!
//! let mut viewer = Viewer::new(Size::new(400.0, 300.0), &Theme::default());
//! viewer.set_entities(vec![tracery_viewer::Entity::new(
//!     "square",
//!     Rect::new(0.0, 0.0, 100.0, 100.0).to_path(0.1),
//! )]);
//!
//! // Click on the square's edge (positions are screen pixels).
//! let edge = viewer.camera().world_to_screen_point(Point::new(0.0, 50.0));
//! viewer.on_pointer(PointerEvent::Down {
//!     position: edge,
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//! });
//! viewer.on_pointer(PointerEvent::Up {
//!     position: edge,
//!     button: PointerButton::Primary,
//!     modifiers: Modifiers::empty(),
//! });
//!
//! assert!(viewer.selection().contains(0));
//! assert!(viewer.drain_events().contains(&ViewerEvent::SelectionChanged));
//!
//! // Paint into a recording surface (a real embedder maps ops to a renderer).
//! assert!(viewer.take_needs_repaint());
//! let mut surface = RecordingSurface::new();
//! viewer.paint(&mut surface);
//! assert!(!surface.ops().is_empty());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod events;
mod input;
mod palette;
mod render;
mod surface;
mod viewer;

pub use config::ViewerConfig;
pub use events::ViewerEvent;
pub use input::{Modifiers, PointerButton, PointerEvent};
pub use palette::Palette;
pub use surface::{DrawOp, RecordingSurface, StateOp, StrokeStyle, Surface, SurfaceOp};
pub use viewer::Viewer;

// Re-export the types that appear in `Viewer`'s signatures, so embedders can
// drive a viewer without depending on every member crate.
pub use tracery_scene::Entity;
pub use tracery_selection::SelectionMode;
pub use tracery_style::Theme;
