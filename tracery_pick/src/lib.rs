// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Pick: spatial queries over a scene's entities.
//!
//! Hit testing here is stroke-oriented: every query runs against the
//! entity's pick outline (a stroke expansion of its path), so open
//! polylines, arcs, and zero-area shapes are selectable by clicking near
//! them, and clicking the hollow middle of a closed outline selects
//! nothing. Queries come in two forms:
//!
//! - [`pick_top`]: point query returning the topmost hit, honoring z-order
//!   (later entities win ties).
//! - [`marquee_hits`]: rectangle query with the two classic selection
//!   semantics, [`MarqueeMode::Window`] (fully-enclosed entities only) and
//!   [`MarqueeMode::Crossing`] (anything the rectangle touches).
//!
//! Tolerances are world-space distances; [`world_tolerance`] converts the
//! usual pixels-of-slop configuration using the camera scale.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Line, Point, Rect, Shape};
//! use tracery_pick::{MarqueeMode, marquee_hits, pick_top, world_tolerance};
//! use tracery_scene::Entity;
//!
//! let mut entities = vec![
//!     Entity::new("box", Rect::new(0.0, 0.0, 100.0, 100.0).to_path(0.1)),
//!     Entity::new("wire", Line::new((0.0, 150.0), (100.0, 150.0)).to_path(0.1)),
//! ];
//!
//! // 6px of slop at 2x zoom is 3 world units.
//! let tolerance = world_tolerance(6.0, 2.0);
//! assert_eq!(pick_top(&mut entities, Point::new(50.0, 148.0), tolerance), Some(1));
//!
//! // A sweep that merely crosses the wire still selects it.
//! let sweep = Rect::new(-10.0, 140.0, 110.0, 160.0);
//! let hits = marquee_hits(&mut entities, sweep, MarqueeMode::Crossing, tolerance);
//! assert_eq!(hits, vec![1]);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod query;

pub use query::{MarqueeMode, marquee_hits, pick_top, world_tolerance};
