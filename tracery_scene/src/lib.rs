// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Scene: the entity model viewers render and pick against.
//!
//! An [`Entity`] pairs a caller-supplied identity with an immutable
//! world-space vector shape. Its axis-aligned bounding box is computed once
//! at construction and cached; an optional display color can be changed at
//! any time without touching the geometry. Entities also own the memoized
//! stroke expansion ("pick outline") that hit testing uses to make thin and
//! open shapes selectable.
//!
//! An [`EntityStore`] holds an ordered collection of entities. Order is
//! z-order: later entries paint on top and win picking ties. Replacing the
//! collection bumps a version counter, which index-based consumers (such as
//! selection models) use to detect that their indices went stale.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Line, Rect, Shape};
//! use tracery_scene::{Entity, EntityStore};
//!
//! let mut store = EntityStore::new();
//! store.set_entities(vec![
//!     Entity::new("square", Rect::new(0.0, 0.0, 100.0, 100.0).to_path(0.1)),
//!     Entity::new("diagonal", Line::new((100.0, 0.0), (200.0, 100.0)).to_path(0.1)),
//! ]);
//!
//! // Per-entity bounds are cached at construction and unioned on demand.
//! let bounds = store.union_bounds().unwrap();
//! assert_eq!(bounds, Rect::new(0.0, 0.0, 200.0, 100.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

extern crate alloc;

mod entity;
mod store;

pub use entity::Entity;
pub use store::EntityStore;
