// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Style: theme keys and color resolution.
//!
//! A [`Theme`] is an immutable map from [`ThemeKey`] to [`peniko::Color`],
//! injected into viewers and widgets at construction. Components resolve
//! their palette from it once (and again on an explicit theme refresh),
//! falling back to their own hardcoded defaults for keys the theme leaves
//! unset. That keeps color lookups out of per-frame code and makes a theme
//! swap an explicit, observable operation.
//!
//! Keys are plain `u16` identifiers defined as constants; the [`keys`]
//! module carries the viewer palette. Embedders define further constants
//! for their own components in the same key space.
//!
//! ## Minimal example
//!
//! ```rust
//! use peniko::Color;
//! use tracery_style::{ThemeBuilder, keys};
//!
//! let dark = ThemeBuilder::new()
//!     .set(keys::BACKGROUND, Color::from_rgba8(30, 30, 30, 255))
//!     .set(keys::DEFAULT_LINE, Color::from_rgba8(220, 220, 220, 255))
//!     .build();
//!
//! assert!(dark.color(keys::BACKGROUND).is_some());
//! // Unset keys resolve to the component's own fallback.
//! assert!(dark.color(keys::GRID_AXIS).is_none());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod keys;
mod theme;

pub use theme::{Theme, ThemeBuilder, ThemeKey};
