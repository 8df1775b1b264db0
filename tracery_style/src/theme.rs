// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme color lookup.
//!
//! This module provides [`Theme`], an immutable collection of colors that
//! can be looked up by [`ThemeKey`].

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::fmt;

use peniko::Color;

/// A key for looking up colors in a [`Theme`].
///
/// Theme keys are simple u16 identifiers, typically defined as constants;
/// see the [`keys`](crate::keys) module for the viewer palette.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ThemeKey(u16);

impl ThemeKey {
    /// Creates a new theme key with the given index.
    #[must_use]
    #[inline]
    pub const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Returns the underlying index of this theme key.
    #[must_use]
    #[inline]
    pub const fn index(self) -> u16 {
        self.0
    }
}

impl fmt::Debug for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ThemeKey").field(&self.0).finish()
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ThemeKey({})", self.0)
    }
}

/// An immutable collection of themed colors.
///
/// Themes are built once with a [`ThemeBuilder`] and then shared; cloning
/// is cheap because the storage sits behind an `Rc`. Lookup is a binary
/// search over a vector sorted by key.
///
/// A theme is deliberately sparse: components keep their own fallback for
/// every key they consult, so a theme only needs entries for the colors it
/// wants to change.
#[derive(Clone, Debug, Default)]
pub struct Theme {
    inner: Rc<ThemeData>,
}

/// Internal storage for theme colors.
#[derive(Debug, Default)]
struct ThemeData {
    /// Sorted by `ThemeKey` for binary search lookup.
    colors: Vec<(ThemeKey, Color)>,
}

impl Theme {
    /// Returns `true` if this theme has no colors.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.colors.is_empty()
    }

    /// Returns the number of colors in this theme.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.colors.len()
    }

    /// Gets the color for a key, if the theme sets one.
    #[must_use]
    #[inline]
    pub fn color(&self, key: ThemeKey) -> Option<Color> {
        self.inner
            .colors
            .binary_search_by_key(&key, |(k, _)| *k)
            .ok()
            .map(|idx| self.inner.colors[idx].1)
    }

    /// Returns `true` if this theme has a color for the key.
    #[must_use]
    #[inline]
    pub fn contains(&self, key: ThemeKey) -> bool {
        self.inner
            .colors
            .binary_search_by_key(&key, |(k, _)| *k)
            .is_ok()
    }

    /// Returns an iterator over the keys this theme sets, in sorted order.
    pub fn keys(&self) -> impl Iterator<Item = ThemeKey> + '_ {
        self.inner.colors.iter().map(|(k, _)| *k)
    }
}

/// Builder for constructing [`Theme`] instances.
///
/// ```rust
/// use peniko::Color;
/// use tracery_style::{ThemeBuilder, ThemeKey};
///
/// const ACCENT: ThemeKey = ThemeKey::new(200);
///
/// let theme = ThemeBuilder::new()
///     .set(ACCENT, Color::from_rgba8(0, 120, 215, 255))
///     .build();
/// assert!(theme.contains(ACCENT));
/// ```
#[derive(Debug, Default)]
pub struct ThemeBuilder {
    colors: Vec<(ThemeKey, Color)>,
}

impl ThemeBuilder {
    /// Creates a new empty theme builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a color in the theme.
    ///
    /// If the key was already set, the color is replaced.
    #[must_use]
    pub fn set(mut self, key: ThemeKey, color: Color) -> Self {
        match self.colors.binary_search_by_key(&key, |(k, _)| *k) {
            Ok(idx) => {
                self.colors[idx].1 = color;
            }
            Err(idx) => {
                self.colors.insert(idx, (key, color));
            }
        }
        self
    }

    /// Builds the theme.
    #[must_use]
    pub fn build(self) -> Theme {
        Theme {
            inner: Rc::new(ThemeData {
                colors: self.colors,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;
    use alloc::vec::Vec;

    use super::*;

    const PRIMARY: ThemeKey = ThemeKey::new(0);
    const SECONDARY: ThemeKey = ThemeKey::new(1);
    const ACCENT: ThemeKey = ThemeKey::new(2);

    #[test]
    fn theme_key_basics() {
        let key = ThemeKey::new(42);
        assert_eq!(key.index(), 42);
        assert_eq!(key, ThemeKey::new(42));
        assert_ne!(key, ThemeKey::new(43));
        assert_eq!(format!("{key:?}"), "ThemeKey(42)");
        assert_eq!(format!("{key}"), "ThemeKey(42)");
    }

    #[test]
    fn empty_theme_resolves_nothing() {
        let theme = Theme::default();
        assert!(theme.is_empty());
        assert_eq!(theme.len(), 0);
        assert!(theme.color(PRIMARY).is_none());
        assert!(!theme.contains(PRIMARY));
    }

    #[test]
    fn lookup_returns_the_set_color() {
        let red = Color::from_rgba8(255, 0, 0, 255);
        let blue = Color::from_rgba8(0, 0, 255, 255);
        let theme = ThemeBuilder::new()
            .set(SECONDARY, blue)
            .set(PRIMARY, red)
            .build();

        assert_eq!(theme.len(), 2);
        assert_eq!(theme.color(PRIMARY), Some(red));
        assert_eq!(theme.color(SECONDARY), Some(blue));
        assert!(theme.color(ACCENT).is_none());
    }

    #[test]
    fn setting_a_key_twice_replaces() {
        let theme = ThemeBuilder::new()
            .set(PRIMARY, Color::from_rgba8(1, 2, 3, 255))
            .set(PRIMARY, Color::from_rgba8(4, 5, 6, 255))
            .build();

        assert_eq!(theme.len(), 1);
        assert_eq!(theme.color(PRIMARY), Some(Color::from_rgba8(4, 5, 6, 255)));
    }

    #[test]
    fn keys_come_out_sorted() {
        let theme = ThemeBuilder::new()
            .set(ACCENT, Color::BLACK)
            .set(PRIMARY, Color::BLACK)
            .set(SECONDARY, Color::BLACK)
            .build();

        let keys: Vec<_> = theme.keys().collect();
        assert_eq!(keys, [PRIMARY, SECONDARY, ACCENT]);
    }

    #[test]
    fn clones_share_storage() {
        let theme = ThemeBuilder::new().set(PRIMARY, Color::WHITE).build();
        let clone = theme.clone();
        assert_eq!(clone.color(PRIMARY), Some(Color::WHITE));
        assert!(Rc::ptr_eq(&theme.inner, &clone.inner));
    }
}
