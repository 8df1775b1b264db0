// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! List-with-checkboxes core.

use alloc::vec::Vec;
use core::hash::Hash;

use hashbrown::HashSet;

/// An ordered item list where each item carries a checkbox.
///
/// Checked state is keyed by item value, so duplicate items share a single
/// flag and a checked value survives being removed and re-added. Hosts
/// forward pointer clicks and space presses to [`toggle`](CheckList::toggle)
/// with the row index they resolved themselves.
///
/// The optional at-least-one policy keeps the list from going entirely
/// unchecked: it refuses to uncheck the last checked item and checks the
/// first item whenever the list would otherwise sit all-unchecked. The one
/// deliberate hole is [`set_checked_values`](CheckList::set_checked_values),
/// a bulk replacement that takes the given set as-is.
#[derive(Clone, Debug)]
pub struct CheckList<T> {
    items: Vec<T>,
    checked: HashSet<T>,
    require_at_least_one_checked: bool,
    revision: u64,
}

impl<T> CheckList<T> {
    /// Creates an empty list with the policy disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the items in model order.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` when the list has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether the at-least-one policy is enabled.
    #[must_use]
    pub fn require_at_least_one_checked(&self) -> bool {
        self.require_at_least_one_checked
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

impl<T: Eq + Hash + Clone> CheckList<T> {
    /// Creates a list from the given items, all unchecked.
    #[must_use]
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Appends an item, unchecked.
    ///
    /// Under the at-least-one policy, appending to an all-unchecked list
    /// checks the first item.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        if self.require_at_least_one_checked && self.checked_count() == 0 {
            let first = self.items[0].clone();
            self.checked.insert(first);
        }
        self.bump();
    }

    /// Returns whether the item at `index` is checked.
    ///
    /// Out-of-range indices read as unchecked.
    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.items
            .get(index)
            .is_some_and(|item| self.checked.contains(item))
    }

    /// Flips the checkbox at `index`.
    ///
    /// Returns `false` without changing anything when `index` is out of
    /// range or the at-least-one policy refuses to uncheck the last
    /// checked item.
    pub fn toggle(&mut self, index: usize) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        let item = item.clone();
        let checked = self.checked.contains(&item);
        if checked && self.require_at_least_one_checked && self.checked_count() == 1 {
            return false;
        }
        if checked {
            self.checked.remove(&item);
        } else {
            self.checked.insert(item);
        }
        self.bump();
        true
    }

    /// Sets the checkbox at `index` to `checked`.
    ///
    /// Returns `false` when `index` is out of range or the at-least-one
    /// policy refuses the change; `true` otherwise, including when the
    /// checkbox already had the requested state.
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        let Some(item) = self.items.get(index) else {
            return false;
        };
        let item = item.clone();
        if self.checked.contains(&item) == checked {
            return true;
        }
        if !checked && self.require_at_least_one_checked && self.checked_count() == 1 {
            return false;
        }
        if checked {
            self.checked.insert(item);
        } else {
            self.checked.remove(&item);
        }
        self.bump();
        true
    }

    /// Returns the checked items in model order.
    ///
    /// Duplicates of a checked value are all reported, matching what the
    /// rows show.
    pub fn checked_values(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter().filter(|item| self.checked.contains(*item))
    }

    /// Returns how many rows are checked. Duplicate values count per row.
    #[must_use]
    pub fn checked_count(&self) -> usize {
        self.checked_values().count()
    }

    /// Replaces the checked set wholesale.
    ///
    /// Values that are not current items are remembered and take effect if
    /// those items appear later. The at-least-one policy is not consulted,
    /// so this can leave a policy-enabled list all-unchecked.
    pub fn set_checked_values(&mut self, values: impl IntoIterator<Item = T>) {
        let checked: HashSet<T> = values.into_iter().collect();
        if self.checked == checked {
            return;
        }
        self.checked = checked;
        self.bump();
    }

    /// Enables or disables the at-least-one policy.
    ///
    /// Enabling it on a non-empty, all-unchecked list checks the first
    /// item; beyond that the flag only constrains future mutations, so
    /// flipping it alone does not move the revision.
    pub fn set_require_at_least_one_checked(&mut self, require: bool) {
        self.require_at_least_one_checked = require;
        if require && !self.items.is_empty() && self.checked_count() == 0 {
            let first = self.items[0].clone();
            self.checked.insert(first);
            self.bump();
        }
    }
}

impl<T> Default for CheckList<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            checked: HashSet::new(),
            require_at_least_one_checked: false,
            revision: 0,
        }
    }
}
