// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracery Selection: an index-based multi-interval selection model.
//!
//! This crate tracks *which rows are selected* for viewers whose entities
//! are addressed by position: the selection is a set of `usize` indices,
//! stored as sorted, disjoint, inclusive intervals. It is index-based by
//! design; indices are only meaningful against the collection version they
//! were computed for, and callers clear the model when the collection is
//! replaced.
//!
//! The core type is [`IndexSelection`], which tracks:
//! - The selected intervals, always normalized (sorted, disjoint, merged
//!   when adjacent).
//! - A [`SelectionMode`] restricting mutations to a single index or
//!   allowing arbitrary intervals.
//! - A monotonically increasing **revision** counter that bumps when the
//!   contents change.
//!
//! Mutations map onto the common selection gestures: replace with one index,
//! toggle one index, add or remove a range. A [transaction]
//! (IndexSelection::transaction) batches any number of mutations into one
//! revision bump, which is how a marquee gesture produces a single
//! selection-changed notification no matter how many entities it touched.
//!
//! ## Minimal example
//!
//! ```rust
//! use tracery_selection::IndexSelection;
//!
//! let mut selection = IndexSelection::new();
//!
//! // Plain click on row 4.
//! selection.select_only(4);
//! assert!(selection.contains(4));
//!
//! // Ctrl-click row 4 again: toggled back out.
//! selection.toggle(4);
//! assert!(selection.is_empty());
//!
//! // A marquee over rows 2..=5 and 9, batched into one revision bump.
//! let before = selection.revision();
//! selection.transaction(|sel| {
//!     sel.add_range(2, 5);
//!     sel.add(9);
//! });
//! assert_eq!(selection.revision(), before + 1);
//! assert_eq!(selection.iter().collect::<Vec<_>>(), vec![2, 3, 4, 5, 9]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

/// How many indices a selection may hold at once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionMode {
    /// At most one index; selecting a range collapses to its lead index.
    Single,
    /// Any set of indices, stored as disjoint intervals.
    #[default]
    MultipleIntervals,
}

/// One inclusive run of selected indices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Interval {
    /// First selected index of the run.
    pub start: usize,
    /// Last selected index of the run, `>= start`.
    pub end: usize,
}

impl Interval {
    /// Number of indices in the run.
    #[must_use]
    pub fn len(&self) -> usize {
        self.end - self.start + 1
    }

    /// Inclusive runs are never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Selection contents as sorted, disjoint, inclusive index intervals.
///
/// The revision counter bumps once per semantic change: no-op mutations
/// (re-selecting the selected, removing the absent) leave it untouched, and
/// every mutation inside a [`transaction`](IndexSelection::transaction)
/// coalesces into at most one bump. Observers compare revisions to decide
/// whether to emit a selection-changed notification.
#[derive(Clone, Debug, Default)]
pub struct IndexSelection {
    intervals: Vec<Interval>,
    mode: SelectionMode,
    revision: u64,
    depth: u32,
    dirty: bool,
}

impl IndexSelection {
    /// Creates an empty selection in [`SelectionMode::MultipleIntervals`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current selection mode.
    #[must_use]
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Sets the selection mode.
    ///
    /// Existing contents are left untouched even when they would not be
    /// expressible under the new mode; the mode only constrains future
    /// mutations. The revision is not bumped.
    pub fn set_mode(&mut self, mode: SelectionMode) {
        self.mode = mode;
    }

    /// Returns `true` when nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// Returns the number of selected indices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.intervals.iter().map(Interval::len).sum()
    }

    /// Returns the normalized intervals, sorted and disjoint.
    #[must_use]
    pub fn intervals(&self) -> &[Interval] {
        &self.intervals
    }

    /// Returns the selected indices in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.intervals.iter().flat_map(|iv| iv.start..=iv.end)
    }

    /// Returns whether `index` is selected.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        let i = self.intervals.partition_point(|iv| iv.start <= index);
        i > 0 && self.intervals[i - 1].end >= index
    }

    /// Returns the revision counter, bumped once per semantic change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Empties the selection.
    pub fn clear(&mut self) {
        if self.intervals.is_empty() {
            return;
        }
        self.intervals.clear();
        self.mark_changed();
    }

    /// Replaces the selection with the single `index`.
    pub fn select_only(&mut self, index: usize) {
        let target = Interval {
            start: index,
            end: index,
        };
        if self.intervals.as_slice() == [target] {
            return;
        }
        self.intervals.clear();
        self.intervals.push(target);
        self.mark_changed();
    }

    /// Adds `index` to the selection.
    ///
    /// In [`SelectionMode::Single`] this replaces the selection instead.
    pub fn add(&mut self, index: usize) {
        self.add_range(index, index);
    }

    /// Adds the inclusive range between `a` and `b`, in either order.
    ///
    /// In [`SelectionMode::Single`] the range collapses to `b`, the lead
    /// end of the gesture, and replaces the selection.
    pub fn add_range(&mut self, a: usize, b: usize) {
        match self.mode {
            SelectionMode::Single => self.select_only(b),
            SelectionMode::MultipleIntervals => {
                let (start, end) = if a <= b { (a, b) } else { (b, a) };
                if self.add_span(start, end) {
                    self.mark_changed();
                }
            }
        }
    }

    /// Removes `index` from the selection if present.
    pub fn remove(&mut self, index: usize) {
        self.remove_range(index, index);
    }

    /// Removes the inclusive range between `a` and `b`, in either order.
    pub fn remove_range(&mut self, a: usize, b: usize) {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        if self.remove_span(start, end) {
            self.mark_changed();
        }
    }

    /// Toggles the membership of `index`.
    pub fn toggle(&mut self, index: usize) {
        if self.contains(index) {
            self.remove(index);
        } else if self.mode == SelectionMode::Single {
            self.select_only(index);
        } else {
            self.add(index);
        }
    }

    /// Runs `f` with revision bumps suspended, then bumps once if anything
    /// inside actually changed the selection.
    ///
    /// Transactions nest; only the outermost boundary settles the revision.
    pub fn transaction<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        if self.depth == 0 && self.dirty {
            self.dirty = false;
            self.revision = self.revision.wrapping_add(1);
        }
        result
    }

    fn mark_changed(&mut self) {
        if self.depth > 0 {
            self.dirty = true;
        } else {
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Merges `[start, end]` into the interval list. Returns whether the
    /// coverage grew.
    fn add_span(&mut self, start: usize, end: usize) -> bool {
        // Already inside a single interval means no change; disjointness
        // makes spanning two intervals impossible without a gap.
        let covered = self
            .intervals
            .iter()
            .any(|iv| iv.start <= start && iv.end >= end);
        if covered {
            return false;
        }

        let mut merged = Interval { start, end };
        let mut out = Vec::with_capacity(self.intervals.len() + 1);
        let mut placed = false;
        for iv in &self.intervals {
            if iv.end.saturating_add(1) < merged.start {
                out.push(*iv);
            } else if merged.end.saturating_add(1) < iv.start {
                if !placed {
                    out.push(merged);
                    placed = true;
                }
                out.push(*iv);
            } else {
                // Overlapping or adjacent: absorb into the merged run.
                merged.start = merged.start.min(iv.start);
                merged.end = merged.end.max(iv.end);
            }
        }
        if !placed {
            out.push(merged);
        }
        self.intervals = out;
        true
    }

    /// Cuts `[start, end]` out of the interval list. Returns whether any
    /// index was removed.
    fn remove_span(&mut self, start: usize, end: usize) -> bool {
        let touches = self
            .intervals
            .iter()
            .any(|iv| iv.start <= end && start <= iv.end);
        if !touches {
            return false;
        }

        let mut out = Vec::with_capacity(self.intervals.len() + 1);
        for iv in &self.intervals {
            if iv.end < start || iv.start > end {
                out.push(*iv);
                continue;
            }
            if iv.start < start {
                out.push(Interval {
                    start: iv.start,
                    end: start - 1,
                });
            }
            if iv.end > end {
                out.push(Interval {
                    start: end + 1,
                    end: iv.end,
                });
            }
        }
        self.intervals = out;
        true
    }
}
