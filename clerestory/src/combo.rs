// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Predicate-gated option selection.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

/// A combo box core whose selection is gated by a validity predicate.
///
/// Hosts propose candidates with [`select`](ValidatingCombo::select); a
/// candidate the predicate rejects is refused and the selection stays on
/// the last accepted option, with the revision untouched, so from the
/// outside the widget silently snaps back. Replacing the option list
/// defaults the selection to the first element the way a fresh list would,
/// even when the predicate would reject it; the predicate polices change,
/// not the model's own default.
pub struct ValidatingCombo<T> {
    options: Vec<T>,
    selected: Option<usize>,
    validator: Box<dyn Fn(&T) -> bool>,
    revision: u64,
}

impl<T> ValidatingCombo<T> {
    /// Creates an empty combo with the given predicate.
    #[must_use]
    pub fn new(validator: impl Fn(&T) -> bool + 'static) -> Self {
        Self {
            options: Vec::new(),
            selected: None,
            validator: Box::new(validator),
            revision: 0,
        }
    }

    /// Creates a combo over `options` with the first element selected.
    #[must_use]
    pub fn with_options(options: Vec<T>, validator: impl Fn(&T) -> bool + 'static) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            options,
            selected,
            validator: Box::new(validator),
            revision: 0,
        }
    }

    /// Returns the options in display order.
    #[must_use]
    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Returns the index of the selected option, if any.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// Returns the selected option, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&T> {
        self.selected.and_then(|index| self.options.get(index))
    }

    /// Runs the predicate against `value`.
    #[must_use]
    pub fn validates(&self, value: &T) -> bool {
        (self.validator)(value)
    }

    /// Replaces the predicate used for future proposals.
    ///
    /// The current selection is kept even when the new predicate would
    /// reject it; it was the last accepted state and remains the target
    /// proposals revert to.
    pub fn set_validator(&mut self, validator: impl Fn(&T) -> bool + 'static) {
        self.validator = Box::new(validator);
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

impl<T: PartialEq> ValidatingCombo<T> {
    /// Replaces the option list.
    ///
    /// Selection defaults to the first element, or clears when `options`
    /// is empty. The default is taken as-is, without consulting the
    /// predicate.
    pub fn set_options(&mut self, options: Vec<T>) {
        let selected = if options.is_empty() { None } else { Some(0) };
        if self.options == options && self.selected == selected {
            return;
        }
        self.options = options;
        self.selected = selected;
        self.bump();
    }

    /// Proposes `candidate` as the new selection.
    ///
    /// Returns `false` without moving the selection or the revision when
    /// `candidate` is not among the options or the predicate rejects it.
    pub fn select(&mut self, candidate: &T) -> bool {
        let Some(index) = self
            .options
            .iter()
            .position(|option| option == candidate)
        else {
            return false;
        };
        if !(self.validator)(candidate) {
            return false;
        }
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.bump();
        }
        true
    }
}

impl<T: fmt::Debug> fmt::Debug for ValidatingCombo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatingCombo")
            .field("options", &self.options)
            .field("selected", &self.selected)
            .field("revision", &self.revision)
            .finish_non_exhaustive()
    }
}
