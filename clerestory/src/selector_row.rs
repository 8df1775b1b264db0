// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive option group core.

use alloc::vec::Vec;

/// A row of mutually exclusive options, one selected at a time.
///
/// The original widget is a toolbar of toggle buttons; the core keeps just
/// the option values and which one is active. A non-empty row always has a
/// selection, so hosts never need an unselected rendering for it. Observers
/// compare [`revision`](SelectorRow::revision) to notice selection moves.
#[derive(Clone, Debug)]
pub struct SelectorRow<T> {
    options: Vec<T>,
    selected: Option<usize>,
    revision: u64,
}

impl<T> SelectorRow<T> {
    /// Creates an empty row with nothing to select.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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

    /// Returns the revision counter, bumped once per observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T: PartialEq> SelectorRow<T> {
    /// Creates a row from the given options with the first one selected.
    #[must_use]
    pub fn from_options(options: Vec<T>) -> Self {
        let selected = if options.is_empty() { None } else { Some(0) };
        Self {
            options,
            selected,
            revision: 0,
        }
    }

    /// Replaces the options.
    ///
    /// When `initial` names one of the new options it becomes the
    /// selection; otherwise the first option does. An empty `options`
    /// clears the selection.
    pub fn set_options(&mut self, options: Vec<T>, initial: Option<&T>) {
        let selected = if options.is_empty() {
            None
        } else {
            let found = initial.and_then(|value| options.iter().position(|option| option == value));
            Some(found.unwrap_or(0))
        };
        if self.options == options && self.selected == selected {
            return;
        }
        self.options = options;
        self.selected = selected;
        self.bump();
    }

    /// Selects the option equal to `option`.
    ///
    /// Returns `false` without changing anything when no option matches.
    pub fn set_selected(&mut self, option: &T) -> bool {
        let Some(index) = self.options.iter().position(|candidate| candidate == option) else {
            return false;
        };
        if self.selected != Some(index) {
            self.selected = Some(index);
            self.bump();
        }
        true
    }
}

impl<T> Default for SelectorRow<T> {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            selected: None,
            revision: 0,
        }
    }
}
