// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clerestory: headless widget cores over the Tracery style layer.
//!
//! Every widget here is a plain state machine: no toolkit types, no
//! callbacks, no drawing. Hosts own the widgets, feed them input they have
//! already digested (row indices, post-edit text, elapsed time), and read
//! back state plus a revision counter that bumps exactly when observable
//! state changes, so repainting is a revision comparison. Colors resolve
//! through [`tracery_style`] theme keys (see [`keys`]) with built-in
//! fallbacks.
//!
//! The cores:
//!
//! - [`Accordion`]: collapsible panel header with an arrow glyph.
//! - [`CheckList`]: item list with per-row checkboxes and an
//!   at-least-one-checked policy.
//! - [`SelectorRow`]: exclusive option group, one option always active.
//! - [`EditFilter`], [`NotEmptyVerifier`], [`validate_all`]: keystroke
//!   filtering and submit-time verification for text fields.
//! - [`ValidatingCombo`]: option selection gated by a predicate, with
//!   silent reverts.
//! - [`ToastQueue`]: transient messages with explicit-clock lifetimes and
//!   pure multi-screen placement helpers.
//!
//! ```rust
//! use clerestory::{Accordion, CheckList, ToastAnchor, ToastQueue};
//! use kurbo::Point;
//!
//! let mut accordion = Accordion::new("Layers");
//! accordion.toggle();
//! assert!(!accordion.is_expanded());
//!
//! let mut layers = CheckList::from_items(["grid", "entities", "handles"]);
//! layers.set_require_at_least_one_checked(true);
//! assert!(layers.is_checked(0));
//! // The policy refuses to uncheck the last checked row.
//! assert!(!layers.toggle(0));
//!
//! let mut toasts = ToastQueue::new();
//! toasts.show("saved", ToastAnchor::At(Point::new(40.0, 40.0)), 2.0);
//! toasts.tick(3.0);
//! assert!(toasts.is_empty());
//! ```

#![no_std]

extern crate alloc;

mod accordion;
mod check_list;
mod combo;
pub mod keys;
mod selector_row;
mod toast;
mod validate;

pub use accordion::Accordion;
pub use check_list::CheckList;
pub use combo::ValidatingCombo;
pub use selector_row::SelectorRow;
pub use toast::{
    DEFAULT_POINTER_OFFSET, Toast, ToastAnchor, ToastQueue, clamp_into, screen_for_point,
};
pub use validate::{EditFilter, FieldFeedback, NotEmptyVerifier, validate_all};
