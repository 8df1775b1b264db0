// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Edit filters and field verification for plain text inputs.
//!
//! Two layers, mirroring how text fields are usually policed:
//!
//! - An [`EditFilter`] runs on every keystroke. The host applies the
//!   proposed edit to a copy of the document and asks the filter whether
//!   the post-edit text is admissible; rejected edits never land. Filters
//!   admit intermediate states like `-` and `3.` so typing stays fluid;
//!   whether the final text parses is the caller's concern.
//! - A verifier runs when the field loses focus or the form submits. It
//!   produces [`FieldFeedback`] describing what the host should show, and
//!   [`validate_all`] folds a form's worth of outcomes into one verdict.

use alloc::string::String;

use peniko::Color;
use tracery_style::Theme;

use crate::keys;

/// Per-keystroke filter deciding whether a post-edit text is admissible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditFilter {
    /// Admits empty, `-`, or an optionally signed run of digits.
    Integer,
    /// Like [`EditFilter::Integer`], plus at most one `.` anywhere in the
    /// digits.
    Decimal,
}

impl EditFilter {
    /// Returns whether `text` is admissible under this filter.
    #[must_use]
    pub fn admits(self, text: &str) -> bool {
        if text.is_empty() || text == "-" {
            return true;
        }
        let digits = text.strip_prefix('-').unwrap_or(text);
        if digits.is_empty() {
            return false;
        }
        let mut seen_point = false;
        for byte in digits.bytes() {
            match byte {
                b'.' if self == Self::Decimal && !seen_point => seen_point = true,
                _ if byte.is_ascii_digit() => {}
                _ => return false,
            }
        }
        true
    }
}

/// Verifies that a field is not blank.
///
/// Blank means empty or whitespace-only. The field name becomes the title
/// of the error border so the user can tell which field complained.
#[derive(Clone, Debug)]
pub struct NotEmptyVerifier {
    field_name: String,
    empty_hint: String,
}

impl NotEmptyVerifier {
    /// Creates a verifier for the named field with the hint to show when
    /// it is blank.
    #[must_use]
    pub fn new(field_name: impl Into<String>, empty_hint: impl Into<String>) -> Self {
        Self {
            field_name: field_name.into(),
            empty_hint: empty_hint.into(),
        }
    }

    /// Returns the field name used to title the error border.
    #[must_use]
    pub fn field_name(&self) -> &str {
        &self.field_name
    }

    /// Verifies `text` and returns the feedback the host should show.
    #[must_use]
    pub fn verify(&self, text: &str) -> FieldFeedback {
        if text.trim().is_empty() {
            FieldFeedback::Invalid {
                border_title: self.field_name.clone(),
                hint: self.empty_hint.clone(),
            }
        } else {
            FieldFeedback::Valid
        }
    }
}

/// Border and tooltip state a verifier asks the host to show.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldFeedback {
    /// Keep the field's original border and clear any hint.
    Valid,
    /// Show a titled error border and a hint tooltip.
    Invalid {
        /// Title to render on the error border, normally the field name.
        border_title: String,
        /// Tooltip text explaining what is wrong.
        hint: String,
    },
}

impl FieldFeedback {
    /// Returns whether the field passed verification.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns the hint tooltip to show, or `None` to clear it.
    #[must_use]
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::Valid => None,
            Self::Invalid { hint, .. } => Some(hint),
        }
    }

    /// Resolves the border color for this outcome.
    #[must_use]
    pub fn border_color(&self, theme: &Theme) -> Color {
        match self {
            Self::Valid => theme
                .color(keys::FIELD_BORDER)
                .unwrap_or(Color::from_rgba8(196, 196, 196, 255)),
            Self::Invalid { .. } => theme
                .color(keys::FIELD_ERROR_BORDER)
                .unwrap_or(Color::from_rgba8(227, 82, 82, 255)),
        }
    }
}

/// Reports whether every outcome passed.
///
/// The iterator is drained even after a failure, so lazily produced
/// outcomes still run their verifiers and every field gets its feedback.
pub fn validate_all(outcomes: impl IntoIterator<Item = FieldFeedback>) -> bool {
    outcomes
        .into_iter()
        .fold(true, |all, outcome| all && outcome.is_valid())
}
