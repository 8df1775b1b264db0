// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme keys for the widget cores.
//!
//! These keys start at index 100, above the viewer palette in
//! `tracery_style::keys`, per that module's convention for embedder keys.
//! Widgets resolve them on demand with built-in fallbacks, so a theme only
//! needs entries for the colors it wants to change.

use tracery_style::ThemeKey;

/// Accordion header background at rest.
pub const ACCORDION_HEADER: ThemeKey = ThemeKey::new(100);

/// Accordion header background while the pointer is over it.
pub const ACCORDION_HEADER_HOVER: ThemeKey = ThemeKey::new(101);

/// Border of a verified text field in its normal state.
pub const FIELD_BORDER: ThemeKey = ThemeKey::new(102);

/// Border of a verified text field whose contents failed verification.
pub const FIELD_ERROR_BORDER: ThemeKey = ThemeKey::new(103);

/// Toast background fill.
pub const TOAST_BACKGROUND: ThemeKey = ThemeKey::new(104);

/// Toast message text.
pub const TOAST_TEXT: ThemeKey = ThemeKey::new(105);
