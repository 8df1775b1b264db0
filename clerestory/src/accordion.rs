// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collapsible panel core.

use alloc::string::String;

use kurbo::BezPath;
use peniko::Color;
use tracery_style::Theme;

use crate::keys;

/// State for a collapsible panel: a clickable header with a title and an
/// arrow glyph, plus a content area shown only while expanded.
///
/// The core keeps no layout and no child widgets. Hosts wire pointer input
/// to [`toggle`](Accordion::toggle) and [`set_header_hovered`](Accordion::set_header_hovered),
/// show or hide the content identified by [`content_id`](Accordion::content_id),
/// and draw the header with [`header_background`](Accordion::header_background)
/// and [`arrow_path`](Accordion::arrow_path). The revision counter bumps
/// once per observable change, hover included.
#[derive(Clone, Debug)]
pub struct Accordion {
    title: String,
    content_id: Option<u64>,
    expanded: bool,
    header_hovered: bool,
    revision: u64,
}

impl Accordion {
    /// Creates an accordion with the given header title, expanded.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content_id: None,
            expanded: true,
            header_hovered: false,
            revision: 0,
        }
    }

    /// Returns the header title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Sets the header title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.title == title {
            return;
        }
        self.title = title;
        self.bump();
    }

    /// Returns the host's handle for the content area, if one is set.
    #[must_use]
    pub fn content_id(&self) -> Option<u64> {
        self.content_id
    }

    /// Replaces the host's handle for the content area.
    ///
    /// The handle is opaque to the accordion; hosts use it to find the
    /// widget to show or hide when the expansion state changes.
    pub fn set_content_id(&mut self, id: Option<u64>) {
        if self.content_id == id {
            return;
        }
        self.content_id = id;
        self.bump();
    }

    /// Returns whether the content area is shown.
    #[must_use]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Expands or collapses the content area.
    pub fn set_expanded(&mut self, expanded: bool) {
        if self.expanded == expanded {
            return;
        }
        self.expanded = expanded;
        self.bump();
    }

    /// Flips the expansion state. Hosts call this on a header click.
    pub fn toggle(&mut self) {
        self.set_expanded(!self.expanded);
    }

    /// Returns whether the pointer is over the header.
    #[must_use]
    pub fn is_header_hovered(&self) -> bool {
        self.header_hovered
    }

    /// Records whether the pointer is over the header.
    pub fn set_header_hovered(&mut self, hovered: bool) {
        if self.header_hovered == hovered {
            return;
        }
        self.header_hovered = hovered;
        self.bump();
    }

    /// Returns the revision counter, bumped once per observable change.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Resolves the header background for the current hover state.
    #[must_use]
    pub fn header_background(&self, theme: &Theme) -> Color {
        if self.header_hovered {
            theme
                .color(keys::ACCORDION_HEADER_HOVER)
                .unwrap_or(Color::from_rgba8(221, 221, 221, 255))
        } else {
            theme
                .color(keys::ACCORDION_HEADER)
                .unwrap_or(Color::from_rgba8(238, 238, 238, 255))
        }
    }

    /// Builds the header arrow glyph for the current state, fitted to a
    /// `size` by `size` box at the origin.
    ///
    /// The triangle points right while collapsed and down while expanded,
    /// with the proportions of a classic 12 pixel tree toggle icon. Hosts
    /// with themed icons can ignore this and draw their own.
    #[must_use]
    pub fn arrow_path(&self, size: f64) -> BezPath {
        let tip_inset = size / 6.0;
        let base_inset = size / 3.0;
        let mut path = BezPath::new();
        if self.expanded {
            path.move_to((tip_inset, base_inset));
            path.line_to((size - tip_inset, base_inset));
            path.line_to((size / 2.0, size - base_inset));
        } else {
            path.move_to((base_inset, tip_inset));
            path.line_to((base_inset, size - tip_inset));
            path.line_to((size - base_inset, size / 2.0));
        }
        path.close_path();
        path
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Accordion {
    fn default() -> Self {
        Self::new("Accordion")
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Rect, Shape};
    use peniko::Color;
    use tracery_style::{Theme, ThemeBuilder};

    use super::Accordion;
    use crate::keys;

    #[test]
    fn starts_expanded_with_the_given_title() {
        let accordion = Accordion::new("Layers");
        assert_eq!(accordion.title(), "Layers");
        assert!(accordion.is_expanded());
        assert!(!accordion.is_header_hovered());
        assert_eq!(accordion.content_id(), None);
        assert_eq!(accordion.revision(), 0);
    }

    #[test]
    fn toggle_flips_and_bumps() {
        let mut accordion = Accordion::default();
        accordion.toggle();
        assert!(!accordion.is_expanded());
        assert_eq!(accordion.revision(), 1);
        accordion.toggle();
        assert!(accordion.is_expanded());
        assert_eq!(accordion.revision(), 2);
    }

    #[test]
    fn redundant_mutations_leave_the_revision_alone() {
        let mut accordion = Accordion::new("Title");
        accordion.set_expanded(true);
        accordion.set_title("Title");
        accordion.set_header_hovered(false);
        accordion.set_content_id(None);
        assert_eq!(accordion.revision(), 0);

        accordion.set_content_id(Some(7));
        assert_eq!(accordion.content_id(), Some(7));
        assert_eq!(accordion.revision(), 1);
    }

    #[test]
    fn header_background_tracks_hover() {
        let theme = Theme::default();
        let mut accordion = Accordion::default();
        let rest = accordion.header_background(&theme);
        accordion.set_header_hovered(true);
        let hover = accordion.header_background(&theme);
        assert_ne!(rest, hover);
    }

    #[test]
    fn header_background_prefers_theme_colors() {
        let accent = Color::from_rgba8(90, 30, 200, 255);
        let theme = ThemeBuilder::new()
            .set(keys::ACCORDION_HEADER_HOVER, accent)
            .build();
        let mut accordion = Accordion::default();
        accordion.set_header_hovered(true);
        assert_eq!(accordion.header_background(&theme), accent);
    }

    #[test]
    fn arrow_points_down_expanded_and_right_collapsed() {
        let mut accordion = Accordion::default();
        // Down arrow at size 12: (2, 4) (10, 4) (6, 8).
        assert_eq!(
            accordion.arrow_path(12.0).bounding_box(),
            Rect::new(2.0, 4.0, 10.0, 8.0)
        );
        accordion.set_expanded(false);
        // Right arrow at size 12: (4, 2) (4, 10) (8, 6).
        assert_eq!(
            accordion.arrow_path(12.0).bounding_box(),
            Rect::new(4.0, 2.0, 8.0, 10.0)
        );
    }
}
