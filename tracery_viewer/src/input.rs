// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input vocabulary fed to [`Viewer`](crate::Viewer).
//!
//! The viewer is windowing-toolkit agnostic: the embedder translates its host
//! events into these types and forwards them to
//! [`Viewer::on_pointer`](crate::Viewer::on_pointer) and
//! [`Viewer::on_wheel`](crate::Viewer::on_wheel). Positions are viewport
//! pixels with the origin at the top-left corner.

use kurbo::Point;

bitflags::bitflags! {
    /// Keyboard modifiers held during a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control (or the platform's primary command modifier).
        const CTRL = 0b0000_0001;
        /// Shift.
        const SHIFT = 0b0000_0010;
        /// Alt / Option.
        const ALT = 0b0000_0100;
    }
}

/// Pointer button identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// The primary button, usually the left one. Drives selection gestures.
    Primary,
    /// The middle button or wheel press. Drives panning.
    Middle,
    /// The secondary button, usually the right one. The viewer ignores it.
    Secondary,
}

/// A pointer event in viewport coordinates.
///
/// Which parts of an event the viewer reads depends on the gesture in
/// progress; see [`Viewer::on_pointer`](crate::Viewer::on_pointer) for the
/// interaction rules. Modifiers are sampled per event, so a click and the
/// marquee it could have become may observe different modifier sets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down {
        /// Pointer position in viewport pixels.
        position: Point,
        /// The button that went down.
        button: PointerButton,
        /// Modifiers held at press time.
        modifiers: Modifiers,
    },
    /// The pointer moved, with or without buttons held.
    Move {
        /// Pointer position in viewport pixels.
        position: Point,
        /// Modifiers held during the move.
        modifiers: Modifiers,
    },
    /// A button was released.
    Up {
        /// Pointer position in viewport pixels.
        position: Point,
        /// The button that went up.
        button: PointerButton,
        /// Modifiers held at release time.
        modifiers: Modifiers,
    },
}
