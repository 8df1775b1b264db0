// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Notifications emitted by the viewer.

/// A notification queued by the viewer for the embedder to drain.
///
/// Events accumulate in order on an internal queue; call
/// [`Viewer::drain_events`](crate::Viewer::drain_events) after feeding input
/// to collect them. There are no callbacks, so embedders decide when and on
/// which thread to react.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewerEvent {
    /// The selection contents changed.
    ///
    /// Batched mutations (a resolved marquee, a replace-and-clear) emit this
    /// once per coalesced change, not once per touched entity.
    SelectionChanged,
    /// The hovered entity changed.
    HoverChanged {
        /// The previously hovered entity index, if any.
        old: Option<usize>,
        /// The newly hovered entity index, if any.
        new: Option<usize>,
    },
}
