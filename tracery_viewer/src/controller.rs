// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture state machine: click vs. marquee vs. pan.

use kurbo::{Point, Rect, Vec2};
use tracery_pick::MarqueeMode;

use crate::input::{Modifiers, PointerButton};

/// Gesture phase of the pointer session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    /// No button session; moves drive hover.
    #[default]
    Idle,
    /// Primary button is down, displacement still within the click threshold.
    Armed,
    /// The press has promoted to a marquee drag.
    MarqueeActive,
    /// Middle button is down; moves pan the camera.
    Panning,
}

/// What a pointer move means in the current phase.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Motion {
    /// No session is active; the caller may run hover picking.
    Hover,
    /// A press is armed but still within the click threshold.
    Pending,
    /// An active marquee changed (including the move that promoted it).
    Marquee,
    /// A pan session moved by this screen-space delta.
    Pan(Vec2),
}

/// What a button release resolved to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Release {
    /// The press never exceeded the drag threshold.
    Click {
        /// Entity hit at the press point, if any.
        hit: Option<usize>,
        /// Modifiers held at press time.
        modifiers: Modifiers,
    },
    /// A marquee drag finished.
    Marquee {
        /// Press position, in screen pixels.
        anchor: Point,
        /// Release position, in screen pixels.
        position: Point,
        /// Modifiers held at release time.
        modifiers: Modifiers,
    },
    /// Nothing to resolve: pan ended, mismatched button, or no session.
    None,
}

/// Screen-space geometry of the active marquee, for painting.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct MarqueeVisual {
    /// Marquee rectangle in screen pixels, normalized.
    pub(crate) rect: Rect,
    /// Selection mode implied by the current drag direction.
    pub(crate) mode: MarqueeMode,
}

/// Pointer session tracker.
///
/// Owns no scene, camera, or selection knowledge: the viewer feeds it
/// positions and pre-computed pick results, then interprets the transitions
/// it returns. Sessions begin on press and are destroyed unconditionally on
/// release, so a stray or mismatched up event can never wedge the machine.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct Controller {
    phase: Phase,
    anchor: Point,
    current: Point,
    pending_hit: Option<usize>,
    down_modifiers: Modifiers,
}

impl Controller {
    /// Begin a primary-button session armed at `position`.
    ///
    /// `hit` is the topmost entity under the press point; it and `modifiers`
    /// are held as the pending click. A press replaces any session already
    /// in progress.
    pub(crate) fn press_primary(
        &mut self,
        position: Point,
        hit: Option<usize>,
        modifiers: Modifiers,
    ) {
        self.phase = Phase::Armed;
        self.anchor = position;
        self.current = position;
        self.pending_hit = hit;
        self.down_modifiers = modifiers;
    }

    /// Begin a middle-button pan session anchored at `position`.
    pub(crate) fn press_middle(&mut self, position: Point) {
        self.phase = Phase::Panning;
        self.anchor = position;
        self.current = position;
        self.pending_hit = None;
    }

    /// Feed a pointer move.
    ///
    /// `threshold` is the per-axis displacement in pixels beyond which an
    /// armed press stops being a click; the promoting move discards the
    /// pending click for good, even if the pointer later returns to the
    /// anchor.
    pub(crate) fn motion(&mut self, position: Point, threshold: f64) -> Motion {
        match self.phase {
            Phase::Idle => Motion::Hover,
            Phase::Armed => {
                self.current = position;
                let offset = position - self.anchor;
                if offset.x.abs() > threshold || offset.y.abs() > threshold {
                    self.phase = Phase::MarqueeActive;
                    self.pending_hit = None;
                    Motion::Marquee
                } else {
                    Motion::Pending
                }
            }
            Phase::MarqueeActive => {
                self.current = position;
                Motion::Marquee
            }
            Phase::Panning => {
                let delta = position - self.anchor;
                self.anchor = position;
                self.current = position;
                Motion::Pan(delta)
            }
        }
    }

    /// Feed a button release and destroy the session.
    ///
    /// Only a release that matches the session's button resolves to a
    /// [`Release::Click`] or [`Release::Marquee`]; every release resets the
    /// machine to idle regardless.
    pub(crate) fn release(
        &mut self,
        position: Point,
        button: PointerButton,
        modifiers: Modifiers,
    ) -> Release {
        let outcome = match (self.phase, button) {
            (Phase::Armed, PointerButton::Primary) => Release::Click {
                hit: self.pending_hit,
                modifiers: self.down_modifiers,
            },
            (Phase::MarqueeActive, PointerButton::Primary) => Release::Marquee {
                anchor: self.anchor,
                position,
                modifiers,
            },
            _ => Release::None,
        };
        self.phase = Phase::Idle;
        self.pending_hit = None;
        self.down_modifiers = Modifiers::empty();
        outcome
    }

    /// Screen-space marquee geometry while a marquee drag is active.
    pub(crate) fn marquee(&self) -> Option<MarqueeVisual> {
        (self.phase == Phase::MarqueeActive).then(|| MarqueeVisual {
            rect: Rect::from_points(self.anchor, self.current),
            mode: marquee_mode(self.anchor, self.current),
        })
    }
}

/// Marquee mode implied by drag direction.
///
/// Rightward (and purely vertical) drags are window selections; leftward
/// drags are crossing selections.
pub(crate) fn marquee_mode(anchor: Point, current: Point) -> MarqueeMode {
    if current.x >= anchor.x {
        MarqueeMode::Window
    } else {
        MarqueeMode::Crossing
    }
}
