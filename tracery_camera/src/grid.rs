// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

/// Snaps a raw world-space step onto the `{1, 2, 5} × 10^k` ladder.
///
/// The result is the ladder value nearest to `raw` in ratio terms, so grid
/// spacing changes in familiar increments as the camera zooms instead of
/// drifting through arbitrary values. Non-positive and non-finite inputs
/// fall back to `1.0`.
///
/// ```
/// use tracery_camera::nice_step;
///
/// assert_eq!(nice_step(60.0), 50.0);
/// assert_eq!(nice_step(0.03), 0.02);
/// assert_eq!(nice_step(10.0), 10.0);
/// ```
#[must_use]
pub fn nice_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    // Find the decade containing `raw` by repeated multiplication rather
    // than log10, which stays exact for representable powers of ten.
    let mut decade = 1.0;
    if raw >= 1.0 {
        while decade * 10.0 <= raw {
            decade *= 10.0;
        }
    } else {
        while decade > raw {
            decade /= 10.0;
        }
    }
    // `normalized` is in [1, 10); the cut points sit halfway (in ratio
    // terms, roughly) between adjacent ladder values.
    let normalized = raw / decade;
    if normalized < 1.5 {
        decade
    } else if normalized < 3.5 {
        2.0 * decade
    } else if normalized < 7.5 {
        5.0 * decade
    } else {
        10.0 * decade
    }
}

/// One grid line position produced by [`GridTicks`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridTick {
    /// Step index of this tick; the tick sits at `index * spacing`.
    pub index: i64,
    /// World-space coordinate of this tick.
    pub coord: f64,
}

impl GridTick {
    /// Returns whether this tick is a major line (every fifth step).
    #[must_use]
    pub fn is_major(&self) -> bool {
        self.index.rem_euclid(5) == 0
    }

    /// Returns whether this tick lies on the world axis through the origin.
    #[must_use]
    pub fn is_axis(&self) -> bool {
        self.index == 0
    }
}

/// Iterator over the grid tick positions covering a world-space interval.
///
/// Ticks are anchored at the world origin (index 0 sits at coordinate 0)
/// and spaced `spacing` apart, so the grid stays put while the camera pans.
/// The iteration covers `[min, max]` inclusive of the first tick at or
/// before `min` and the first at or after `max`.
#[derive(Clone, Debug)]
pub struct GridTicks {
    next: i64,
    last: i64,
    spacing: f64,
}

impl GridTicks {
    /// Returns the ticks of an origin-anchored grid with the given spacing
    /// that cover the interval `[min, max]`.
    ///
    /// Degenerate inputs (non-finite bounds, `min > max`, or a spacing that
    /// is not strictly positive) produce an empty iterator.
    #[must_use]
    pub fn covering(min: f64, max: f64, spacing: f64) -> Self {
        let empty = Self {
            next: 1,
            last: 0,
            spacing: 1.0,
        };
        if !(spacing > 0.0 && spacing.is_finite()) || !min.is_finite() || !max.is_finite() {
            return empty;
        }
        if min > max {
            return empty;
        }
        let first = (min / spacing).floor();
        let last = (max / spacing).ceil();
        if !first.is_finite() || !last.is_finite() {
            return empty;
        }
        #[expect(
            clippy::cast_possible_truncation,
            reason = "values are finite and the cast saturates at the i64 range"
        )]
        let (next, last) = (first as i64, last as i64);
        Self { next, last, spacing }
    }
}

impl Iterator for GridTicks {
    type Item = GridTick;

    fn next(&mut self) -> Option<GridTick> {
        if self.next > self.last {
            return None;
        }
        let index = self.next;
        self.next += 1;
        #[expect(
            clippy::cast_precision_loss,
            reason = "tick indexes in any practical view fit in the f64 mantissa"
        )]
        let coord = index as f64 * self.spacing;
        Some(GridTick { index, coord })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.next > self.last {
            0
        } else {
            self.last.abs_diff(self.next).saturating_add(1)
        };
        let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}
