// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::{BezPath, Cap, Join, Rect, Shape, Stroke, StrokeOpts, stroke};
use peniko::Color;

/// Smallest stroke half-width used when a pick tolerance degenerates.
///
/// Zero-width outlines would make open shapes unpickable, so tolerances at
/// or below zero (and non-finite ones) are floored to this value.
const MIN_PICK_TOLERANCE: f64 = 1e-12;

/// One displayable, pickable vector shape in world space.
///
/// The identity and geometry are fixed at construction; only the display
/// color can change afterwards. The cached [`bounds`](Entity::bounds) is the
/// shape's bounding box and stays equal to it for the entity's lifetime.
#[derive(Clone, Debug)]
pub struct Entity {
    id: String,
    path: BezPath,
    bounds: Rect,
    color: Option<Color>,
    pick_outline: Option<PickOutline>,
}

/// Memoized stroke expansion, keyed by the world-space tolerance it was
/// built for.
#[derive(Clone, Debug)]
struct PickOutline {
    tolerance: f64,
    outline: BezPath,
}

impl Entity {
    /// Creates an entity from an identifier and a world-space path.
    ///
    /// Identifiers are expected to be unique per collection by caller
    /// convention; nothing here enforces that.
    #[must_use]
    pub fn new(id: impl Into<String>, path: BezPath) -> Self {
        let bounds = path.bounding_box();
        Self {
            id: id.into(),
            path,
            bounds,
            color: None,
            pick_outline: None,
        }
    }

    /// Creates an entity from any [`Shape`], flattened to a path with the
    /// given curve-fitting `tolerance` in world units.
    #[must_use]
    pub fn from_shape(id: impl Into<String>, shape: &impl Shape, tolerance: f64) -> Self {
        Self::new(id, shape.to_path(tolerance))
    }

    /// Returns the caller-supplied identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the world-space path.
    #[must_use]
    pub fn path(&self) -> &BezPath {
        &self.path
    }

    /// Returns the cached world-space bounding box of the path.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Returns the bounding box grown by `amount` on every side.
    #[must_use]
    pub fn expanded_bounds(&self, amount: f64) -> Rect {
        self.bounds.inflate(amount, amount)
    }

    /// Returns the display color override, if any.
    ///
    /// `None` means the entity renders in the viewer's default line color.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    /// Sets or clears the display color override.
    pub fn set_color(&mut self, color: Option<Color>) {
        self.color = color;
    }

    /// Returns the stroke expansion of the path used for hit testing, built
    /// for the given world-space `tolerance`.
    ///
    /// The outline is a round-capped, round-joined stroke of width
    /// `2 × tolerance` around the path, so a point within `tolerance` of any
    /// segment falls inside it even for open or zero-area shapes. The result
    /// is memoized per entity and recomputed only when `tolerance` changes,
    /// which keeps repeated hover queries at a stable zoom cheap.
    ///
    /// Tolerances that are zero, negative, or non-finite are floored to a
    /// tiny positive value.
    pub fn pick_outline(&mut self, tolerance: f64) -> &BezPath {
        let tolerance = if tolerance.is_finite() && tolerance > 0.0 {
            tolerance
        } else {
            MIN_PICK_TOLERANCE
        };
        let stale = self
            .pick_outline
            .as_ref()
            .is_none_or(|memo| memo.tolerance != tolerance);
        if stale {
            self.pick_outline = None;
        }
        let path = &self.path;
        let memo = self.pick_outline.get_or_insert_with(|| PickOutline {
            tolerance,
            outline: build_pick_outline(path, tolerance),
        });
        &memo.outline
    }
}

fn build_pick_outline(path: &BezPath, tolerance: f64) -> BezPath {
    let mut style = Stroke::new(2.0 * tolerance);
    style.join = Join::Round;
    style.start_cap = Cap::Round;
    style.end_cap = Cap::Round;
    // Expansion accuracy scales with the tolerance so the outline error
    // stays a small fraction of the pick slop at any zoom level.
    let accuracy = (tolerance * 0.01).max(MIN_PICK_TOLERANCE);
    stroke(path.iter(), &style, &StrokeOpts::default(), accuracy)
}

#[cfg(test)]
mod tests {
    use kurbo::{Line, Point, Rect, Shape};
    use peniko::Color;

    use super::Entity;

    #[test]
    fn bounds_are_cached_from_the_shape() {
        let rect = Rect::new(10.0, 20.0, 110.0, 70.0);
        let entity = Entity::new("r", rect.to_path(0.1));
        assert_eq!(entity.bounds(), rect);
        assert_eq!(entity.id(), "r");
    }

    #[test]
    fn expanded_bounds_grow_symmetrically() {
        let entity = Entity::new("r", Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1));
        assert_eq!(entity.expanded_bounds(2.0), Rect::new(-2.0, -2.0, 12.0, 12.0));
    }

    #[test]
    fn color_override_starts_unset() {
        let mut entity = Entity::new("r", Rect::new(0.0, 0.0, 10.0, 10.0).to_path(0.1));
        assert!(entity.color().is_none());

        entity.set_color(Some(Color::from_rgba8(255, 0, 0, 255)));
        assert!(entity.color().is_some());

        entity.set_color(None);
        assert!(entity.color().is_none());
    }

    #[test]
    fn pick_outline_covers_points_near_a_thin_shape() {
        // An open polyline has zero fill area; only the stroke expansion
        // makes it pickable.
        let mut entity = Entity::new("wire", Line::new((0.0, 0.0), (100.0, 0.0)).to_path(0.1));

        let outline = entity.pick_outline(2.0);
        assert!(outline.contains(Point::new(50.0, 1.5)));
        assert!(outline.contains(Point::new(0.0, 0.0)));
        assert!(!outline.contains(Point::new(50.0, 3.5)));
        // Round caps extend past the endpoints.
        assert!(outline.contains(Point::new(101.0, 0.0)));
    }

    #[test]
    fn pick_outline_tracks_tolerance_changes() {
        let mut entity = Entity::new("wire", Line::new((0.0, 0.0), (100.0, 0.0)).to_path(0.1));

        assert!(!entity.pick_outline(1.0).contains(Point::new(50.0, 4.0)));
        assert!(entity.pick_outline(5.0).contains(Point::new(50.0, 4.0)));
        // Shrinking again rebuilds the tighter outline.
        assert!(!entity.pick_outline(1.0).contains(Point::new(50.0, 4.0)));
    }

    #[test]
    fn degenerate_tolerance_is_floored() {
        let mut entity = Entity::new("wire", Line::new((0.0, 0.0), (10.0, 0.0)).to_path(0.1));
        assert!(!entity.pick_outline(0.0).elements().is_empty());
        assert!(!entity.pick_outline(f64::NAN).elements().is_empty());
        assert!(!entity.pick_outline(-3.0).elements().is_empty());
    }
}
