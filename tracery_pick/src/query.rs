// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{BezPath, PathEl, Point, Rect, Shape};
use tracery_scene::Entity;

/// Floor applied to degenerate tolerances so hit bands never collapse.
const MIN_TOLERANCE: f64 = 1e-12;

/// Accuracy ratio for flattening outlines during rectangle intersection.
const FLATTEN_RATIO: f64 = 0.01;

/// Marquee selection semantics, decided by the drag direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarqueeMode {
    /// Left-to-right drag: only entities whose bounding box lies entirely
    /// inside the marquee rectangle are hit.
    Window,
    /// Right-to-left drag: any entity whose pick outline touches the
    /// marquee rectangle is hit.
    Crossing,
}

/// Converts a pixel-space tolerance into world units at the given scale.
///
/// Degenerate results (zero, negative, or non-finite) are floored to a tiny
/// positive value so hit bands never vanish entirely.
#[must_use]
pub fn world_tolerance(tolerance_px: f64, scale: f64) -> f64 {
    effective_tolerance(tolerance_px / scale)
}

/// Returns the topmost entity whose pick outline contains `world_pt`.
///
/// Entities are tested last to first so z-order ties go to the entity
/// painted on top; the first match wins. Each entity's bounding box,
/// expanded by the tolerance, serves as a cheap reject before the outline
/// containment test.
#[must_use]
pub fn pick_top(entities: &mut [Entity], world_pt: Point, tolerance_world: f64) -> Option<usize> {
    let tolerance = effective_tolerance(tolerance_world);
    for (index, entity) in entities.iter_mut().enumerate().rev() {
        if !contains_inclusive(entity.expanded_bounds(tolerance), world_pt) {
            continue;
        }
        if entity.pick_outline(tolerance).contains(world_pt) {
            return Some(index);
        }
    }
    None
}

/// Returns the indices of entities selected by a marquee rectangle, in
/// ascending z-order.
///
/// `world_rect` is normalized before testing; pass the raw corner-to-corner
/// rectangle of the drag. The mode decides the semantics: window mode tests
/// the four corners of each entity's bounding box for containment, crossing
/// mode tests whether the tolerance-wide pick outline touches the
/// rectangle (with the expanded bounding box as a cheap pre-filter).
#[must_use]
pub fn marquee_hits(
    entities: &mut [Entity],
    world_rect: Rect,
    mode: MarqueeMode,
    tolerance_world: f64,
) -> Vec<usize> {
    let rect = world_rect.abs();
    let tolerance = effective_tolerance(tolerance_world);
    let mut hits = Vec::new();
    for (index, entity) in entities.iter_mut().enumerate() {
        let hit = match mode {
            MarqueeMode::Window => bbox_corners_inside(entity.bounds(), rect),
            MarqueeMode::Crossing => {
                rects_intersect(entity.expanded_bounds(tolerance), rect)
                    && outline_intersects_rect(entity.pick_outline(tolerance), rect, tolerance)
            }
        };
        if hit {
            hits.push(index);
        }
    }
    hits
}

fn effective_tolerance(tolerance: f64) -> f64 {
    if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        MIN_TOLERANCE
    }
}

/// Containment with edges counting as inside, on both rectangles' sides.
fn contains_inclusive(rect: Rect, pt: Point) -> bool {
    pt.x >= rect.x0 && pt.x <= rect.x1 && pt.y >= rect.y0 && pt.y <= rect.y1
}

fn rects_intersect(a: Rect, b: Rect) -> bool {
    a.x0 <= b.x1 && b.x0 <= a.x1 && a.y0 <= b.y1 && b.y0 <= a.y1
}

/// Window-mode test: all four corners of `bounds` inside `rect`.
///
/// This is a bounding-box test by design, matching drafting convention;
/// a curved shape can be selected when its box fits even though the curve
/// itself bulges short of the corners.
fn bbox_corners_inside(bounds: Rect, rect: Rect) -> bool {
    contains_inclusive(rect, Point::new(bounds.x0, bounds.y0))
        && contains_inclusive(rect, Point::new(bounds.x1, bounds.y0))
        && contains_inclusive(rect, Point::new(bounds.x0, bounds.y1))
        && contains_inclusive(rect, Point::new(bounds.x1, bounds.y1))
}

/// Whether the region enclosed by `outline` touches `rect`.
///
/// Three cases cover every overlap: a rectangle corner inside the region,
/// an outline vertex inside the rectangle, or an outline segment crossing
/// the rectangle boundary. The outline is flattened to line segments at an
/// accuracy proportional to the pick tolerance.
fn outline_intersects_rect(outline: &BezPath, rect: Rect, tolerance: f64) -> bool {
    if outline.contains(Point::new(rect.x0, rect.y0))
        || outline.contains(Point::new(rect.x1, rect.y0))
        || outline.contains(Point::new(rect.x0, rect.y1))
        || outline.contains(Point::new(rect.x1, rect.y1))
    {
        return true;
    }

    let accuracy = (tolerance * FLATTEN_RATIO).max(MIN_TOLERANCE);
    let mut hit = false;
    let mut start = Point::ZERO;
    let mut last = Point::ZERO;
    kurbo::flatten(outline, accuracy, |el| {
        if hit {
            return;
        }
        match el {
            PathEl::MoveTo(p) => {
                start = p;
                last = p;
            }
            PathEl::LineTo(p) => {
                hit = segment_intersects_rect(last, p, rect);
                last = p;
            }
            PathEl::ClosePath => {
                hit = segment_intersects_rect(last, start, rect);
                last = start;
            }
            // Flattened output contains no curves.
            _ => {}
        }
    });
    hit
}

/// Liang-Barsky clip of the segment `p0..p1` against `rect`; reports
/// whether any part of the segment lies inside (boundary included).
fn segment_intersects_rect(p0: Point, p1: Point, rect: Rect) -> bool {
    let d = p1 - p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    let checks = [
        (-d.x, p0.x - rect.x0),
        (d.x, rect.x1 - p0.x),
        (-d.y, p0.y - rect.y0),
        (d.y, rect.y1 - p0.y),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return false;
            }
        } else {
            let r = q / p;
            if p < 0.0 {
                if r > t1 {
                    return false;
                }
                if r > t0 {
                    t0 = r;
                }
            } else {
                if r < t0 {
                    return false;
                }
                if r < t1 {
                    t1 = r;
                }
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use kurbo::{Line, Point, Rect, Shape};
    use tracery_scene::Entity;

    use super::{MarqueeMode, marquee_hits, pick_top, segment_intersects_rect, world_tolerance};

    fn wire(id: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> Entity {
        Entity::new(id, Line::new((x0, y0), (x1, y1)).to_path(0.1))
    }

    fn boxed(id: &str, rect: Rect) -> Entity {
        Entity::new(id, rect.to_path(0.1))
    }

    #[test]
    fn world_tolerance_scales_and_floors() {
        assert_eq!(world_tolerance(6.0, 2.0), 3.0);
        assert_eq!(world_tolerance(6.0, 0.5), 12.0);
        assert_eq!(world_tolerance(0.0, 2.0), super::MIN_TOLERANCE);
        assert_eq!(world_tolerance(6.0, f64::INFINITY), super::MIN_TOLERANCE);
    }

    #[test]
    fn pick_hits_near_misses_far() {
        let mut entities = vec![wire("w", 0.0, 0.0, 100.0, 0.0)];
        assert_eq!(pick_top(&mut entities, Point::new(50.0, 2.0), 3.0), Some(0));
        assert_eq!(pick_top(&mut entities, Point::new(50.0, 5.0), 3.0), None);
    }

    #[test]
    fn hollow_interior_is_not_a_hit() {
        let mut entities = vec![boxed("b", Rect::new(0.0, 0.0, 100.0, 100.0))];
        // Near the edge band: hit. Dead center, far from every edge: miss.
        assert_eq!(pick_top(&mut entities, Point::new(1.0, 50.0), 3.0), Some(0));
        assert_eq!(pick_top(&mut entities, Point::new(50.0, 50.0), 3.0), None);
    }

    #[test]
    fn topmost_entity_wins_overlap() {
        let mut entities = vec![
            boxed("under", Rect::new(0.0, 0.0, 100.0, 100.0)),
            boxed("over", Rect::new(50.0, -50.0, 150.0, 50.0)),
        ];
        // (50, 0) sits on `under`'s bottom edge band and `over`'s left edge
        // band at once; the later entity wins the tie.
        assert_eq!(pick_top(&mut entities, Point::new(50.0, 0.0), 3.0), Some(1));
        // A point only near `under`'s boundary still picks it.
        assert_eq!(pick_top(&mut entities, Point::new(0.0, 75.0), 3.0), Some(0));
    }

    #[test]
    fn window_requires_full_containment() {
        let mut entities = vec![
            boxed("inside", Rect::new(10.0, 10.0, 40.0, 40.0)),
            boxed("partial", Rect::new(30.0, 30.0, 80.0, 80.0)),
            boxed("outside", Rect::new(200.0, 200.0, 220.0, 220.0)),
        ];
        let marquee = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(
            marquee_hits(&mut entities, marquee, MarqueeMode::Window, 1.0),
            vec![0]
        );
    }

    #[test]
    fn crossing_takes_touched_entities_too() {
        let mut entities = vec![
            boxed("inside", Rect::new(10.0, 10.0, 40.0, 40.0)),
            boxed("partial", Rect::new(30.0, 30.0, 80.0, 80.0)),
            boxed("outside", Rect::new(200.0, 200.0, 220.0, 220.0)),
        ];
        let marquee = Rect::new(0.0, 0.0, 50.0, 50.0);
        assert_eq!(
            marquee_hits(&mut entities, marquee, MarqueeMode::Crossing, 1.0),
            vec![0, 1]
        );
    }

    #[test]
    fn crossing_through_the_hollow_interior_misses() {
        // The marquee sits wholly inside the box, away from its edge band.
        let mut entities = vec![boxed("b", Rect::new(0.0, 0.0, 100.0, 100.0))];
        let marquee = Rect::new(20.0, 20.0, 80.0, 80.0);
        assert!(marquee_hits(&mut entities, marquee, MarqueeMode::Crossing, 3.0).is_empty());
    }

    #[test]
    fn crossing_handles_marquee_inside_the_band() {
        // A tiny marquee entirely within the stroked band: no outline
        // vertex falls inside it, but its corners are inside the region.
        let mut entities = vec![wire("w", 0.0, 0.0, 100.0, 0.0)];
        let marquee = Rect::new(49.0, -1.0, 51.0, 1.0);
        assert_eq!(
            marquee_hits(&mut entities, marquee, MarqueeMode::Crossing, 3.0),
            vec![0]
        );
    }

    #[test]
    fn unnormalized_marquee_rects_are_accepted() {
        let mut entities = vec![boxed("b", Rect::new(10.0, 10.0, 40.0, 40.0))];
        let backwards = Rect::new(50.0, 50.0, 0.0, 0.0);
        assert_eq!(
            marquee_hits(&mut entities, backwards, MarqueeMode::Window, 1.0),
            vec![0]
        );
    }

    #[test]
    fn segment_clip_agrees_with_geometry() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Straight through the middle, endpoints outside.
        assert!(segment_intersects_rect(
            Point::new(-5.0, 5.0),
            Point::new(15.0, 5.0),
            rect
        ));
        // Fully inside.
        assert!(segment_intersects_rect(
            Point::new(2.0, 2.0),
            Point::new(8.0, 8.0),
            rect
        ));
        // Parallel and outside.
        assert!(!segment_intersects_rect(
            Point::new(-5.0, 20.0),
            Point::new(15.0, 20.0),
            rect
        ));
        // Diagonal near-miss past a corner.
        assert!(!segment_intersects_rect(
            Point::new(11.0, -2.0),
            Point::new(14.0, 2.0),
            rect
        ));
        // Touching an edge counts.
        assert!(segment_intersects_rect(
            Point::new(10.0, -5.0),
            Point::new(10.0, 15.0),
            rect
        ));
    }
}
