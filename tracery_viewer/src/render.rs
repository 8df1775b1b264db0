// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame painting: background, grid, entities, selection, hover, marquee.

use kurbo::{Affine, BezPath, Cap, Join, Rect, Stroke};
use peniko::Brush;
use tracery_camera::{Camera, GridTick, GridTicks};
use tracery_pick::MarqueeMode;
use tracery_scene::Entity;
use tracery_selection::IndexSelection;

use crate::config::ViewerConfig;
use crate::controller::MarqueeVisual;
use crate::palette::Palette;
use crate::surface::{DrawOp, StateOp, Surface};

/// Paint one frame in back-to-front order.
///
/// World-space passes pre-divide their stroke widths by the camera scale so
/// lines keep a fixed pixel thickness at any zoom. The marquee is the only
/// pass drawn in screen space.
pub(crate) fn paint_frame(
    camera: &Camera,
    entities: &[Entity],
    selection: &IndexSelection,
    hovered: Option<usize>,
    marquee: Option<MarqueeVisual>,
    palette: &Palette,
    config: &ViewerConfig,
    surface: &mut dyn Surface,
) {
    paint_background(camera, palette, surface);
    paint_grid(camera, palette, config, surface);
    paint_entities(camera, entities, palette, surface);
    paint_selection(camera, entities, selection, palette, surface);
    paint_hover(camera, entities, hovered, palette, surface);
    if let Some(marquee) = marquee {
        paint_marquee(marquee, palette, config, surface);
    }
}

fn paint_background(camera: &Camera, palette: &Palette, surface: &mut dyn Surface) {
    surface.state(StateOp::SetTransform(Affine::IDENTITY));
    surface.state(StateOp::SetBrush(Brush::Solid(palette.background)));
    surface.draw(DrawOp::FillRect(camera.viewport().to_rect()));
}

fn paint_grid(
    camera: &Camera,
    palette: &Palette,
    config: &ViewerConfig,
    surface: &mut dyn Surface,
) {
    let visible = camera.visible_world_rect();
    if visible.area() == 0.0 {
        return;
    }
    let spacing = camera.grid_spacing_world(config.grid_spacing_px);
    let units_per_px = camera.world_units_per_pixel();

    surface.state(StateOp::SetTransform(camera.world_to_screen()));

    let minors = grid_lines(visible, spacing, |tick| !tick.is_major());
    if !minors.elements().is_empty() {
        surface.state(StateOp::SetBrush(Brush::Solid(palette.grid_minor)));
        surface.state(StateOp::SetStroke(Stroke::new(units_per_px)));
        surface.draw(DrawOp::StrokePath(minors));
    }

    let majors = grid_lines(visible, spacing, |tick| tick.is_major() && !tick.is_axis());
    if !majors.elements().is_empty() {
        surface.state(StateOp::SetBrush(Brush::Solid(palette.grid_major)));
        surface.state(StateOp::SetStroke(Stroke::new(2.0 * units_per_px)));
        surface.draw(DrawOp::StrokePath(majors));
    }

    let axes = axis_lines(visible);
    if !axes.elements().is_empty() {
        surface.state(StateOp::SetBrush(Brush::Solid(palette.grid_axis)));
        surface.state(StateOp::SetStroke(Stroke::new(2.0 * units_per_px)));
        surface.draw(DrawOp::StrokePath(axes));
    }
}

/// Vertical and horizontal grid lines across `visible` whose tick satisfies
/// `class`, batched into one path.
fn grid_lines(visible: Rect, spacing: f64, class: impl Fn(GridTick) -> bool) -> BezPath {
    let mut path = BezPath::new();
    for tick in GridTicks::covering(visible.x0, visible.x1, spacing) {
        if class(tick) {
            path.move_to((tick.coord, visible.y0));
            path.line_to((tick.coord, visible.y1));
        }
    }
    for tick in GridTicks::covering(visible.y0, visible.y1, spacing) {
        if class(tick) {
            path.move_to((visible.x0, tick.coord));
            path.line_to((visible.x1, tick.coord));
        }
    }
    path
}

/// The world-zero axis lines, where they cross the visible rect.
fn axis_lines(visible: Rect) -> BezPath {
    let mut path = BezPath::new();
    if visible.x0 <= 0.0 && 0.0 <= visible.x1 {
        path.move_to((0.0, visible.y0));
        path.line_to((0.0, visible.y1));
    }
    if visible.y0 <= 0.0 && 0.0 <= visible.y1 {
        path.move_to((visible.x0, 0.0));
        path.line_to((visible.x1, 0.0));
    }
    path
}

fn paint_entities(
    camera: &Camera,
    entities: &[Entity],
    palette: &Palette,
    surface: &mut dyn Surface,
) {
    if entities.is_empty() {
        return;
    }
    surface.state(StateOp::SetTransform(camera.world_to_screen()));
    surface.state(StateOp::SetStroke(Stroke::new(camera.world_units_per_pixel())));
    for entity in entities {
        let color = entity.color().unwrap_or(palette.default_line);
        surface.state(StateOp::SetBrush(Brush::Solid(color)));
        surface.draw(DrawOp::StrokePath(entity.path().clone()));
    }
}

fn paint_selection(
    camera: &Camera,
    entities: &[Entity],
    selection: &IndexSelection,
    palette: &Palette,
    surface: &mut dyn Surface,
) {
    let mut state_emitted = false;
    for index in selection.iter() {
        // Stale indices from a replaced entity list are silently skipped.
        let Some(entity) = entities.get(index) else {
            continue;
        };
        if !state_emitted {
            surface.state(StateOp::SetTransform(camera.world_to_screen()));
            surface.state(StateOp::SetBrush(Brush::Solid(palette.selection)));
            surface.state(StateOp::SetStroke(outline_stroke(
                2.5 * camera.world_units_per_pixel(),
            )));
            state_emitted = true;
        }
        surface.draw(DrawOp::StrokePath(entity.path().clone()));
    }
}

fn paint_hover(
    camera: &Camera,
    entities: &[Entity],
    hovered: Option<usize>,
    palette: &Palette,
    surface: &mut dyn Surface,
) {
    let Some(entity) = hovered.and_then(|index| entities.get(index)) else {
        return;
    };
    surface.state(StateOp::SetTransform(camera.world_to_screen()));
    surface.state(StateOp::SetBrush(Brush::Solid(palette.hover)));
    surface.state(StateOp::SetStroke(outline_stroke(
        2.0 * camera.world_units_per_pixel(),
    )));
    surface.draw(DrawOp::StrokePath(entity.path().clone()));
}

fn paint_marquee(
    marquee: MarqueeVisual,
    palette: &Palette,
    config: &ViewerConfig,
    surface: &mut dyn Surface,
) {
    let (fill, outline) = match marquee.mode {
        MarqueeMode::Window => (palette.marquee_window_fill, palette.marquee_window_stroke),
        MarqueeMode::Crossing => (
            palette.marquee_crossing_fill,
            palette.marquee_crossing_stroke,
        ),
    };

    surface.state(StateOp::SetTransform(Affine::IDENTITY));
    surface.state(StateOp::SetBrush(Brush::Solid(fill)));
    surface.draw(DrawOp::FillRect(marquee.rect));

    let mut stroke = Stroke::new(config.marquee_stroke_px);
    if marquee.mode == MarqueeMode::Crossing {
        let (dash, gap) = (config.marquee_dash_px, config.marquee_gap_px);
        if dash.is_finite() && gap.is_finite() && dash > 0.0 && gap > 0.0 {
            stroke.dash_pattern.push(dash);
            stroke.dash_pattern.push(gap);
        }
    }
    surface.state(StateOp::SetBrush(Brush::Solid(outline)));
    surface.state(StateOp::SetStroke(stroke));
    surface.draw(DrawOp::StrokeRect(marquee.rect));
}

/// Round-capped, round-joined stroke used for selection and hover outlines.
fn outline_stroke(width: f64) -> Stroke {
    let mut stroke = Stroke::new(width);
    stroke.join = Join::Round;
    stroke.start_cap = Cap::Round;
    stroke.end_cap = Cap::Round;
    stroke
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use kurbo::{Shape as _, Size};
    use peniko::Color;

    use crate::surface::{RecordingSurface, SurfaceOp};

    fn camera() -> Camera {
        Camera::new(Size::new(400.0, 300.0))
    }

    fn square(id: &str, origin: f64) -> Entity {
        Entity::new(
            id,
            Rect::new(origin, origin, origin + 40.0, origin + 40.0).to_path(0.1),
        )
    }

    fn paint(
        camera: &Camera,
        entities: &[Entity],
        selection: &IndexSelection,
        hovered: Option<usize>,
        marquee: Option<MarqueeVisual>,
        config: &ViewerConfig,
    ) -> RecordingSurface {
        let mut surface = RecordingSurface::new();
        paint_frame(
            camera,
            entities,
            selection,
            hovered,
            marquee,
            &Palette::default(),
            config,
            &mut surface,
        );
        surface
    }

    fn brush_position(ops: &[SurfaceOp], color: Color) -> Option<usize> {
        ops.iter().position(|op| {
            matches!(op, SurfaceOp::State(StateOp::SetBrush(Brush::Solid(c))) if *c == color)
        })
    }

    #[test]
    fn frame_opens_with_a_screen_space_background_fill() {
        let surface = paint(
            &camera(),
            &[],
            &IndexSelection::new(),
            None,
            None,
            &ViewerConfig::default(),
        );
        assert_eq!(
            &surface.ops()[..3],
            [
                SurfaceOp::State(StateOp::SetTransform(Affine::IDENTITY)),
                SurfaceOp::State(StateOp::SetBrush(Brush::Solid(Color::WHITE))),
                SurfaceOp::Draw(DrawOp::FillRect(Rect::new(0.0, 0.0, 400.0, 300.0))),
            ]
        );
    }

    #[test]
    fn grid_paints_minors_then_majors_then_axes() {
        // 10px spacing at scale 1 puts major lines (every 5th) in view.
        let config = ViewerConfig {
            grid_spacing_px: 10.0,
            ..Default::default()
        };
        let surface = paint(
            &camera(),
            &[],
            &IndexSelection::new(),
            None,
            None,
            &config,
        );
        let palette = Palette::default();

        let minor = brush_position(surface.ops(), palette.grid_minor).unwrap();
        let major = brush_position(surface.ops(), palette.grid_major).unwrap();
        let axis = brush_position(surface.ops(), palette.grid_axis).unwrap();
        assert!(minor < major && major < axis);
    }

    #[test]
    fn axis_lines_are_omitted_when_origin_is_off_screen() {
        let mut camera = camera();
        // Push the world origin far outside the viewport on both axes.
        camera.pan_by(kurbo::Vec2::new(10_000.0, 10_000.0));
        let surface = paint(
            &camera,
            &[],
            &IndexSelection::new(),
            None,
            None,
            &ViewerConfig::default(),
        );
        assert_eq!(brush_position(surface.ops(), Palette::default().grid_axis), None);
    }

    #[test]
    fn entity_strokes_are_one_pixel_in_world_units() {
        let mut camera = camera();
        camera.set_scale(2.0);
        let entities = vec![square("a", 0.0)];
        let surface = paint(
            &camera,
            &entities,
            &IndexSelection::new(),
            None,
            None,
            &ViewerConfig::default(),
        );

        let widths: Vec<f64> = surface
            .ops()
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::State(StateOp::SetStroke(stroke)) => Some(stroke.width),
                _ => None,
            })
            .collect();
        assert!(widths.contains(&0.5), "entity stroke must be 1px / scale");
    }

    #[test]
    fn entity_color_falls_back_to_the_default_line() {
        let mut entities = vec![square("a", 0.0), square("b", 50.0)];
        entities[1].set_color(Some(Color::from_rgba8(200, 40, 40, 255)));
        let surface = paint(
            &camera(),
            &entities,
            &IndexSelection::new(),
            None,
            None,
            &ViewerConfig::default(),
        );

        assert!(brush_position(surface.ops(), Color::BLACK).is_some());
        assert!(brush_position(surface.ops(), Color::from_rgba8(200, 40, 40, 255)).is_some());
    }

    #[test]
    fn stale_selection_indices_draw_nothing() {
        let entities = vec![square("a", 0.0)];
        let mut selection = IndexSelection::new();
        selection.add(7);
        let surface = paint(
            &camera(),
            &entities,
            &selection,
            None,
            None,
            &ViewerConfig::default(),
        );
        assert_eq!(brush_position(surface.ops(), Palette::default().selection), None);
    }

    #[test]
    fn hover_outline_paints_after_the_selection_outline() {
        let entities = vec![square("a", 0.0)];
        let mut selection = IndexSelection::new();
        selection.add(0);
        let surface = paint(
            &camera(),
            &entities,
            &selection,
            Some(0),
            None,
            &ViewerConfig::default(),
        );
        let palette = Palette::default();

        let selected = brush_position(surface.ops(), palette.selection).unwrap();
        let hovered = brush_position(surface.ops(), palette.hover).unwrap();
        assert!(selected < hovered);

        let hover_stroke = surface.ops().iter().find_map(|op| match op {
            SurfaceOp::State(StateOp::SetStroke(stroke)) if stroke.width == 2.0 => Some(stroke),
            _ => None,
        });
        let stroke = hover_stroke.expect("hover stroke present");
        assert_eq!(stroke.start_cap, Cap::Round);
        assert_eq!(stroke.join, Join::Round);
    }

    #[test]
    fn marquee_paints_last_in_screen_space() {
        let marquee = MarqueeVisual {
            rect: Rect::new(10.0, 10.0, 80.0, 60.0),
            mode: MarqueeMode::Window,
        };
        let entities = vec![square("a", 0.0)];
        let surface = paint(
            &camera(),
            &entities,
            &IndexSelection::new(),
            None,
            Some(marquee),
            &ViewerConfig::default(),
        );

        assert_eq!(
            surface.ops().last(),
            Some(&SurfaceOp::Draw(DrawOp::StrokeRect(marquee.rect)))
        );
        // The pass right before the marquee ops resets to screen space.
        let fill_at = surface
            .ops()
            .iter()
            .position(|op| *op == SurfaceOp::Draw(DrawOp::FillRect(marquee.rect)))
            .unwrap();
        assert_eq!(
            surface.ops()[fill_at - 2],
            SurfaceOp::State(StateOp::SetTransform(Affine::IDENTITY))
        );
    }

    #[test]
    fn crossing_marquee_dashes_but_window_stays_solid() {
        let rect = Rect::new(20.0, 20.0, 90.0, 70.0);
        let config = ViewerConfig::default();
        for (mode, expect_dashes) in [(MarqueeMode::Window, false), (MarqueeMode::Crossing, true)] {
            let surface = paint(
                &camera(),
                &[],
                &IndexSelection::new(),
                None,
                Some(MarqueeVisual { rect, mode }),
                &config,
            );
            let stroke = surface
                .ops()
                .iter()
                .rev()
                .find_map(|op| match op {
                    SurfaceOp::State(StateOp::SetStroke(stroke)) => Some(stroke.clone()),
                    _ => None,
                })
                .expect("marquee stroke present");
            if expect_dashes {
                assert_eq!(stroke.dash_pattern.as_slice(), [6.0, 4.0]);
            } else {
                assert!(stroke.dash_pattern.is_empty());
            }
        }
    }
}
