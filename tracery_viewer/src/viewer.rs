// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The viewer façade tying camera, scene, picking, selection, and input
//! together behind one paintable object.

use alloc::vec::Vec;
use core::mem;

use kurbo::{Point, Rect, Size};
use peniko::Color;
use tracery_camera::Camera;
use tracery_pick::{marquee_hits, pick_top, world_tolerance};
use tracery_scene::{Entity, EntityStore};
use tracery_selection::{IndexSelection, SelectionMode};
use tracery_style::Theme;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::config::ViewerConfig;
use crate::controller::{Controller, Motion, Release, marquee_mode};
use crate::events::ViewerEvent;
use crate::input::{Modifiers, PointerButton, PointerEvent};
use crate::palette::Palette;
use crate::render;
use crate::surface::Surface;

/// Headless interactive viewer over a list of entities.
///
/// The viewer owns a [`Camera`], an entity store, an interval selection, and
/// a pointer gesture session. It is toolkit-independent: the embedder feeds
/// it pointer and wheel input, drains its event queue, consumes its
/// repaint-request flag, and paints it onto any [`Surface`].
///
/// Pointer semantics, in brief: primary-click selects (ctrl toggles, shift
/// extends), primary-drag draws a marquee (rightward window selection,
/// leftward crossing selection), middle-drag pans, and the wheel zooms about
/// the cursor. See [`Viewer::on_pointer`] for the full rules.
#[derive(Debug)]
pub struct Viewer {
    camera: Camera,
    store: EntityStore,
    selection: IndexSelection,
    controller: Controller,
    theme: Theme,
    palette: Palette,
    config: ViewerConfig,
    hovered: Option<usize>,
    events: Vec<ViewerEvent>,
    needs_repaint: bool,
}

impl Viewer {
    /// Fit padding applied when the entity list is replaced.
    pub const DEFAULT_FIT_PADDING_PX: f64 = 20.0;

    /// Create a viewer with the given viewport size and theme.
    ///
    /// # Panics
    ///
    /// Panics if `viewport` has a non-finite or negative extent.
    #[must_use]
    pub fn new(viewport: Size, theme: &Theme) -> Self {
        Self::with_config(viewport, theme, ViewerConfig::default())
    }

    /// Create a viewer with an explicit configuration.
    ///
    /// # Panics
    ///
    /// Panics if `viewport` has a non-finite or negative extent.
    #[must_use]
    pub fn with_config(viewport: Size, theme: &Theme, config: ViewerConfig) -> Self {
        Self {
            camera: Camera::new(viewport),
            store: EntityStore::new(),
            selection: IndexSelection::new(),
            controller: Controller::default(),
            theme: theme.clone(),
            palette: Palette::resolve(theme),
            config,
            hovered: None,
            events: Vec::new(),
            needs_repaint: true,
        }
    }

    /// The camera, for coordinate conversion and inspection.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// The current entities, in z-order (later entries draw and pick on top).
    pub fn entities(&self) -> &[Entity] {
        self.store.entities()
    }

    /// The selection model.
    pub fn selection(&self) -> &IndexSelection {
        &self.selection
    }

    /// Index of the entity under the pointer, if any.
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// The active configuration.
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The resolved colors currently in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The theme the palette resolves from.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replace the entity list.
    ///
    /// Clears the selection and hover, re-fits the camera around the new
    /// content with [`Self::DEFAULT_FIT_PADDING_PX`] of padding, and
    /// requests a repaint.
    pub fn set_entities(&mut self, entities: Vec<Entity>) {
        self.store.set_entities(entities);
        let before = self.selection.revision();
        self.selection.clear();
        self.note_selection(before);
        if self.hovered.is_some() {
            let old = self.hovered.take();
            self.events.push(ViewerEvent::HoverChanged { old, new: None });
        }
        self.zoom_to_fit(Self::DEFAULT_FIT_PADDING_PX);
        self.needs_repaint = true;
    }

    /// Fit the camera around the union of all entity bounds, keeping
    /// `padding_px` pixels free on every side.
    ///
    /// Does nothing when there are no entities.
    pub fn zoom_to_fit(&mut self, padding_px: f64) {
        if let Some(bounds) = self.store.union_bounds() {
            self.camera.zoom_to_fit(bounds, padding_px);
            self.needs_repaint = true;
        }
    }

    /// Set or clear the display color of the entity at `index`.
    ///
    /// Out-of-range indices are ignored.
    pub fn set_entity_color(&mut self, index: usize, color: Option<Color>) {
        if let Some(entity) = self.store.get_mut(index) {
            entity.set_color(color);
            self.needs_repaint = true;
        }
    }

    /// Switch between single and multiple-interval selection.
    ///
    /// Existing selection contents are preserved; the mode constrains future
    /// edits.
    pub fn set_selection_mode(&mut self, mode: SelectionMode) {
        self.selection.set_mode(mode);
    }

    /// Resize the viewport.
    ///
    /// # Panics
    ///
    /// Panics if `viewport` has a non-finite or negative extent.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.camera.set_viewport(viewport);
        self.needs_repaint = true;
    }

    /// Set the desired on-screen grid spacing in pixels.
    pub fn set_grid_spacing_px(&mut self, px: f64) {
        self.config.grid_spacing_px = px;
        self.needs_repaint = true;
    }

    /// Set the pick slop radius in pixels for hover, click, and crossing
    /// tests.
    pub fn set_pick_tolerance_px(&mut self, px: f64) {
        self.config.pick_tolerance_px = px;
    }

    /// Set the click-vs-drag promotion threshold in pixels.
    ///
    /// Negative and non-finite values clamp to zero.
    pub fn set_drag_threshold_px(&mut self, px: f64) {
        self.config.drag_threshold_px = px.max(0.0);
    }

    /// Set the marquee outline width in pixels.
    pub fn set_marquee_stroke_px(&mut self, px: f64) {
        self.config.marquee_stroke_px = px;
        self.needs_repaint = true;
    }

    /// Set the crossing-marquee dash pattern in pixels.
    pub fn set_marquee_dash(&mut self, dash_px: f64, gap_px: f64) {
        self.config.marquee_dash_px = dash_px;
        self.config.marquee_gap_px = gap_px;
        self.needs_repaint = true;
    }

    /// Set whether world Y points up (`true`, the default) or down.
    pub fn set_flip_y(&mut self, flip_y: bool) {
        self.camera.set_flip_y(flip_y);
        self.needs_repaint = true;
    }

    /// Replace the theme and re-resolve the palette from it.
    pub fn set_theme(&mut self, theme: &Theme) {
        self.theme = theme.clone();
        self.refresh_theme();
    }

    /// Re-resolve every palette color from the current theme.
    ///
    /// This reasserts theme values over any programmatic color overrides.
    pub fn refresh_theme(&mut self) {
        self.palette = Palette::resolve(&self.theme);
        self.needs_repaint = true;
    }

    /// Override the background color until the next theme refresh.
    pub fn set_background_color(&mut self, color: Color) {
        self.palette.background = color;
        self.needs_repaint = true;
    }

    /// Override the default entity line color until the next theme refresh.
    pub fn set_default_line_color(&mut self, color: Color) {
        self.palette.default_line = color;
        self.needs_repaint = true;
    }

    /// Override the selection outline color until the next theme refresh.
    pub fn set_selection_color(&mut self, color: Color) {
        self.palette.selection = color;
        self.needs_repaint = true;
    }

    /// Override the hover outline color until the next theme refresh.
    pub fn set_hover_color(&mut self, color: Color) {
        self.palette.hover = color;
        self.needs_repaint = true;
    }

    /// Replace the whole palette until the next theme refresh.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
        self.needs_repaint = true;
    }

    /// Drain all queued notifications, oldest first.
    pub fn drain_events(&mut self) -> Vec<ViewerEvent> {
        mem::take(&mut self.events)
    }

    /// Consume the repaint-request flag.
    ///
    /// Returns `true` when something visual changed since the last call, in
    /// which case the embedder should schedule a paint. Repaints are only
    /// ever requested, never executed synchronously, so embedders are free
    /// to coalesce.
    pub fn take_needs_repaint(&mut self) -> bool {
        mem::replace(&mut self.needs_repaint, false)
    }

    /// Feed a pointer event.
    ///
    /// - Primary down arms a pending click (hit and modifiers are captured
    ///   at press time); moving beyond the drag threshold promotes the press
    ///   to a marquee and discards the pending click.
    /// - Primary up within the threshold resolves a click: plain click
    ///   selects exclusively (or clears on empty space), ctrl-click toggles,
    ///   shift-click adds. Ctrl- or shift-clicking empty space is a no-op.
    /// - Primary up after a marquee resolves rectangle selection with the
    ///   release-time modifiers: rightward drags select enclosed entities,
    ///   leftward drags select touched ones; without ctrl or shift the
    ///   selection is replaced, with ctrl hits toggle, otherwise they are
    ///   added. The whole resolution is one coalesced selection change.
    /// - Middle drags pan the camera. Moves without a session update hover.
    /// - Any up event destroys the session, matching or not.
    pub fn on_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Down {
                position,
                button,
                modifiers,
            } => match button {
                PointerButton::Primary => {
                    let hit = self.pick_at(position);
                    self.controller.press_primary(position, hit, modifiers);
                }
                PointerButton::Middle => self.controller.press_middle(position),
                PointerButton::Secondary => {}
            },
            PointerEvent::Move { position, .. } => {
                match self.controller.motion(position, self.config.drag_threshold_px) {
                    Motion::Hover => self.update_hover(position),
                    Motion::Pending => {}
                    Motion::Marquee => self.needs_repaint = true,
                    Motion::Pan(delta) => {
                        self.camera.pan_by(delta);
                        self.needs_repaint = true;
                    }
                }
            }
            PointerEvent::Up {
                position,
                button,
                modifiers,
            } => match self.controller.release(position, button, modifiers) {
                Release::Click { hit, modifiers } => self.resolve_click(hit, modifiers),
                Release::Marquee {
                    anchor,
                    position,
                    modifiers,
                } => self.resolve_marquee(anchor, position, modifiers),
                Release::None => {}
            },
        }
    }

    /// Feed wheel rotation, anchored at `position`.
    ///
    /// Positive `notches` (wheel toward the user) zoom out; negative zoom
    /// in. Fractional notches from high-resolution wheels are fine.
    pub fn on_wheel(&mut self, position: Point, notches: f64) {
        if notches == 0.0 || !notches.is_finite() {
            return;
        }
        let factor = self.config.wheel_zoom_per_notch.powf(-notches);
        self.camera.zoom_about_screen_point(position, factor);
        self.needs_repaint = true;
    }

    /// Paint the current frame onto `surface`.
    ///
    /// Painting reads but never mutates viewer state; in particular it does
    /// not consume the repaint-request flag.
    pub fn paint(&self, surface: &mut dyn Surface) {
        render::paint_frame(
            &self.camera,
            self.store.entities(),
            &self.selection,
            self.hovered,
            self.controller.marquee(),
            &self.palette,
            &self.config,
            surface,
        );
    }

    fn pick_at(&mut self, screen: Point) -> Option<usize> {
        let world = self.camera.screen_to_world_point(screen);
        let tolerance = world_tolerance(self.config.pick_tolerance_px, self.camera.scale());
        pick_top(self.store.entities_mut(), world, tolerance)
    }

    fn update_hover(&mut self, position: Point) {
        let hit = self.pick_at(position);
        if hit != self.hovered {
            let old = mem::replace(&mut self.hovered, hit);
            self.events.push(ViewerEvent::HoverChanged { old, new: hit });
            self.needs_repaint = true;
        }
    }

    fn resolve_click(&mut self, hit: Option<usize>, modifiers: Modifiers) {
        let additive = modifiers.intersects(Modifiers::CTRL | Modifiers::SHIFT);
        let before = self.selection.revision();
        match hit {
            None if additive => {}
            None => self.selection.clear(),
            // The entity list can be replaced between press and release;
            // a hit from the old list is dropped rather than misapplied.
            Some(index) if index >= self.store.len() => {}
            Some(index) => {
                if modifiers.contains(Modifiers::CTRL) {
                    self.selection.toggle(index);
                } else if modifiers.contains(Modifiers::SHIFT) {
                    self.selection.add(index);
                } else {
                    self.selection.select_only(index);
                }
            }
        }
        self.note_selection(before);
    }

    fn resolve_marquee(&mut self, anchor: Point, position: Point, modifiers: Modifiers) {
        // The marquee visual disappears however the resolution goes.
        self.needs_repaint = true;
        if anchor == position {
            return;
        }
        let mode = marquee_mode(anchor, position);
        let screen_rect = Rect::from_points(anchor, position);
        let world_rect = self.camera.screen_to_world_rect(screen_rect);
        let tolerance = world_tolerance(self.config.pick_tolerance_px, self.camera.scale());
        let hits = marquee_hits(self.store.entities_mut(), world_rect, mode, tolerance);

        let additive = modifiers.intersects(Modifiers::CTRL | Modifiers::SHIFT);
        let ctrl = modifiers.contains(Modifiers::CTRL);
        let before = self.selection.revision();
        self.selection.transaction(|selection| {
            if !additive {
                selection.clear();
            }
            for index in hits {
                if ctrl {
                    selection.toggle(index);
                } else {
                    selection.add(index);
                }
            }
        });
        self.note_selection(before);
    }

    fn note_selection(&mut self, revision_before: u64) {
        if self.selection.revision() != revision_before {
            self.events.push(ViewerEvent::SelectionChanged);
            self.needs_repaint = true;
        }
    }
}
