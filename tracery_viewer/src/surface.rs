// Copyright 2025 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The paintable surface abstraction and a recording implementation for tests.

use alloc::vec::Vec;

use kurbo::{Affine, BezPath, Rect, Stroke};
use peniko::Brush;

/// Stroke style carried by [`StateOp::SetStroke`].
pub type StrokeStyle = Stroke;

/// State operations that update a surface's current drawing state.
///
/// State is sticky: each operation replaces one piece of state and applies to
/// every subsequent draw until replaced again. A paint pass always begins by
/// setting the state it relies on, so surfaces need no defined initial state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Replace the transform applied to subsequent geometry.
    ///
    /// Geometry is expressed in the coordinate space this transform maps to
    /// screen pixels. [`Affine::IDENTITY`] means geometry is already in
    /// screen pixels.
    SetTransform(Affine),
    /// Replace the brush used by subsequent fills and strokes.
    SetBrush(Brush),
    /// Replace the stroke style used by subsequent stroke operations.
    ///
    /// Widths are expressed in the coordinate space selected by
    /// [`StateOp::SetTransform`], so world-space passes pre-divide pixel
    /// widths by the camera scale.
    SetStroke(StrokeStyle),
}

/// Draw operations executed under the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill a rectangle with the current brush.
    FillRect(Rect),
    /// Stroke a rectangle outline with the current brush and stroke style.
    StrokeRect(Rect),
    /// Stroke a path with the current brush and stroke style.
    StrokePath(BezPath),
}

/// Rendering target for [`Viewer::paint`](crate::Viewer::paint).
///
/// The viewer is headless: painting produces a stream of state and draw
/// operations, and a `Surface` implementation maps that stream onto an actual
/// renderer (a GPU scene builder, a raster canvas, an SVG writer). Operations
/// arrive in paint order and carry plain [`kurbo`] geometry, so most backends
/// are a thin `match`.
pub trait Surface {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Execute a draw operation under the current state.
    fn draw(&mut self, op: DrawOp);
}

/// One recorded surface operation, in submission order.
#[derive(Clone, Debug, PartialEq)]
pub enum SurfaceOp {
    /// A state change.
    State(StateOp),
    /// A draw call.
    Draw(DrawOp),
}

/// A [`Surface`] that records operations instead of rasterizing them.
///
/// Useful for tests and debugging: paint into it, then assert on the recorded
/// stream.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Create an empty recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded operations, oldest first.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Iterate over only the draw operations, in order.
    pub fn draw_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Draw(draw) => Some(draw),
            SurfaceOp::State(_) => None,
        })
    }

    /// Discard all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }
}

impl Surface for RecordingSurface {
    fn state(&mut self, op: StateOp) {
        self.ops.push(SurfaceOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(SurfaceOp::Draw(op));
    }
}
