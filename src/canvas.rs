//! The immediate-mode drawing surface the renderer paints onto.
//!
//! The renderer needs only three primitives - a filled rectangle, a filled
//! disc, and a stroked line - so that is the whole trait. There is no
//! retained scene graph and no readback requirement; implementors decide what
//! "drawing" means. [`crate::raster::PixelSurface`] rasterizes into an RGBA
//! buffer, while [`Recorder`] logs the commands for inspection.

use glam::Vec2;

use crate::visuals::Rgba;

/// A 2-D immediate-mode drawing surface.
pub trait Canvas {
    /// Current surface width in pixels.
    fn width(&self) -> f32;

    /// Current surface height in pixels.
    fn height(&self) -> f32;

    /// Mirror new viewport dimensions. Existing contents are discarded.
    fn resize(&mut self, width: f32, height: f32);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba);

    /// Fill a disc.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);

    /// Stroke a straight line segment.
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// One recorded draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        origin: Vec2,
        size: Vec2,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
}

/// A canvas that records every command instead of painting.
///
/// The tests count disc and edge draws with this; it is also handy for
/// forwarding the backdrop to a drawing API this crate knows nothing about.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
        }
    }

    /// All commands recorded so far, in issue order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Drop all recorded commands, keeping the dimensions.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }

    pub fn circle_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Circle { .. }))
            .count()
    }

    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

impl Canvas for Recorder {
    fn width(&self) -> f32 {
        self.width
    }

    fn height(&self) -> f32 {
        self.height
    }

    fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.ops.clear();
    }

    fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Rgba) {
        self.ops.push(DrawOp::Rect {
            origin,
            size,
            color,
        });
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            width,
            color,
        });
    }
}
