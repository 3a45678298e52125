// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Circle, Line, Point, Size};

use crate::surface::{StrokeStyle, Surface, TextStyle};

/// A call recorded by [`RecordingSurface`].
#[derive(Clone, Debug)]
pub enum SurfaceOp {
    /// [`Surface::clear`].
    Clear,
    /// [`Surface::stroke_circle`].
    Circle {
        /// Circle in device coordinates.
        circle: Circle,
        /// Stroke style at the time of the call.
        style: StrokeStyle,
    },
    /// [`Surface::stroke_line`].
    Line {
        /// Segment in device coordinates.
        line: Line,
        /// Stroke style at the time of the call.
        style: StrokeStyle,
    },
    /// [`Surface::draw_rotated_text`].
    Text {
        /// The drawn text.
        text: String,
        /// Anchor in device coordinates.
        anchor: Point,
        /// Rotation in radians.
        angle: f64,
        /// Text style at the time of the call.
        style: TextStyle,
    },
}

/// A [`Surface`] that records calls instead of drawing them.
///
/// This does **not** rasterize anything. It is intended for tests and
/// debugging that want to assert on what a render pass asked for.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    size: Size,
    ops: Vec<SurfaceOp>,
}

impl RecordingSurface {
    /// Creates an empty recording surface of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            size,
            ops: Vec::new(),
        }
    }

    /// Changes the reported size, as a window resize would.
    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }

    /// All recorded calls, oldest first.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Calls recorded since the most recent [`Surface::clear`].
    #[must_use]
    pub fn last_frame(&self) -> &[SurfaceOp] {
        let start = self
            .ops
            .iter()
            .rposition(|op| matches!(op, SurfaceOp::Clear))
            .map_or(0, |i| i + 1);
        &self.ops[start..]
    }

    /// Drains and returns all recorded calls.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        core::mem::take(&mut self.ops)
    }

    /// Number of [`Surface::clear`] calls, i.e. frames started.
    #[must_use]
    pub fn frames(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, SurfaceOp::Clear))
            .count()
    }

    /// Circles stroked in the last frame.
    pub fn circles(&self) -> impl Iterator<Item = Circle> + '_ {
        self.last_frame().iter().filter_map(|op| match op {
            SurfaceOp::Circle { circle, .. } => Some(*circle),
            _ => None,
        })
    }

    /// Lines stroked in the last frame.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.last_frame().iter().filter_map(|op| match op {
            SurfaceOp::Line { line, .. } => Some(*line),
            _ => None,
        })
    }

    /// Label texts drawn in the last frame.
    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.last_frame().iter().filter_map(|op| match op {
            SurfaceOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn size(&self) -> Size {
        self.size
    }

    fn clear(&mut self) {
        self.ops.push(SurfaceOp::Clear);
    }

    fn stroke_circle(&mut self, circle: Circle, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Circle {
            circle,
            style: *style,
        });
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        self.ops.push(SurfaceOp::Line { line, style: *style });
    }

    fn draw_rotated_text(&mut self, text: &str, anchor: Point, angle: f64, style: &TextStyle) {
        self.ops.push(SurfaceOp::Text {
            text: text.to_string(),
            anchor,
            angle,
            style: style.clone(),
        });
    }
}
