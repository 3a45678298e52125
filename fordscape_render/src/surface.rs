// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;

use kurbo::{Circle, Line, Point, Size};
use peniko::Color;

/// Outline style for circles and lines.
#[derive(Clone, Copy, Debug)]
pub struct StrokeStyle {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in device units.
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
        }
    }
}

/// Horizontal placement of text relative to its anchor, in text space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// The text starts at the anchor.
    Left,
    /// The text is centered on the anchor.
    Center,
    /// The text ends at the anchor.
    #[default]
    Right,
}

/// Vertical placement of text relative to its anchor, in text space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TextBaseline {
    /// The top of the em box sits on the anchor.
    Top,
    /// The middle of the em box sits on the anchor.
    #[default]
    Middle,
    /// The alphabetic baseline sits on the anchor.
    Alphabetic,
    /// The bottom of the em box sits on the anchor.
    Bottom,
}

/// Font and placement for labels.
#[derive(Clone, Debug)]
pub struct TextStyle {
    /// Font family name, as understood by the backend.
    pub family: Cow<'static, str>,
    /// Font size in device units.
    pub size: f64,
    /// Fill color.
    pub color: Color,
    /// Horizontal placement.
    pub align: TextAlign,
    /// Vertical placement.
    pub baseline: TextBaseline,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            family: Cow::Borrowed("Arial"),
            size: 16.0,
            color: Color::BLACK,
            align: TextAlign::default(),
            baseline: TextBaseline::default(),
        }
    }
}

/// A 2D drawing target in device coordinates.
///
/// Device space has its origin at the top-left corner and extends to
/// [`Surface::size`]. Implementations draw immediately; there is no retained
/// state between calls apart from what the backend itself keeps.
pub trait Surface {
    /// Current size in device units.
    fn size(&self) -> Size;

    /// Erases everything drawn so far.
    fn clear(&mut self);

    /// Strokes the outline of `circle`.
    fn stroke_circle(&mut self, circle: Circle, style: &StrokeStyle);

    /// Strokes the segment `line`.
    fn stroke_line(&mut self, line: Line, style: &StrokeStyle);

    /// Draws `text` at `anchor`, rotated by `angle` radians around the anchor.
    ///
    /// Positive angles rotate clockwise on screen, matching the usual
    /// y-down device convention.
    fn draw_rotated_text(&mut self, text: &str, anchor: Point, angle: f64, style: &TextStyle);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn size(&self) -> Size {
        (**self).size()
    }

    fn clear(&mut self) {
        (**self).clear();
    }

    fn stroke_circle(&mut self, circle: Circle, style: &StrokeStyle) {
        (**self).stroke_circle(circle, style);
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        (**self).stroke_line(line, style);
    }

    fn draw_rotated_text(&mut self, text: &str, anchor: Point, angle: f64, style: &TextStyle) {
        (**self).draw_rotated_text(text, anchor, angle, style);
    }
}
