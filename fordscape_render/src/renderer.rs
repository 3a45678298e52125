// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::f64::consts::FRAC_PI_2;
use core::fmt::Write as _;

use kurbo::{Line, Point};

use fordscape_farey::{CircleEnumerator, DenominatorBound};
use fordscape_view::ViewState;

use crate::surface::{StrokeStyle, Surface, TextStyle};

/// Rotation applied to labels: a quarter turn counter-clockwise, so the text
/// reads bottom to top.
pub const LABEL_ANGLE: f64 = -FRAC_PI_2;

/// Styling and thresholds for a [`Renderer`].
#[derive(Clone, Debug)]
pub struct RenderStyle {
    /// Stroke for the circles.
    pub circle: StrokeStyle,
    /// Stroke for the baseline.
    pub baseline: StrokeStyle,
    /// Label font and placement.
    pub label: TextStyle,
    /// Circles with a device radius above this many units get a label.
    pub label_threshold: f64,
    /// Distance in device units from the baseline to the label anchor, on the
    /// side away from the circles.
    pub label_offset: f64,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            circle: StrokeStyle::default(),
            baseline: StrokeStyle::default(),
            label: TextStyle::default(),
            label_threshold: 10.0,
            label_offset: 5.0,
        }
    }
}

/// Counts from one render pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStats {
    /// Circles stroked.
    pub circles: usize,
    /// Labels drawn.
    pub labels: usize,
    /// Denominator bound used by the pass.
    pub bound: DenominatorBound,
}

/// Draws the baseline, the visible Ford circles and their labels.
#[derive(Clone, Debug, Default)]
pub struct Renderer {
    style: RenderStyle,
}

impl Renderer {
    /// Creates a renderer with the given style.
    #[must_use]
    pub fn new(style: RenderStyle) -> Self {
        Self { style }
    }

    /// Returns the current style.
    #[must_use]
    pub fn style(&self) -> &RenderStyle {
        &self.style
    }

    /// Replaces the style.
    pub fn set_style(&mut self, style: RenderStyle) {
        self.style = style;
    }

    /// Runs one render pass of `view` onto `surface`.
    ///
    /// The view's vertical bounds must already match `surface.size()`; the
    /// pass reads the view as is. The surface is cleared first.
    pub fn render<S: Surface + ?Sized>(
        &self,
        view: &ViewState,
        enumerator: &CircleEnumerator,
        surface: &mut S,
    ) -> RenderStats {
        let mapper = view.mapper();
        let style = &self.style;

        surface.clear();
        surface.stroke_line(
            Line::new(
                mapper.to_device(Point::new(view.xmin(), 0.0)),
                mapper.to_device(Point::new(view.xmax(), 0.0)),
            ),
            &style.baseline,
        );

        let label_y = mapper.length_to_math(style.label_offset);
        let pass = enumerator.visible(view);
        let mut stats = RenderStats {
            circles: 0,
            labels: 0,
            bound: pass.bound(),
        };
        let mut text = String::new();

        for fraction in pass {
            let circle = mapper.to_device_circle(fraction.circle());
            surface.stroke_circle(circle, &style.circle);
            stats.circles += 1;

            if circle.radius <= style.label_threshold {
                continue;
            }
            let anchor = mapper.to_device(Point::new(fraction.value(), label_y));
            if !mapper.contains_device(anchor) {
                continue;
            }
            text.clear();
            let _ = write!(text, "{fraction}");
            surface.draw_rotated_text(&text, anchor, LABEL_ANGLE, &style.label);
            stats.labels += 1;
        }

        tracing::debug!(
            circles = stats.circles,
            labels = stats.labels,
            max_q = stats.bound.max_q,
            "render pass"
        );
        stats
    }
}
