// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::f64::consts::TAU;

use fordscape::render::{StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle};
use kurbo::{Circle, Line, Point, Size};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

fn color_to_css(color: peniko::Color) -> String {
    // `Rgba8` formats as a CSS `rgb(...)`/`rgba(...)` string.
    color.to_rgba8().to_string()
}

fn align_to_canvas(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "left",
        TextAlign::Center => "center",
        TextAlign::Right => "right",
    }
}

fn baseline_to_canvas(baseline: TextBaseline) -> &'static str {
    match baseline {
        TextBaseline::Top => "top",
        TextBaseline::Middle => "middle",
        TextBaseline::Alphabetic => "alphabetic",
        TextBaseline::Bottom => "bottom",
    }
}

/// A [`Surface`] drawing into an HTML `<canvas>` through its 2D context.
#[derive(Debug)]
pub struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    /// Creates a surface for a DOM canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("missing 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { canvas, ctx })
    }

    /// The underlying canvas element.
    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Sets the backing store size of the canvas in device pixels.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    fn apply_stroke(&self, style: &StrokeStyle) {
        self.ctx.set_stroke_style_str(&color_to_css(style.color));
        self.ctx.set_line_width(style.width);
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        )
    }

    fn clear(&mut self) {
        let size = self.size();
        self.ctx.clear_rect(0.0, 0.0, size.width, size.height);
    }

    fn stroke_circle(&mut self, circle: Circle, style: &StrokeStyle) {
        self.apply_stroke(style);
        self.ctx.begin_path();
        let _ = self
            .ctx
            .arc(circle.center.x, circle.center.y, circle.radius, 0.0, TAU);
        self.ctx.stroke();
    }

    fn stroke_line(&mut self, line: Line, style: &StrokeStyle) {
        self.apply_stroke(style);
        self.ctx.begin_path();
        self.ctx.move_to(line.p0.x, line.p0.y);
        self.ctx.line_to(line.p1.x, line.p1.y);
        self.ctx.stroke();
    }

    fn draw_rotated_text(&mut self, text: &str, anchor: Point, angle: f64, style: &TextStyle) {
        let ctx = &self.ctx;
        ctx.set_font(&format!("{}px {}", style.size, style.family));
        ctx.set_text_align(align_to_canvas(style.align));
        ctx.set_text_baseline(baseline_to_canvas(style.baseline));
        ctx.set_fill_style_str(&color_to_css(style.color));

        ctx.save();
        // Canvas 2D reports failures here only for non-finite arguments.
        let _ = ctx.translate(anchor.x, anchor.y);
        let _ = ctx.rotate(angle);
        let _ = ctx.fill_text(text, 0.0, 0.0);
        ctx.restore();
    }
}
