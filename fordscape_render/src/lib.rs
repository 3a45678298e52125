// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fordscape Render: draw the visible Ford circles onto a [`Surface`].
//!
//! This crate separates *what* is drawn from *how* it reaches pixels:
//!
//! - [`Surface`] is the small capability set a backend has to provide:
//!   stroke a circle, stroke a line, draw rotated text, report its size.
//! - [`Renderer`] runs one pass: it maps the baseline and every circle from
//!   [`fordscape_farey::CircleEnumerator`] into device space, strokes them, and
//!   labels the circles that are large enough to read.
//! - [`RecordingSurface`] records the calls instead of drawing, for tests and
//!   debugging.
//!
//! ## Minimal example
//!
//! ```rust
//! use fordscape_farey::CircleEnumerator;
//! use fordscape_render::{RecordingSurface, Renderer, Surface};
//! use fordscape_view::ViewState;
//! use kurbo::Size;
//!
//! let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
//! let view = ViewState::new(-1.0, 2.0, 0.5, surface.size());
//!
//! let stats = Renderer::default().render(&view, &CircleEnumerator::default(), &mut surface);
//! assert_eq!(stats.circles, 80);
//! assert!(surface.labels().any(|text| text == "1/2"));
//! ```
//!
//! Render passes log their circle and label counts at `debug` level through
//! `tracing`; install a subscriber in the host to see them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod recording;
mod renderer;
mod surface;

pub use recording::{RecordingSurface, SurfaceOp};
pub use renderer::{LABEL_ANGLE, RenderStats, RenderStyle, Renderer};
pub use surface::{StrokeStyle, Surface, TextAlign, TextBaseline, TextStyle};
