// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fordscape: an infinitely zoomable view of the Ford circles.
//!
//! This crate ties the kernels together behind one context object,
//! [`FordCanvas`], which owns the single [`ViewState`] of a session and feeds
//! input events and render passes through it in order:
//!
//! 1. An [`InputEvent`] arrives from the host.
//! 2. The [`InputController`] updates the view (drag or wheel), or the event is
//!    a resize.
//! 3. If anything changed, the vertical bounds are re-derived for the
//!    surface's current size and a render pass draws onto the [`Surface`].
//!
//! Everything runs synchronously inside [`FordCanvas::handle`]; there is no
//! background work and no locking. Hosts deliver events one at a time.
//!
//! The kernels are re-exported as [`view`], [`farey`], [`input`] and
//! [`render`] for hosts that want to reach past the context object.
//!
//! ## Minimal example
//!
//! ```rust
//! use fordscape::FordCanvas;
//! use fordscape::input::InputEvent;
//! use fordscape::render::RecordingSurface;
//! use kurbo::{Point, Size};
//!
//! let mut surface = RecordingSurface::new(Size::new(800.0, 600.0));
//! let mut canvas = FordCanvas::default();
//!
//! let first = canvas.render(&mut surface);
//! assert_eq!(first.circles, 80);
//!
//! // Scroll up over the middle of the screen to zoom in.
//! let pos = Point::new(400.0, 300.0);
//! let stats = canvas
//!     .handle(&InputEvent::Wheel { pos, delta: -250.0 }, &mut surface)
//!     .expect("zooming re-renders");
//! assert!(stats.circles > first.circles);
//! ```
//!
//! [`ViewState`]: fordscape_view::ViewState
//! [`InputEvent`]: fordscape_input::InputEvent
//! [`InputController`]: fordscape_input::InputController
//! [`Surface`]: fordscape_render::Surface

#![no_std]

mod canvas;

pub use canvas::FordCanvas;

pub use fordscape_farey as farey;
pub use fordscape_input as input;
pub use fordscape_render as render;
pub use fordscape_view as view;
