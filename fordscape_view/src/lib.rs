// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fordscape View: the math-space view and its device-space mapping.
//!
//! This crate provides a small, headless model of a pannable and zoomable
//! window onto a 2D math plane. It focuses on:
//! - The view record ([`ViewState`]): horizontal bounds plus a vertical
//!   center, with the vertical extent derived from the surface aspect ratio.
//! - Coordinate conversion between math space and device space
//!   ([`CoordinateMapper`]).
//! - Anchored pan and zoom primitives that keep a chosen math-space point
//!   under a fixed device-space position.
//!
//! It does **not** own any rendering backend or event plumbing. Callers are
//! expected to:
//! - Keep the surface size in sync via [`ViewState::set_surface_size`].
//! - Take a [`CoordinateMapper`] snapshot from [`ViewState::mapper`] for each
//!   render pass.
//! - Interpret pointer gestures at a higher layer and drive
//!   [`ViewState::pan_to`] / [`ViewState::zoom_about_device_point`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use fordscape_view::ViewState;
//!
//! // Math range -1..2 on an 800x600 surface, vertically centered on 0.5.
//! let view = ViewState::new(-1.0, 2.0, 0.5, Size::new(800.0, 600.0));
//! assert!((view.ymin() + 0.625).abs() < 1e-12);
//! assert!((view.ymax() - 1.625).abs() < 1e-12);
//!
//! // Convert a device-space point into math space (for anchoring, etc.).
//! let mapper = view.mapper();
//! let math_pt = mapper.to_math(Point::new(400.0, 300.0));
//! assert!((math_pt.x - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Design notes
//!
//! - Both axes share one scale factor; the vertical extent is never set
//!   directly, only recomputed from the horizontal extent.
//! - Device space has its origin at the top-left corner of the surface and
//!   math `y` grows in the same direction as device `y`.
//! - Degenerate views (`xmin >= xmax`, non-finite bounds, zero-sized
//!   surfaces) are a caller precondition violation. Use
//!   [`ViewState::try_new`] or [`ViewState::try_set_horizontal_bounds`] when
//!   the bounds come from untrusted input.
//!
//! This crate is `no_std`.

#![no_std]

mod error;
mod mapper;
mod view_state;

pub use error::BoundsError;
pub use mapper::CoordinateMapper;
pub use view_state::{ExtentLimits, ViewState};
