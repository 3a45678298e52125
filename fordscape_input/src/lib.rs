// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fordscape Input: turn pointer gestures into view changes.
//!
//! [`InputController`] is a two-state machine:
//!
//! - `Idle --pointer down--> Dragging`: the math point under the pointer is
//!   recorded as the anchor.
//! - `Dragging --pointer move--> Dragging`: the view is moved so the anchor
//!   stays under the pointer.
//! - `Dragging --pointer up--> Idle`.
//! - Wheel events zoom about the pointer in either state.
//!
//! Each handler updates the [`ViewState`] synchronously and reports whether
//! it changed, so the caller knows when to render.
//!
//! ## Minimal example
//!
//! ```rust
//! use fordscape_input::{InputController, InputEvent};
//! use fordscape_view::ViewState;
//! use kurbo::{Point, Size};
//!
//! let mut view = ViewState::new(-1.0, 2.0, 0.5, Size::new(800.0, 600.0));
//! let mut input = InputController::default();
//!
//! let press = Point::new(100.0, 100.0);
//! let anchor = view.mapper().to_math(press);
//! input.handle(&mut view, &InputEvent::PointerDown(press));
//! assert!(input.handle(&mut view, &InputEvent::PointerMove(Point::new(180.0, 90.0))));
//! input.handle(&mut view, &InputEvent::PointerUp);
//!
//! // The anchored point followed the pointer.
//! let moved = view.mapper().to_device(anchor);
//! assert!((moved.x - 180.0).abs() < 1e-9);
//! ```
//!
//! [`ViewState`]: fordscape_view::ViewState

#![no_std]

mod controller;

pub use controller::{GestureState, InputController, InputEvent, ZoomConfig};
