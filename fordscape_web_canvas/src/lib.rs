// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web Canvas (2D) host for Fordscape.
//!
//! This crate provides a [`Surface`] implementation backed by
//! `web_sys::CanvasRenderingContext2d`, plus the DOM wiring that turns
//! window mouse, wheel and resize events into [`InputEvent`]s for a
//! [`FordCanvas`]. Everything here is only compiled when targeting `wasm32`.
//!
//! # Usage
//!
//! From JavaScript, after loading the generated bindings:
//!
//! ```js
//! import init, { mount_by_id } from "./fordscape_web_canvas.js";
//! await init();
//! mount_by_id("circles");
//! ```
//!
//! Or from Rust, when you already hold the element:
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn start(canvas: web_sys::HtmlCanvasElement) -> Result<(), wasm_bindgen::JsValue> {
//!     fordscape_web_canvas::mount(canvas)
//! }
//! ```
//!
//! Notes:
//! - The canvas is resized to the window's inner size on mount and on every
//!   `resize` event.
//! - Listeners are attached to the window, so a drag keeps tracking when the
//!   pointer leaves the canvas.
//! - Listeners live for the rest of the page; there is no unmount.
//!
//! [`Surface`]: fordscape::render::Surface
//! [`InputEvent`]: fordscape::input::InputEvent
//! [`FordCanvas`]: fordscape::FordCanvas

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod surface;

#[cfg(target_arch = "wasm32")]
pub use dom::{mount, mount_by_id};
#[cfg(target_arch = "wasm32")]
pub use surface::CanvasSurface;

/// Reports whether a canvas resize went through, logging the failure if not.
#[cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "Only the wasm32 DOM wiring resizes the canvas.")
)]
fn resize_applied<E: core::fmt::Debug>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(?err, "could not fit canvas to window");
            false
        }
    }
}
