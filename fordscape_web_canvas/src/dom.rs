// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::Rc;

use fordscape::FordCanvas;
use fordscape::input::InputEvent;
use kurbo::Point;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, MouseEvent, WheelEvent, Window};

use crate::surface::CanvasSurface;

struct Session {
    canvas: FordCanvas,
    surface: CanvasSurface,
}

impl Session {
    fn dispatch(&mut self, event: &InputEvent) {
        self.canvas.handle(event, &mut self.surface);
    }
}

fn pointer_pos(event: &MouseEvent) -> Point {
    Point::new(f64::from(event.client_x()), f64::from(event.client_y()))
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Window inner sizes are small non-negative CSS pixel counts."
)]
fn fit_to_window(window: &Window, surface: &CanvasSurface) -> Result<(), JsValue> {
    let width = window.inner_width()?.as_f64().unwrap_or(0.0);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    surface.set_size(width.max(1.0) as u32, height.max(1.0) as u32);
    Ok(())
}

fn listen<E, F>(
    window: &Window,
    kind: &str,
    session: &Rc<RefCell<Session>>,
    mut f: F,
) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(&mut Session, E) + 'static,
{
    let session = Rc::clone(session);
    let closure = Closure::<dyn FnMut(E)>::new(move |event: E| {
        f(&mut session.borrow_mut(), event);
    });
    window.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
    // The listener stays attached for the page lifetime.
    closure.forget();
    Ok(())
}

/// Attaches a Ford circle session to `canvas` and renders the first frame.
pub fn mount(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let surface = CanvasSurface::new(canvas)?;
    fit_to_window(&window, &surface)?;

    let session = Rc::new(RefCell::new(Session {
        canvas: FordCanvas::default(),
        surface,
    }));
    {
        let mut s = session.borrow_mut();
        let Session { canvas, surface } = &mut *s;
        canvas.render(surface);
    }

    listen(&window, "mousedown", &session, |s, e: MouseEvent| {
        s.dispatch(&InputEvent::PointerDown(pointer_pos(&e)));
    })?;
    listen(&window, "mousemove", &session, |s, e: MouseEvent| {
        s.dispatch(&InputEvent::PointerMove(pointer_pos(&e)));
    })?;
    listen(&window, "mouseup", &session, |s, _: MouseEvent| {
        s.dispatch(&InputEvent::PointerUp);
    })?;
    listen(&window, "wheel", &session, |s, e: WheelEvent| {
        s.dispatch(&InputEvent::Wheel {
            pos: pointer_pos(&e),
            delta: e.delta_y(),
        });
    })?;

    let resize_window = window.clone();
    listen(&window, "resize", &session, move |s, _: web_sys::Event| {
        if crate::resize_applied(fit_to_window(&resize_window, &s.surface)) {
            s.dispatch(&InputEvent::Resize);
        }
    })?;
    Ok(())
}

/// Looks up the `<canvas>` with the given element id and calls [`mount`] on it.
#[wasm_bindgen]
pub fn mount_by_id(id: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let canvas = document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str("canvas element not found"))?
        .dyn_into::<HtmlCanvasElement>()?;
    mount(canvas)
}
