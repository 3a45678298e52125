// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use fordscape_view::ViewState;

/// An input notification in device coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A pointer button went down at the given position.
    PointerDown(Point),
    /// The pointer moved to the given position.
    PointerMove(Point),
    /// The pointer button was released.
    PointerUp,
    /// A wheel or scroll step at `pos`. Positive `delta` zooms out.
    Wheel {
        /// Pointer position.
        pos: Point,
        /// Scroll amount, in the host's wheel units.
        delta: f64,
    },
    /// The surface changed size; the new size is read from the surface.
    Resize,
}

/// Maps wheel deltas to zoom factors.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Wheel delta that doubles the extents; the factor is
    /// `1 + delta / sensitivity`. Defaults to `500.0`.
    pub sensitivity: f64,
}

impl ZoomConfig {
    /// Zoom factor for a wheel `delta`.
    #[must_use]
    pub fn factor(&self, delta: f64) -> f64 {
        1.0 + delta / self.sensitivity
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self { sensitivity: 500.0 }
    }
}

/// Current gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum GestureState {
    /// No button is held.
    #[default]
    Idle,
    /// A button is held; `anchor` is the math point grabbed at press time.
    Dragging {
        /// Math-space point pinned under the pointer.
        anchor: Point,
    },
}

/// Interprets drag and wheel gestures as [`ViewState`] changes.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputController {
    state: GestureState,
    zoom: ZoomConfig,
}

impl InputController {
    /// Creates an idle controller with the given zoom configuration.
    #[must_use]
    pub fn new(zoom: ZoomConfig) -> Self {
        Self {
            state: GestureState::Idle,
            zoom,
        }
    }

    /// Returns the current gesture state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Returns the zoom configuration.
    #[must_use]
    pub fn zoom_config(&self) -> ZoomConfig {
        self.zoom
    }

    /// Replaces the zoom configuration.
    pub fn set_zoom_config(&mut self, zoom: ZoomConfig) {
        self.zoom = zoom;
    }

    /// Dispatches `event`, returning `true` if the view changed.
    ///
    /// [`InputEvent::Resize`] is not a gesture and is ignored here; the owner
    /// of the surface handles it.
    pub fn handle(&mut self, view: &mut ViewState, event: &InputEvent) -> bool {
        match *event {
            InputEvent::PointerDown(pos) => {
                self.pointer_down(view, pos);
                false
            }
            InputEvent::PointerMove(pos) => self.pointer_move(view, pos),
            InputEvent::PointerUp => {
                self.pointer_up();
                false
            }
            InputEvent::Wheel { pos, delta } => self.wheel(view, pos, delta),
            InputEvent::Resize => false,
        }
    }

    /// Starts a drag, pinning the math point under `pos`.
    ///
    /// A press while already dragging restarts the drag from the new position.
    pub fn pointer_down(&mut self, view: &ViewState, pos: Point) {
        let anchor = view.mapper().to_math(pos);
        tracing::trace!(x = anchor.x, y = anchor.y, "drag start");
        self.state = GestureState::Dragging { anchor };
    }

    /// Moves the view so the drag anchor sits under `pos`.
    ///
    /// Returns `false` without touching the view when no drag is active.
    pub fn pointer_move(&mut self, view: &mut ViewState, pos: Point) -> bool {
        let GestureState::Dragging { anchor } = self.state else {
            return false;
        };
        view.pan_to(anchor, pos);
        true
    }

    /// Ends the current drag, if any.
    pub fn pointer_up(&mut self) {
        if self.is_dragging() {
            tracing::trace!("drag end");
        }
        self.state = GestureState::Idle;
    }

    /// Zooms about `pos` by the factor for `delta`.
    ///
    /// Works in either state. Returns `false` if the factor was rejected by
    /// the view (not positive) or clamped to no change.
    pub fn wheel(&mut self, view: &mut ViewState, pos: Point, delta: f64) -> bool {
        let factor = self.zoom.factor(delta);
        let changed = view.zoom_about_device_point(pos, factor);
        tracing::trace!(delta, factor, changed, "wheel zoom");
        changed
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Size};

    use fordscape_view::ViewState;

    use super::{GestureState, InputController, InputEvent, ZoomConfig};

    fn view() -> ViewState {
        ViewState::new(-1.0, 2.0, 0.5, Size::new(800.0, 600.0))
    }

    #[test]
    fn starts_idle() {
        let input = InputController::default();
        assert_eq!(input.state(), GestureState::Idle);
        assert!(!input.is_dragging());
    }

    #[test]
    fn press_records_anchor() {
        let view = view();
        let mut input = InputController::default();
        input.pointer_down(&view, Point::new(400.0, 300.0));
        let GestureState::Dragging { anchor } = input.state() else {
            panic!("expected a drag");
        };
        assert!(anchor.distance(Point::new(0.5, 0.5)) < 1e-12);
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut view = view();
        let before = view.visible_rect();
        let mut input = InputController::default();
        assert!(!input.handle(&mut view, &InputEvent::PointerMove(Point::new(10.0, 10.0))));
        assert_eq!(view.visible_rect(), before);
    }

    #[test]
    fn release_returns_to_idle_and_stops_panning() {
        let mut view = view();
        let mut input = InputController::default();
        input.handle(&mut view, &InputEvent::PointerDown(Point::new(10.0, 10.0)));
        assert!(input.handle(&mut view, &InputEvent::PointerMove(Point::new(20.0, 10.0))));
        input.handle(&mut view, &InputEvent::PointerUp);
        assert_eq!(input.state(), GestureState::Idle);

        let before = view.visible_rect();
        assert!(!input.handle(&mut view, &InputEvent::PointerMove(Point::new(90.0, 90.0))));
        assert_eq!(view.visible_rect(), before);
    }

    #[test]
    fn drag_moves_view_opposite_to_pointer() {
        let mut view = view();
        let mut input = InputController::default();
        input.pointer_down(&view, Point::new(400.0, 300.0));
        // Dragging right by a quarter of the width shifts the range left by
        // a quarter of the extent.
        input.pointer_move(&mut view, Point::new(600.0, 300.0));
        assert!((view.xmin() + 1.75).abs() < 1e-12);
        assert!((view.xmax() - 1.25).abs() < 1e-12);
        assert!((view.ymid() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn wheel_zooms_about_pointer_in_any_state() {
        let mut view = view();
        let mut input = InputController::default();
        let pos = Point::new(200.0, 450.0);
        let anchor = view.mapper().to_math(pos);

        assert!(input.handle(&mut view, &InputEvent::Wheel { pos, delta: -100.0 }));
        assert!((view.width() - 3.0 * 0.8).abs() < 1e-12);
        assert!(view.mapper().to_device(anchor).distance(pos) < 1e-9);

        input.pointer_down(&view, pos);
        assert!(input.wheel(&mut view, pos, 250.0));
        assert!(input.is_dragging());
        assert!((view.width() - 3.0 * 0.8 * 1.5).abs() < 1e-12);
        assert!(view.mapper().to_device(anchor).distance(pos) < 1e-9);
    }

    #[test]
    fn extreme_wheel_delta_is_rejected() {
        let mut view = view();
        let mut input = InputController::new(ZoomConfig { sensitivity: 100.0 });
        assert!(!input.wheel(&mut view, Point::new(1.0, 1.0), -100.0));
        assert!(!input.wheel(&mut view, Point::new(1.0, 1.0), -250.0));
        assert!((view.width() - 3.0).abs() < 1e-12);
    }

    #[test]
    fn resize_is_not_a_gesture() {
        let mut view = view();
        let mut input = InputController::default();
        assert!(!input.handle(&mut view, &InputEvent::Resize));
    }
}
