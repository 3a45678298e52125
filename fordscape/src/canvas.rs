// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use fordscape_farey::{CircleEnumerator, EnumeratorConfig};
use fordscape_input::{InputController, InputEvent, ZoomConfig};
use fordscape_render::{RenderStats, RenderStyle, Renderer, Surface};
use fordscape_view::ViewState;

/// The context object of one Ford circle session.
///
/// `FordCanvas` owns the [`ViewState`] and hands it by reference to the input
/// controller, the enumerator and the renderer. It always re-derives the
/// vertical bounds for the surface before a pass, so a pass never sees a
/// half-updated view.
#[derive(Clone, Debug, Default)]
pub struct FordCanvas {
    view: ViewState,
    input: InputController,
    enumerator: CircleEnumerator,
    renderer: Renderer,
}

impl FordCanvas {
    /// Creates a session starting from `view`, with default settings.
    #[must_use]
    pub fn new(view: ViewState) -> Self {
        Self {
            view,
            ..Self::default()
        }
    }

    /// Sets the enumeration tunables.
    #[must_use]
    pub fn with_enumerator_config(mut self, config: EnumeratorConfig) -> Self {
        self.enumerator.set_config(config);
        self
    }

    /// Sets the render style.
    #[must_use]
    pub fn with_render_style(mut self, style: RenderStyle) -> Self {
        self.renderer.set_style(style);
        self
    }

    /// Sets the wheel zoom configuration.
    #[must_use]
    pub fn with_zoom_config(mut self, zoom: ZoomConfig) -> Self {
        self.input.set_zoom_config(zoom);
        self
    }

    /// The current view.
    #[must_use]
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Mutable access to the view, for programmatic navigation.
    ///
    /// Changes take effect on the next [`FordCanvas::render`].
    pub fn view_mut(&mut self) -> &mut ViewState {
        &mut self.view
    }

    /// The gesture controller.
    #[must_use]
    pub fn input(&self) -> &InputController {
        &self.input
    }

    /// The circle enumerator.
    #[must_use]
    pub fn enumerator(&self) -> &CircleEnumerator {
        &self.enumerator
    }

    /// The renderer.
    #[must_use]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Handles one input event, rendering onto `surface` if the view changed.
    ///
    /// [`InputEvent::Resize`] always renders, picking up the surface's new
    /// size. Returns the stats of the pass, or `None` if nothing was drawn.
    pub fn handle<S: Surface + ?Sized>(
        &mut self,
        event: &InputEvent,
        surface: &mut S,
    ) -> Option<RenderStats> {
        let changed = match event {
            InputEvent::Resize => true,
            _ => self.input.handle(&mut self.view, event),
        };
        changed.then(|| self.render(surface))
    }

    /// Re-derives the vertical bounds for `surface` and runs a render pass.
    pub fn render<S: Surface + ?Sized>(&mut self, surface: &mut S) -> RenderStats {
        let size = surface.size();
        if size != self.view.surface() {
            tracing::debug!(width = size.width, height = size.height, "surface resized");
        }
        self.view.set_surface_size(size);
        self.renderer.render(&self.view, &self.enumerator, surface)
    }
}
