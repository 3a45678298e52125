// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use crate::error::BoundsError;
use crate::mapper::CoordinateMapper;

/// Allowed range for the horizontal math extent (`xmax - xmin`).
///
/// Zooming clamps the resulting extent into `min_width..=max_width`, which
/// keeps the view away from widths where `f64` can no longer tell adjacent
/// device units apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExtentLimits {
    /// Smallest horizontal extent reachable by zooming in.
    pub min_width: f64,
    /// Largest horizontal extent reachable by zooming out.
    pub max_width: f64,
}

impl ExtentLimits {
    /// Creates limits, normalizing them so that `min_width <= max_width`.
    #[must_use]
    pub fn new(min_width: f64, max_width: f64) -> Self {
        if min_width <= max_width {
            Self {
                min_width,
                max_width,
            }
        } else {
            Self {
                min_width: max_width,
                max_width: min_width,
            }
        }
    }

    /// Extent reached by scaling `width` by `factor`, limited in the
    /// direction of travel only.
    ///
    /// A width already outside the limits is never pulled back across them: a
    /// zoom-out step from a view wider than `max_width` keeps the current width.
    fn scaled(&self, width: f64, factor: f64) -> f64 {
        let target = width * factor;
        if factor > 1.0 {
            target.min(self.max_width.max(width))
        } else {
            target.max(self.min_width.min(width))
        }
    }
}

impl Default for ExtentLimits {
    fn default() -> Self {
        Self::new(1e-12, 1e6)
    }
}

/// The visible region of math space.
///
/// The view is stored as a horizontal range `xmin..xmax` and a vertical center
/// `ymid`. The vertical range `ymin..ymax` is derived from those and the
/// surface size so that `(ymax - ymin) / (xmax - xmin) == height / width`.
/// Every mutator re-derives it; it is never written directly.
#[derive(Clone, Debug)]
pub struct ViewState {
    xmin: f64,
    xmax: f64,
    ymid: f64,
    ymin: f64,
    ymax: f64,
    surface: Size,
    limits: ExtentLimits,
}

impl ViewState {
    /// Creates a view over `xmin..xmax` centered vertically on `ymid`.
    ///
    /// The caller must ensure `xmin < xmax`, finite values, and a non-empty
    /// `surface`; see [`ViewState::try_new`] for a checked variant.
    #[must_use]
    pub fn new(xmin: f64, xmax: f64, ymid: f64, surface: Size) -> Self {
        let mut view = Self {
            xmin,
            xmax,
            ymid,
            ymin: ymid,
            ymax: ymid,
            surface,
            limits: ExtentLimits::default(),
        };
        view.recompute_vertical_bounds();
        view
    }

    /// Checked variant of [`ViewState::new`].
    pub fn try_new(xmin: f64, xmax: f64, ymid: f64, surface: Size) -> Result<Self, BoundsError> {
        BoundsError::check(xmin, xmax, ymid)?;
        Ok(Self::new(xmin, xmax, ymid, surface))
    }

    /// Left edge of the view in math units.
    #[must_use]
    pub fn xmin(&self) -> f64 {
        self.xmin
    }

    /// Right edge of the view in math units.
    #[must_use]
    pub fn xmax(&self) -> f64 {
        self.xmax
    }

    /// Vertical center of the view in math units.
    #[must_use]
    pub fn ymid(&self) -> f64 {
        self.ymid
    }

    /// Derived edge at device `y = 0`.
    #[must_use]
    pub fn ymin(&self) -> f64 {
        self.ymin
    }

    /// Derived edge at device `y = height`.
    #[must_use]
    pub fn ymax(&self) -> f64 {
        self.ymax
    }

    /// Horizontal extent `xmax - xmin`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.xmax - self.xmin
    }

    /// Vertical extent `ymax - ymin`.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Returns the surface size the vertical bounds were derived for.
    #[must_use]
    pub fn surface(&self) -> Size {
        self.surface
    }

    /// Returns the current extent limits.
    #[must_use]
    pub fn extent_limits(&self) -> ExtentLimits {
        self.limits
    }

    /// Sets the extent limits used by [`ViewState::zoom_about_device_point`].
    ///
    /// The current view is left as is, even if it lies outside the new limits.
    pub fn set_extent_limits(&mut self, limits: ExtentLimits) {
        self.limits = limits;
    }

    /// Sets the horizontal range and re-derives the vertical bounds.
    ///
    /// The caller must ensure `xmin < xmax` and finite values.
    pub fn set_horizontal_bounds(&mut self, xmin: f64, xmax: f64) {
        self.xmin = xmin;
        self.xmax = xmax;
        self.recompute_vertical_bounds();
    }

    /// Checked variant of [`ViewState::set_horizontal_bounds`].
    ///
    /// On error the view is left unchanged.
    pub fn try_set_horizontal_bounds(&mut self, xmin: f64, xmax: f64) -> Result<(), BoundsError> {
        BoundsError::check(xmin, xmax, self.ymid)?;
        self.set_horizontal_bounds(xmin, xmax);
        Ok(())
    }

    /// Sets the vertical center and re-derives the vertical bounds.
    pub fn set_ymid(&mut self, ymid: f64) {
        self.ymid = ymid;
        self.recompute_vertical_bounds();
    }

    /// Records a new surface size and re-derives the vertical bounds.
    pub fn set_surface_size(&mut self, surface: Size) {
        self.surface = surface;
        self.recompute_vertical_bounds();
    }

    /// Re-derives `ymin`/`ymax` from the horizontal extent, `ymid` and the
    /// surface aspect ratio.
    pub fn recompute_vertical_bounds(&mut self) {
        let half = (self.xmax - self.xmin) / self.surface.width * self.surface.height / 2.0;
        self.ymin = self.ymid - half;
        self.ymax = self.ymid + half;
    }

    /// Returns the visible math-space rectangle.
    #[must_use]
    pub fn visible_rect(&self) -> Rect {
        Rect::new(self.xmin, self.ymin, self.xmax, self.ymax)
    }

    /// Returns a mapper for the current bounds and surface size.
    #[must_use]
    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper::new(self.visible_rect(), self.surface)
    }

    /// Moves the view, keeping its extents, so that the math point `anchor`
    /// lands on the device point `device_pt`.
    pub fn pan_to(&mut self, anchor: Point, device_pt: Point) {
        let xd = self.width();
        self.xmin = anchor.x - device_pt.x / self.surface.width * xd;
        self.xmax = self.xmin + xd;

        let yd = self.height();
        let ymin = anchor.y - device_pt.y / self.surface.height * yd;
        self.ymid = ymin + yd / 2.0;
        self.recompute_vertical_bounds();
    }

    /// Scales both extents by `factor` around the device point `device_pt`.
    ///
    /// The math point under `device_pt` stays under it. Factors above `1.0`
    /// zoom out, factors below zoom in. The resulting horizontal extent stops
    /// at the [`ExtentLimits`] bound in the direction of the zoom; the other
    /// bound is not enforced. Returns `false`, leaving the view untouched, if
    /// `factor` is not a finite positive number or the limited extent equals
    /// the current one.
    pub fn zoom_about_device_point(&mut self, device_pt: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let xd = self.width();
        let new_xd = self.limits.scaled(xd, factor);
        if new_xd == xd {
            return false;
        }

        let anchor = self.mapper().to_math(device_pt);
        let new_yd = self.height() * (new_xd / xd);

        self.xmin = anchor.x - device_pt.x / self.surface.width * new_xd;
        self.xmax = self.xmin + new_xd;
        self.ymid = anchor.y - device_pt.y / self.surface.height * new_yd + new_yd / 2.0;
        self.recompute_vertical_bounds();
        true
    }
}

impl Default for ViewState {
    /// The initial view: `-1..2` horizontally, centered on `0.5`, on a unit surface.
    fn default() -> Self {
        Self::new(-1.0, 2.0, 0.5, Size::new(1.0, 1.0))
    }
}
