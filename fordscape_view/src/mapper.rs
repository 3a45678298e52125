// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Circle, Point, Rect, Size};

/// Linear mapping between math space and device space.
///
/// A `CoordinateMapper` is a snapshot of a math-space rectangle and the
/// surface size it is drawn onto; it carries no state of its own beyond
/// that. Take a fresh one from [`crate::ViewState::mapper`] whenever the view
/// changes.
///
/// Lengths are converted with the horizontal scale factor only. This is exact
/// as long as the math rectangle has the same aspect ratio as the surface,
/// which [`crate::ViewState`] guarantees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoordinateMapper {
    math: Rect,
    size: Size,
}

impl CoordinateMapper {
    /// Creates a mapper from a math-space rectangle onto a surface of `size`.
    ///
    /// `math` must have a non-zero width and height and `size` must be
    /// non-empty; this is not checked.
    #[must_use]
    pub fn new(math: Rect, size: Size) -> Self {
        Self { math, size }
    }

    /// Returns the visible math-space rectangle.
    #[must_use]
    pub fn math_rect(&self) -> Rect {
        self.math
    }

    /// Returns the surface size in device units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the surface rectangle in device coordinates, anchored at the origin.
    #[must_use]
    pub fn device_rect(&self) -> Rect {
        self.size.to_rect()
    }

    /// Converts a math-space point into device coordinates.
    #[must_use]
    pub fn to_device(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.math.x0) / self.math.width() * self.size.width,
            (pt.y - self.math.y0) / self.math.height() * self.size.height,
        )
    }

    /// Converts a device-space point into math coordinates.
    #[must_use]
    pub fn to_math(&self, pt: Point) -> Point {
        Point::new(
            pt.x / self.size.width * self.math.width() + self.math.x0,
            pt.y / self.size.height * self.math.height() + self.math.y0,
        )
    }

    /// Converts a math-space length into device units.
    #[must_use]
    pub fn length_to_device(&self, len: f64) -> f64 {
        len / self.math.width() * self.size.width
    }

    /// Converts a device-space length into math units.
    #[must_use]
    pub fn length_to_math(&self, len: f64) -> f64 {
        len / self.size.width * self.math.width()
    }

    /// Maps a math-space circle into device space.
    #[must_use]
    pub fn to_device_circle(&self, circle: Circle) -> Circle {
        Circle::new(
            self.to_device(circle.center),
            self.length_to_device(circle.radius),
        )
    }

    /// Returns `true` if `pt` lies on the surface, edges included.
    #[must_use]
    pub fn contains_device(&self, pt: Point) -> bool {
        pt.x >= 0.0 && pt.x <= self.size.width && pt.y >= 0.0 && pt.y <= self.size.height
    }

    /// Returns the math → device mapping as an affine transform.
    ///
    /// Backends that draw in math units can install this transform instead of
    /// converting every point through [`CoordinateMapper::to_device`].
    #[must_use]
    pub fn math_to_device_transform(&self) -> Affine {
        Affine::scale_non_uniform(
            self.size.width / self.math.width(),
            self.size.height / self.math.height(),
        ) * Affine::translate(-self.math.origin().to_vec2())
    }

    /// Returns the device → math mapping as an affine transform.
    #[must_use]
    pub fn device_to_math_transform(&self) -> Affine {
        self.math_to_device_transform().inverse()
    }
}
