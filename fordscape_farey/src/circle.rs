// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Circle, Point};

/// Greatest common divisor of `a` and `b`.
///
/// `gcd(0, b) == b`, so `0/1` is the only reduced fraction with a zero
/// numerator.
#[must_use]
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// The Ford circle of a reduced fraction `p/q` with `0 <= p <= q`.
///
/// Values are produced fresh by each enumeration pass and are cheap to copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FareyCircle {
    p: u64,
    q: u64,
}

impl FareyCircle {
    /// Creates the circle for `p/q`.
    ///
    /// Returns `None` unless `q >= 1`, `p <= q` and `gcd(p, q) == 1`.
    #[must_use]
    pub fn new(p: u64, q: u64) -> Option<Self> {
        if q == 0 || p > q || gcd(p, q) != 1 {
            return None;
        }
        Some(Self { p, q })
    }

    /// Builds a circle the caller has already checked to be reduced.
    pub(crate) fn from_reduced(p: u64, q: u64) -> Self {
        debug_assert!(q >= 1 && gcd(p, q) == 1, "{p}/{q} is not reduced");
        Self { p, q }
    }

    /// Numerator.
    #[must_use]
    pub fn p(&self) -> u64 {
        self.p
    }

    /// Denominator.
    #[must_use]
    pub fn q(&self) -> u64 {
        self.q
    }

    /// The fraction as a float; also the tangency point on the baseline.
    #[must_use]
    pub fn value(&self) -> f64 {
        self.p as f64 / self.q as f64
    }

    /// Radius `1/(2q²)` in math units.
    #[must_use]
    pub fn radius(&self) -> f64 {
        let q = self.q as f64;
        0.5 / (q * q)
    }

    /// Center `(p/q, -radius)` in math units.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.value(), -self.radius())
    }

    /// The circle in math space.
    #[must_use]
    pub fn circle(&self) -> Circle {
        Circle::new(self.center(), self.radius())
    }
}

impl fmt::Display for FareyCircle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.p, self.q)
    }
}
