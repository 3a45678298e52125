// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use fordscape_view::ViewState;

use crate::bound::{DenominatorBound, ceil_to_u64};
use crate::circle::{FareyCircle, gcd};

/// Tunables for [`CircleEnumerator`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnumeratorConfig {
    /// Hard ceiling on the denominator bound.
    ///
    /// This only guarantees termination under numerical trouble; it is not a
    /// visibility bound. Defaults to `2_000_000_000`.
    pub max_q_ceiling: u64,
    /// Circles with a smaller radius, in device units, are not enumerated.
    /// Defaults to `0.5`.
    pub min_device_radius: f64,
    /// Left edge of the band the circles are drawn in. A view entirely to the
    /// left of it is empty. Defaults to `-0.5`.
    pub band_min: f64,
    /// Right edge of the band. A view entirely to the right of it is empty.
    /// Defaults to `1.5`.
    pub band_max: f64,
}

impl Default for EnumeratorConfig {
    fn default() -> Self {
        Self {
            max_q_ceiling: 2_000_000_000,
            min_device_radius: 0.5,
            band_min: -0.5,
            band_max: 1.5,
        }
    }
}

/// Finds the Ford circles that reach into a view.
///
/// The enumerator is stateless apart from its [`EnumeratorConfig`]; each call
/// to [`CircleEnumerator::visible`] starts a fresh pass over the current view.
#[derive(Clone, Debug, Default)]
pub struct CircleEnumerator {
    config: EnumeratorConfig,
}

impl CircleEnumerator {
    /// Creates an enumerator with the given configuration.
    #[must_use]
    pub fn new(config: EnumeratorConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &EnumeratorConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: EnumeratorConfig) {
        self.config = config;
    }

    /// Computes the denominator bound a pass over `view` would use.
    #[must_use]
    pub fn bound(&self, view: &ViewState) -> DenominatorBound {
        DenominatorBound::compute(view, &self.config)
    }

    /// Starts a lazy pass over the circles visible in `view`.
    ///
    /// Circles come out ordered by denominator, then numerator.
    #[must_use]
    pub fn visible(&self, view: &ViewState) -> VisibleCircles {
        VisibleCircles {
            bound: self.bound(view),
            xmin: view.xmin(),
            xmax: view.xmax(),
            ymin: view.ymin(),
            q: 0,
            p: 0,
            p_end: 0,
        }
    }

    /// Collects [`CircleEnumerator::visible`] into a vector.
    #[must_use]
    pub fn collect_visible(&self, view: &ViewState) -> Vec<FareyCircle> {
        self.visible(view).collect()
    }
}

/// Iterator over the circles of one enumeration pass.
///
/// Created by [`CircleEnumerator::visible`]. It copies what it needs out of
/// the view, so the view may change while the iterator is alive without
/// affecting it.
#[derive(Clone, Debug)]
pub struct VisibleCircles {
    bound: DenominatorBound,
    xmin: f64,
    xmax: f64,
    ymin: f64,
    q: u64,
    p: u64,
    p_end: u64,
}

impl VisibleCircles {
    /// The denominator bound of this pass.
    #[must_use]
    pub fn bound(&self) -> DenominatorBound {
        self.bound
    }

    /// Denominator currently being scanned, `0` before the first call to `next`.
    #[must_use]
    pub fn current_q(&self) -> u64 {
        self.q
    }

    /// Numerator range `p_start..p_end` worth scanning at denominator `q`.
    ///
    /// `half_width` is how far, in numerator units, a circle at this
    /// denominator can sit from the view edges and still reach into it. When
    /// the view's `ymin` edge cuts the circles it is the half-chord along that
    /// edge; otherwise it falls back to the circle's own half-width `1/(2q)`.
    /// The fallback keeps the scan bounded but is not an exact visibility test.
    fn numerator_window(&self, q: u64) -> (u64, u64) {
        let qf = q as f64;
        let ymin = self.ymin;
        let mut half_width = (-ymin / qf / qf - ymin * ymin).sqrt() * qf;
        if half_width.is_nan() {
            half_width = 0.5 / qf;
        }
        let p_end = ceil_to_u64(qf * self.xmax + half_width).max(2).min(q);
        let p_start = ceil_to_u64(qf * self.xmin - half_width);
        (p_start, p_end)
    }
}

impl Iterator for VisibleCircles {
    type Item = FareyCircle;

    fn next(&mut self) -> Option<FareyCircle> {
        loop {
            while self.p < self.p_end {
                let p = self.p;
                self.p += 1;
                if gcd(p, self.q) == 1 {
                    return Some(FareyCircle::from_reduced(p, self.q));
                }
            }
            if self.q + 1 >= self.bound.max_q {
                return None;
            }
            self.q += 1;
            (self.p, self.p_end) = self.numerator_window(self.q);
        }
    }
}

impl FusedIterator for VisibleCircles {}
