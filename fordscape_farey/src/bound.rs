// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use fordscape_view::ViewState;

use crate::enumerate::EnumeratorConfig;

/// Which rule produced a [`DenominatorBound`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BoundReason {
    /// Circles with larger denominators would be smaller than the minimum
    /// device radius.
    Radius,
    /// The view misses the horizontal band, or lies entirely on the positive
    /// side of the baseline. Nothing is drawn.
    OutOfBand,
    /// The view lies entirely on the negative side of the baseline, where only
    /// the largest circles reach.
    BelowBaseline,
    /// The configured safety ceiling.
    Ceiling,
}

/// Exclusive upper bound on the denominators scanned by one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DenominatorBound {
    /// Denominators `1..max_q` are scanned.
    pub max_q: u64,
    /// The rule that set `max_q`.
    pub reason: BoundReason,
}

impl DenominatorBound {
    /// Computes the tightest bound that applies to `view`.
    #[must_use]
    pub fn compute(view: &ViewState, config: &EnumeratorConfig) -> Self {
        // Solve 1/(2q²) >= min_radius for q.
        let min_radius = view.mapper().length_to_math(config.min_device_radius);
        let mut bound = Self {
            max_q: ceil_to_u64((0.5 / min_radius).sqrt()).max(2),
            reason: BoundReason::Radius,
        };

        if view.ymin() > 0.0 || view.xmin() > config.band_max || view.xmax() < config.band_min {
            bound.tighten(0, BoundReason::OutOfBand);
        }

        // The circle for q reaches down to -1/q²; it has to get past ymax.
        if view.ymax() < 0.0 {
            bound.tighten(
                ceil_to_u64((-1.0 / view.ymax()).sqrt()),
                BoundReason::BelowBaseline,
            );
        }

        bound.tighten(config.max_q_ceiling, BoundReason::Ceiling);
        bound
    }

    /// Returns `true` if no denominator is scanned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.max_q <= 1
    }

    fn tighten(&mut self, max_q: u64, reason: BoundReason) {
        if self.max_q > max_q {
            self.max_q = max_q;
            self.reason = reason;
        }
    }
}

/// Rounds up and converts, saturating at the ends of the `u64` range.
///
/// Negative values and NaN become `0`; `+inf` becomes `u64::MAX`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Float to int casts saturate; that is the intended clamping."
)]
pub(crate) fn ceil_to_u64(v: f64) -> u64 {
    v.ceil() as u64
}
