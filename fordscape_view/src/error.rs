// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when a horizontal range cannot describe a view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BoundsError {
    /// One of the supplied values is NaN or infinite.
    NonFinite,
    /// The range is empty or inverted (`xmin >= xmax`).
    Empty {
        /// Requested left edge.
        xmin: f64,
        /// Requested right edge.
        xmax: f64,
    },
}

impl BoundsError {
    /// Checks that `xmin..xmax` is a finite, non-empty range and that `ymid`
    /// is finite.
    pub(crate) fn check(xmin: f64, xmax: f64, ymid: f64) -> Result<(), Self> {
        if !(xmin.is_finite() && xmax.is_finite() && ymid.is_finite()) {
            return Err(Self::NonFinite);
        }
        if xmin >= xmax {
            return Err(Self::Empty { xmin, xmax });
        }
        Ok(())
    }
}

impl fmt::Display for BoundsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite => write!(f, "view bounds must be finite"),
            Self::Empty { xmin, xmax } => {
                write!(f, "view range is empty: xmin {xmin} is not below xmax {xmax}")
            }
        }
    }
}

impl core::error::Error for BoundsError {}
