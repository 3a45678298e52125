// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fordscape Farey: Ford circles and the enumeration of the ones on screen.
//!
//! Every reduced fraction `p/q` owns a Ford circle tangent to the baseline
//! `y = 0` at `x = p/q`, with radius `1/(2q²)`. In Fordscape's convention the
//! circles hang on the negative side of the baseline: the center is
//! `(p/q, -1/(2q²))`.
//!
//! The interesting part is deciding which of the infinitely many circles are
//! worth drawing for a given [`ViewState`]:
//!
//! 1. Circles whose device radius would be under
//!    [`EnumeratorConfig::min_device_radius`] are dropped, which bounds the
//!    denominator.
//! 2. The bound is tightened further from the view position: nothing is drawn
//!    when the view misses the band around the unit interval or lies wholly
//!    on the positive side of the baseline, and a view entirely on the
//!    negative side only reaches the largest circles.
//! 3. For each denominator below the bound, only the numerators whose circles
//!    can reach the view horizontally are scanned, and non-reduced fractions
//!    are skipped.
//!
//! The result is exposed as an allocation-free iterator, [`VisibleCircles`],
//! so the cost of a pass tracks what is actually drawn.
//!
//! ## Minimal example
//!
//! ```rust
//! use fordscape_farey::CircleEnumerator;
//! use fordscape_view::ViewState;
//! use kurbo::Size;
//!
//! let view = ViewState::new(-1.0, 2.0, 0.5, Size::new(800.0, 600.0));
//! let enumerator = CircleEnumerator::default();
//!
//! let bound = enumerator.bound(&view);
//! assert_eq!(bound.max_q, 17);
//!
//! for circle in enumerator.visible(&view) {
//!     assert!(circle.q() < bound.max_q);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.
//!
//! [`ViewState`]: fordscape_view::ViewState

#![no_std]

extern crate alloc;

mod bound;
mod circle;
mod enumerate;

pub use bound::{BoundReason, DenominatorBound};
pub use circle::{FareyCircle, gcd};
pub use enumerate::{CircleEnumerator, EnumeratorConfig, VisibleCircles};
