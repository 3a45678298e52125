// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `fordscape_farey` crate.
//!
//! These run whole enumeration passes over fixed views and check the emitted
//! fractions: reduced form, the denominator bound, the `q = 1` boundary, and
//! the exact sets for simple views.

use fordscape_farey::{BoundReason, CircleEnumerator, EnumeratorConfig, FareyCircle, gcd};
use fordscape_view::ViewState;
use kurbo::{Point, Size};

fn initial_view() -> ViewState {
    ViewState::new(-1.0, 2.0, 0.5, Size::new(800.0, 600.0))
}

/// A spread of views: zoomed out, zoomed in around various fractions, and
/// straddling or hugging the baseline.
fn sample_views() -> Vec<ViewState> {
    let size = Size::new(1280.0, 720.0);
    let mut views = vec![
        initial_view(),
        ViewState::new(-50.0, 50.0, 0.0, size),
        ViewState::new(0.0, 1.0, -0.25, size),
        ViewState::new(0.49, 0.51, -0.001, size),
        ViewState::new(0.61, 0.62, 0.0, size),
        ViewState::new(0.999, 1.001, -0.0002, size),
        ViewState::new(-0.01, 0.01, -0.3, size),
    ];
    // Zoom into the golden ratio conjugate, pointer at the center.
    let mut golden = ViewState::new(0.0, 1.0, 0.0, size);
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let target = Point::new(0.618_033_988_749_895, 0.0);
    golden.pan_to(target, center);
    for _ in 0..6 {
        golden.zoom_about_device_point(center, 0.25);
        views.push(golden.clone());
    }
    views
}

#[test]
fn initial_view_emits_the_farey_sequence_below_seventeen() {
    let view = initial_view();
    let enumerator = CircleEnumerator::default();
    let circles = enumerator.collect_visible(&view);

    let mut expected = vec![FareyCircle::new(0, 1).unwrap()];
    for q in 2..17 {
        for p in 1..q {
            if let Some(c) = FareyCircle::new(p, q) {
                expected.push(c);
            }
        }
    }
    assert_eq!(circles, expected);
    assert_eq!(circles.len(), 80);
}

#[test]
fn unit_denominator_only_emits_zero() {
    let view = initial_view();
    let at_q1: Vec<_> = CircleEnumerator::default()
        .visible(&view)
        .take_while(|c| c.q() == 1)
        .collect();
    assert_eq!(at_q1, vec![FareyCircle::new(0, 1).unwrap()]);
    assert!(!at_q1.contains(&FareyCircle::new(1, 1).unwrap()));
}

#[test]
fn half_is_emitted_with_its_geometry() {
    let view = initial_view();
    let half = CircleEnumerator::default()
        .visible(&view)
        .find(|c| c.q() == 2)
        .unwrap();
    assert_eq!(half, FareyCircle::new(1, 2).unwrap());
    assert_eq!(half.center(), Point::new(0.5, -0.125));
    assert_eq!(half.radius(), 0.125);
}

#[test]
fn view_above_baseline_is_empty() {
    let view = ViewState::new(0.0, 1.0, 0.6, Size::new(100.0, 100.0));
    assert!(view.ymin() > 0.0);
    let enumerator = CircleEnumerator::default();
    assert_eq!(enumerator.bound(&view).reason, BoundReason::OutOfBand);
    assert_eq!(enumerator.visible(&view).count(), 0);
}

#[test]
fn views_beside_the_band_are_empty() {
    let size = Size::new(640.0, 480.0);
    let enumerator = CircleEnumerator::default();
    assert_eq!(enumerator.visible(&ViewState::new(1.51, 3.0, -0.1, size)).count(), 0);
    assert_eq!(enumerator.visible(&ViewState::new(-4.0, -0.51, -0.1, size)).count(), 0);
}

#[test]
fn every_emitted_fraction_is_reduced() {
    let enumerator = CircleEnumerator::default();
    for view in sample_views() {
        for c in enumerator.visible(&view) {
            assert_eq!(gcd(c.p(), c.q()), 1, "{c} is not reduced");
            assert!(c.p() <= c.q(), "{c} is outside the unit interval");
        }
    }
}

#[test]
fn denominators_stay_below_the_bound() {
    let enumerator = CircleEnumerator::default();
    for view in sample_views() {
        let bound = enumerator.bound(&view);
        let mut pass = enumerator.visible(&view);
        assert_eq!(pass.bound(), bound);
        for c in pass.by_ref() {
            assert!(c.q() < bound.max_q, "q = {} with bound {:?}", c.q(), bound);
        }
        assert!(pass.current_q() < bound.max_q.max(1));
    }
}

#[test]
fn emitted_circles_are_large_enough_to_see() {
    let enumerator = CircleEnumerator::default();
    for view in sample_views() {
        let mapper = view.mapper();
        for c in enumerator.visible(&view) {
            // q < max_q = ceil(sqrt(0.5 / min_r)) keeps r above min_r.
            assert!(mapper.length_to_device(c.radius()) >= 0.5 - 1e-9, "{c} is too small");
        }
    }
}

#[test]
fn output_is_ordered_and_unique() {
    let enumerator = CircleEnumerator::default();
    for view in sample_views() {
        let circles = enumerator.collect_visible(&view);
        for pair in circles.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!((a.q(), a.p()) < (b.q(), b.p()), "{a} before {b}");
        }
    }
}

#[test]
fn zoomed_view_finds_nearby_fractions() {
    let view = ViewState::new(0.333, 0.334, -0.0005, Size::new(1000.0, 1000.0));
    let circles = CircleEnumerator::default().collect_visible(&view);
    assert!(circles.contains(&FareyCircle::new(1, 3).unwrap()));
    assert!(!circles.contains(&FareyCircle::new(2, 5).unwrap()));
    // Small denominators always scan p = 1, so only check the rest.
    for c in circles.iter().filter(|c| c.q() >= 3) {
        let circle = c.circle();
        assert!(
            circle.center.x + circle.radius >= view.xmin() - 1e-9
                && circle.center.x - circle.radius <= view.xmax() + 1e-9,
            "{c} does not reach the view horizontally"
        );
    }
}

#[test]
fn ceiling_bounds_a_deep_zoom() {
    let view = ViewState::new(0.3, 0.3 + 1e-9, -5e-10, Size::new(1000.0, 1000.0));
    let enumerator = CircleEnumerator::new(EnumeratorConfig {
        max_q_ceiling: 50_000,
        ..EnumeratorConfig::default()
    });
    let bound = enumerator.bound(&view);
    assert_eq!(bound.max_q, 50_000);
    assert_eq!(bound.reason, BoundReason::Ceiling);
    assert!(enumerator.visible(&view).all(|c| c.q() < 50_000));
}

#[test]
fn any_min_device_radius_bounds_the_pass() {
    for threshold in [0.1, 2.0, 25.0] {
        let enumerator = CircleEnumerator::new(EnumeratorConfig {
            min_device_radius: threshold,
            ..EnumeratorConfig::default()
        });
        for view in sample_views() {
            let mapper = view.mapper();
            let unfloored = (0.5 / mapper.length_to_math(threshold)).sqrt().ceil();
            let bound = enumerator.bound(&view);
            if bound.reason == BoundReason::Radius {
                assert_eq!(bound.max_q as f64, unfloored.max(2.0), "threshold {threshold}");
            }
            assert!(bound.max_q as f64 <= unfloored.max(2.0));

            for c in enumerator.visible(&view) {
                assert!(c.q() < bound.max_q, "{c} at threshold {threshold}");
                // The floor of two always admits q = 1, however small it is.
                if unfloored >= 2.0 {
                    assert!(
                        mapper.length_to_device(c.radius()) >= threshold * (1.0 - 1e-9),
                        "{c} is under {threshold} device units"
                    );
                }
            }
        }
    }
}

#[test]
fn moving_the_band_moves_the_cutoff() {
    let size = Size::new(800.0, 600.0);
    let near_half = ViewState::new(0.4, 0.6, 0.0, size);
    let half = FareyCircle::new(1, 2).unwrap();

    let default = CircleEnumerator::default();
    assert!(default.visible(&near_half).any(|c| c == half));

    let narrowed = CircleEnumerator::new(EnumeratorConfig {
        band_min: -0.5,
        band_max: 0.25,
        ..EnumeratorConfig::default()
    });
    assert_eq!(narrowed.bound(&near_half).reason, BoundReason::OutOfBand);
    assert_eq!(narrowed.visible(&near_half).count(), 0);

    let left_of_zero = ViewState::new(-1.0, -0.6, 0.0, size);
    assert_eq!(default.visible(&left_of_zero).count(), 0);
    let widened = CircleEnumerator::new(EnumeratorConfig {
        band_min: -2.0,
        ..EnumeratorConfig::default()
    });
    assert_ne!(widened.bound(&left_of_zero).reason, BoundReason::OutOfBand);
}
