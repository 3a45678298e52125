// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fordscape::farey::CircleEnumerator;
use fordscape::view::ViewState;
use kurbo::{Point, Size};

/// View zoomed `depth` times by 4x about 1/φ, the hardest point to
/// approximate by fractions.
fn golden_view(depth: u32) -> ViewState {
    let size = Size::new(1920.0, 1080.0);
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let mut view = ViewState::new(0.0, 1.0, 0.0, size);
    view.pan_to(Point::new(0.618_033_988_749_895, 0.0), center);
    for _ in 0..depth {
        view.zoom_about_device_point(center, 0.25);
    }
    view
}

fn bench_enumerate_by_zoom_depth(c: &mut Criterion) {
    let mut group = c.benchmark_group("farey/visible");
    let enumerator = CircleEnumerator::default();

    // Hypothesis: pass cost follows the denominator bound (one numerator
    // window per denominator) while the emitted count stays roughly flat.
    for depth in [0_u32, 4, 8, 12, 16] {
        let view = golden_view(depth);
        let emitted = enumerator.visible(&view).count();
        group.throughput(Throughput::Elements(emitted as u64));

        group.bench_with_input(BenchmarkId::new("count", depth), &view, |b, view| {
            b.iter(|| black_box(enumerator.visible(black_box(view)).count()));
        });
    }
    group.finish();
}

fn bench_initial_view(c: &mut Criterion) {
    let view = ViewState::new(-1.0, 2.0, 0.5, Size::new(1920.0, 1080.0));
    let enumerator = CircleEnumerator::default();
    c.bench_function("farey/visible/initial_view", |b| {
        b.iter(|| black_box(enumerator.collect_visible(black_box(&view))));
    });
}

criterion_group!(benches, bench_enumerate_by_zoom_depth, bench_initial_view);
criterion_main!(benches);
