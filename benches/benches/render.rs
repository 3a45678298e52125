// Copyright 2025 the Fordscape Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fordscape::FordCanvas;
use fordscape::input::InputEvent;
use fordscape::render::RecordingSurface;
use kurbo::{Point, Size};

fn bench_drag_frame(c: &mut Criterion) {
    let size = Size::new(1920.0, 1080.0);
    c.bench_function("canvas/drag_frame", |b| {
        b.iter_batched(
            || {
                let mut surface = RecordingSurface::new(size);
                let mut canvas = FordCanvas::default();
                canvas.render(&mut surface);
                canvas.handle(&InputEvent::PointerDown(Point::new(900.0, 500.0)), &mut surface);
                (canvas, surface)
            },
            |(mut canvas, mut surface)| {
                let event = InputEvent::PointerMove(Point::new(910.0, 505.0));
                black_box(canvas.handle(&event, &mut surface));
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_wheel_frame(c: &mut Criterion) {
    let size = Size::new(1920.0, 1080.0);
    c.bench_function("canvas/wheel_frame", |b| {
        b.iter_batched(
            || {
                let mut surface = RecordingSurface::new(size);
                let mut canvas = FordCanvas::default();
                canvas.render(&mut surface);
                (canvas, surface)
            },
            |(mut canvas, mut surface)| {
                let event = InputEvent::Wheel {
                    pos: Point::new(960.0, 540.0),
                    delta: -120.0,
                };
                black_box(canvas.handle(&event, &mut surface));
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, bench_drag_frame, bench_wheel_frame);
criterion_main!(benches);
