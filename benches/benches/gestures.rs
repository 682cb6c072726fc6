// Copyright 2026 the Regionmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size};
use regionmap_event_state::{GestureConfig, GestureRecognizer, PointerEvent, WheelEvent};
use regionmap_view2d::Viewport;

fn viewport() -> Viewport {
    let mut view = Viewport::new(Size::new(1280.0, 800.0));
    view.set_world_bounds(Some(Rect::new(122.0, -46.0, 154.0, -20.0)));
    view.set_scale_limits(1e-3, 500.0);
    let _ = view.fit_world(20.0);
    view
}

fn bench_pan(c: &mut Criterion) {
    c.bench_function("gestures/pan_100_moves", |b| {
        b.iter(|| {
            let mut view = viewport();
            let mut g = GestureRecognizer::new(GestureConfig::default());
            g.pointer_down(&PointerEvent::mouse(1, Point::new(400.0, 300.0), 0), &mut view);
            for i in 1..=100_u32 {
                let p = Point::new(400.0 + f64::from(i) * 3.0, 300.0 - f64::from(i));
                g.pointer_move(&PointerEvent::mouse(1, p, u64::from(i) * 8), &mut view);
            }
            g.pointer_up(&PointerEvent::mouse(1, Point::new(700.0, 200.0), 808), &mut view);
            black_box(view.state())
        });
    });
}

fn bench_pinch(c: &mut Criterion) {
    c.bench_function("gestures/pinch_100_moves", |b| {
        b.iter(|| {
            let mut view = viewport();
            let mut g = GestureRecognizer::new(GestureConfig::default());
            g.pointer_down(&PointerEvent::touch(1, Point::new(500.0, 400.0), 0), &mut view);
            g.pointer_down(&PointerEvent::touch(2, Point::new(700.0, 400.0), 0), &mut view);
            for i in 1..=100_u32 {
                let spread = f64::from(i) * 2.0;
                g.pointer_move(
                    &PointerEvent::touch(2, Point::new(700.0 + spread, 400.0), u64::from(i) * 8),
                    &mut view,
                );
            }
            black_box(view.state())
        });
    });
}

fn bench_wheel(c: &mut Criterion) {
    c.bench_function("gestures/wheel_in_out", |b| {
        let mut view = viewport();
        let mut g = GestureRecognizer::new(GestureConfig::default());
        let mut delta = -1.0;
        b.iter(|| {
            delta = -delta;
            g.wheel(
                &WheelEvent {
                    delta_y: delta,
                    position: Point::new(640.0, 400.0),
                },
                &mut view,
            );
            black_box(view.scale())
        });
    });
}

criterion_group!(benches, bench_pan, bench_pinch, bench_wheel);
criterion_main!(benches);
