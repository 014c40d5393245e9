// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size, Vec2};
use understory_event_state::gesture::GesturePhase;
use understory_sticker_canvas::{Canvas, CanvasConfig, GestureEvent};
use understory_view2d::{CoordinateMapper, ViewTransform};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

fn canvas_with_items(count: usize) -> Canvas<Size> {
    let mut canvas = Canvas::new(CanvasConfig::default()).unwrap();
    canvas.set_viewport_size(Size::new(1280.0, 800.0));
    let mut rng = Lcg(0x5eed);
    for _ in 0..count {
        let location = Point::new(rng.next_f64() * 2000.0 - 1000.0, rng.next_f64() * 2000.0 - 1000.0);
        canvas.place("*", location, 40.0).unwrap();
    }
    canvas
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("view2d/mapping");
    let mapper = CoordinateMapper::new(
        Size::new(1280.0, 800.0),
        ViewTransform::new(1.75, Vec2::new(-120.0, 64.0)),
    );
    let mut rng = Lcg(7);
    let points: Vec<Point> = (0..1_024)
        .map(|_| Point::new(rng.next_f64() * 1280.0, rng.next_f64() * 800.0))
        .collect();
    group.throughput(Throughput::Elements(points.len() as u64));

    group.bench_function("roundtrip", |b| {
        b.iter(|| {
            for &p in &points {
                black_box(mapper.to_screen(mapper.to_document(black_box(p))));
            }
        });
    });
    group.finish();
}

fn bench_placements(c: &mut Criterion) {
    let mut group = c.benchmark_group("sticker_canvas/item_placements");

    // Hypothesis: placement is a linear pass with no allocation beyond the caller's.
    for count in [64_usize, 1_024, 16_384] {
        let mut canvas = canvas_with_items(count);
        canvas
            .handle_gesture(GestureEvent::Zoom(GesturePhase::Changed(1.5)))
            .unwrap();
        canvas
            .handle_gesture(GestureEvent::Pan(GesturePhase::Changed(Vec2::new(30.0, -12.0))))
            .unwrap();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &canvas, |b, canvas| {
            b.iter(|| {
                let mut acc = 0.0;
                for placement in canvas.item_placements() {
                    acc += placement.position.x + placement.font_size;
                }
                black_box(acc)
            });
        });
    }
    group.finish();
}

fn bench_pan_gesture(c: &mut Criterion) {
    c.bench_function("sticker_canvas/pan_gesture_60_frames", |b| {
        b.iter_batched(
            || canvas_with_items(0),
            |mut canvas| {
                canvas
                    .handle_gesture(GestureEvent::Pan(GesturePhase::Began(Vec2::ZERO)))
                    .unwrap();
                for frame in 1..=60 {
                    let t = Vec2::new(f64::from(frame), f64::from(frame) * 0.5);
                    canvas
                        .handle_gesture(GestureEvent::Pan(GesturePhase::Changed(t)))
                        .unwrap();
                }
                canvas
                    .handle_gesture(GestureEvent::Pan(GesturePhase::Ended(Vec2::new(60.0, 30.0))))
                    .unwrap();
                black_box(canvas);
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_mapping, bench_placements, bench_pan_gesture);
criterion_main!(benches);
