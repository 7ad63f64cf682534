// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use std::time::Duration;
use understory_carousel::{Binding, Carousel, CarouselConfig, Direction, build_window};

fn carousel(len: usize) -> Carousel<u32, u32> {
    let items: Vec<u32> = (0..len as u32).collect();
    let mut carousel =
        Carousel::with_index(items, Binding::new(0), CarouselConfig::default(), |item: &u32| {
            item.wrapping_mul(31)
        });
    carousel.set_container_width(390.0);
    carousel.mount(Duration::ZERO);
    carousel
}

fn bench_build_window(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/build_window");
    for len in [1usize, 4, 1_024] {
        let items: Vec<u32> = (0..len as u32).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &items, |b, items| {
            let mut selected = 0;
            b.iter(|| {
                selected = (selected + 7) % (items.len() + 3);
                black_box(build_window(black_box(items), &mut selected));
            });
        });
    }
    group.finish();
}

fn bench_drag_samples(c: &mut Criterion) {
    // One gesture with a pointer sample per frame, as a host would feed it.
    c.bench_function("carousel/drag_60_samples", |b| {
        let mut carousel = carousel(16);
        let mut now = Duration::ZERO;
        b.iter(|| {
            now += Duration::from_secs(1);
            carousel.drag_began(Point::new(300.0, 0.0), now);
            for step in 0..60 {
                carousel.drag_moved(Point::new(300.0 - f64::from(step) * 3.0, 0.0));
                black_box(carousel.render_offset(now));
            }
            carousel.drag_ended(Point::new(120.0, 0.0), now);
            carousel.tick(now + Duration::from_millis(300));
        });
    });
}

fn bench_step_and_settle(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel/step_and_settle");
    for len in [4usize, 1_024] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            let mut carousel = carousel(len);
            let mut now = Duration::ZERO;
            b.iter(|| {
                now += Duration::from_secs(1);
                carousel.advance(Direction::Forward, now);
                carousel.tick(now + Duration::from_millis(300));
                black_box(carousel.slots());
            });
        });
    }
    group.finish();
}

fn bench_idle_tick(c: &mut Criterion) {
    // Per-frame cost when nothing is due.
    c.bench_function("carousel/idle_tick", |b| {
        let mut carousel = carousel(16);
        let mut now = Duration::ZERO;
        b.iter(|| {
            now += Duration::from_micros(16_667);
            carousel.tick(black_box(now));
            black_box(carousel.slot_frames(now));
        });
    });
}

criterion_group!(
    benches,
    bench_build_window,
    bench_drag_samples,
    bench_step_and_settle,
    bench_idle_tick
);
criterion_main!(benches);
