// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use std::time::Duration;
use understory_timing::TimerQueue;

fn bench_schedule_and_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("timing/schedule_and_drain");

    // The queue is a flat scan; these sizes cover a UI's typical handful of
    // timers up to an unusually busy frame.
    for len in [4usize, 64, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |b, &len| {
            b.iter_batched(
                TimerQueue::<usize>::new,
                |mut timers| {
                    for i in 0..len {
                        let deadline = Duration::from_millis(((i * 7919) % 1_000) as u64);
                        timers.schedule_once(deadline, i);
                    }
                    while let Some(fired) = timers.poll(Duration::from_secs(1)) {
                        black_box(fired);
                    }
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_repeating_poll(c: &mut Criterion) {
    c.bench_function("timing/repeating_poll", |b| {
        let mut timers = TimerQueue::new();
        timers.schedule_repeating(Duration::ZERO, Duration::from_millis(16), ());
        let mut now = Duration::ZERO;
        b.iter(|| {
            now += Duration::from_millis(16);
            black_box(timers.poll(now));
        });
    });
}

criterion_group!(benches, bench_schedule_and_drain, bench_repeating_poll);
criterion_main!(benches);
