// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use groundsheet_height::{HeightMode, HeightValue, Viewport, resolve_stops};

const VP: Viewport = Viewport::new(390.0, 844.0);
const CHILD: f64 = 500.0;

fn gen_stop_values(n: usize) -> Vec<HeightValue> {
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let fraction = (i as f64 + 1.0) / n as f64;
        out.push(match i % 3 {
            0 => HeightValue::Fixed(fraction * 800.0),
            1 => HeightValue::ScreenRatio(fraction),
            _ => HeightValue::ChildRatio(fraction),
        });
    }
    out
}

fn bench_fit_content(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_content");
    let mode = HeightMode::fit_content();
    group.bench_function("expected_height", |b| {
        b.iter(|| {
            let height = mode.expected_height(black_box(333.0), CHILD, &VP);
            black_box(height);
        })
    });
    group.bench_function("next_stop_up", |b| {
        b.iter(|| {
            let above = mode.next_stop(black_box(333.0), true, CHILD, &VP);
            black_box(above);
        })
    });
    group.finish();
}

fn bench_free(c: &mut Criterion) {
    let mut group = c.benchmark_group("free");
    let mode = HeightMode::free(Some(200.0), Some(700.0));
    group.bench_function("expected_height", |b| {
        b.iter(|| {
            let height = mode.expected_height(black_box(333.0), CHILD, &VP);
            black_box(height);
        })
    });
    group.bench_function("next_stop_down", |b| {
        b.iter(|| {
            let below = mode.next_stop(black_box(333.0), false, CHILD, &VP);
            black_box(below);
        })
    });
    group.finish();
}

fn bench_specific(c: &mut Criterion) {
    let mut group = c.benchmark_group("specific");
    for &n in &[4usize, 16, 64, 256] {
        let values = gen_stop_values(n);
        let mode = HeightMode::specific(values.clone()).unwrap();
        // Anchor on a real stop so the neighbor search walks the sequence.
        let origin = resolve_stops(&values, &VP, CHILD)[n / 2];
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("resolve_stops_n{}", n), |b| {
            b.iter(|| {
                let stops = resolve_stops(black_box(&values), &VP, CHILD);
                black_box(stops);
            })
        });
        group.bench_function(format!("expected_height_n{}", n), |b| {
            b.iter(|| {
                let height = mode.expected_height(black_box(333.0), CHILD, &VP);
                black_box(height);
            })
        });
        group.bench_function(format!("next_stop_up_n{}", n), |b| {
            b.iter(|| {
                let above = mode.next_stop(black_box(origin), true, CHILD, &VP);
                black_box(above);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_fit_content, bench_free, bench_specific);
criterion_main!(benches);
