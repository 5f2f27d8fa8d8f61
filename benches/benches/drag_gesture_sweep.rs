// Copyright 2025 the Groundsheet Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use groundsheet_drag::{Behavior, DragController};
use groundsheet_height::{HeightMode, HeightValue, Viewport};
use groundsheet_presenter::{SheetContent, SheetPresenter, Theme};

const VP: Viewport = Viewport::new(390.0, 844.0);

// Deterministic zig-zag covering in-range travel, overshoot past the
// maximum, and undershoot below the minimum.
fn gen_translations(count: usize) -> Vec<f64> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let phase = (i % 40) as f64;
        out.push((phase - 20.0) * 18.0);
    }
    out
}

fn gen_stop_ladder(n: usize) -> Vec<HeightValue> {
    (1..=n)
        .map(|i| HeightValue::Fixed(i as f64 * 700.0 / n as f64))
        .collect()
}

fn sweep(mut controller: DragController, translations: &[f64]) {
    controller.begin(450.0, 450.0);
    for &translation in translations {
        let frame = controller.update(translation, &VP);
        black_box(frame);
    }
    let outcome = controller.end(40.0, -120.0, &VP);
    black_box(outcome);
}

fn bench_free_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("free_sweep");
    for &steps in &[16usize, 64, 256] {
        let translations = gen_translations(steps);
        group.throughput(Throughput::Elements(steps as u64));
        group.bench_function(format!("begin_update_end_n{}", steps), |b| {
            b.iter_batched(
                || {
                    let behavior = Behavior {
                        height_mode: HeightMode::free(Some(200.0), Some(700.0)),
                        ..Behavior::default()
                    };
                    DragController::new(behavior)
                },
                |controller| sweep(controller, &translations),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_specific_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("specific_sweep");
    let translations = gen_translations(64);
    for &n in &[4usize, 16, 64] {
        let ladder = gen_stop_ladder(n);
        group.throughput(Throughput::Elements(64));
        group.bench_function(format!("begin_update_end_stops{}", n), |b| {
            b.iter_batched(
                || {
                    let behavior = Behavior {
                        height_mode: HeightMode::specific(ladder.clone()).unwrap(),
                        ..Behavior::default()
                    };
                    DragController::new(behavior)
                },
                |controller| sweep(controller, &translations),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

struct Menu(f64);

impl SheetContent for Menu {
    fn preferred_height(&self) -> Option<f64> {
        Some(self.0)
    }
}

fn bench_presenter_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("presenter");
    group.bench_function("present_drag_dismiss", |b| {
        b.iter_batched(
            || {
                SheetPresenter::new(
                    Box::new(Menu(420.0)),
                    Theme::default(),
                    Behavior::default(),
                )
            },
            |mut sheet| {
                let updates = sheet.present(&VP);
                black_box(&updates);
                sheet.animation_finished();

                sheet.drag_began(&VP);
                for step in 0..16 {
                    let update = sheet.drag_changed(f64::from(step) * 5.0, &VP);
                    black_box(update);
                }
                let updates = sheet.drag_ended(80.0, 30.0, &VP);
                black_box(&updates);

                let updates = sheet.dismiss(&VP);
                black_box(updates);
            },
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_free_sweep,
    bench_specific_sweep,
    bench_presenter_lifecycle,
);
criterion_main!(benches);
