//! Criterion microbenches for the surface builders.
//!
//! - Full eTOD set (2a-2d, default 1° arcs and 360-vertex circle).
//! - TFPA for both ends.
//! - Arc tessellation at the 2c span, fine and default step.
//! - Survey projection and centerline resolution.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use obsurf::prelude::*;

fn bench_surfaces(c: &mut Criterion) {
    let survey = Survey::template();
    let ctx = Aerodrome::from_survey(&survey).expect("template survey resolves");
    let mut group = c.benchmark_group("surfaces");

    group.bench_function(BenchmarkId::new("etod_surfaces", "default"), |b| {
        b.iter(|| etod_surfaces(&ctx, &survey.etod).expect("etod"))
    });
    group.bench_function(BenchmarkId::new("tfpa_surfaces", "default"), |b| {
        b.iter(|| tfpa_surfaces(&ctx, &survey.tfpa).expect("tfpa"))
    });
    group.bench_function(BenchmarkId::new("from_survey", "template"), |b| {
        b.iter(|| Aerodrome::from_survey(&survey).expect("resolve"))
    });
    group.finish();
}

fn bench_arc(c: &mut Criterion) {
    let mut group = c.benchmark_group("arc");
    let center = Vec2::new(0.0, 0.0);
    let start = Point3D::new(10_000.0, 0.0, 0.0);
    let end = Point3D::new(0.0, 10_000.0, 0.0);
    for step in [0.1, 1.0] {
        group.bench_function(BenchmarkId::new("quarter_turn", step), |b| {
            b.iter(|| {
                tessellate_arc(center, start, end, 120.0, ArcDirection::CounterClockwise, step)
                    .expect("arc")
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_surfaces, bench_arc);
criterion_main!(benches);
