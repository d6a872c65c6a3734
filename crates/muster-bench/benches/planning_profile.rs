//! Criterion benchmarks for full planning runs.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use muster_bench::fixture_snapshot;
use muster_engine::{Planner, PlannerConfig};
use muster_map::{EdgeBehavior, WorldGrid};

fn bench_plan_small(c: &mut Criterion) {
    let snapshot = fixture_snapshot(50, 30, 401, 42);
    let planner = Planner::default();
    c.bench_function("plan_50_targets_30_per_pool", |b| {
        b.iter(|| planner.plan(black_box(&snapshot)))
    });
}

fn bench_plan_large(c: &mut Criterion) {
    let snapshot = fixture_snapshot(500, 300, 401, 42);
    let planner = Planner::default();
    c.bench_function("plan_500_targets_300_per_pool", |b| {
        b.iter(|| planner.plan(black_box(&snapshot)))
    });
}

fn bench_plan_toroidal(c: &mut Criterion) {
    let snapshot = fixture_snapshot(500, 300, 401, 42);
    let planner = Planner::new(PlannerConfig {
        grid: WorldGrid::new(401, EdgeBehavior::Wrap).expect("valid grid"),
        ..PlannerConfig::default()
    });
    c.bench_function("plan_500_targets_toroidal", |b| {
        b.iter(|| planner.plan(black_box(&snapshot)))
    });
}

criterion_group!(
    benches,
    bench_plan_small,
    bench_plan_large,
    bench_plan_toroidal
);
criterion_main!(benches);
