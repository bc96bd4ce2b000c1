//! Benchmark for simulation performance
//!
//! Target: a full year report should stay well under a frame (16ms) so every
//! input edit can recompute synchronously.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use points_year_core::config::{
    CalculatorConfig, CurvePreset, PlayerProfile, PointsConfig, ScheduleConfig,
};
use points_year_core::curve::LevelCurve;
use points_year_core::simulator::{generate_annotations, simulate_year, SimulationEngine};

/// Busiest schedule the UI allows
fn create_heavy_config() -> CalculatorConfig {
    CalculatorConfig {
        profile: PlayerProfile::Exceptional,
        schedule: ScheduleConfig::new(20, 50, 20),
        points: PointsConfig::new(100, 75, 50, 25),
        curve: CurvePreset::Gentle.config(),
        ..Default::default()
    }
}

fn benchmark_simulation(c: &mut Criterion) {
    let config = create_heavy_config();
    let engine = SimulationEngine::new(config).unwrap();

    c.bench_function("simulate_full_report", |b| {
        b.iter(|| black_box(engine.simulate()))
    });

    let curve = LevelCurve::new(config.curve).unwrap();
    let distribution = config.distribution();
    let namespace = config.seed_namespace();

    c.bench_function("simulate_year_series", |b| {
        b.iter(|| {
            black_box(simulate_year(
                black_box(&config.schedule),
                black_box(&config.points),
                &distribution,
                &namespace,
                &curve,
            ))
        })
    });

    c.bench_function("generate_annotations", |b| {
        b.iter(|| {
            black_box(generate_annotations(
                black_box(&config.schedule),
                &distribution,
                &namespace,
            ))
        })
    });
}

fn benchmark_level_curve(c: &mut Criterion) {
    let curve = LevelCurve::new(CurvePreset::Standard.config()).unwrap();

    c.bench_function("level_from_total_xp_cold", |b| {
        b.iter(|| black_box(curve.level_from_total_xp(black_box(250_000))))
    });

    c.bench_function("progress_cold", |b| {
        b.iter(|| black_box(curve.progress(black_box(250_000))))
    });
}

criterion_group!(benches, benchmark_simulation, benchmark_level_curve);
criterion_main!(benches);
