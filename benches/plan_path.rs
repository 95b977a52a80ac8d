//! Path Planner Benchmarks
//!
//! Benchmarks for the core planning paths:
//! - Open-tank move (X-first succeeds immediately)
//! - Blocked crossing (X-first fails, Y-first clears)
//! - Step-wise collision sweep in isolation
//!
//! Run with: `cargo bench`
//! View HTML reports in: `target/criterion/`

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use yantra_path::{
    fine_steps, path_is_clear, AxisOrder, Footprint, GantryContext, HeightFlags, PathPlanner,
    PlannerConfig, Point2D, TankBounds,
};

// ============================================================================
// Test Fixtures
// ============================================================================

fn square(x0: f64, y0: f64, side: f64) -> Footprint {
    Footprint::new(&[
        Point2D::new(x0, y0),
        Point2D::new(x0 + side, y0),
        Point2D::new(x0 + side, y0 + side),
        Point2D::new(x0, y0 + side),
    ])
    .unwrap()
}

fn bench_config() -> PlannerConfig {
    PlannerConfig {
        tank: TankBounds::new(Point2D::ZERO, 100.0, 100.0),
        step_size: 0.001,
    }
}

const IN_TANK: HeightFlags = HeightFlags::new(false, false);

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_open_move(c: &mut Criterion) {
    let planner = PathPlanner::new(
        bench_config(),
        GantryContext::new(square(0.0, 0.0, 1.0)),
        GantryContext::new(square(5.0, 5.0, 1.0)),
    )
    .unwrap();
    let start = Point2D::new(0.5, 0.5);
    let end = Point2D::new(2.5, 1.5);

    c.bench_function("plan_open_move", |b| {
        b.iter(|| {
            planner
                .calculate_path(black_box(start), black_box(end), IN_TANK, IN_TANK)
                .unwrap()
        })
    });
}

fn bench_fallback_move(c: &mut Criterion) {
    // X-first sweeps through gantry 1; the planner pays for a failed
    // ordering before Y-first clears
    let planner = PathPlanner::new(
        bench_config(),
        GantryContext::new(square(0.0, 0.0, 1.0)),
        GantryContext::new(square(2.0, 0.0, 1.0)),
    )
    .unwrap();
    let start = Point2D::new(0.5, 0.5);
    let end = Point2D::new(4.5, 2.5);

    c.bench_function("plan_fallback_move", |b| {
        b.iter(|| {
            planner
                .calculate_path(black_box(start), black_box(end), IN_TANK, IN_TANK)
                .unwrap()
        })
    });
}

fn bench_collision_sweep(c: &mut Criterion) {
    let moving = square(0.0, 0.0, 1.0);
    let stationary = square(5.0, 5.0, 1.0);
    let tank = TankBounds::new(Point2D::ZERO, 100.0, 100.0);
    let steps = fine_steps(
        Point2D::new(0.5, 0.5),
        Point2D::new(2.5, 1.5),
        AxisOrder::XFirst,
        0.001,
    );

    c.bench_function("collision_sweep_3000_steps", |b| {
        b.iter(|| {
            path_is_clear(
                black_box(&moving),
                black_box(&stationary),
                black_box(&steps),
                IN_TANK,
                &tank,
            )
        })
    });
}

criterion_group!(
    benches,
    bench_open_move,
    bench_fallback_move,
    bench_collision_sweep
);
criterion_main!(benches);
