//! Solver benchmarks.
//!
//! ```bash
//! cargo bench --bench solver
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use hanoi_engine::{solve, GameEngine, MoveAdvisor};

fn bench_solve_materialized(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve_vec");
    for n in [8u8, 12, 16, 20] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| hanoi_engine::solve_vec(black_box(n)));
        });
    }
    group.finish();
}

fn bench_solve_streaming(c: &mut Criterion) {
    // Lazy consumption: count without materializing.
    c.bench_function("solve_stream_20", |b| {
        b.iter(|| solve(black_box(20)).count());
    });
}

fn bench_replay(c: &mut Criterion) {
    c.bench_function("replay_12", |b| {
        b.iter(|| {
            let mut engine = GameEngine::with_disks(12).unwrap();
            for mv in solve(12) {
                engine.apply_move(mv.from, mv.to);
            }
            black_box(engine.is_solved())
        });
    });
}

fn bench_advisor_fallback(c: &mut Criterion) {
    let advisor = MoveAdvisor::new();
    let engine = GameEngine::with_disks(8).unwrap();
    c.bench_function("advisor_fallback_suggest", |b| {
        b.iter(|| advisor.suggest(black_box(engine.state())));
    });
}

criterion_group!(
    benches,
    bench_solve_materialized,
    bench_solve_streaming,
    bench_replay,
    bench_advisor_fallback
);
criterion_main!(benches);
