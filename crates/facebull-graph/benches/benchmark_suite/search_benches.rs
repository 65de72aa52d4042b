//! Reachability update and end-to-end solve benchmarks.

use criterion::{black_box, BenchmarkId, Criterion};

use facebull_graph::search::NoProgress;
use facebull_graph::{ReachMatrix, SearchConfig, Solver, MAX_NODES};

use super::generators::generate_catalog;

/// Single-edge closure update on a full-width matrix.
pub fn bench_apply_edge(c: &mut Criterion) {
    let mut base = ReachMatrix::identity(MAX_NODES);
    for i in 0..MAX_NODES / 2 {
        base.apply_edge(i, i + 1);
    }

    c.bench_function("reach_apply_edge_64", |b| {
        b.iter(|| {
            let next = base.with_edge(black_box(MAX_NODES - 1), black_box(0));
            black_box(next)
        })
    });
}

/// Full search on small random solvable catalogs.
pub fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");

    for &(n, extra) in &[(6usize, 10usize), (8, 16), (10, 20)] {
        let catalog = generate_catalog(42, n, extra);
        let solver = Solver::new(&catalog, SearchConfig::default()).expect("valid config");
        group.bench_with_input(
            BenchmarkId::new("compounds", n),
            &solver,
            |b, solver| {
                b.iter(|| {
                    let result = solver.solve_with(&mut NoProgress).expect("solve");
                    black_box(result.total_cost())
                })
            },
        );
    }

    group.finish();
}
