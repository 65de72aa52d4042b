//! Benchmark suite for the facebull search engine.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --package facebull-graph
//!
//! # Run a specific group
//! cargo bench --package facebull-graph -- solve
//! ```

use criterion::{criterion_group, criterion_main, Criterion};
use std::time::Duration;

mod generators;
mod search_benches;

criterion_group!(
    name = reachability_bench_group;
    config = Criterion::default()
        .sample_size(100)
        .measurement_time(Duration::from_secs(3));
    targets = search_benches::bench_apply_edge
);

criterion_group!(
    name = solve_bench_group;
    config = Criterion::default()
        .sample_size(20)
        .measurement_time(Duration::from_secs(10));
    targets = search_benches::bench_solve
);

criterion_main!(reachability_bench_group, solve_bench_group);
