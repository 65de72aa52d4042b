//! Deterministic catalog generators for benchmarks.

use facebull_graph::{Catalog, CatalogBuilder, Cost};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Ring of `n` compounds plus `extra` random machines; always solvable.
pub fn generate_catalog(seed: u64, n: usize, extra: usize) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = CatalogBuilder::new();
    let name = |i: usize| format!("C{}", i);
    let mut id = 0u64;

    for i in 0..n {
        id += 1;
        let cost: Cost = rng.gen_range(100_000..=500_000);
        builder
            .add_edge(id, &format!("M{}", id), &name(i), &name((i + 1) % n), cost)
            .expect("benchmark catalog within mask width");
    }
    for _ in 0..extra {
        id += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost: Cost = rng.gen_range(1_000..=500_000);
        builder
            .add_edge(id, &format!("M{}", id), &name(u), &name(v), cost)
            .expect("benchmark catalog within mask width");
    }
    builder.build()
}
