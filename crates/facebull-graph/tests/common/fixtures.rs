//! Deterministic catalog fixtures.

#![allow(dead_code)]

use facebull_graph::{Catalog, CatalogBuilder, Cost};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The classic three-compound example.
pub const SAMPLE_INPUT: &str = "\
M1 C1 C2 277317
M2 C2 C1 26247
M3 C1 C3 478001
M4 C3 C1 23713
M5 C2 C3 98272
M6 C3 C2 5205
";

/// Optimal cost of [`SAMPLE_INPUT`]: the cycle M1, M5, M4.
pub const SAMPLE_OPTIMUM: Cost = 277317 + 98272 + 23713;

/// Machine ids of the optimal selection for [`SAMPLE_INPUT`].
pub const SAMPLE_SELECTION: &[u64] = &[1, 4, 5];

/// Name of compound `i` in generated catalogs.
pub fn compound(i: usize) -> String {
    format!("C{}", i)
}

/// Directed ring `C0 -> C1 -> ... -> C(n-1) -> C0`, every machine priced `cost`.
pub fn ring(n: usize, cost: Cost) -> Catalog {
    let mut builder = CatalogBuilder::new();
    for i in 0..n {
        let id = i as u64 + 1;
        builder
            .add_edge(id, &format!("M{}", id), &compound(i), &compound((i + 1) % n), cost)
            .expect("ring within mask width");
    }
    builder.build()
}

/// Ring text in the input format, for loader round trips.
pub fn ring_text(n: usize, cost: Cost) -> String {
    (0..n)
        .map(|i| format!("M{} {} {} {}\n", i + 1, compound(i), compound((i + 1) % n), cost))
        .collect()
}

/// Random catalog with `2..=max_nodes` compounds and up to `max_edges` machines.
///
/// Every compound is registered even if no machine touches it.
pub fn random_catalog(seed: u64, max_nodes: usize, max_edges: usize) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let n = rng.gen_range(2..=max_nodes);
    let m = rng.gen_range(n..=max_edges);
    let mut builder = CatalogBuilder::new();
    for i in 0..n {
        builder.add_node(&compound(i)).expect("small catalog");
    }
    for id in 1..=m as u64 {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost: Cost = rng.gen_range(1..=50);
        builder
            .add_edge(id, &format!("M{}", id), &compound(u), &compound(v), cost)
            .expect("small catalog");
    }
    builder.build()
}

/// Random catalog that always contains a Hamiltonian ring, so it is solvable.
pub fn solvable_random_catalog(seed: u64, n: usize, extra_edges: usize) -> Catalog {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut builder = CatalogBuilder::new();
    let mut id = 0u64;
    for i in 0..n {
        id += 1;
        let cost: Cost = rng.gen_range(20..=60);
        builder
            .add_edge(id, &format!("M{}", id), &compound(i), &compound((i + 1) % n), cost)
            .expect("small catalog");
    }
    for _ in 0..extra_edges {
        id += 1;
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let cost: Cost = rng.gen_range(1..=60);
        builder
            .add_edge(id, &format!("M{}", id), &compound(u), &compound(v), cost)
            .expect("small catalog");
    }
    builder.build()
}
