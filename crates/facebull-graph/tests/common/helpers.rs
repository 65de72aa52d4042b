//! Oracle and verification helpers.

#![allow(dead_code)]

use facebull_graph::{Catalog, Cost, EdgeIndex, ReachMatrix};

/// Reachability produced by `edges`.
pub fn closure(catalog: &Catalog, edges: &[EdgeIndex]) -> ReachMatrix {
    let mut matrix = ReachMatrix::identity(catalog.node_count());
    for &e in edges {
        let edge = catalog.edge(e);
        matrix.apply_edge(edge.input, edge.output);
    }
    matrix
}

/// Exhaustive minimum over all machine subsets. Only for small catalogs.
pub fn brute_force_optimum(catalog: &Catalog) -> Option<Cost> {
    let m = catalog.edge_count();
    assert!(m <= 16, "brute force limited to 16 machines, got {}", m);

    let mut best: Option<Cost> = None;
    let mut subset_edges = Vec::with_capacity(m);
    for subset in 0u32..(1u32 << m) {
        subset_edges.clear();
        subset_edges.extend((0..m).filter(|bit| subset & (1 << bit) != 0));
        let cost = catalog.total_cost(&subset_edges);
        if best.map_or(false, |b| cost >= b) {
            continue;
        }
        if closure(catalog, &subset_edges).is_fully_connected() {
            best = Some(cost);
        }
    }
    best
}

/// Panic unless `edges` connect every compound.
pub fn assert_connects(catalog: &Catalog, edges: &[EdgeIndex]) {
    let matrix = closure(catalog, edges);
    assert!(
        matrix.is_fully_connected(),
        "selection {:?} does not connect: {:?}",
        edges,
        matrix
    );
}
