//! Hand-built catalogs with known optima.

use facebull_graph::{floyd_warshall, solve, Catalog, CatalogBuilder, SolveOutcome};

use crate::common::fixtures::{ring, SAMPLE_INPUT, SAMPLE_OPTIMUM, SAMPLE_SELECTION};
use crate::common::helpers::{assert_connects, brute_force_optimum};

#[test]
fn test_two_compounds_need_both_machines() {
    let catalog = Catalog::from_edges([("M1", "A", "B", 5), ("M2", "B", "A", 5)]).unwrap();
    let result = solve(&catalog).unwrap();
    let solution = result.solution().expect("solvable");
    assert_eq!(solution.total_cost(), 10);
    assert_eq!(solution.edge_ids(), &[1, 2]);
}

#[test]
fn test_three_cycle_is_minimum() {
    let catalog = Catalog::from_edges([
        ("M1", "A", "B", 1),
        ("M2", "B", "C", 1),
        ("M3", "C", "A", 1),
    ])
    .unwrap();
    let result = solve(&catalog).unwrap();
    let solution = result.solution().expect("solvable");
    assert_eq!(solution.total_cost(), 3);
    assert_eq!(solution.edge_ids(), &[1, 2, 3]);
}

#[test]
fn test_sample_catalog() {
    let catalog = facebull_graph::parse_catalog(SAMPLE_INPUT).unwrap();
    let result = solve(&catalog).unwrap();
    let solution = result.solution().expect("solvable");
    assert_eq!(solution.total_cost(), SAMPLE_OPTIMUM);
    assert_eq!(solution.edge_ids(), SAMPLE_SELECTION);
    assert_eq!(solution.to_string(), "1 4 5");
    assert!(floyd_warshall(&catalog, solution.edges()).is_strongly_connected());
}

#[test]
fn test_transit_producer_beats_direct_pairs() {
    // Hub H reaches everyone cheaply; only the ring through H is optimal.
    let catalog = Catalog::from_edges([
        ("M1", "H", "A", 1),
        ("M2", "A", "B", 1),
        ("M3", "B", "H", 1),
        ("M4", "A", "H", 5),
        ("M5", "H", "B", 5),
        ("M6", "B", "A", 5),
    ])
    .unwrap();
    let result = solve(&catalog).unwrap();
    assert_eq!(result.total_cost(), Some(3));
    assert_eq!(result.total_cost(), brute_force_optimum(&catalog));
}

#[test]
fn test_two_cycles_joined_by_shared_compound() {
    // A <-> B and B <-> C: four machines, no cheaper single cycle exists.
    let catalog = Catalog::from_edges([
        ("M1", "A", "B", 2),
        ("M2", "B", "A", 2),
        ("M3", "B", "C", 2),
        ("M4", "C", "B", 2),
        ("M5", "A", "C", 10),
        ("M6", "C", "A", 10),
    ])
    .unwrap();
    let result = solve(&catalog).unwrap();
    let solution = result.solution().expect("solvable");
    assert_eq!(solution.total_cost(), 8);
    assert_eq!(solution.edge_ids(), &[1, 2, 3, 4]);
    assert_connects(&catalog, solution.edges());
}

#[test]
fn test_ring_of_eight() {
    let catalog = ring(8, 3);
    let result = solve(&catalog).unwrap();
    assert_eq!(result.total_cost(), Some(24));
    assert_eq!(result.solution().unwrap().edges().len(), 8);
}

#[test]
fn test_isolated_compound_is_infeasible() {
    let mut builder = CatalogBuilder::new();
    builder.add_edge(1, "M1", "A", "B", 1).unwrap();
    builder.add_edge(2, "M2", "B", "A", 1).unwrap();
    builder.add_node("Nowhere").unwrap();
    let catalog = builder.build();

    let result = solve(&catalog).unwrap();
    assert_eq!(result.outcome, SolveOutcome::Infeasible);
    assert_eq!(result.total_cost(), None);
}

#[test]
fn test_sink_compound_is_infeasible() {
    // C can be produced but never consumed.
    let catalog = Catalog::from_edges([
        ("M1", "A", "B", 1),
        ("M2", "B", "A", 1),
        ("M3", "A", "C", 1),
    ])
    .unwrap();
    assert!(solve(&catalog).unwrap().is_infeasible());
}
