//! Random small catalogs checked against exhaustive search.

use facebull_graph::{solve, SearchConfig, Solver};

use crate::common::fixtures::{random_catalog, solvable_random_catalog};
use crate::common::helpers::{assert_connects, brute_force_optimum};

#[test]
fn test_matches_brute_force_on_random_catalogs() {
    for seed in 0..80 {
        let catalog = random_catalog(seed, 6, 12);
        let expected = brute_force_optimum(&catalog);
        let result = solve(&catalog).unwrap();
        assert_eq!(
            result.total_cost(),
            expected,
            "seed {} ({} compounds, {} machines)",
            seed,
            catalog.node_count(),
            catalog.edge_count()
        );
        if let Some(solution) = result.solution() {
            assert_connects(&catalog, solution.edges());
            assert_eq!(catalog.total_cost(solution.edges()), solution.total_cost());
        }
    }
}

#[test]
fn test_matches_brute_force_on_solvable_catalogs() {
    for seed in 100..130 {
        let catalog = solvable_random_catalog(seed, 6, 8);
        let expected = brute_force_optimum(&catalog);
        assert!(expected.is_some(), "ring guarantees a solution");
        let result = solve(&catalog).unwrap();
        assert_eq!(result.total_cost(), expected, "seed {}", seed);
    }
}

#[test]
fn test_cost_is_deterministic_across_runs() {
    let catalog = solvable_random_catalog(99, 8, 14);
    let solver = Solver::new(&catalog, SearchConfig::default()).unwrap();
    let first = solver.solve().unwrap();
    for _ in 0..3 {
        let again = solver.solve().unwrap();
        assert_eq!(again.total_cost(), first.total_cost());
    }
}

#[test]
fn test_stats_are_consistent() {
    let catalog = solvable_random_catalog(5, 7, 10);
    let result = solve(&catalog).unwrap();
    let stats = result.stats;
    assert!(stats.pops >= 1);
    assert!(stats.pops <= stats.pushed);
    assert!(stats.max_frontier as u64 <= stats.pushed);
}
