//! O(n³) Floyd–Warshall relaxation.

use std::fmt;

use crate::catalog::{Catalog, Cost, EdgeIndex};

/// Shortest route cost between every ordered pair of compounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceMatrix {
    n: usize,
    dist: Vec<Option<Cost>>,
}

impl DistanceMatrix {
    /// Number of compounds.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Cheapest route `from -> to`; `None` if unreachable.
    #[must_use]
    pub fn distance(&self, from: usize, to: usize) -> Option<Cost> {
        self.dist[from * self.n + to]
    }

    /// Distances from `from`, in compound order.
    #[must_use]
    pub fn row(&self, from: usize) -> &[Option<Cost>] {
        &self.dist[from * self.n..(from + 1) * self.n]
    }

    /// Every compound reaches every other compound.
    #[must_use]
    pub fn is_strongly_connected(&self) -> bool {
        self.dist.iter().all(Option::is_some)
    }

    /// Pairs `(from, to)` with no route.
    #[must_use]
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        (0..self.n)
            .flat_map(|i| (0..self.n).map(move |j| (i, j)))
            .filter(|&(i, j)| self.distance(i, j).is_none())
            .collect()
    }
}

impl fmt::Display for DistanceMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.n {
            let cells: Vec<String> = self
                .row(i)
                .iter()
                .map(|d| d.map_or_else(|| "-".to_string(), |c| c.to_string()))
                .collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}

/// Shortest route costs using only the machines in `edges`.
#[must_use]
pub fn floyd_warshall(catalog: &Catalog, edges: &[EdgeIndex]) -> DistanceMatrix {
    let n = catalog.node_count();
    let mut dist: Vec<Option<Cost>> = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = Some(0);
    }

    for &e in edges {
        let edge = catalog.edge(e);
        let cell = &mut dist[edge.input * n + edge.output];
        *cell = Some(cell.map_or(edge.cost, |c| c.min(edge.cost)));
    }

    for k in 0..n {
        for i in 0..n {
            let Some(ik) = dist[i * n + k] else {
                continue;
            };
            for j in 0..n {
                let Some(kj) = dist[k * n + j] else {
                    continue;
                };
                let via = ik.saturating_add(kj);
                let cell = &mut dist[i * n + j];
                if cell.map_or(true, |c| via < c) {
                    *cell = Some(via);
                }
            }
        }
    }

    DistanceMatrix { n, dist }
}
