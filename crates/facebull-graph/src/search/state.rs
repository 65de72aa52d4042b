//! Immutable search states.

use crate::catalog::{Catalog, Cost, EdgeIndex};
use crate::reachability::{NodeMask, ReachMatrix};

use super::bounds::{BoundTables, Penalty};

/// A partial selection: compounds `0..cursor` have had their producers decided.
///
/// Built once and never mutated; children copy the parent's matrix and
/// edge list.
#[derive(Debug, Clone)]
pub struct SearchState {
    edges: Vec<EdgeIndex>,
    matrix: ReachMatrix,
    cost: Cost,
    cursor: usize,
    penalty: Penalty,
    consumed: NodeMask,
    produced: NodeMask,
}

impl SearchState {
    /// Nothing selected, nothing processed, identity reachability.
    #[must_use]
    pub fn root(catalog: &Catalog, bounds: &BoundTables) -> Self {
        let matrix = ReachMatrix::identity(catalog.node_count());
        let penalty = bounds.penalty(0, &matrix, 0, 0);
        Self {
            edges: Vec::new(),
            matrix,
            cost: 0,
            cursor: 0,
            penalty,
            consumed: 0,
            produced: 0,
        }
    }

    /// Child that adds `included` (already applied to `matrix`) and advances
    /// the cursor by one.
    #[must_use]
    pub fn child(
        &self,
        included: &[EdgeIndex],
        matrix: ReachMatrix,
        added_cost: Cost,
        catalog: &Catalog,
        bounds: &BoundTables,
    ) -> Self {
        let mut edges = Vec::with_capacity(self.edges.len() + included.len());
        edges.extend_from_slice(&self.edges);
        edges.extend_from_slice(included);

        let (consumed, produced) =
            included
                .iter()
                .fold((self.consumed, self.produced), |(c, p), &e| {
                    let edge = catalog.edge(e);
                    (c | edge.input_mask(), p | edge.output_mask())
                });

        let cursor = self.cursor + 1;
        let penalty = bounds.penalty(cursor, &matrix, consumed, produced);

        Self {
            edges,
            matrix,
            cost: self.cost.saturating_add(added_cost),
            cursor,
            penalty,
            consumed,
            produced,
        }
    }

    /// Selected machines in selection order.
    #[must_use]
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Reachability under the selected machines.
    #[must_use]
    pub fn matrix(&self) -> &ReachMatrix {
        &self.matrix
    }

    /// Total price of the selected machines.
    #[must_use]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Next compound whose producers are to be decided.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Lower bound on the remaining cost.
    #[must_use]
    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    /// Inputs of the selected machines.
    #[must_use]
    pub fn consumed(&self) -> NodeMask {
        self.consumed
    }

    /// Outputs of the selected machines.
    #[must_use]
    pub fn produced(&self) -> NodeMask {
        self.produced
    }

    /// Frontier key `cost + penalty`; `None` for infeasible states.
    #[must_use]
    pub fn priority(&self) -> Option<Cost> {
        self.penalty.bound().map(|p| self.cost.saturating_add(p))
    }

    /// Every compound reaches every other one.
    #[must_use]
    pub fn is_goal(&self) -> bool {
        self.matrix.is_fully_connected()
    }
}
