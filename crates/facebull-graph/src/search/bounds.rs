//! Bound tables and the admissible penalty.
//!
//! Compounds are processed in index order. Once the cursor has moved past
//! compound `j`, no machine producing `j` can be selected any more, so:
//!
//! - every compound `>= cursor` still needs one producer: the sum of their
//!   cheapest producers is a cost floor;
//! - every compound not yet consuming anything still needs one consumer,
//!   and only producers of compounds `>= cursor` can supply it.
//!
//! The penalty is the larger of the two floors. Both count distinct
//! machines, so neither exceeds the true completion cost.

use crate::catalog::{Catalog, Cost};
use crate::reachability::{full_mask, node_bit, NodeMask, ReachMatrix};

/// Lower bound on the cost still needed to complete a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Penalty {
    /// Completion costs at least this much.
    Bound(Cost),
    /// No completion exists.
    Infeasible,
}

impl Penalty {
    /// True if the state can never reach full connectivity.
    #[inline]
    #[must_use]
    pub fn is_infeasible(self) -> bool {
        matches!(self, Penalty::Infeasible)
    }

    /// The finite bound, if any.
    #[inline]
    #[must_use]
    pub fn bound(self) -> Option<Cost> {
        match self {
            Penalty::Bound(cost) => Some(cost),
            Penalty::Infeasible => None,
        }
    }
}

/// Per-compound minimum prices and their suffix aggregates.
///
/// Suffix tables have `node_count + 1` entries; entry `node_count` is the
/// empty suffix.
#[derive(Debug, Clone)]
pub struct BoundTables {
    node_count: usize,
    min_producer: Vec<Option<Cost>>,
    min_consumer: Vec<Option<Cost>>,
    suffix_min_producer: Vec<Option<Cost>>,
    remaining_consumers: Vec<NodeMask>,
}

impl BoundTables {
    /// Precompute the tables for `catalog`.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let n = catalog.node_count();
        let min_of = |edges: &[usize]| edges.iter().map(|&e| catalog.edge(e).cost).min();

        let min_producer: Vec<Option<Cost>> =
            (0..n).map(|i| min_of(catalog.producers(i))).collect();
        let min_consumer: Vec<Option<Cost>> =
            (0..n).map(|i| min_of(catalog.consumers(i))).collect();

        let mut suffix_min_producer: Vec<Option<Cost>> = vec![Some(0); n + 1];
        let mut remaining_consumers = vec![0; n + 1];
        for i in (0..n).rev() {
            suffix_min_producer[i] = match (suffix_min_producer[i + 1], min_producer[i]) {
                (Some(rest), Some(own)) => Some(rest.saturating_add(own)),
                _ => None,
            };
            let inputs = catalog
                .producers(i)
                .iter()
                .fold(0, |mask, &e| mask | catalog.edge(e).input_mask());
            remaining_consumers[i] = remaining_consumers[i + 1] | inputs;
        }

        Self {
            node_count: n,
            min_producer,
            min_consumer,
            suffix_min_producer,
            remaining_consumers,
        }
    }

    /// Number of compounds the tables cover.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Cheapest machine producing `node` (`None` = no producer).
    #[must_use]
    pub fn min_producer_cost(&self, node: usize) -> Option<Cost> {
        self.min_producer[node]
    }

    /// Cheapest machine consuming `node` (`None` = no consumer).
    #[must_use]
    pub fn min_consumer_cost(&self, node: usize) -> Option<Cost> {
        self.min_consumer[node]
    }

    /// Sum of cheapest producers of compounds `cursor..` (`None` = some has none).
    #[must_use]
    pub fn suffix_min_producer(&self, cursor: usize) -> Option<Cost> {
        self.suffix_min_producer[cursor]
    }

    /// Inputs of every machine producing a compound `>= cursor`.
    #[must_use]
    pub fn remaining_consumers(&self, cursor: usize) -> NodeMask {
        self.remaining_consumers[cursor]
    }

    /// Admissible penalty for a state.
    ///
    /// `consumed` / `produced` are the unions of input / output masks of the
    /// machines selected so far.
    #[must_use]
    pub fn penalty(
        &self,
        cursor: usize,
        matrix: &ReachMatrix,
        consumed: NodeMask,
        produced: NodeMask,
    ) -> Penalty {
        if matrix.is_fully_connected() {
            return Penalty::Bound(0);
        }

        let Some(producer_penalty) = self.suffix_min_producer[cursor] else {
            return Penalty::Infeasible;
        };

        let full = full_mask(self.node_count);
        let available = consumed | self.remaining_consumers[cursor];
        if available & full != full {
            return Penalty::Infeasible;
        }

        // Compounds already passed can no longer gain a producer.
        let processed = full_mask(cursor.min(self.node_count));
        if produced & processed != processed {
            return Penalty::Infeasible;
        }

        let mut consumer_penalty: Cost = 0;
        for node in 0..self.node_count {
            if consumed & node_bit(node) != 0 {
                continue;
            }
            match self.min_consumer[node] {
                Some(cost) => consumer_penalty = consumer_penalty.saturating_add(cost),
                None => return Penalty::Infeasible,
            }
        }

        Penalty::Bound(producer_penalty.max(consumer_penalty))
    }
}
