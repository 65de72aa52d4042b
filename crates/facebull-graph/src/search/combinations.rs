//! Producer subset enumeration.
//!
//! Walks the include/exclude tree over a compound's producers with an
//! explicit stack. A producer is only included when it is still a new
//! connection against the matrix built from the producers included before
//! it, so every leaf is a distinct effective subset.

use crate::catalog::{Catalog, Cost, EdgeIndex};
use crate::reachability::ReachMatrix;

/// One leaf of the enumeration.
#[derive(Debug, Clone)]
pub struct Combination {
    /// Included producers, in inclusion order.
    pub edges: Vec<EdgeIndex>,
    /// Parent matrix with `edges` applied in order.
    pub matrix: ReachMatrix,
    /// Sum of the included producers' prices.
    pub cost: Cost,
}

#[derive(Debug)]
struct Frame {
    position: usize,
    included: Vec<EdgeIndex>,
    matrix: ReachMatrix,
    cost: Cost,
}

/// Finite, non-restartable iterator over producer subsets.
///
/// Yields the exclude-everything leaf first, then subsets in depth-first
/// exclude-before-include order.
pub struct ProducerCombinations<'a> {
    catalog: &'a Catalog,
    producers: &'a [EdgeIndex],
    stack: Vec<Frame>,
}

impl<'a> ProducerCombinations<'a> {
    /// Enumerate subsets of `producers` on top of `matrix`.
    pub fn new(catalog: &'a Catalog, producers: &'a [EdgeIndex], matrix: &ReachMatrix) -> Self {
        Self {
            catalog,
            producers,
            stack: vec![Frame {
                position: 0,
                included: Vec::new(),
                matrix: matrix.clone(),
                cost: 0,
            }],
        }
    }
}

impl<'a> Iterator for ProducerCombinations<'a> {
    type Item = Combination;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(frame) = self.stack.pop() {
            let Some(&edge_index) = self.producers.get(frame.position) else {
                return Some(Combination {
                    edges: frame.included,
                    matrix: frame.matrix,
                    cost: frame.cost,
                });
            };

            let edge = self.catalog.edge(edge_index);

            // Include branch goes on the stack first so exclude is visited first
            if frame.matrix.is_new_connection(edge.input, edge.output) {
                let mut included = Vec::with_capacity(frame.included.len() + 1);
                included.extend_from_slice(&frame.included);
                included.push(edge_index);
                self.stack.push(Frame {
                    position: frame.position + 1,
                    included,
                    matrix: frame.matrix.with_edge(edge.input, edge.output),
                    cost: frame.cost.saturating_add(edge.cost),
                });
            }

            self.stack.push(Frame {
                position: frame.position + 1,
                ..frame
            });
        }
        None
    }
}
