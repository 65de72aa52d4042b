//! Reachability matrix storage and the single-edge closure update.

use std::fmt;

use super::{full_mask, node_bit, NodeMask};

/// Per-compound reachability rows.
///
/// Children copy the parent's rows and apply their own edges; a matrix is
/// never shared mutably between states.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ReachMatrix {
    rows: Vec<NodeMask>,
}

impl ReachMatrix {
    /// Reflexive identity: every compound reaches only itself.
    #[must_use]
    pub fn identity(node_count: usize) -> Self {
        Self {
            rows: (0..node_count).map(node_bit).collect(),
        }
    }

    /// Number of compounds (rows).
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.rows.len()
    }

    /// Compounds reachable from `node`.
    #[inline]
    #[must_use]
    pub fn row(&self, node: usize) -> NodeMask {
        self.rows[node]
    }

    /// True if `to` is reachable from `from`.
    #[inline]
    #[must_use]
    pub fn reaches(&self, from: usize, to: usize) -> bool {
        self.rows[from] & node_bit(to) != 0
    }

    /// An edge `input -> output` adds reachability iff `output` is not
    /// already reachable from `input`.
    #[inline]
    #[must_use]
    pub fn is_new_connection(&self, input: usize, output: usize) -> bool {
        !self.reaches(input, output)
    }

    /// Add edge `input -> output` in place.
    ///
    /// Every compound that reaches `input` now also reaches everything
    /// `output` reaches. Idempotent for edges that are not new connections.
    pub fn apply_edge(&mut self, input: usize, output: usize) {
        let gained = self.rows[output];
        let via = node_bit(input);
        for row in &mut self.rows {
            if *row & via != 0 {
                *row |= gained;
            }
        }
    }

    /// Copy of this matrix with edge `input -> output` applied.
    #[must_use]
    pub fn with_edge(&self, input: usize, output: usize) -> Self {
        let mut next = self.clone();
        next.apply_edge(input, output);
        next
    }

    /// Every compound reaches every compound.
    #[must_use]
    pub fn is_fully_connected(&self) -> bool {
        let full = full_mask(self.rows.len());
        self.rows.iter().all(|&row| row == full)
    }

    /// Compounds reachable from at least one *other* compound.
    #[must_use]
    pub fn reached_by_others(&self) -> NodeMask {
        self.rows
            .iter()
            .enumerate()
            .fold(0, |acc, (k, &row)| acc | (row & !node_bit(k)))
    }

    /// True if every row of `self` is a superset of the same row in `other`.
    #[must_use]
    pub fn includes(&self, other: &ReachMatrix) -> bool {
        self.rows.len() == other.rows.len()
            && self
                .rows
                .iter()
                .zip(&other.rows)
                .all(|(mine, theirs)| mine & theirs == *theirs)
    }
}

impl fmt::Debug for ReachMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.rows.len().max(1);
        f.debug_list()
            .entries(self.rows.iter().map(|row| format!("{:0width$b}", row, width = width)))
            .finish()
    }
}
