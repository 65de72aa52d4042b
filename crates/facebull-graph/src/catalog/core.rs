//! Immutable machine catalog and its builder.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::reachability::{full_mask, NodeMask};

use super::registry::NodeRegistry;
use super::types::{Cost, Edge, EdgeIndex, Node, NodeIndex};

/// Accumulates machine records, registering compounds on first sight.
#[derive(Debug, Default)]
pub struct CatalogBuilder {
    registry: NodeRegistry,
    edges: Vec<Edge>,
}

impl CatalogBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a compound without attaching any machine to it.
    ///
    /// # Errors
    /// * `GraphError::NodeCountOverflow` - too many distinct compounds
    pub fn add_node(&mut self, name: &str) -> GraphResult<NodeIndex> {
        self.registry.intern(name)
    }

    /// Add a machine `input -> output`.
    ///
    /// The input compound is registered before the output compound, so
    /// indices follow order of appearance in the record stream.
    ///
    /// # Errors
    /// * `GraphError::NodeCountOverflow` - too many distinct compounds
    pub fn add_edge(
        &mut self,
        id: u64,
        label: &str,
        input: &str,
        output: &str,
        cost: Cost,
    ) -> GraphResult<EdgeIndex> {
        let input = self.registry.intern(input)?;
        let output = self.registry.intern(output)?;
        self.edges.push(Edge {
            id,
            label: label.to_string(),
            input,
            output,
            cost,
        });
        Ok(self.edges.len() - 1)
    }

    /// Number of machines added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freeze into a [`Catalog`], indexing producers and consumers per compound.
    #[must_use]
    pub fn build(self) -> Catalog {
        let (nodes, by_name) = self.registry.into_parts();
        let mut producers = vec![Vec::new(); nodes.len()];
        let mut consumers = vec![Vec::new(); nodes.len()];
        for (index, edge) in self.edges.iter().enumerate() {
            consumers[edge.input].push(index);
            producers[edge.output].push(index);
        }

        Catalog {
            nodes,
            by_name,
            edges: self.edges,
            producers,
            consumers,
        }
    }
}

/// Compounds and machines, read-only after loading.
#[derive(Debug, Clone)]
pub struct Catalog {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeIndex>,
    edges: Vec<Edge>,
    producers: Vec<Vec<EdgeIndex>>,
    consumers: Vec<Vec<EdgeIndex>>,
}

impl Catalog {
    /// Build a catalog from `(label, input, output, cost)` tuples.
    ///
    /// The numeric id comes from the label's trailing digits, falling back
    /// to the 1-based position of the tuple.
    ///
    /// # Errors
    /// * `GraphError::NodeCountOverflow` - too many distinct compounds
    pub fn from_edges<'a, I>(edges: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a str, &'a str, Cost)>,
    {
        let mut builder = CatalogBuilder::new();
        for (position, (label, input, output, cost)) in edges.into_iter().enumerate() {
            let id = super::types::parse_edge_id(label).unwrap_or(position as u64 + 1);
            builder.add_edge(id, label, input, output, cost)?;
        }
        Ok(builder.build())
    }

    /// Number of compounds.
    #[inline]
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of machines.
    #[inline]
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Compound at `index`.
    #[must_use]
    pub fn node(&self, index: NodeIndex) -> &Node {
        &self.nodes[index]
    }

    /// All compounds in index order.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Machine at `index`.
    #[inline]
    #[must_use]
    pub fn edge(&self, index: EdgeIndex) -> &Edge {
        &self.edges[index]
    }

    /// All machines in input order.
    #[must_use]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Machines whose output is `node`, in input order.
    #[inline]
    #[must_use]
    pub fn producers(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.producers[node]
    }

    /// Machines whose input is `node`, in input order.
    #[inline]
    #[must_use]
    pub fn consumers(&self, node: NodeIndex) -> &[EdgeIndex] {
        &self.consumers[node]
    }

    /// Mask with every compound set.
    #[inline]
    #[must_use]
    pub fn full_mask(&self) -> NodeMask {
        full_mask(self.nodes.len())
    }

    /// Index of the compound called `name`.
    ///
    /// # Errors
    /// * `GraphError::UnknownNode` - no compound has that name
    pub fn index_of(&self, name: &str) -> GraphResult<NodeIndex> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))
    }

    /// Sum of the prices of `edges`, saturating at `Cost::MAX`.
    #[must_use]
    pub fn total_cost(&self, edges: &[EdgeIndex]) -> Cost {
        edges
            .iter()
            .fold(0, |total: Cost, &e| total.saturating_add(self.edges[e].cost))
    }
}
