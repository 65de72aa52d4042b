//! Compound name registry.

use std::collections::HashMap;

use crate::error::{GraphError, GraphResult};
use crate::reachability::MAX_NODES;

use super::types::{Node, NodeIndex};

/// Maps compound names to dense indices in order of first appearance.
#[derive(Debug, Clone, Default)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    by_name: HashMap<String, NodeIndex>,
}

impl NodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index for `name`, allocating the next one on first sight.
    ///
    /// # Errors
    /// * `GraphError::NodeCountOverflow` - `name` would be compound number
    ///   [`MAX_NODES`] + 1
    pub fn intern(&mut self, name: &str) -> GraphResult<NodeIndex> {
        if let Some(&index) = self.by_name.get(name) {
            return Ok(index);
        }

        let index = self.nodes.len();
        if index >= MAX_NODES {
            return Err(GraphError::NodeCountOverflow {
                limit: MAX_NODES,
                name: name.to_string(),
            });
        }

        self.nodes.push(Node {
            index,
            name: name.to_string(),
        });
        self.by_name.insert(name.to_string(), index);
        Ok(index)
    }

    /// Index of an already registered compound.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<NodeIndex> {
        self.by_name.get(name).copied()
    }

    /// Number of registered compounds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True if nothing has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(super) fn into_parts(self) -> (Vec<Node>, HashMap<String, NodeIndex>) {
        (self.nodes, self.by_name)
    }
}
