//! Compound and machine types.

use std::fmt;

use crate::reachability::{node_bit, NodeMask};

/// Dense compound index; doubles as the compound's bit position.
pub type NodeIndex = usize;

/// Position of a machine in [`super::Catalog::edges`].
pub type EdgeIndex = usize;

/// Machine price. Prices are non-negative integers.
pub type Cost = u64;

/// A compound in the transformation graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Index assigned on first sight.
    pub index: NodeIndex,
    /// Name as it appeared in the input.
    pub name: String,
}

impl Node {
    /// Single-bit mask for this compound.
    #[inline]
    #[must_use]
    pub fn mask(&self) -> NodeMask {
        node_bit(self.index)
    }
}

/// A machine: directed, priced transformation `input -> output`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    /// Numeric id used to order reported solutions.
    pub id: u64,
    /// Raw id token from the input (e.g. `M12`).
    pub label: String,
    /// Consumed compound.
    pub input: NodeIndex,
    /// Produced compound.
    pub output: NodeIndex,
    /// Price of the machine.
    pub cost: Cost,
}

impl Edge {
    /// Mask of the consumed compound.
    #[inline]
    #[must_use]
    pub fn input_mask(&self) -> NodeMask {
        node_bit(self.input)
    }

    /// Mask of the produced compound.
    #[inline]
    #[must_use]
    pub fn output_mask(&self) -> NodeMask {
        node_bit(self.output)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} -> {} ({})", self.label, self.input, self.output, self.cost)
    }
}

/// Numeric id of a machine label: its trailing decimal digits.
///
/// `M12` → 12, `7` → 7. Labels without trailing digits have no id.
#[must_use]
pub fn parse_edge_id(label: &str) -> Option<u64> {
    let digits_start = label
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_ascii_digit())
        .last()
        .map(|(i, _)| i)?;
    label[digits_start..].parse().ok()
}
