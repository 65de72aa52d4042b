//! Bitmask reachability matrix.
//!
//! Row `k` holds the set of compounds reachable from compound `k` using the
//! machines selected so far. Compound index `i` is bit `1 << i`, so a catalog
//! can hold at most [`MAX_NODES`] compounds.
//!
//! # Invariants
//!
//! - Reflexive: row `k` always contains bit `k`.
//! - Exact: rows equal the transitive closure of exactly the applied edges,
//!   provided edges are applied one at a time through [`ReachMatrix::apply_edge`].

mod matrix;


pub use matrix::ReachMatrix;

/// Bit set of compound indices.
pub type NodeMask = u64;

/// Maximum compound count representable in a [`NodeMask`].
pub const MAX_NODES: usize = NodeMask::BITS as usize;

/// Mask with only compound `index` set.
#[inline]
#[must_use]
pub fn node_bit(index: usize) -> NodeMask {
    debug_assert!(index < MAX_NODES);
    1 << index
}

/// Mask with compounds `0..count` set.
#[inline]
#[must_use]
pub fn full_mask(count: usize) -> NodeMask {
    debug_assert!(count <= MAX_NODES);
    if count >= MAX_NODES {
        NodeMask::MAX
    } else {
        (1 << count) - 1
    }
}
