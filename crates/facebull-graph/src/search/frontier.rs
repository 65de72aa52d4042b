//! Best-first frontier.
//!
//! Implements ordering for BinaryHeap min-heap behavior on `cost + penalty`.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::catalog::Cost;

use super::state::SearchState;

/// Entry in the frontier priority queue.
///
/// Ties on priority go to the deeper state (fewer compounds left to
/// decide), then to the earlier push, so runs are reproducible.
#[derive(Debug)]
struct FrontierEntry {
    priority: Cost,
    cursor: usize,
    seq: u64,
    state: SearchState,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse for min-heap
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cursor.cmp(&other.cursor))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Min-priority collection of feasible states.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `state`. Infeasible states are rejected and returned as `false`.
    pub fn push(&mut self, state: SearchState) -> bool {
        let Some(priority) = state.priority() else {
            return false;
        };
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry {
            priority,
            cursor: state.cursor(),
            seq,
            state,
        });
        true
    }

    /// Remove the state with the smallest `cost + penalty`.
    pub fn pop(&mut self) -> Option<SearchState> {
        self.heap.pop().map(|entry| entry.state)
    }

    /// Smallest queued `cost + penalty`.
    #[must_use]
    pub fn peek_priority(&self) -> Option<Cost> {
        self.heap.peek().map(|entry| entry.priority)
    }

    /// Number of queued states.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no state is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
