//! Search results, counters and the progress hook.

use std::fmt;

use tracing::info;

use crate::catalog::{Catalog, Cost, EdgeIndex};

/// Counters threaded through the driver and expansion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// States popped from the frontier.
    pub pops: u64,
    /// States pushed onto the frontier.
    pub pushed: u64,
    /// States discarded as infeasible instead of being queued.
    pub discarded: u64,
    /// Largest frontier size observed.
    pub max_frontier: usize,
}

/// Snapshot passed to a [`ProgressObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressReport {
    /// States popped so far, including the current one.
    pub pops: u64,
    /// `cost + penalty` of the state just popped.
    pub best_priority: Cost,
    /// Penalty part of `best_priority`.
    pub top_penalty: Cost,
    /// States still queued.
    pub frontier_size: usize,
    /// States discarded as infeasible so far.
    pub discarded: u64,
}

/// Receives periodic progress reports. Observation only: it cannot steer
/// the search.
pub trait ProgressObserver {
    fn on_progress(&mut self, report: &ProgressReport);
}

impl<F> ProgressObserver for F
where
    F: FnMut(&ProgressReport),
{
    fn on_progress(&mut self, report: &ProgressReport) {
        self(report)
    }
}

/// Logs progress at info level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl ProgressObserver for TracingProgress {
    fn on_progress(&mut self, report: &ProgressReport) {
        info!(
            pops = report.pops,
            best = report.best_priority,
            penalty = report.top_penalty,
            frontier = report.frontier_size,
            discarded = report.discarded,
            "Search progress"
        );
    }
}

/// Ignores progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _report: &ProgressReport) {}
}

/// A minimum-cost strongly connecting machine selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    edges: Vec<EdgeIndex>,
    edge_ids: Vec<u64>,
    total_cost: Cost,
}

impl Solution {
    /// Sort `edges` by machine id for reporting and total their prices.
    #[must_use]
    pub fn new(catalog: &Catalog, mut edges: Vec<EdgeIndex>) -> Self {
        edges.sort_by_key(|&e| (catalog.edge(e).id, e));
        let edge_ids = edges.iter().map(|&e| catalog.edge(e).id).collect();
        let total_cost = catalog.total_cost(&edges);
        Self {
            edges,
            edge_ids,
            total_cost,
        }
    }

    /// Selected machines, sorted by machine id.
    #[must_use]
    pub fn edges(&self) -> &[EdgeIndex] {
        &self.edges
    }

    /// Numeric ids of the selected machines, ascending.
    #[must_use]
    pub fn edge_ids(&self) -> &[u64] {
        &self.edge_ids
    }

    /// Total price.
    #[must_use]
    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}

impl fmt::Display for Solution {
    /// Space separated machine ids, the second line of the classic output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for id in &self.edge_ids {
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}", id)?;
            first = false;
        }
        Ok(())
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// A goal state was popped; it is cost-optimal.
    Solved(Solution),
    /// The frontier emptied: no selection connects every compound.
    Infeasible,
}

/// Outcome plus the counters of the run that produced it.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

impl SearchResult {
    /// The solution, if one was found.
    #[must_use]
    pub fn solution(&self) -> Option<&Solution> {
        match &self.outcome {
            SolveOutcome::Solved(solution) => Some(solution),
            SolveOutcome::Infeasible => None,
        }
    }

    /// Total price of the solution, if one was found.
    #[must_use]
    pub fn total_cost(&self) -> Option<Cost> {
        self.solution().map(Solution::total_cost)
    }

    /// True if the catalog admits no connecting selection.
    #[must_use]
    pub fn is_infeasible(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Infeasible)
    }
}
