//! Best-first branch-and-bound driver.

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::{GraphError, GraphResult};
use crate::reachability::node_bit;

use super::bounds::BoundTables;
use super::combinations::ProducerCombinations;
use super::frontier::Frontier;
use super::state::SearchState;
use super::types::{
    ProgressObserver, ProgressReport, SearchResult, SearchStats, Solution, SolveOutcome,
    TracingProgress,
};

/// Exact solver for one catalog.
///
/// Bound tables are computed once in [`Solver::new`]; each call to
/// [`Solver::solve`] runs an independent search.
#[derive(Debug)]
pub struct Solver<'a> {
    catalog: &'a Catalog,
    bounds: BoundTables,
    config: SearchConfig,
}

impl<'a> Solver<'a> {
    /// Prepare a solver for `catalog`.
    ///
    /// # Errors
    /// * `GraphError::InvalidConfig` - `config` fails validation
    pub fn new(catalog: &'a Catalog, config: SearchConfig) -> GraphResult<Self> {
        config.validate()?;
        Ok(Self {
            catalog,
            bounds: BoundTables::new(catalog),
            config,
        })
    }

    /// Precomputed bound tables.
    #[must_use]
    pub fn bounds(&self) -> &BoundTables {
        &self.bounds
    }

    /// Catalog being solved.
    #[must_use]
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Start state: nothing selected, cursor at compound 0.
    #[must_use]
    pub fn root_state(&self) -> SearchState {
        SearchState::root(self.catalog, &self.bounds)
    }

    /// Children of `state`: one per effective subset of the cursor
    /// compound's producers.
    ///
    /// Infeasible children are counted in `stats.discarded` and dropped.
    /// A state whose cursor is past the last compound has no children.
    ///
    /// # Errors
    /// * `GraphError::InvariantViolation` - a producer of the cursor compound
    ///   is already redundant, which the processing order rules out
    pub fn expand(
        &self,
        state: &SearchState,
        stats: &mut SearchStats,
    ) -> GraphResult<Vec<SearchState>> {
        let cursor = state.cursor();
        if cursor >= self.catalog.node_count() {
            return Ok(Vec::new());
        }

        // Producers of `cursor` are only ever chosen here, so nothing else
        // can reach it yet and every non-loop producer is a new connection.
        let reached = state.matrix().reached_by_others();
        if reached & node_bit(cursor) != 0 {
            return Err(GraphError::InvariantViolation(format!(
                "compound {} is reachable before its producers were decided",
                cursor
            )));
        }

        let producers = self.catalog.producers(cursor);
        let mut children = Vec::new();
        for combo in ProducerCombinations::new(self.catalog, producers, state.matrix()) {
            let child = state.child(
                &combo.edges,
                combo.matrix,
                combo.cost,
                self.catalog,
                &self.bounds,
            );
            if child.penalty().is_infeasible() {
                stats.discarded += 1;
            } else {
                children.push(child);
            }
        }
        Ok(children)
    }

    /// Run the search, logging progress through `tracing`.
    pub fn solve(&self) -> GraphResult<SearchResult> {
        self.solve_with(&mut TracingProgress)
    }

    /// Run the search, reporting progress to `observer` every
    /// `progress_interval` pops.
    ///
    /// # Returns
    /// * `Ok(SearchResult)` with `SolveOutcome::Solved` - first goal popped,
    ///   cost-optimal
    /// * `Ok(SearchResult)` with `SolveOutcome::Infeasible` - frontier exhausted
    ///
    /// # Errors
    /// * `GraphError::SearchLimitExceeded` - `max_pops` reached
    /// * `GraphError::InvariantViolation` - engine defect
    pub fn solve_with(&self, observer: &mut dyn ProgressObserver) -> GraphResult<SearchResult> {
        info!(
            machines = self.catalog.edge_count(),
            compounds = self.catalog.node_count(),
            "Starting best-first search"
        );

        let mut stats = SearchStats::default();
        let mut frontier = Frontier::new();

        if frontier.push(self.root_state()) {
            stats.pushed += 1;
            stats.max_frontier = 1;
        } else {
            stats.discarded += 1;
            debug!("Start state is already infeasible");
        }

        while let Some(top) = frontier.pop() {
            stats.pops += 1;

            if stats.pops % self.config.progress_interval == 0 {
                let top_penalty = top.penalty().bound().unwrap_or_default();
                observer.on_progress(&ProgressReport {
                    pops: stats.pops,
                    best_priority: top.cost().saturating_add(top_penalty),
                    top_penalty,
                    frontier_size: frontier.len(),
                    discarded: stats.discarded,
                });
            }

            if top.is_goal() {
                debug!(
                    cost = top.cost(),
                    machines = top.edges().len(),
                    pops = stats.pops,
                    "Goal state reached"
                );
                let solution = Solution::new(self.catalog, top.edges().to_vec());
                return Ok(SearchResult {
                    outcome: SolveOutcome::Solved(solution),
                    stats,
                });
            }

            if let Some(limit) = self.config.max_pops {
                if stats.pops >= limit {
                    debug!(pops = stats.pops, "Search limit reached");
                    return Err(GraphError::SearchLimitExceeded(stats.pops));
                }
            }

            for child in self.expand(&top, &mut stats)? {
                if frontier.push(child) {
                    stats.pushed += 1;
                }
            }
            stats.max_frontier = stats.max_frontier.max(frontier.len());
        }

        debug!(
            pops = stats.pops,
            discarded = stats.discarded,
            "Frontier exhausted without a goal"
        );
        Ok(SearchResult {
            outcome: SolveOutcome::Infeasible,
            stats,
        })
    }
}

/// Solve `catalog` with the default search configuration.
pub fn solve(catalog: &Catalog) -> GraphResult<SearchResult> {
    Solver::new(catalog, SearchConfig::default())?.solve()
}
