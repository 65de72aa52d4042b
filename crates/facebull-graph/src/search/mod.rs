//! Exact best-first branch-and-bound over machine selections.
//!
//! # Algorithm
//!
//! Compounds are decided one at a time in index order. Deciding compound
//! `i` means choosing which of its producers to buy; each effective subset
//! becomes one child state. States are ordered by
//! - f(s) = cost(s) + penalty(s)
//! - cost(s) = price of the machines selected so far
//! - penalty(s) = admissible lower bound on what completion still costs
//!
//! Because the penalty never overestimates, the first fully connected state
//! popped is cost-optimal.
//!
//! # Pruning
//!
//! A state is discarded, never queued, when its penalty is infeasible:
//! some compound can no longer gain a producer or a consumer.
//!
//! # Example
//!
//! ```
//! use facebull_graph::catalog::Catalog;
//! use facebull_graph::search::solve;
//!
//! let catalog = Catalog::from_edges([
//!     ("M1", "A", "B", 1),
//!     ("M2", "B", "C", 1),
//!     ("M3", "C", "A", 1),
//!     ("M4", "A", "C", 5),
//! ])?;
//! let result = solve(&catalog)?;
//! assert_eq!(result.total_cost(), Some(3));
//! assert_eq!(result.solution().unwrap().to_string(), "1 2 3");
//! # Ok::<(), facebull_graph::GraphError>(())
//! ```

mod algorithm;
mod bounds;
mod combinations;
mod frontier;
mod state;
mod types;


pub use self::algorithm::{solve, Solver};
pub use self::bounds::{BoundTables, Penalty};
pub use self::combinations::{Combination, ProducerCombinations};
pub use self::frontier::Frontier;
pub use self::state::SearchState;
pub use self::types::{
    NoProgress, ProgressObserver, ProgressReport, SearchResult, SearchStats, Solution,
    SolveOutcome, TracingProgress,
};
