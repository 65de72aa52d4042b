//! Minimum-cost machine selection for full compound connectivity.
//!
//! Given a catalog of priced machines, each turning one compound into
//! another, find the cheapest set of machines such that every compound can
//! be turned into every other compound, directly or by chaining machines.
//! This is minimum-cost strong connectivity, solved exactly by best-first
//! branch-and-bound over bitmask reachability.
//!
//! # Architecture
//!
//! - **catalog**: compound registry, machine catalog and the text loader
//! - **reachability**: `u64` bitmask transitive-closure matrix
//! - **search**: bound tables, states, producer enumeration, frontier, driver
//! - **verify**: Floyd–Warshall all-pairs check used for reporting
//! - **config**: search, logging and report configuration
//! - **error**: GraphError and GraphResult
//!
//! # Example
//!
//! ```
//! use facebull_graph::{parse_catalog, solve, GraphResult};
//!
//! fn example() -> GraphResult<()> {
//!     let catalog = parse_catalog("M1 A B 5\nM2 B A 5\n")?;
//!     let result = solve(&catalog)?;
//!     assert_eq!(result.total_cost(), Some(10));
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod reachability;
pub mod search;
pub mod verify;

// Re-exports for convenience
pub use catalog::{
    load_catalog, parse_catalog, Catalog, CatalogBuilder, Cost, Edge, EdgeIndex, Node, NodeIndex,
};
pub use config::{FacebullConfig, LoggingConfig, ReportConfig, SearchConfig};
pub use error::{GraphError, GraphResult};
pub use reachability::{NodeMask, ReachMatrix, MAX_NODES};
pub use search::{
    solve, ProgressObserver, ProgressReport, SearchResult, SearchState, SearchStats, Solution,
    SolveOutcome, Solver,
};
pub use verify::{floyd_warshall, DistanceMatrix};
