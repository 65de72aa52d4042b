//! All-pairs shortest paths over a selection, for reporting.
//!
//! Nothing in the search depends on this; it independently confirms that a
//! reported selection connects every compound and shows the cheapest route
//! cost between each pair.

mod floyd_warshall;


pub use self::floyd_warshall::{floyd_warshall, DistanceMatrix};
