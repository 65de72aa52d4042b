//! Compound registry and machine catalog.
//!
//! Compounds get dense indices in order of first appearance; the index is
//! also the compound's bit in every reachability mask. Machines are indexed
//! per compound into producers (machines ending at it) and consumers
//! (machines starting at it).

mod core;
mod loader;
mod registry;
mod types;


pub use self::core::{Catalog, CatalogBuilder};
pub use self::loader::{load_catalog, parse_catalog, parse_records, MachineRecord};
pub use self::registry::NodeRegistry;
pub use self::types::{parse_edge_id, Cost, Edge, EdgeIndex, Node, NodeIndex};
