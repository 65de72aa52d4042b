//! CLI command handlers
//!
//! # Modules
//!
//! - `solve`: run the search and print the optimal selection
//! - `inspect`: print catalog size and bound tables

pub mod inspect;
pub mod solve;
