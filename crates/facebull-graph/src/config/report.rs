//! Result reporting configuration.

use serde::{Deserialize, Serialize};

/// What the front end does with a solution.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Re-check the solution with all-pairs shortest paths.
    /// Default: true
    pub verify: bool,

    /// Log the shortest-path distance matrix at debug level.
    /// Default: false
    pub log_distances: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            verify: true,
            log_distances: false,
        }
    }
}
