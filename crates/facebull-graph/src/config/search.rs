//! Best-first search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Tuning for [`crate::search::Solver`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Report progress every this many frontier pops.
    /// Default: 100
    pub progress_interval: u64,

    /// Abort with `SearchLimitExceeded` after this many pops.
    /// Default: None (run to a goal or exhaustion)
    pub max_pops: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 100,
            max_pops: None,
        }
    }
}

impl SearchConfig {
    /// Builder: set progress interval.
    #[must_use]
    pub fn progress_interval(mut self, pops: u64) -> Self {
        self.progress_interval = pops;
        self
    }

    /// Builder: set pop limit.
    #[must_use]
    pub fn max_pops(mut self, pops: u64) -> Self {
        self.max_pops = Some(pops);
        self
    }

    /// Reject values the solver cannot honour.
    pub fn validate(&self) -> GraphResult<()> {
        if self.progress_interval == 0 {
            return Err(GraphError::InvalidConfig(
                "search.progress_interval must be greater than 0".into(),
            ));
        }
        if self.max_pops == Some(0) {
            return Err(GraphError::InvalidConfig(
                "search.max_pops must be greater than 0 when set".into(),
            ));
        }
        Ok(())
    }
}
