//! Error types for machine catalog loading and connectivity search.
//!
//! Infeasibility is NOT an error: a catalog that admits no strongly
//! connecting selection yields [`crate::search::SolveOutcome::Infeasible`].
//! Everything here aborts the run.

use thiserror::Error;

/// Result type alias for catalog and search operations.
pub type GraphResult<T> = Result<T, GraphError>;

/// Error type for all catalog, search and configuration operations.
#[derive(Error, Debug)]
pub enum GraphError {
    // ========== Input Errors ==========
    /// A machine record could not be parsed and more input follows it.
    #[error("Malformed machine record #{record} at line {line}: {reason}")]
    MalformedInput {
        /// 1-based record number in the input stream.
        record: usize,
        /// 1-based line of the record's first token.
        line: usize,
        /// What was wrong with the record.
        reason: String,
    },

    /// More distinct compounds than bits in a reachability mask.
    #[error("Too many compounds: '{name}' would exceed the limit of {limit}")]
    NodeCountOverflow {
        /// Maximum supported compound count.
        limit: usize,
        /// Name of the first compound past the limit.
        name: String,
    },

    /// Lookup of a compound or machine that is not in the catalog.
    #[error("Unknown compound: {0}")]
    UnknownNode(String),

    // ========== Search Errors ==========
    /// A search invariant did not hold. Indicates a defect, never bad input.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),

    /// Configured pop limit reached before a goal or exhaustion.
    #[error("Search limit exceeded after {0} frontier pops")]
    SearchLimitExceeded(u64),

    // ========== Configuration Errors ==========
    /// Invalid configuration parameter.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ========== I/O Errors ==========
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// ========== Error Conversions ==========

impl From<config::ConfigError> for GraphError {
    fn from(err: config::ConfigError) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

impl From<toml::de::Error> for GraphError {
    fn from(err: toml::de::Error) -> Self {
        GraphError::InvalidConfig(err.to_string())
    }
}

impl GraphError {
    /// Shorthand for a malformed record error.
    pub(crate) fn malformed(record: usize, line: usize, reason: impl Into<String>) -> Self {
        GraphError::MalformedInput {
            record,
            line,
            reason: reason.into(),
        }
    }

    /// True for errors caused by the input catalog rather than the engine.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GraphError::MalformedInput { .. }
                | GraphError::NodeCountOverflow { .. }
                | GraphError::UnknownNode(_)
        )
    }
}
