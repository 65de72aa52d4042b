//! Error types and exit codes for the facebull binary
//!
//! # Exit Codes
//!
//! | Code | Meaning | Description |
//! |------|---------|-------------|
//! | 0 | Success | Solved, or inspection printed |
//! | 1 | General Error | Config, I/O, search limit, failed verification |
//! | 2 | Malformed Input | Catalog could not be parsed or is too large |
//! | 3 | Infeasible | No selection connects every compound |

use thiserror::Error;

use facebull_graph::GraphError;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_GENERAL_ERROR: i32 = 1;
pub const EXIT_MALFORMED_INPUT: i32 = 2;
pub const EXIT_INFEASIBLE: i32 = 3;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog, search or configuration failure from the engine
    /// Exit code: 2 for input errors, 1 otherwise
    #[error(transparent)]
    Graph(#[from] GraphError),

    /// The reported selection failed the all-pairs check
    /// Exit code: 1
    #[error("Verification failed: {0}")]
    Verification(String),

    /// Writing the report failed
    /// Exit code: 1
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Process exit code for this error.
    #[inline]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Graph(err) if err.is_input_error() => EXIT_MALFORMED_INPUT,
            Self::Graph(_) | Self::Verification(_) | Self::Io(_) => EXIT_GENERAL_ERROR,
        }
    }
}
