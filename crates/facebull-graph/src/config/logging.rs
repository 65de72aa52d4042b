//! Log output configuration.

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

/// Accepted values of [`LoggingConfig::format`].
pub const LOG_FORMATS: &[&str] = &["pretty", "compact", "full"];

/// Log output configuration, consumed by the binary's subscriber setup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// One of "pretty", "compact", "full".
    pub format: String,
    /// Include file and line in each event.
    pub include_location: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: "compact".to_string(),
            include_location: false,
        }
    }
}

impl LoggingConfig {
    pub fn validate(&self) -> GraphResult<()> {
        if !LOG_FORMATS.contains(&self.format.as_str()) {
            return Err(GraphError::InvalidConfig(format!(
                "logging.format must be one of {:?}, got '{}'",
                LOG_FORMATS, self.format
            )));
        }
        if self.level.trim().is_empty() {
            return Err(GraphError::InvalidConfig(
                "logging.level must not be empty".into(),
            ));
        }
        Ok(())
    }
}
