//! Configuration for the solver and its front ends.
//!
//! This module provides configuration structures for:
//! - best-first search tuning (SearchConfig)
//! - log output (LoggingConfig)
//! - result reporting and verification (ReportConfig)

mod logging;
mod report;
mod search;

#[cfg(test)]
mod tests;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, GraphResult};

pub use self::logging::LoggingConfig;
pub use self::report::ReportConfig;
pub use self::search::SearchConfig;

/// Environment variable prefix for overrides, e.g. `FACEBULL__SEARCH__MAX_POPS=1000`.
pub const ENV_PREFIX: &str = "FACEBULL";

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FacebullConfig {
    pub search: SearchConfig,
    pub logging: LoggingConfig,
    pub report: ReportConfig,
}

impl FacebullConfig {
    /// Load configuration from files and environment.
    ///
    /// Sources, later ones overriding earlier ones:
    /// 1. config/default.toml (optional)
    /// 2. `path`, when given (required)
    /// 3. Environment variables with the `FACEBULL__` prefix
    pub fn load(path: Option<&Path>) -> GraphResult<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config: FacebullConfig = builder
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a single TOML file.
    pub fn from_file(path: &Path) -> GraphResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            GraphError::InvalidConfig(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: FacebullConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all sections.
    pub fn validate(&self) -> GraphResult<()> {
        self.search.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
