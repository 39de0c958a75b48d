// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Communicator configuration
//!
//! ```toml
//! logging = true
//!
//! [logs]
//! limit = 10
//! last_first = true
//! ```

use crate::error::ConfigError;
use crate::log::{LogQuery, DEFAULT_LOG_LIMIT};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for constructing a [`crate::Communicator`]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommsConfig {
    /// Start in logging mode
    pub logging: bool,
    /// Defaults for log queries
    pub logs: LogDefaults,
}

/// Default log query parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogDefaults {
    /// 0 means unlimited
    pub limit: usize,
    pub last_first: bool,
}

impl Default for LogDefaults {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LOG_LIMIT,
            last_first: true,
        }
    }
}

impl CommsConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Read configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn default_query(&self) -> LogQuery {
        LogQuery::new()
            .limit(self.logs.limit)
            .last_first(self.logs.last_first)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
