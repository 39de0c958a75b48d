// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for listener registration, dispatch and configuration

use std::path::PathBuf;
use thiserror::Error;

/// Error returned by a listener to abort the dispatch it is part of
pub type ListenerError = Box<dyn std::error::Error + Send + Sync>;

/// Errors raised by the communicator
#[derive(Debug, Error)]
pub enum CommsError {
    /// Empty event, empty event list or blank listener ID
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A listener already holds the (event, id) pair and replacement was not requested
    #[error("listener \"{id}\" is already registered for event \"{event}\"")]
    DuplicateListener { event: String, id: String },

    /// A listener failed; listeners after it were not invoked
    #[error("listener \"{id}\" failed while handling event \"{event}\": {source}")]
    Listener {
        event: String,
        id: String,
        #[source]
        source: ListenerError,
    },
}

/// Errors loading communicator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML syntax error: {0}")]
    Parse(#[from] toml::de::Error),
}
