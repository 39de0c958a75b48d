// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scenario files for `comms replay`
//!
//! A scenario is a communicator config plus the listeners to mount and the
//! dispatches to run, in order:
//!
//! ```toml
//! logging = true
//!
//! [[listeners]]
//! events = ["file selected", "reset"]
//! id = "file-picker"
//!
//! [[dispatch]]
//! event = "File Selected"
//! data = { name = "a.txt" }
//! source = "toolbar"
//! ```

use anyhow::{Context, Result};
use comms_core::{CommsConfig, EventSpec};
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    #[serde(flatten)]
    pub comms: CommsConfig,
    #[serde(default)]
    pub listeners: Vec<ListenerDef>,
    #[serde(default)]
    pub dispatch: Vec<DispatchDef>,
}

/// A listener that echoes every payload it receives
#[derive(Debug, Clone, Deserialize)]
pub struct ListenerDef {
    pub events: Events,
    pub id: String,
    #[serde(default)]
    pub replace: bool,
    /// Return an error instead of echoing
    #[serde(default)]
    pub fail: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Events {
    One(String),
    Many(Vec<String>),
}

impl From<Events> for EventSpec {
    fn from(events: Events) -> Self {
        match events {
            Events::One(event) => EventSpec::One(event),
            Events::Many(events) => EventSpec::Many(events),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DispatchDef {
    pub event: String,
    #[serde(default)]
    pub data: Value,
    #[serde(default)]
    pub source: String,
}

impl Scenario {
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("invalid scenario")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("could not read scenario {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("in {}", path.display()))
    }
}

#[cfg(test)]
#[path = "scenario_tests.rs"]
mod tests;
