// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// A scenario file in its own temp directory. The directory is removed on drop.
pub struct ScenarioFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl ScenarioFile {
    pub fn new(content: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("scenario.toml");
        fs::write(&path, content).expect("Failed to write scenario");
        Self { _dir: dir, path }
    }
}

/// The `comms` binary with a quiet log filter
pub fn comms() -> Command {
    let mut cmd = Command::cargo_bin("comms").expect("comms binary should be built");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Two listeners on overlapping events, two dispatches, logging on
pub const FILE_PICKER: &str = r#"
logging = true

[[listeners]]
events = ["file selected", "reset"]
id = "file-picker"

[[listeners]]
events = "File Selected"
id = "{preview pane}"

[[dispatch]]
event = "File Selected"
data = "a.txt"
source = "toolbar"

[[dispatch]]
event = "reset"
"#;

/// Dispatches with no listeners, so stdout carries only the log
pub const DISPATCH_ONLY: &str = r#"
logging = true

[[dispatch]]
event = "open"
data = { name = "a.txt" }

[[dispatch]]
event = "close"

[[dispatch]]
event = "open"
data = { name = "b.txt" }
"#;
