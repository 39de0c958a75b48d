// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for CLI commands

use chrono::SecondsFormat;
use clap::ValueEnum;
use comms_core::LogEntry;
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// One log entry rendered as a single console line
pub struct LogLine<'a>(pub &'a LogEntry<Value>);

impl fmt::Display for LogLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entry = self.0;
        write!(
            f,
            "{}  {}  [{}]  {}",
            entry.time.to_rfc3339_opts(SecondsFormat::Millis, true),
            entry.event,
            entry.ids.join(", "),
            entry.data
        )
    }
}

/// Render log entries in the requested format
pub fn render_logs(entries: &[LogEntry<Value>], format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            if entries.is_empty() {
                return "no log entries".to_string();
            }
            entries
                .iter()
                .map(|entry| LogLine(entry).to_string())
                .collect::<Vec<_>>()
                .join("\n")
        }
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).unwrap_or_else(|_| "[]".to_string())
        }
    }
}

pub fn print_logs(entries: &[LogEntry<Value>], format: OutputFormat) {
    println!("{}", render_logs(entries, format));
}
