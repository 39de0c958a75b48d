// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch log for debugging and inspection
//!
//! The log is append-only and unbounded at write time. Bounding happens
//! when it is queried: filter by event, order, then limit.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Number of entries a query returns when no limit is given
pub const DEFAULT_LOG_LIMIT: usize = 10;

/// A record of one dispatch performed in logging mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry<T> {
    /// When the dispatch completed
    pub time: DateTime<Utc>,
    /// Canonical event name
    pub event: String,
    /// The payload exactly as it was dispatched
    pub data: T,
    /// Listener IDs that were invoked, in invocation order
    pub ids: Vec<String>,
}

/// Parameters for querying the log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogQuery {
    /// Exact event name to keep; blank keeps everything
    pub event: String,
    /// Maximum number of entries; 0 means unlimited
    pub limit: usize,
    /// Newest entries first
    pub last_first: bool,
}

impl LogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only keep entries whose stored event name equals `event`
    ///
    /// The comparison is exact. Stored names are canonical, so pass a
    /// canonical name (see [`crate::normalise_event`]).
    pub fn event(mut self, event: impl Into<String>) -> Self {
        self.event = event.into();
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn unlimited(self) -> Self {
        self.limit(0)
    }

    pub fn last_first(mut self, last_first: bool) -> Self {
        self.last_first = last_first;
        self
    }

    pub fn oldest_first(self) -> Self {
        self.last_first(false)
    }

    /// Run this query over a log snapshot
    pub fn apply<'a, T>(&self, logs: &'a [LogEntry<T>]) -> Vec<&'a LogEntry<T>> {
        get_limited_logs(logs, &self.event, self.limit, self.last_first)
    }
}

impl Default for LogQuery {
    fn default() -> Self {
        Self {
            event: String::new(),
            limit: DEFAULT_LOG_LIMIT,
            last_first: true,
        }
    }
}

/// Keep entries whose event equals `event`, or all entries if `event` is blank
pub fn filter_logs<'a, T>(logs: &'a [LogEntry<T>], event: &str) -> Vec<&'a LogEntry<T>> {
    if event.trim().is_empty() {
        return logs.iter().collect();
    }

    logs.iter().filter(|entry| entry.event == event).collect()
}

/// Filter, optionally reverse, then truncate a log snapshot
///
/// A `limit` of 0 returns every matching entry.
pub fn get_limited_logs<'a, T>(
    logs: &'a [LogEntry<T>],
    event: &str,
    limit: usize,
    last_first: bool,
) -> Vec<&'a LogEntry<T>> {
    let mut output = filter_logs(logs, event);

    if last_first {
        output.reverse();
    }

    if limit > 0 {
        output.truncate(limit);
    }

    output
}

/// Source label for dispatch diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogBits {
    /// Trimmed source name
    pub src: String,
    /// Suffix for a heading, `" - <src>"` or empty
    pub ext: String,
}

impl LogBits {
    pub fn from_source(source: &str) -> Self {
        let src = source.trim().to_string();
        let ext = if src.is_empty() {
            String::new()
        } else {
            format!(" - {}", src)
        };
        Self { src, ext }
    }
}

/// Append-only in-memory store of log entries
#[derive(Debug, Clone)]
pub struct EventLog<T> {
    entries: Vec<LogEntry<T>>,
}

impl<T> EventLog<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn append(&mut self, entry: LogEntry<T>) {
        self.entries.push(entry);
    }

    /// All entries in append order
    pub fn entries(&self) -> &[LogEntry<T>] {
        &self.entries
    }

    pub fn query(&self, query: &LogQuery) -> Vec<&LogEntry<T>> {
        query.apply(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry. There is no per-entry removal.
    pub fn clear(&mut self) {
        self.entries = Vec::new();
    }
}

impl<T> Default for EventLog<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
