// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use chrono::TimeZone;
use yare::parameterized;

fn entry(n: usize, event: &str) -> LogEntry<usize> {
    LogEntry {
        time: Utc.timestamp_opt(1_700_000_000 + n as i64, 0).unwrap(),
        event: event.to_string(),
        data: n,
        ids: vec![format!("listener-{}", n)],
    }
}

/// Twelve entries: even ones are "set", odd ones are "get"
fn twelve() -> Vec<LogEntry<usize>> {
    (0..12)
        .map(|n| entry(n, if n % 2 == 0 { "set" } else { "get" }))
        .collect()
}

fn data(entries: &[&LogEntry<usize>]) -> Vec<usize> {
    entries.iter().map(|e| e.data).collect()
}

#[test]
fn filter_with_blank_event_keeps_everything() {
    let logs = twelve();
    assert_eq!(filter_logs(&logs, "").len(), 12);
    assert_eq!(filter_logs(&logs, "   ").len(), 12);
}

#[test]
fn filter_keeps_exact_matches_only() {
    let logs = twelve();
    let set = filter_logs(&logs, "set");
    assert_eq!(data(&set), vec![0, 2, 4, 6, 8, 10]);
}

#[test]
fn filter_does_not_normalise_the_query() {
    let logs = twelve();
    assert!(filter_logs(&logs, "Set").is_empty());
    assert!(filter_logs(&logs, " set").is_empty());
}

#[test]
fn newest_first_returns_ten_most_recent() {
    let logs = twelve();
    let out = get_limited_logs(&logs, "", 10, true);
    assert_eq!(data(&out), vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
}

#[test]
fn oldest_first_returns_ten_oldest() {
    let logs = twelve();
    let out = get_limited_logs(&logs, "", 10, false);
    assert_eq!(data(&out), vec![0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
}

#[test]
fn filter_applies_before_limit() {
    let logs = twelve();
    let out = get_limited_logs(&logs, "get", 2, true);
    assert_eq!(data(&out), vec![11, 9]);
}

#[parameterized(
    zero_is_unlimited = { 0, 12 },
    below_length = { 5, 5 },
    exactly_length = { 12, 12 },
    above_length = { 50, 12 },
)]
fn limit_behaviour(limit: usize, expected: usize) {
    let logs = twelve();
    assert_eq!(get_limited_logs(&logs, "", limit, true).len(), expected);
}

#[test]
fn empty_log_yields_empty_result() {
    let logs: Vec<LogEntry<usize>> = Vec::new();
    assert!(get_limited_logs(&logs, "", 10, true).is_empty());
    assert!(get_limited_logs(&logs, "set", 0, false).is_empty());
}

#[test]
fn default_query_is_ten_newest_of_everything() {
    let query = LogQuery::default();
    assert_eq!(query.event, "");
    assert_eq!(query.limit, DEFAULT_LOG_LIMIT);
    assert!(query.last_first);

    let logs = twelve();
    assert_eq!(data(&query.apply(&logs))[0], 11);
}

#[test]
fn query_builder_composes() {
    let logs = twelve();
    let query = LogQuery::new().event("set").unlimited().oldest_first();
    assert_eq!(data(&query.apply(&logs)), vec![0, 2, 4, 6, 8, 10]);
}

#[parameterized(
    empty = { "", "", "" },
    blank = { "   ", "", "" },
    named = { "componentName", "componentName", " - componentName" },
    padded = { "  toolbar ", "toolbar", " - toolbar" },
)]
fn log_bits(source: &str, src: &str, ext: &str) {
    let bits = LogBits::from_source(source);
    assert_eq!(bits.src, src);
    assert_eq!(bits.ext, ext);
}

#[test]
fn event_log_appends_in_order_and_clears() {
    let mut log = EventLog::new();
    assert!(log.is_empty());

    for e in twelve() {
        log.append(e);
    }
    assert_eq!(log.len(), 12);
    assert_eq!(log.entries()[0].data, 0);
    assert_eq!(log.entries()[11].data, 11);

    let newest = log.query(&LogQuery::new().limit(1));
    assert_eq!(newest[0].data, 11);

    log.clear();
    assert!(log.is_empty());
    assert!(log.query(&LogQuery::default()).is_empty());
}

#[test]
fn log_entry_serializes_all_fields() {
    let e = entry(3, "click");
    let json = serde_json::to_value(&e).unwrap();
    assert_eq!(json["event"], "click");
    assert_eq!(json["data"], 3);
    assert_eq!(json["ids"][0], "listener-3");
    assert!(json["time"].is_string());
}

use proptest::prelude::*;

proptest! {
    #[test]
    fn limited_logs_never_exceed_limit(len in 0usize..40, limit in 1usize..20, last_first in any::<bool>()) {
        let logs: Vec<_> = (0..len).map(|n| entry(n, "e")).collect();
        let out = get_limited_logs(&logs, "", limit, last_first);
        prop_assert_eq!(out.len(), len.min(limit));
    }

    #[test]
    fn newest_first_is_reverse_of_oldest_first(len in 0usize..30) {
        let logs: Vec<_> = (0..len).map(|n| entry(n, "e")).collect();
        let mut oldest = data(&get_limited_logs(&logs, "", 0, false));
        let newest = data(&get_limited_logs(&logs, "", 0, true));
        oldest.reverse();
        prop_assert_eq!(newest, oldest);
    }
}
