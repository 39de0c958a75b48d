// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::io::Write;

#[test]
fn empty_document_uses_defaults() {
    let config = CommsConfig::from_toml_str("").unwrap();
    assert_eq!(config, CommsConfig::default());
    assert!(!config.logging);
    assert_eq!(config.logs.limit, DEFAULT_LOG_LIMIT);
    assert!(config.logs.last_first);
}

#[test]
fn partial_logs_table_keeps_other_defaults() {
    let config = CommsConfig::from_toml_str("[logs]\nlimit = 0\n").unwrap();
    assert_eq!(config.logs.limit, 0);
    assert!(config.logs.last_first);
}

#[test]
fn default_query_reflects_config() {
    let config = CommsConfig::from_toml_str("logging = true\n[logs]\nlimit = 4\nlast_first = false\n")
        .unwrap();
    let query = config.default_query();
    assert_eq!(query, LogQuery::new().limit(4).oldest_first());
}

#[test]
fn invalid_toml_is_a_parse_error() {
    let err = CommsConfig::from_toml_str("logging = [").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let err = CommsConfig::from_toml_str("logging = \"yes\"").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn load_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "logging = true").unwrap();

    let config = CommsConfig::load(file.path()).unwrap();
    assert!(config.logging);
}

#[test]
fn load_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.toml");

    let err = CommsConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("missing.toml"));
}
