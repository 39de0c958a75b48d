// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Canonical forms for event names and listener IDs
//!
//! Registry keys are always stored in canonical form, so two spellings that
//! normalise identically address the same slot.

use regex::Regex;
use std::sync::LazyLock;

// Anything that is not a lower-case ASCII letter or digit (applied after lower-casing)
#[allow(clippy::expect_used)]
static EVENT_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("constant regex pattern is valid"));

// Anything outside [A-Za-z0-9_-]; case is kept
#[allow(clippy::expect_used)]
static LISTENER_ID_STRIP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("constant regex pattern is valid"));

/// Lower-case an event name and strip everything but `[a-z0-9]`
///
/// `"Set Value!"` becomes `"setvalue"`. Empty input yields an empty string.
pub fn normalise_event(input: &str) -> String {
    EVENT_STRIP
        .replace_all(&input.to_lowercase(), "")
        .into_owned()
}

/// Strip everything but `[A-Za-z0-9_-]` from a listener ID, preserving case
pub fn normalise_listener_id(input: &str) -> String {
    LISTENER_ID_STRIP.replace_all(input, "").into_owned()
}

#[cfg(test)]
#[path = "normalise_tests.rs"]
mod tests;
