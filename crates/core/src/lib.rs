// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! comms-core: in-process publish/subscribe dispatcher
//!
//! This crate provides:
//! - Canonical event names and listener IDs
//! - A listener registry keyed on (event, id)
//! - Synchronous dispatch with an optional logging mode
//! - Filtered, ordered and limited queries over the dispatch log

pub mod clock;
pub mod config;
pub mod error;
pub mod log;
pub mod normalise;
pub mod registry;

mod communicator;
mod dispatcher;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use communicator::{Communicator, EventSpec};
pub use config::{CommsConfig, LogDefaults};
pub use dispatcher::{DispatchMode, Dispatcher};
pub use error::{CommsError, ConfigError, ListenerError};
pub use log::{filter_logs, get_limited_logs, EventLog, LogBits, LogEntry, LogQuery, DEFAULT_LOG_LIMIT};
pub use normalise::{normalise_event, normalise_listener_id};
pub use registry::{Listener, ListenerRegistry, Registration};
