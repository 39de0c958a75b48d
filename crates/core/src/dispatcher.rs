// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Synchronous dispatch of events to registered listeners
//!
//! Listeners for an event are snapshotted and every lock is released before
//! the first one runs, so a listener may dispatch, add or remove listeners
//! on the same communicator. Changes made that way apply from the next
//! dispatch on.

use crate::clock::{Clock, SystemClock};
use crate::error::CommsError;
use crate::log::{EventLog, LogBits, LogEntry, LogQuery};
use crate::normalise::normalise_event;
use crate::registry::{ListenerRegistry, Registration};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Whether dispatches are recorded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Invoke listeners only
    #[default]
    Silent,
    /// Invoke listeners, emit diagnostics and append a log entry
    Logging,
}

impl DispatchMode {
    pub fn from_logging(logging: bool) -> Self {
        if logging {
            DispatchMode::Logging
        } else {
            DispatchMode::Silent
        }
    }

    pub fn is_logging(self) -> bool {
        matches!(self, DispatchMode::Logging)
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchMode::Silent => write!(f, "silent"),
            DispatchMode::Logging => write!(f, "logging"),
        }
    }
}

/// Routes a dispatch to the listeners of one event and records it when logging
pub struct Dispatcher<T, C = SystemClock> {
    registry: Arc<RwLock<ListenerRegistry<T>>>,
    log: Arc<RwLock<EventLog<T>>>,
    mode: Arc<RwLock<DispatchMode>>,
    clock: C,
}

impl<T, C: Clock> Dispatcher<T, C> {
    pub fn new(registry: Arc<RwLock<ListenerRegistry<T>>>, mode: DispatchMode, clock: C) -> Self {
        Self {
            registry,
            log: Arc::new(RwLock::new(EventLog::new())),
            mode: Arc::new(RwLock::new(mode)),
            clock,
        }
    }

    pub fn mode(&self) -> DispatchMode {
        *self.mode.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_mode(&self, mode: DispatchMode) {
        *self.mode.write().unwrap_or_else(|e| e.into_inner()) = mode;
    }

    /// Invoke every listener for `event` with `&data`, in registration order
    ///
    /// Returns the IDs of the invoked listeners. The first listener error
    /// aborts the dispatch: later listeners are skipped and nothing is logged.
    pub fn dispatch(&self, event: &str, data: T, source: &str) -> Result<Vec<String>, CommsError>
    where
        T: fmt::Debug,
    {
        let event = normalise_event(event);
        let listeners = self
            .registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .listeners_for(&event);

        match self.mode() {
            DispatchMode::Silent => invoke(&event, &listeners, &data),
            DispatchMode::Logging => self.dispatch_logged(event, &listeners, data, source),
        }
    }

    fn dispatch_logged(
        &self,
        event: String,
        listeners: &[Registration<T>],
        data: T,
        source: &str,
    ) -> Result<Vec<String>, CommsError>
    where
        T: fmt::Debug,
    {
        let bits = LogBits::from_source(source);
        let span = tracing::info_span!("dispatch", event = %event, source = %bits.src);
        let _entered = span.enter();

        tracing::info!(data = ?data, "comms.dispatch(\"{}\"){}", event, bits.ext);

        let ids = match invoke(&event, listeners, &data) {
            Ok(ids) => ids,
            Err(e) => {
                tracing::warn!(error = %e, "dispatch aborted");
                return Err(e);
            }
        };

        tracing::info!(ids = ?ids, "dispatched to {} listener(s)", ids.len());

        self.log
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .append(LogEntry {
                time: self.clock.now(),
                event,
                data,
                ids: ids.clone(),
            });

        Ok(ids)
    }

    /// Clone the entries matched by `query` out of the log
    pub fn logs(&self, query: &LogQuery) -> Vec<LogEntry<T>>
    where
        T: Clone,
    {
        self.log
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .query(query)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn log_len(&self) -> usize {
        self.log.read().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn clear_logs(&self) {
        self.log.write().unwrap_or_else(|e| e.into_inner()).clear();
    }
}

impl<T, C: Clone> Clone for Dispatcher<T, C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            log: Arc::clone(&self.log),
            mode: Arc::clone(&self.mode),
            clock: self.clock.clone(),
        }
    }
}

fn invoke<T>(
    event: &str,
    listeners: &[Registration<T>],
    data: &T,
) -> Result<Vec<String>, CommsError> {
    let mut ids = Vec::with_capacity(listeners.len());

    for registration in listeners {
        (registration.listener)(data).map_err(|source| CommsError::Listener {
            event: event.to_string(),
            id: registration.id.clone(),
            source,
        })?;
        ids.push(registration.id.clone());
    }

    Ok(ids)
}

#[cfg(test)]
#[path = "dispatcher_tests.rs"]
mod tests;
