// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Public communicator combining the registry, dispatcher and log
//!
//! A `Communicator` is an explicitly constructed value. Clones are handles
//! to the same registry, log and mode, so components can share one instance
//! without a global.

use crate::clock::{Clock, SystemClock};
use crate::config::CommsConfig;
use crate::dispatcher::{DispatchMode, Dispatcher};
use crate::error::{CommsError, ListenerError};
use crate::log::{LogEntry, LogQuery};
use crate::registry::{Listener, ListenerRegistry};
use std::fmt;
use std::sync::{Arc, RwLock};

/// Event name(s) a listener is registered for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventSpec {
    One(String),
    Many(Vec<String>),
}

impl EventSpec {
    pub fn names(&self) -> &[String] {
        match self {
            EventSpec::One(name) => std::slice::from_ref(name),
            EventSpec::Many(names) => names,
        }
    }

    /// A single event must be non-blank; a list must be non-empty
    fn validate(&self) -> Result<(), CommsError> {
        let valid = match self {
            EventSpec::One(name) => !name.trim().is_empty(),
            EventSpec::Many(names) => !names.is_empty(),
        };
        if valid {
            Ok(())
        } else {
            Err(CommsError::InvalidArgument(
                "could not add listener because `event` was empty".to_string(),
            ))
        }
    }
}

impl From<&str> for EventSpec {
    fn from(event: &str) -> Self {
        EventSpec::One(event.to_string())
    }
}

impl From<String> for EventSpec {
    fn from(event: String) -> Self {
        EventSpec::One(event)
    }
}

impl From<&String> for EventSpec {
    fn from(event: &String) -> Self {
        EventSpec::One(event.clone())
    }
}

impl From<Vec<String>> for EventSpec {
    fn from(events: Vec<String>) -> Self {
        EventSpec::Many(events)
    }
}

impl From<Vec<&str>> for EventSpec {
    fn from(events: Vec<&str>) -> Self {
        EventSpec::Many(events.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for EventSpec {
    fn from(events: &[&str]) -> Self {
        EventSpec::Many(events.iter().map(|e| e.to_string()).collect())
    }
}

impl<const N: usize> From<[&str; N]> for EventSpec {
    fn from(events: [&str; N]) -> Self {
        EventSpec::Many(events.iter().map(|e| e.to_string()).collect())
    }
}

/// In-process publish/subscribe hub
pub struct Communicator<T, C = SystemClock> {
    registry: Arc<RwLock<ListenerRegistry<T>>>,
    dispatcher: Dispatcher<T, C>,
    defaults: LogQuery,
}

impl<T> Communicator<T, SystemClock> {
    /// Create a communicator, optionally starting in logging mode
    pub fn new(logging: bool) -> Self {
        Self::with_clock(logging, SystemClock)
    }

    pub fn from_config(config: &CommsConfig) -> Self {
        let mut comms = Self::new(config.logging);
        comms.defaults = config.default_query();
        comms
    }
}

impl<T, C: Clock> Communicator<T, C> {
    /// Create a communicator whose log timestamps come from `clock`
    pub fn with_clock(logging: bool, clock: C) -> Self {
        let registry = Arc::new(RwLock::new(ListenerRegistry::new()));
        let dispatcher = Dispatcher::new(
            Arc::clone(&registry),
            DispatchMode::from_logging(logging),
            clock,
        );
        Self {
            registry,
            dispatcher,
            defaults: LogQuery::default(),
        }
    }

    pub fn enable_logging(&self) {
        self.dispatcher.set_mode(DispatchMode::Logging);
    }

    pub fn disable_logging(&self) {
        self.dispatcher.set_mode(DispatchMode::Silent);
    }

    pub fn mode(&self) -> DispatchMode {
        self.dispatcher.mode()
    }

    pub fn is_logging(&self) -> bool {
        self.mode().is_logging()
    }

    /// Register `listener` under `id` for one event or a list of events
    ///
    /// Fails with [`CommsError::InvalidArgument`] for a blank event, an empty
    /// event list or a blank `id`. Each event in a list is registered on its
    /// own: a duplicate part-way through returns
    /// [`CommsError::DuplicateListener`] and keeps the registrations made
    /// before it.
    pub fn add_listener<E, F>(
        &self,
        events: E,
        id: &str,
        listener: F,
        replace: bool,
    ) -> Result<(), CommsError>
    where
        E: Into<EventSpec>,
        F: Fn(&T) -> Result<(), ListenerError> + Send + Sync + 'static,
    {
        let events = events.into();
        events.validate()?;
        if id.trim().is_empty() {
            return Err(CommsError::InvalidArgument(
                "could not add listener because `id` was empty".to_string(),
            ));
        }

        let listener: Listener<T> = Arc::new(listener);
        let mut registry = self.registry.write().unwrap_or_else(|e| e.into_inner());
        for event in events.names() {
            registry.add(event, id, Arc::clone(&listener), replace)?;
        }
        Ok(())
    }

    /// Remove the listener registered under (event, id)
    pub fn remove_listener(&self, event: &str, id: &str) -> bool {
        self.registry
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove(event, id)
    }

    /// Remove `id`'s listener from every event; returns how many events were affected
    pub fn remove_listeners_by_id(&self, id: &str) -> usize {
        self.registry
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .remove_all_for_id(id)
    }

    pub fn has_listener(&self, event: &str, id: &str) -> bool {
        self.registry
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .has_listener(event, id)
    }

    /// Broadcast `data` to every listener of `event`
    ///
    /// `source` labels the dispatching component in diagnostics.
    pub fn dispatch(&self, event: &str, data: T, source: &str) -> Result<(), CommsError>
    where
        T: fmt::Debug,
    {
        self.dispatcher.dispatch(event, data, source).map(|_| ())
    }

    /// Logged dispatches matching `query`
    pub fn get_logs(&self, query: &LogQuery) -> Vec<LogEntry<T>>
    where
        T: Clone,
    {
        self.dispatcher.logs(query)
    }

    /// The query configured as default for this communicator
    pub fn default_query(&self) -> LogQuery {
        self.defaults.clone()
    }

    pub fn clear_logs(&self) {
        self.dispatcher.clear_logs();
    }

    pub fn log_len(&self) -> usize {
        self.dispatcher.log_len()
    }
}

impl<T> Default for Communicator<T, SystemClock> {
    fn default() -> Self {
        Self::new(false)
    }
}

impl<T, C: Clone> Clone for Communicator<T, C> {
    fn clone(&self) -> Self {
        Self {
            registry: Arc::clone(&self.registry),
            dispatcher: self.dispatcher.clone(),
            defaults: self.defaults.clone(),
        }
    }
}

impl<T, C: Clock> fmt::Debug for Communicator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Communicator")
            .field("mode", &self.mode())
            .field(
                "registry",
                &*self.registry.read().unwrap_or_else(|e| e.into_inner()),
            )
            .field("log_len", &self.log_len())
            .finish()
    }
}

#[cfg(test)]
#[path = "communicator_tests.rs"]
mod tests;
