// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener registry keyed by canonical event name and listener ID

use crate::error::{CommsError, ListenerError};
use crate::normalise::{normalise_event, normalise_listener_id};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with a shared reference to the dispatched payload
pub type Listener<T> = Arc<dyn Fn(&T) -> Result<(), ListenerError> + Send + Sync>;

/// One listener registered under an event
pub struct Registration<T> {
    pub id: String,
    pub listener: Listener<T>,
}

impl<T> Clone for Registration<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            listener: Arc::clone(&self.listener),
        }
    }
}

impl<T> fmt::Debug for Registration<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration").field("id", &self.id).finish()
    }
}

/// Canonical event name -> listeners in registration order
///
/// At most one listener exists per (event, id). Events left without
/// listeners are pruned.
pub struct ListenerRegistry<T> {
    events: BTreeMap<String, Vec<Registration<T>>>,
}

impl<T> ListenerRegistry<T> {
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
        }
    }

    /// Register `listener` for (event, id)
    ///
    /// Fails with [`CommsError::DuplicateListener`] if the pair is taken and
    /// `replace` is false; the registry is unchanged in that case. A
    /// replaced listener keeps its position in the invocation order.
    pub fn add(
        &mut self,
        event: &str,
        id: &str,
        listener: Listener<T>,
        replace: bool,
    ) -> Result<(), CommsError> {
        let event = normalise_event(event);
        let id = normalise_listener_id(id);

        if let Some(existing) = self
            .events
            .get_mut(&event)
            .and_then(|listeners| listeners.iter_mut().find(|r| r.id == id))
        {
            if !replace {
                return Err(CommsError::DuplicateListener { event, id });
            }
            existing.listener = listener;
            return Ok(());
        }

        self.events
            .entry(event)
            .or_default()
            .push(Registration { id, listener });
        Ok(())
    }

    /// Remove the listener for (event, id); returns whether one was removed
    pub fn remove(&mut self, event: &str, id: &str) -> bool {
        let event = normalise_event(event);
        let id = normalise_listener_id(id);

        let Some(listeners) = self.events.get_mut(&event) else {
            return false;
        };
        let Some(index) = listeners.iter().position(|r| r.id == id) else {
            return false;
        };

        listeners.remove(index);
        if listeners.is_empty() {
            self.events.remove(&event);
        }
        true
    }

    /// Remove `id` from every event; returns how many events lost a listener
    pub fn remove_all_for_id(&mut self, id: &str) -> usize {
        let id = normalise_listener_id(id);
        let mut removed = 0;

        self.events.retain(|_, listeners| {
            let before = listeners.len();
            listeners.retain(|r| r.id != id);
            if listeners.len() < before {
                removed += 1;
            }
            !listeners.is_empty()
        });

        removed
    }

    pub fn has_listener(&self, event: &str, id: &str) -> bool {
        let event = normalise_event(event);
        let id = normalise_listener_id(id);

        self.events
            .get(&event)
            .is_some_and(|listeners| listeners.iter().any(|r| r.id == id))
    }

    /// Snapshot of the listeners for `event`, in invocation order
    pub fn listeners_for(&self, event: &str) -> Vec<Registration<T>> {
        self.events
            .get(&normalise_event(event))
            .cloned()
            .unwrap_or_default()
    }

    /// Canonical names of events with at least one listener
    pub fn events(&self) -> Vec<String> {
        self.events.keys().cloned().collect()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    /// Total (event, id) registrations
    pub fn listener_count(&self) -> usize {
        self.events.values().map(Vec::len).sum()
    }
}

impl<T> Default for ListenerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ListenerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.events
                    .iter()
                    .map(|(event, listeners)| (event, listeners.iter().map(|r| &r.id).collect::<Vec<_>>())),
            )
            .finish()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
