// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use chrono::NaiveDate;

use crate::storage::Storage;
use crate::{Event, EventDraft, EventId};

/// The storage key holding the persisted snapshot.
pub const EVENTS_KEY: &str = "EVENTS";

/// Errors of the event store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to write events to storage: {0}")]
    Storage(#[from] io::Error),

    #[error("failed to serialize events: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The authoritative list of events of a session.
///
/// Every mutation writes the full snapshot to the storage before returning.
/// Nothing else is supposed to touch the storage entry.
#[derive(Debug)]
pub struct EventStore<S: Storage> {
    events: Vec<Event>,
    storage: S,
}

impl<S: Storage> EventStore<S> {
    /// Rehydrates the store from the storage.
    ///
    /// A missing entry gives an empty store, and so does an unreadable or
    /// malformed one.
    pub fn load(storage: S) -> Self {
        let events = match storage.get(EVENTS_KEY) {
            Ok(Some(json)) => match serde_json::from_str::<Vec<Event>>(&json) {
                Ok(events) => {
                    tracing::debug!(count = events.len(), "loaded events from storage");
                    dedup_ids(events)
                }
                Err(e) => {
                    tracing::warn!(err = %e, "malformed events in storage, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(err = %e, "failed to read events from storage, starting empty");
                Vec::new()
            }
        };

        Self { events, storage }
    }

    /// The current snapshot.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &EventId) -> Option<&Event> {
        self.events.iter().find(|e| &e.id == id)
    }

    /// Events scheduled on the given day, in snapshot order.
    pub fn events_on(&self, day: NaiveDate) -> Vec<&Event> {
        crate::day::events_on(&self.events, day)
    }

    /// Appends a new event with a fresh id.
    pub fn add(&mut self, draft: EventDraft) -> Result<EventId, StoreError> {
        let id = loop {
            let id = EventId::generate();
            if self.get(&id).is_none() {
                break id;
            }
        };

        tracing::debug!(%id, name = %draft.name, "adding event");
        self.events.push(Event::new(id.clone(), draft));
        self.persist()?;
        Ok(id)
    }

    /// Replaces the event with the given id, keeping its position.
    ///
    /// Returns `false` without touching anything if there is no such event.
    pub fn update(&mut self, id: &EventId, draft: EventDraft) -> Result<bool, StoreError> {
        let Some(event) = self.events.iter_mut().find(|e| &e.id == id) else {
            tracing::debug!(%id, "event to update not found");
            return Ok(false);
        };

        tracing::debug!(%id, "updating event");
        *event = Event::new(id.clone(), draft);
        self.persist()?;
        Ok(true)
    }

    /// Removes the event with the given id.
    ///
    /// Returns `false` without touching anything if there is no such event.
    pub fn delete(&mut self, id: &EventId) -> Result<bool, StoreError> {
        let Some(index) = self.events.iter().position(|e| &e.id == id) else {
            tracing::debug!(%id, "event to delete not found");
            return Ok(false);
        };

        tracing::debug!(%id, "deleting event");
        self.events.remove(index);
        self.persist()?;
        Ok(true)
    }

    fn persist(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.events)?;
        self.storage.set(EVENTS_KEY, &json)?;
        Ok(())
    }
}

/// Drops later duplicates of an id, the first occurrence wins.
fn dedup_ids(events: Vec<Event>) -> Vec<Event> {
    let mut seen = std::collections::HashSet::new();
    let before = events.len();
    let events: Vec<_> = events
        .into_iter()
        .filter(|e| seen.insert(e.id.clone()))
        .collect();

    if events.len() != before {
        tracing::warn!(dropped = before - events.len(), "duplicate event ids in storage");
    }
    events
}
