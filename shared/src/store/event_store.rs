//! Viewer event storage.
//!
//! Events are appended by the track endpoint and scanned per video when an
//! analytics report is computed. Like the stream store, nothing here is
//! durable; the log resets on restart.

use crate::models::ViewerEvent;
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur during event store operations.
#[derive(Debug, Error)]
pub enum EventStoreError {
    /// Failed to acquire lock on the store.
    #[error("Failed to acquire lock on event store")]
    LockError,
}

/// Append-only in-memory viewer event log.
#[derive(Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<ViewerEvent>>,
}

impl InMemoryEventStore {
    /// Creates a new empty event store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an event and returns its one-based event id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    pub fn track(&self, event: ViewerEvent) -> Result<usize, EventStoreError> {
        let mut events = self.events.write().map_err(|_| EventStoreError::LockError)?;
        events.push(event);
        Ok(events.len())
    }

    /// Returns all events recorded for the given video, in arrival order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    pub fn events_for(&self, video_id: u64) -> Result<Vec<ViewerEvent>, EventStoreError> {
        let events = self.events.read().map_err(|_| EventStoreError::LockError)?;
        Ok(events
            .iter()
            .filter(|e| e.video_id == video_id)
            .cloned()
            .collect())
    }

    /// Returns the total number of recorded events.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    pub fn count(&self) -> Result<usize, EventStoreError> {
        let events = self.events.read().map_err(|_| EventStoreError::LockError)?;
        Ok(events.len())
    }
}
