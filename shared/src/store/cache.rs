//! Snapshot cache for the list-all read.
//!
//! A single-entry TTL memo: the full stream list plus its capture instant.
//! Reads within the TTL window return the memoized snapshot verbatim; any
//! store-mutating write (create, tick) invalidates the entry eagerly. The
//! cache is eventually consistent with the store and never authoritative.

use crate::models::StreamRecord;
use std::sync::RwLock;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Default time-to-live for the cached snapshot (5 minutes).
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Errors that can occur during cache operations.
#[derive(Debug, Error)]
pub enum CacheError {
    /// Failed to acquire lock on the cache.
    #[error("Failed to acquire lock on snapshot cache")]
    LockError,
}

struct Entry {
    snapshot: Vec<StreamRecord>,
    captured_at: Instant,
}

/// Single-key TTL memo in front of the list-all read.
pub struct SnapshotCache {
    entry: RwLock<Option<Entry>>,
    ttl: Duration,
}

impl SnapshotCache {
    /// Creates an empty cache with the default 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an empty cache with the given TTL.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entry: RwLock::new(None),
            ttl,
        }
    }

    /// Returns the cached snapshot if a non-expired entry exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock cannot be acquired.
    pub fn get(&self) -> Result<Option<Vec<StreamRecord>>, CacheError> {
        let entry = self.entry.read().map_err(|_| CacheError::LockError)?;

        Ok(entry
            .as_ref()
            .filter(|e| e.captured_at.elapsed() < self.ttl)
            .map(|e| e.snapshot.clone()))
    }

    /// Stores a snapshot with the current instant as its capture time.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock cannot be acquired.
    pub fn set(&self, snapshot: Vec<StreamRecord>) -> Result<(), CacheError> {
        let mut entry = self.entry.write().map_err(|_| CacheError::LockError)?;

        *entry = Some(Entry {
            snapshot,
            captured_at: Instant::now(),
        });
        Ok(())
    }

    /// Eagerly drops the cached entry, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the cache lock cannot be acquired.
    pub fn invalidate(&self) -> Result<(), CacheError> {
        let mut entry = self.entry.write().map_err(|_| CacheError::LockError)?;

        if entry.take().is_some() {
            tracing::debug!("Snapshot cache invalidated");
        }
        Ok(())
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}
