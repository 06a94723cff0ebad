//! Stream store trait and in-memory implementation.
//!
//! Provides the `StreamStore` trait for abstracting the canonical stream
//! collection and an `InMemoryStreamStore` implementation. The store is the
//! single owner of stream state; records are appended by `create`, mutated
//! in place by `tick`, and never deleted.

use crate::models::StreamRecord;
use crate::sim;
use rand::Rng;
use std::sync::RwLock;
use thiserror::Error;

/// Errors that can occur during stream store operations.
#[derive(Debug, Error)]
pub enum StreamStoreError {
    /// Failed to acquire lock on the store.
    #[error("Failed to acquire lock on stream store")]
    LockError,
}

/// Trait for stream storage implementations.
///
/// Implementations must be thread-safe (Send + Sync); all mutations go
/// through a single serialized path.
pub trait StreamStore: Send + Sync {
    /// Returns a snapshot of all stream records in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    fn list(&self) -> Result<Vec<StreamRecord>, StreamStoreError>;

    /// Returns the record with the given id, or `None` if it was never
    /// created.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    fn get(&self, id: u64) -> Result<Option<StreamRecord>, StreamStoreError>;

    /// Creates a new stream with zeroed metrics and the next sequential id,
    /// returning the new record.
    ///
    /// No field validation is performed; the title and key are stored as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    fn create(&self, title: &str, stream_key: &str) -> Result<StreamRecord, StreamStoreError>;

    /// Applies one viewer walk step to every record and returns the
    /// post-tick snapshot.
    ///
    /// Viewers move by a bounded random delta clamped to the backend floor,
    /// peak viewers track the running maximum, and watch time grows by a
    /// small random amount. Retention is untouched.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    fn tick(&self) -> Result<Vec<StreamRecord>, StreamStoreError>;

    /// Returns the number of tracked streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    fn count(&self) -> Result<usize, StreamStoreError>;
}

struct Inner {
    streams: Vec<StreamRecord>,
    next_id: u64,
}

/// In-memory stream store implementation.
pub struct InMemoryStreamStore {
    inner: RwLock<Inner>,
}

impl InMemoryStreamStore {
    /// Creates a new empty in-memory stream store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                streams: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Creates a store seeded with the three demo streams the dashboard
    /// ships with.
    #[must_use]
    pub fn with_demo_data() -> Self {
        let demo = |id: u64, title: &str, viewers, peak_viewers, watch_time, retention, key| {
            StreamRecord {
                viewers,
                peak_viewers,
                watch_time,
                retention,
                ..StreamRecord::new(id, title, key)
            }
        };

        Self {
            inner: RwLock::new(Inner {
                streams: vec![
                    demo(1, "Tech Talk 2024", 1234, 2500, 145, 78.0, "stream_tech_2024"),
                    demo(2, "Music Festival Live", 3421, 5600, 320, 85.0, "stream_music_fest"),
                    demo(3, "Gaming Stream", 892, 1200, 89, 72.0, "stream_gaming_01"),
                ],
                next_id: 4,
            }),
        }
    }

    /// Applies one tick using the provided random source.
    ///
    /// The trait's [`StreamStore::tick`] delegates here with a thread-local
    /// RNG; tests pass a seeded `StdRng` to make walks reproducible.
    ///
    /// # Errors
    ///
    /// Returns an error if the store lock cannot be acquired.
    pub fn tick_with_rng(&self, rng: &mut impl Rng) -> Result<Vec<StreamRecord>, StreamStoreError> {
        let mut inner = self.inner.write().map_err(|_| StreamStoreError::LockError)?;

        for stream in &mut inner.streams {
            stream.viewers = sim::step_viewers(rng, stream.viewers, sim::BACKEND_VIEWER_FLOOR);
            stream.peak_viewers = stream.peak_viewers.max(stream.viewers);
            stream.watch_time += sim::watch_time_increment(rng, sim::BACKEND_WATCH_TIME_STEP);
        }

        Ok(inner.streams.clone())
    }
}

impl Default for InMemoryStreamStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamStore for InMemoryStreamStore {
    fn list(&self) -> Result<Vec<StreamRecord>, StreamStoreError> {
        let inner = self.inner.read().map_err(|_| StreamStoreError::LockError)?;
        Ok(inner.streams.clone())
    }

    fn get(&self, id: u64) -> Result<Option<StreamRecord>, StreamStoreError> {
        let inner = self.inner.read().map_err(|_| StreamStoreError::LockError)?;
        Ok(inner.streams.iter().find(|s| s.id == id).cloned())
    }

    fn create(&self, title: &str, stream_key: &str) -> Result<StreamRecord, StreamStoreError> {
        let mut inner = self.inner.write().map_err(|_| StreamStoreError::LockError)?;

        let id = inner.next_id;
        inner.next_id += 1;

        let record = StreamRecord::new(id, title, stream_key);
        inner.streams.push(record.clone());

        Ok(record)
    }

    fn tick(&self) -> Result<Vec<StreamRecord>, StreamStoreError> {
        self.tick_with_rng(&mut rand::thread_rng())
    }

    fn count(&self) -> Result<usize, StreamStoreError> {
        let inner = self.inner.read().map_err(|_| StreamStoreError::LockError)?;
        Ok(inner.streams.len())
    }
}
