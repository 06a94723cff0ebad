//! Storage for stream metrics.
//!
//! This module provides the `StreamStore` trait for the canonical in-memory
//! stream collection, the `SnapshotCache` TTL memo that fronts the list-all
//! read, and the append-only viewer event log behind the analytics surface.

pub mod cache;
pub mod event_store;
pub mod stream_store;

pub use cache::{CacheError, SnapshotCache};
pub use event_store::{EventStoreError, InMemoryEventStore};
pub use stream_store::{InMemoryStreamStore, StreamStore, StreamStoreError};
