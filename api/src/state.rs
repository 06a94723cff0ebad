//! Application state module.
//!
//! Defines the shared application state that is passed to route handlers.
//! The store is the single owner of stream records; nothing here is global
//! or durable, and all of it resets on restart.

use crate::auth::AuthKeys;
use crate::broadcast::Broadcaster;
use crate::config::Config;
use shared::store::{InMemoryEventStore, InMemoryStreamStore, SnapshotCache, StreamStore};
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The canonical stream store.
    store: Arc<dyn StreamStore>,
    /// TTL memo in front of the list-all read.
    cache: Arc<SnapshotCache>,
    /// Push channel fan-out.
    broadcaster: Broadcaster,
    /// Token signing and verification keys.
    auth_keys: Arc<AuthKeys>,
    /// Viewer event log behind the analytics surface.
    events: Arc<InMemoryEventStore>,
    /// Simulated database latency for list-all cache misses.
    list_delay: Duration,
}

impl AppState {
    /// Creates a new application state around the given store.
    pub fn new(store: Arc<dyn StreamStore>, config: &Config) -> Self {
        Self {
            store,
            cache: Arc::new(SnapshotCache::with_ttl(config.cache_ttl)),
            broadcaster: Broadcaster::new(),
            auth_keys: Arc::new(AuthKeys::from_secret(&config.jwt_secret)),
            events: Arc::new(InMemoryEventStore::new()),
            list_delay: config.list_delay,
        }
    }

    /// Creates application state with an empty in-memory store and default
    /// configuration.
    ///
    /// This is useful for tests.
    #[must_use]
    pub fn with_in_memory_store() -> Self {
        Self::new(Arc::new(InMemoryStreamStore::new()), &Config::default())
    }

    /// Creates application state seeded with the three demo streams.
    #[must_use]
    pub fn with_demo_data(config: &Config) -> Self {
        Self::new(Arc::new(InMemoryStreamStore::with_demo_data()), config)
    }

    /// Returns a reference to the stream store.
    #[must_use]
    pub fn store(&self) -> &dyn StreamStore {
        self.store.as_ref()
    }

    /// Returns a reference to the snapshot cache.
    #[must_use]
    pub fn cache(&self) -> &SnapshotCache {
        self.cache.as_ref()
    }

    /// Returns the push channel broadcaster.
    #[must_use]
    pub fn broadcaster(&self) -> &Broadcaster {
        &self.broadcaster
    }

    /// Returns the token keys.
    #[must_use]
    pub fn auth_keys(&self) -> &AuthKeys {
        self.auth_keys.as_ref()
    }

    /// Returns the viewer event store.
    #[must_use]
    pub fn events(&self) -> &InMemoryEventStore {
        self.events.as_ref()
    }

    /// Returns the artificial list-all delay.
    #[must_use]
    pub fn list_delay(&self) -> Duration {
        self.list_delay
    }
}
