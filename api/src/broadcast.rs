//! Broadcast fan-out for the push channel.
//!
//! Maintains the set of currently subscribed WebSocket connections through a
//! `tokio::sync::broadcast` channel. Delivery is fire-and-forget: sends with
//! no subscribers are dropped, and a subscriber that falls behind the channel
//! capacity simply misses messages. There is no buffering beyond the channel
//! itself, no retry, and no backpressure.

use shared::models::PushMessage;
use tokio::sync::broadcast;

/// Default channel capacity before slow subscribers start missing messages.
const DEFAULT_CAPACITY: usize = 64;

/// Fan-out handle shared by the tick task and the route handlers.
#[derive(Debug, Clone)]
pub struct Broadcaster {
    tx: broadcast::Sender<PushMessage>,
}

impl Broadcaster {
    /// Creates a broadcaster with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a broadcaster with the given channel capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Registers a new subscriber.
    ///
    /// The receiver only observes messages sent after this call; the initial
    /// snapshot is the WebSocket handler's responsibility.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<PushMessage> {
        self.tx.subscribe()
    }

    /// Pushes a message to every open subscriber, returning how many
    /// received it. A send with no subscribers is not an error.
    pub fn send(&self, message: PushMessage) -> usize {
        self.tx.send(message).unwrap_or(0)
    }

    /// Returns the number of currently open subscriber channels.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Broadcaster {
    fn default() -> Self {
        Self::new()
    }
}
