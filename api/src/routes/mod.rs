//! API route definitions.
//!
//! This module organizes all HTTP and WebSocket routes for the StreamPulse
//! API server.

mod analytics;
mod auth;
mod health;
mod stats;
mod videos;
mod ws;

pub use analytics::analytics_routes;
pub use auth::auth_routes;
pub use health::health_routes;
pub use stats::stats_routes;
pub use videos::video_routes;
pub use ws::ws_routes;

use serde::{Deserialize, Serialize};

/// JSON error body shared by every failing endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Human-readable error message.
    pub error: String,
}

impl ErrorBody {
    /// Creates an error body with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
