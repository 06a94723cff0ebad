//! Data models for the StreamPulse platform.
//!
//! These types define the wire format shared by the REST API, the push
//! channel, and the CLI dashboard. JSON field names are camelCase on the
//! stream API and snake_case on the analytics surface.

pub mod analytics;
pub mod message;
pub mod stream;

pub use analytics::{demo_demographics, peak_event_hour, VideoAnalytics, ViewerEvent};
pub use message::PushMessage;
pub use stream::{DashboardStats, StreamRecord, StreamStatus};
