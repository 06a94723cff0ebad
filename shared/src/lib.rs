//! StreamPulse Shared Library
//!
//! This crate contains shared types, models, and utilities used across
//! the StreamPulse live-streaming analytics demo.
//!
//! # Modules
//!
//! - [`models`] - Data models for stream records, dashboard stats, and push messages
//! - [`store`] - The in-memory metrics store and the list-all snapshot cache
//! - [`sim`] - The viewer random-walk shared by the backend tick and the CLI dashboard
//!
//! # Example
//!
//! ```
//! use shared::models::{StreamRecord, StreamStatus};
//!
//! let record = StreamRecord::new(1, "Tech Talk 2024", "stream_tech_2024");
//!
//! assert_eq!(record.viewers, 0);
//! assert_eq!(StreamStatus::from_retention(record.retention), StreamStatus::Average);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod models;
pub mod sim;
pub mod store;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde;
pub use serde_json;
