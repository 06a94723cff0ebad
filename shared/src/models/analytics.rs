//! Analytics engine types.
//!
//! The analytics surface has its own wire format: snake_case field names,
//! unlike the camelCase stream API. Viewer events are accepted as-is with no
//! field validation; the `action` field is a free string (join, leave,
//! interact by convention).

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single viewer interaction with a stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerEvent {
    /// Id of the stream the event belongs to.
    pub video_id: u64,
    /// Opaque client-supplied user identifier.
    pub user_id: String,
    /// Event kind: join, leave, or interact.
    pub action: String,
    /// When the event happened, client-reported.
    pub timestamp: DateTime<Utc>,
}

/// Per-video analytics report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoAnalytics {
    /// Id of the analyzed stream.
    pub video_id: u64,
    /// Display title, derived from the id.
    pub title: String,
    /// Average watch time in seconds.
    pub avg_watch_time: f64,
    /// Retention rate in percent.
    pub retention_rate: f64,
    /// Engagement score.
    pub engagement_score: f64,
    /// Viewer counts per age bracket.
    pub viewer_demographics: BTreeMap<String, u64>,
    /// Hour of day with the most events, formatted "H:00", or "N/A".
    pub peak_hour: String,
}

impl VideoAnalytics {
    /// Returns the zeroed report served when a video has no tracked events.
    #[must_use]
    pub fn empty(video_id: u64) -> Self {
        Self {
            video_id,
            title: format!("Video {video_id}"),
            avg_watch_time: 0.0,
            retention_rate: 0.0,
            engagement_score: 0.0,
            viewer_demographics: BTreeMap::new(),
            peak_hour: "N/A".to_string(),
        }
    }
}

/// Returns the fixed demo demographics breakdown.
#[must_use]
pub fn demo_demographics() -> BTreeMap<String, u64> {
    BTreeMap::from([
        ("age_18_24".to_string(), 25),
        ("age_25_34".to_string(), 40),
        ("age_35_44".to_string(), 20),
        ("age_45_plus".to_string(), 15),
    ])
}

/// Returns the hour of day with the most events, or `None` when the slice is
/// empty. Ties resolve to the earliest hour.
#[must_use]
pub fn peak_event_hour(events: &[ViewerEvent]) -> Option<u32> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for event in events {
        *counts.entry(event.timestamp.hour()).or_default() += 1;
    }

    let max = counts.values().copied().max()?;
    counts
        .iter()
        .find(|(_, count)| **count == max)
        .map(|(hour, _)| *hour)
}
