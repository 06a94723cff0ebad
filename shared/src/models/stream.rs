//! Stream record data model.
//!
//! Defines the core `StreamRecord` structure for one tracked live broadcast,
//! plus the aggregate `DashboardStats` and the display-only `StreamStatus`
//! classification.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Display classification of a stream's retention percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StreamStatus {
    /// Retention above 80%.
    Excellent,
    /// Retention above 70%, up to 80%.
    Good,
    /// Retention at or below 70%.
    Average,
}

impl StreamStatus {
    /// Classifies a retention percentage into a display status.
    #[must_use]
    pub fn from_retention(retention: f64) -> Self {
        if retention > 80.0 {
            Self::Excellent
        } else if retention > 70.0 {
            Self::Good
        } else {
            Self::Average
        }
    }
}

impl std::fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Excellent => write!(f, "EXCELLENT"),
            Self::Good => write!(f, "GOOD"),
            Self::Average => write!(f, "AVERAGE"),
        }
    }
}

/// One tracked live broadcast's metrics and identity.
///
/// Records are created with zeroed metrics and mutated in place by the
/// periodic tick. Two invariants hold across every mutation:
/// `peak_viewers >= viewers`, and `watch_time` never decreases.
///
/// # Example
///
/// ```
/// use shared::models::StreamRecord;
///
/// let record = StreamRecord::new(1, "Tech Talk 2024", "stream_tech_2024");
///
/// assert_eq!(record.id, 1);
/// assert_eq!(record.peak_viewers, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRecord {
    /// Unique identifier, assigned sequentially by the store.
    pub id: u64,

    /// Human-readable stream title.
    pub title: String,

    /// Current concurrent viewer count.
    pub viewers: u64,

    /// Running maximum of `viewers`.
    pub peak_viewers: u64,

    /// Cumulative watch time in minutes.
    pub watch_time: u64,

    /// Viewer retention percentage (0-100).
    pub retention: f64,

    /// Timestamp the stream started.
    pub started_at: DateTime<Utc>,

    /// Ingest key identifying the stream source.
    pub stream_key: String,
}

impl StreamRecord {
    /// Creates a new stream record with zeroed metrics and the current
    /// timestamp.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, stream_key: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            viewers: 0,
            peak_viewers: 0,
            watch_time: 0,
            retention: 0.0,
            started_at: Utc::now(),
            stream_key: stream_key.into(),
        }
    }

    /// Returns the display status derived from this record's retention.
    #[must_use]
    pub fn status(&self) -> StreamStatus {
        StreamStatus::from_retention(self.retention)
    }
}

/// Aggregate statistics across all tracked streams.
///
/// Always computed fresh from the current records; never served from the
/// snapshot cache.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Sum of current viewers across all streams.
    pub total_viewers: u64,

    /// Number of tracked streams.
    pub active_streams: usize,

    /// Sum of cumulative watch time across all streams, in minutes.
    pub total_watch_time: u64,

    /// Arithmetic mean of retention across all streams, 0 when empty.
    pub avg_retention: f64,
}

impl DashboardStats {
    /// Computes aggregate statistics from the given records.
    #[must_use]
    pub fn from_records(records: &[StreamRecord]) -> Self {
        let total_viewers = records.iter().map(|r| r.viewers).sum();
        let total_watch_time = records.iter().map(|r| r.watch_time).sum();
        let avg_retention = if records.is_empty() {
            0.0
        } else {
            #[allow(clippy::cast_precision_loss)]
            let count = records.len() as f64;
            records.iter().map(|r| r.retention).sum::<f64>() / count
        };

        Self {
            total_viewers,
            active_streams: records.len(),
            total_watch_time,
            avg_retention,
        }
    }
}
