//! Local dashboard simulation.
//!
//! The dashboard advances its own copies of the stream list and the summary
//! stats on a local timer, using the shared walk shape with the frontend's
//! parameters. It deliberately does not consume the backend push feed; the
//! two simulations are independent, matching the original dashboard.

use rand::Rng;
use shared::models::{DashboardStats, StreamRecord};
use shared::sim;

/// Static bucket values backing the 24h activity chart placeholder.
pub const ACTIVITY_BUCKETS: [u64; 16] = [
    45, 62, 38, 75, 52, 88, 95, 72, 58, 82, 68, 91, 76, 84, 69, 77,
];

/// Local dashboard state: stream list plus summary cards.
pub struct DashboardSim {
    /// Local copies of the tracked streams.
    pub videos: Vec<StreamRecord>,
    /// Local copy of the summary card values.
    pub stats: DashboardStats,
}

impl DashboardSim {
    /// Creates the simulation seeded with the demo streams and the demo
    /// card values.
    #[must_use]
    pub fn new() -> Self {
        let seed = |id: u64, title: &str, viewers, peak_viewers, watch_time, retention, key| {
            StreamRecord {
                viewers,
                peak_viewers,
                watch_time,
                retention,
                ..StreamRecord::new(id, title, key)
            }
        };

        Self {
            videos: vec![
                seed(1, "Tech Talk 2024", 1234, 2500, 145, 78.0, "stream_tech_2024"),
                seed(2, "Music Festival Live", 3421, 5600, 320, 85.0, "stream_music_fest"),
                seed(3, "Gaming Stream", 892, 1200, 89, 72.0, "stream_gaming_01"),
            ],
            stats: DashboardStats {
                total_viewers: 5547,
                active_streams: 3,
                total_watch_time: 554,
                avg_retention: 78.3,
            },
        }
    }

    /// Advances the simulation by one tick.
    ///
    /// Viewers walk with the frontend floor, per-stream watch time grows by
    /// a small step, the total-viewers card is resampled, and total watch
    /// time accumulates. Peak viewers, retention, and the remaining card
    /// values stay fixed, as they do in the original dashboard.
    pub fn advance(&mut self, rng: &mut impl Rng) {
        for video in &mut self.videos {
            video.viewers = sim::step_viewers(rng, video.viewers, sim::FRONTEND_VIEWER_FLOOR);
            video.watch_time += sim::watch_time_increment(rng, sim::BACKEND_WATCH_TIME_STEP);
        }

        self.stats.total_viewers = sim::resample_total_viewers(rng);
        self.stats.total_watch_time +=
            sim::watch_time_increment(rng, sim::FRONTEND_WATCH_TIME_STEP);
    }
}

impl Default for DashboardSim {
    fn default() -> Self {
        Self::new()
    }
}
