//! Analytics engine endpoints.
//!
//! Per-video reports are computed on demand from the tracked viewer events:
//! the peak hour comes from the event log, while the watch-time, retention,
//! and engagement figures are demo samples drawn fresh on every call. Event
//! tracking appends to the log and kicks off a short background task; batch
//! processing is a timed placeholder.

use crate::routes::ErrorBody;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use rand::Rng;
use shared::chrono::Utc;
use shared::models::{demo_demographics, peak_event_hour, VideoAnalytics, ViewerEvent};
use shared::sim;
use std::time::Duration;

/// Number of videos the batch job pretends to process.
const BATCH_VIDEO_COUNT: u64 = 100;

/// Simulated per-video processing time of the batch job.
const BATCH_STEP: Duration = Duration::from_millis(10);

/// Simulated background processing time per tracked event.
const EVENT_PROCESSING_TIME: Duration = Duration::from_millis(100);

/// Creates the analytics routes.
pub fn analytics_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/analytics/video/{id}", get(get_video_analytics))
        .route("/api/analytics/batch/process", post(run_batch_analytics))
        .route("/api/events/track", post(track_viewer_event))
        .with_state(state)
}

/// Builds a report for one video from its recorded events.
///
/// Returns the zeroed report when no events exist; otherwise samples the
/// demo metrics and derives the peak hour from the event timestamps.
fn compute_report(rng: &mut impl Rng, video_id: u64, events: &[ViewerEvent]) -> VideoAnalytics {
    let Some(peak) = peak_event_hour(events) else {
        return VideoAnalytics::empty(video_id);
    };

    VideoAnalytics {
        video_id,
        title: format!("Video {video_id}"),
        avg_watch_time: sim::sample_avg_watch_time(rng),
        retention_rate: sim::sample_retention_rate(rng),
        engagement_score: sim::sample_engagement_score(rng),
        viewer_demographics: demo_demographics(),
        peak_hour: format!("{peak}:00"),
    }
}

async fn get_video_analytics(
    State(state): State<AppState>,
    Path(video_id): Path<u64>,
) -> Result<Json<VideoAnalytics>, (StatusCode, Json<ErrorBody>)> {
    let events = state.events().events_for(video_id).map_err(internal_error)?;

    Ok(Json(compute_report(
        &mut rand::thread_rng(),
        video_id,
        &events,
    )))
}

async fn track_viewer_event(
    State(state): State<AppState>,
    Json(event): Json<ViewerEvent>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorBody>)> {
    let event_id = state.events().track(event.clone()).map_err(internal_error)?;

    tokio::spawn(process_event(event));

    Ok(Json(serde_json::json!({
        "status": "event saved",
        "event_id": event_id,
    })))
}

async fn process_event(event: ViewerEvent) {
    tracing::debug!(
        video_id = event.video_id,
        action = %event.action,
        "Processing viewer event"
    );
    tokio::time::sleep(EVENT_PROCESSING_TIME).await;
    tracing::debug!(video_id = event.video_id, "Event processed");
}

async fn run_batch_analytics() -> Json<serde_json::Value> {
    tracing::info!("Starting batch analytics job");

    for _ in 0..BATCH_VIDEO_COUNT {
        tokio::time::sleep(BATCH_STEP).await;
    }

    tracing::info!(videos = BATCH_VIDEO_COUNT, "Batch analytics completed");

    Json(serde_json::json!({
        "status": "completed",
        "videos_processed": BATCH_VIDEO_COUNT,
        "timestamp": Utc::now(),
    }))
}

fn internal_error(
    error: shared::store::EventStoreError,
) -> (StatusCode, Json<ErrorBody>) {
    tracing::error!(%error, "Event store operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody::new(error.to_string())),
    )
}
