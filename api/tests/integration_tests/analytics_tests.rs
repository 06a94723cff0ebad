//! Integration tests for the analytics surface.

use super::common;
use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_analytics_for_untracked_video_is_zeroed() {
    let (app, _state) = common::test_app();

    let (status, report) = common::get(app, "/api/analytics/video/42").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        report,
        json!({
            "video_id": 42,
            "title": "Video 42",
            "avg_watch_time": 0.0,
            "retention_rate": 0.0,
            "engagement_score": 0.0,
            "viewer_demographics": {},
            "peak_hour": "N/A",
        })
    );
}

#[tokio::test]
async fn test_tracked_events_feed_the_report() {
    let (app, _state) = common::test_app();

    for (user, timestamp) in [
        ("user_1", "2024-06-01T14:05:00Z"),
        ("user_2", "2024-06-01T14:40:00Z"),
        ("user_3", "2024-06-01T09:10:00Z"),
    ] {
        let (status, saved) = common::post_json(
            app.clone(),
            "/api/events/track",
            json!({
                "video_id": 1,
                "user_id": user,
                "action": "join",
                "timestamp": timestamp,
            }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(saved["status"], "event saved");
    }

    let (status, report) = common::get(app, "/api/analytics/video/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(report["peak_hour"], "14:00");
    assert_eq!(report["viewer_demographics"]["age_18_24"], 25);
    assert!(report["avg_watch_time"].as_f64().unwrap() >= 120.0);
    assert!(report["retention_rate"].as_f64().unwrap() >= 60.0);
    assert!(report["engagement_score"].as_f64().unwrap() >= 70.0);
}

#[tokio::test]
async fn test_event_ids_count_across_videos() {
    let (app, state) = common::test_app();

    let event = |video_id: u64| {
        json!({
            "video_id": video_id,
            "user_id": "user_1",
            "action": "interact",
            "timestamp": "2024-06-01T20:00:00Z",
        })
    };

    let (_, first) = common::post_json(app.clone(), "/api/events/track", event(1)).await;
    let (_, second) = common::post_json(app.clone(), "/api/events/track", event(2)).await;

    assert_eq!(first["event_id"], 1);
    assert_eq!(second["event_id"], 2);
    assert_eq!(state.events().count().unwrap(), 2);
}

#[tokio::test]
async fn test_batch_processing_completes() {
    let (app, _state) = common::test_app();

    let (status, result) = common::post_json(app, "/api/analytics/batch/process", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(result["status"], "completed");
    assert_eq!(result["videos_processed"], 100);
    assert!(result["timestamp"].is_string());
}
