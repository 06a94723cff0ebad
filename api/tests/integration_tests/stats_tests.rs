//! Integration tests for the aggregate stats endpoint.
//!
//! Tests cover:
//! - Freshly computed aggregates over the current records
//! - The arithmetic-mean retention property
//! - Stats bypassing the list-all snapshot cache

use axum::http::StatusCode;
use serde_json::json;

use super::common::{get, login, post_json_with_token, test_app};

#[tokio::test]
async fn test_stats_on_empty_store() {
    let (app, _state) = test_app();

    let (status, stats) = get(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        stats,
        json!({
            "totalViewers": 0,
            "activeStreams": 0,
            "totalWatchTime": 0,
            "avgRetention": 0.0
        })
    );
}

#[tokio::test]
async fn test_stats_track_creates() {
    let (app, _state) = test_app();
    let token = login(app.clone()).await;

    for key in ["stream_a", "stream_b"] {
        post_json_with_token(
            app.clone(),
            "/api/videos",
            json!({"title": key, "streamKey": key}),
            Some(&token),
        )
        .await;
    }

    let (status, stats) = get(app, "/api/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["activeStreams"], 2);
    assert_eq!(stats["totalViewers"], 0);
    assert_eq!(stats["totalWatchTime"], 0);
}

#[tokio::test]
async fn test_avg_retention_is_arithmetic_mean() {
    // Demo data carries known retentions: 78, 85, and 72
    let state = api::AppState::with_demo_data(&api::Config::default());
    let app = api::create_router(state.clone());

    let (status, stats) = get(app.clone(), "/api/stats").await;
    assert_eq!(status, StatusCode::OK);

    let expected = (78.0 + 85.0 + 72.0) / 3.0;
    let avg = stats["avgRetention"].as_f64().unwrap();
    assert!((avg - expected).abs() < 1e-9);

    // Ticks mutate viewers and watch time but never retention
    api::tick_once(&state);
    let (_, after_tick) = get(app, "/api/stats").await;
    let avg = after_tick["avgRetention"].as_f64().unwrap();
    assert!((avg - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_stats_are_recomputed_not_cached() {
    let (app, state) = test_app();

    // Warm the list-all cache, then mutate the store directly
    let (_, _) = get(app.clone(), "/api/videos").await;
    state.store().create("Fresh Stream", "key_fresh").unwrap();

    // Stats see the new record even though the list cache is stale
    let (status, stats) = get(app, "/api/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["activeStreams"], 1);
}
