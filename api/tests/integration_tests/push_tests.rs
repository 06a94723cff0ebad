//! Integration tests for the push channel fan-out.
//!
//! The broadcast layer is exercised in-process: tests subscribe through the
//! app state, drive writes over HTTP and ticks via `api::tick_once`, and
//! assert on the messages every open subscriber observes.

use axum::http::StatusCode;
use serde_json::json;
use shared::models::PushMessage;

use super::common::{login, post_json_with_token, test_app};

#[tokio::test]
async fn test_create_broadcasts_new_stream() {
    let (app, state) = test_app();
    let token = login(app.clone()).await;
    let mut rx = state.broadcaster().subscribe();

    let (status, _) = post_json_with_token(
        app,
        "/api/videos",
        json!({"title": "Launch Event", "streamKey": "stream_launch"}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    match rx.recv().await.unwrap() {
        PushMessage::NewStream { video } => {
            assert_eq!(video.title, "Launch Event");
            assert_eq!(video.viewers, 0);
        }
        other => panic!("expected NEW_STREAM, got {other:?}"),
    }
}

#[tokio::test]
async fn test_tick_broadcasts_viewer_update_to_all_subscribers() {
    let (app, state) = test_app();
    let token = login(app.clone()).await;

    post_json_with_token(
        app,
        "/api/videos",
        json!({"title": "Tick Target", "streamKey": "stream_tick"}),
        Some(&token),
    )
    .await;

    let mut first = state.broadcaster().subscribe();
    let mut second = state.broadcaster().subscribe();

    api::tick_once(&state);

    for rx in [&mut first, &mut second] {
        match rx.recv().await.unwrap() {
            PushMessage::ViewerUpdate { videos } => {
                assert_eq!(videos.len(), 1);
                assert!(videos[0].peak_viewers >= videos[0].viewers);
            }
            other => panic!("expected VIEWER_UPDATE, got {other:?}"),
        }
    }
}

#[tokio::test]
async fn test_broadcasts_with_no_subscribers_are_dropped() {
    let (app, state) = test_app();
    let token = login(app.clone()).await;

    // No subscriber exists; the create and the tick must both succeed anyway
    let (status, _) = post_json_with_token(
        app,
        "/api/videos",
        json!({"title": "Unheard Stream", "streamKey": "stream_unheard"}),
        Some(&token),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    api::tick_once(&state);
    assert_eq!(state.broadcaster().receiver_count(), 0);
}

#[tokio::test]
async fn test_late_subscriber_misses_earlier_messages() {
    let (app, state) = test_app();
    let token = login(app.clone()).await;

    post_json_with_token(
        app,
        "/api/videos",
        json!({"title": "Early Stream", "streamKey": "stream_early"}),
        Some(&token),
    )
    .await;

    // Subscribing after the create sees only subsequent messages
    let mut rx = state.broadcaster().subscribe();
    api::tick_once(&state);

    match rx.recv().await.unwrap() {
        PushMessage::ViewerUpdate { .. } => {}
        other => panic!("expected VIEWER_UPDATE, got {other:?}"),
    }
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn test_push_messages_serialize_with_wire_tags() {
    let (app, state) = test_app();
    let token = login(app.clone()).await;
    let mut rx = state.broadcaster().subscribe();

    post_json_with_token(
        app,
        "/api/videos",
        json!({"title": "Wire Check", "streamKey": "stream_wire"}),
        Some(&token),
    )
    .await;

    let message = rx.recv().await.unwrap();
    let wire = serde_json::to_value(&message).unwrap();

    assert_eq!(wire["type"], "NEW_STREAM");
    assert_eq!(wire["video"]["title"], "Wire Check");
    assert_eq!(wire["video"]["streamKey"], "stream_wire");
}
