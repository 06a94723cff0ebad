//! WebSocket connect-path tests.
//!
//! These tests bind the full router to an ephemeral listener, perform a real
//! WebSocket handshake, and assert the frames a subscriber observes.

use api::AppState;
use futures_util::{SinkExt, StreamExt};
use shared::models::PushMessage;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = api::create_router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    addr
}

async fn connect(addr: SocketAddr) -> Socket {
    let (socket, _) = tokio_tungstenite::connect_async(format!("ws://{addr}/ws"))
        .await
        .unwrap();
    socket
}

async fn next_json(socket: &mut Socket) -> serde_json::Value {
    let frame = tokio::time::timeout(Duration::from_secs(5), socket.next())
        .await
        .expect("timed out waiting for frame")
        .expect("connection closed")
        .unwrap();

    match frame {
        Message::Text(text) => serde_json::from_str(&text).unwrap(),
        other => panic!("expected text frame, got {other:?}"),
    }
}

async fn wait_for_subscribers(state: &AppState, count: usize) {
    for _ in 0..500 {
        if state.broadcaster().receiver_count() >= count {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("subscriber never attached to the broadcast channel");
}

#[tokio::test]
async fn test_subscriber_receives_initial_data_first() {
    let state = AppState::with_in_memory_store();
    state
        .store()
        .create("Tech Talk 2024", "stream_tech_2024")
        .unwrap();
    let addr = spawn_server(state.clone()).await;

    let mut socket = connect(addr).await;

    let first = next_json(&mut socket).await;
    assert_eq!(first["type"], "INITIAL_DATA");
    assert_eq!(first["videos"].as_array().unwrap().len(), 1);
    assert_eq!(first["videos"][0]["title"], "Tech Talk 2024");
}

#[tokio::test]
async fn test_tick_pushes_viewer_update_after_snapshot() {
    let state = AppState::with_in_memory_store();
    state
        .store()
        .create("Gaming Stream", "stream_gaming_01")
        .unwrap();
    let addr = spawn_server(state.clone()).await;

    let mut socket = connect(addr).await;
    let first = next_json(&mut socket).await;
    assert_eq!(first["type"], "INITIAL_DATA");

    wait_for_subscribers(&state, 1).await;
    api::tick_once(&state);

    let update = next_json(&mut socket).await;
    assert_eq!(update["type"], "VIEWER_UPDATE");
    assert!(update["videos"][0]["viewers"].as_u64().unwrap() >= 50);
}

#[tokio::test]
async fn test_inbound_text_does_not_break_the_session() {
    let state = AppState::with_in_memory_store();
    let addr = spawn_server(state.clone()).await;

    let mut socket = connect(addr).await;
    let first = next_json(&mut socket).await;
    assert_eq!(first["type"], "INITIAL_DATA");

    socket
        .send(Message::Text("hello there".to_string()))
        .await
        .unwrap();

    wait_for_subscribers(&state, 1).await;
    let video = state.store().create("Late Night Show", "stream_late").unwrap();
    state.broadcaster().send(PushMessage::NewStream { video });

    let pushed = next_json(&mut socket).await;
    assert_eq!(pushed["type"], "NEW_STREAM");
    assert_eq!(pushed["video"]["title"], "Late Night Show");
}

#[tokio::test]
async fn test_closed_subscriber_detaches_from_the_channel() {
    let state = AppState::with_in_memory_store();
    let addr = spawn_server(state.clone()).await;

    let mut socket = connect(addr).await;
    next_json(&mut socket).await;
    wait_for_subscribers(&state, 1).await;

    socket.close(None).await.unwrap();

    for _ in 0..500 {
        if state.broadcaster().receiver_count() == 0 {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("subscriber still attached after close");
}
