//! WebSocket push channel.
//!
//! Each connection receives a full `INITIAL_DATA` snapshot immediately after
//! the upgrade, then every broadcast message until the peer closes. Inbound
//! frames carry no protocol: text is logged and ignored, anything malformed
//! likewise. A subscriber that lags the broadcast channel misses messages;
//! there is no retry and no buffering.

use crate::state::AppState;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::get, Router};
use futures_util::{SinkExt, StreamExt};
use shared::models::PushMessage;
use tokio::sync::broadcast::error::RecvError;

/// Creates the WebSocket routes.
pub fn ws_routes(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .with_state(state)
}

/// WebSocket upgrade handler.
async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Drives one subscriber connection until it closes.
async fn handle_socket(socket: WebSocket, state: AppState) {
    tracing::info!("Client connected");
    let (mut sender, mut receiver) = socket.split();

    let videos = match state.store().list() {
        Ok(videos) => videos,
        Err(error) => {
            tracing::warn!(%error, "Failed to read snapshot for new subscriber");
            return;
        }
    };

    if send_message(&mut sender, &PushMessage::InitialData { videos })
        .await
        .is_err()
    {
        return;
    }

    let mut updates = state.broadcaster().subscribe();

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Ok(message) => {
                    if send_message(&mut sender, &message).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    tracing::debug!(skipped, "Slow subscriber missed messages");
                }
                Err(RecvError::Closed) => break,
            },
            inbound = receiver.next() => match inbound {
                Some(Ok(Message::Text(text))) => {
                    tracing::debug!(%text, "Ignoring inbound message");
                }
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => {}
                Some(Err(error)) => {
                    tracing::debug!(%error, "WebSocket receive error");
                    break;
                }
            },
        }
    }

    tracing::info!("Client disconnected");
}

async fn send_message(
    sender: &mut (impl SinkExt<Message> + Unpin),
    message: &PushMessage,
) -> Result<(), ()> {
    let Ok(json) = serde_json::to_string(message) else {
        return Ok(());
    };

    sender
        .send(Message::Text(json.into()))
        .await
        .map_err(|_| ())
}
