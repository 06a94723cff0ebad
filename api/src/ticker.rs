//! Periodic tick task.
//!
//! One cooperative timer mutates the store, invalidates the snapshot cache,
//! and fans the fresh snapshot out to all subscribers. Fire-and-forget: a
//! broadcast with no listeners is not an error, and a failed tick is logged
//! and skipped rather than retried.

use crate::state::AppState;
use shared::models::PushMessage;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Spawns the periodic tick loop on the current runtime.
///
/// The loop runs until the returned handle is aborted or the runtime shuts
/// down. It is spawned by `run_server_with_config`, never by
/// `create_router`, so router tests see a quiescent store.
pub fn spawn_ticker(state: AppState, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tracing::info!(interval_secs = interval.as_secs(), "Tick loop started");
        loop {
            tokio::time::sleep(interval).await;
            tick_once(&state);
        }
    })
}

/// Runs a single mutate-invalidate-broadcast cycle.
pub fn tick_once(state: &AppState) {
    match state.store().tick() {
        Ok(videos) => {
            if let Err(error) = state.cache().invalidate() {
                tracing::warn!(%error, "Failed to invalidate snapshot cache after tick");
            }

            let delivered = state
                .broadcaster()
                .send(PushMessage::ViewerUpdate { videos });
            tracing::debug!(delivered, "Broadcast viewer update");
        }
        Err(error) => {
            tracing::warn!(%error, "Tick failed, skipping cycle");
        }
    }
}
