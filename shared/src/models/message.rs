//! Push channel message model.
//!
//! Messages are plain JSON with no request/response framing. The `type` tag
//! discriminates the three server-to-client messages the dashboard knows.

use crate::models::StreamRecord;
use serde::{Deserialize, Serialize};

/// Server-to-client push channel messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PushMessage {
    /// Full snapshot sent once to each new subscriber on connect.
    InitialData {
        /// The complete stream list at connect time.
        videos: Vec<StreamRecord>,
    },

    /// Full snapshot broadcast after every tick.
    ViewerUpdate {
        /// The stream list after the tick's random walk was applied.
        videos: Vec<StreamRecord>,
    },

    /// Broadcast when a new stream is created.
    NewStream {
        /// The newly created record.
        video: StreamRecord,
    },
}
