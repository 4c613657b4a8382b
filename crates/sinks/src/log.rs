//! Log sink - events as `tracing` records
//!
//! Emits each event at info level under the `reel_sinks::events` target, so
//! a host application's subscriber decides where they end up. The target
//! sits under the crate name, so a `reel_sinks=<level>` directive covers it.

use std::sync::atomic::{AtomicU64, Ordering};

use reel_media::{EventSink, LoggedEvent};
use tracing::info;

/// Target used for every emitted record
pub const TARGET: &str = "reel_sinks::events";

/// Sink forwarding events to `tracing`
#[derive(Debug, Default)]
pub struct LogSink {
    emitted: AtomicU64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records emitted so far
    pub fn emitted(&self) -> u64 {
        self.emitted.load(Ordering::Relaxed)
    }
}

impl EventSink for LogSink {
    fn log_event(&self, event: LoggedEvent) {
        match &event {
            LoggedEvent::Media(media) => {
                let attributes = serde_json::to_string(&media.event_attributes()).unwrap_or_default();
                info!(
                    target: TARGET,
                    kind = "media",
                    name = %media.event_name,
                    id = %media.id,
                    session_id = media.session_id.as_deref().unwrap_or("-"),
                    content_id = %media.media_content.content_id,
                    playhead = ?media.playhead_position,
                    %attributes,
                    "media event"
                );
            }
            LoggedEvent::Custom(custom) => {
                let attributes = serde_json::to_string(&custom.custom_attributes).unwrap_or_default();
                info!(
                    target: TARGET,
                    kind = "custom",
                    name = %custom.name,
                    event_type = custom.event_type.as_u8(),
                    %attributes,
                    "custom event"
                );
            }
        }
        self.emitted.fetch_add(1, Ordering::Relaxed);
    }
}
