//! Reel - Sinks
//!
//! Concrete destinations for events logged by media sessions.
//!
//! # Architecture
//!
//! Each sink implements [`reel_media::EventSink`] and is shared between
//! sessions through `Arc`. Delivery is synchronous: a sink handles the
//! event before the log operation returns.
//!
//! ```text
//! [MediaSession] --LoggedEvent--> [Arc<dyn EventSink>] --> [Destination]
//! ```
//!
//! # Available Sinks
//!
//! | Sink | Purpose |
//! |------|---------|
//! | `stdout` | One line or JSON document per event |
//! | `log` | `tracing` records under the `reel_sinks::events` target |
//! | `null` | Discard all, count only |
//!
//! # Example
//!
//! ```
//! use std::str::FromStr;
//! use reel_config::Config;
//! use reel_media::{ContentType, MediaSession, StreamType};
//!
//! let config = Config::from_str("[sink]\ntype = \"null\"").unwrap();
//! let sink = reel_sinks::from_config(&config.sink);
//!
//! let mut session = MediaSession::builder()
//!     .title("hello")
//!     .content_id("123")
//!     .stream_type(StreamType::OnDemand)
//!     .content_type(ContentType::Video)
//!     .apply_config(&config.session)
//!     .sink(sink)
//!     .build()
//!     .unwrap();
//! session.log_play(None);
//! ```

use std::sync::Arc;

use reel_config::{SinkConfig, SinkKind};
use reel_media::EventSink;

/// Log sink - events as tracing records
pub mod log;

/// Null sink - discards all events
pub mod null;

/// Stdout sink - human-readable output
pub mod stdout;

pub use log::LogSink;
pub use null::NullSink;
pub use stdout::{StdoutConfig, StdoutSink};

/// Build the sink selected by `config`
pub fn from_config(config: &SinkConfig) -> Arc<dyn EventSink> {
    tracing::debug!(sink = config.kind.as_str(), "creating event sink");
    match config.kind {
        SinkKind::Stdout => Arc::new(StdoutSink::with_config(StdoutConfig::from(config))),
        SinkKind::Log => Arc::new(LogSink::new()),
        SinkKind::Null => Arc::new(NullSink::new()),
    }
}
