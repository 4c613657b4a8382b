//! Reel Media Library
//!
//! This crate lets a player describe a playback session and log what
//! happens during it as structured analytics events. It is primarily used
//! for:
//!
//! - **Player integrations**: one [`MediaSession`] per piece of content
//! - **SDK verification**: checking that every log operation produces a
//!   well-formed event (see [`verify`])
//!
//! # Architecture
//!
//! The library is organized into domain-specific modules:
//!
//! - [`session`] - Session builder, log operations and summaries
//! - [`event`] - Media events, payloads and custom events
//! - [`sink`] - Where logged events go
//! - [`verify`] - Harness driving every log operation
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use reel_media::{ContentType, MediaSession, StreamType};
//! use reel_media::event::{MediaAd, Options};
//! use reel_media::sink::RecordingSink;
//!
//! let sink = Arc::new(RecordingSink::new());
//!
//! let mut session = MediaSession::builder()
//!     .title("hello")
//!     .content_id("123")
//!     .duration(1000)
//!     .stream_type(StreamType::LiveStream)
//!     .content_type(ContentType::Video)
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! session.log_media_session_start(None);
//! session.log_play(Some(&Options::new().playhead(0)));
//!
//! let mut ad = MediaAd::new();
//! ad.id = Some("ad-1".into());
//! session.log_ad_start(ad, None);
//! session.log_ad_end(None);
//!
//! session.log_media_session_end(None);
//!
//! // 5 media events, plus the ad and session summaries
//! assert_eq!(sink.media_events().len(), 5);
//! assert_eq!(sink.custom_events().len(), 2);
//! ```
//!
//! # Delivery
//!
//! Log operations never fail. A session delivers to the sink given to its
//! builder, or to the global sink installed with
//! [`sink::install_global`]. With neither, events are dropped and the drop
//! is reported through `tracing`.

mod clock;
mod content;
mod error;
mod listener;

pub mod event;
pub mod session;
pub mod sink;
pub mod verify;

// Re-export main types at crate root for convenience
pub use clock::{Clock, ManualClock, SystemClock};
pub use content::{ContentType, MediaContent, StreamType, UnknownVariant};
pub use error::{BuilderError, Result};
pub use listener::MediaEventListener;
pub use session::{MediaSession, MediaSessionBuilder};
pub use sink::{EventSink, LoggedEvent};
