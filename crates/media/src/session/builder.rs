//! MediaSession builder

use std::fmt;
use std::sync::Arc;

use reel_config::SessionConfig;
pub use reel_config::DEFAULT_CONTENT_COMPLETE_LIMIT;
use tracing::warn;

use crate::clock::{Clock, SystemClock};
use crate::content::{ContentType, MediaContent, StreamType};
use crate::error::{BuilderError, Result};
use crate::session::MediaSession;
use crate::sink::{self, EventSink};

/// Builder for a [`MediaSession`]
///
/// Setters may be called in any order; only the final value of each field
/// matters.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use reel_media::{ContentType, MediaSession, StreamType};
/// use reel_media::sink::RecordingSink;
///
/// let sink = Arc::new(RecordingSink::new());
/// let mut session = MediaSession::builder()
///     .title("hello")
///     .content_id("123")
///     .duration(1000)
///     .stream_type(StreamType::LiveStream)
///     .content_type(ContentType::Video)
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// session.log_play(None);
/// assert_eq!(sink.len(), 1);
/// ```
#[derive(Clone)]
pub struct MediaSessionBuilder {
    title: Option<String>,
    content_id: Option<String>,
    duration: Option<u64>,
    content_type: Option<ContentType>,
    stream_type: Option<StreamType>,
    sink: Option<Arc<dyn EventSink>>,
    clock: Option<Arc<dyn Clock>>,
    log_media_events: bool,
    log_custom_events: bool,
    content_complete_limit: u8,
}

impl Default for MediaSessionBuilder {
    fn default() -> Self {
        Self {
            title: None,
            content_id: None,
            duration: None,
            content_type: None,
            stream_type: None,
            sink: None,
            clock: None,
            log_media_events: true,
            log_custom_events: false,
            content_complete_limit: DEFAULT_CONTENT_COMPLETE_LIMIT,
        }
    }
}

impl fmt::Debug for MediaSessionBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSessionBuilder")
            .field("title", &self.title)
            .field("content_id", &self.content_id)
            .field("duration", &self.duration)
            .field("content_type", &self.content_type)
            .field("stream_type", &self.stream_type)
            .field("has_sink", &self.sink.is_some())
            .field("log_media_events", &self.log_media_events)
            .field("log_custom_events", &self.log_custom_events)
            .field("content_complete_limit", &self.content_complete_limit)
            .finish_non_exhaustive()
    }
}

impl MediaSessionBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content title
    #[inline]
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the content identifier
    #[inline]
    #[must_use]
    pub fn content_id(mut self, content_id: impl Into<String>) -> Self {
        self.content_id = Some(content_id.into());
        self
    }

    /// Set the content length in milliseconds
    #[inline]
    #[must_use]
    pub fn duration(mut self, duration_ms: u64) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    #[inline]
    #[must_use]
    pub fn content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = Some(content_type);
        self
    }

    #[inline]
    #[must_use]
    pub fn stream_type(mut self, stream_type: StreamType) -> Self {
        self.stream_type = Some(stream_type);
        self
    }

    /// Deliver events to this sink instead of the global one
    #[inline]
    #[must_use]
    pub fn sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Use a custom time source
    #[inline]
    #[must_use]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Forward [`MediaEvent`](crate::event::MediaEvent)s to the sink (default: true)
    #[inline]
    #[must_use]
    pub fn log_media_events(mut self, enabled: bool) -> Self {
        self.log_media_events = enabled;
        self
    }

    /// Also forward each media event converted to a
    /// [`CustomEvent`](crate::event::CustomEvent) (default: false)
    #[inline]
    #[must_use]
    pub fn log_custom_events(mut self, enabled: bool) -> Self {
        self.log_custom_events = enabled;
        self
    }

    /// Percentage of the content the playhead must reach for the content to
    /// count as complete. Values outside `1..=100` are ignored at build time.
    #[inline]
    #[must_use]
    pub fn content_complete_limit(mut self, percent: u8) -> Self {
        self.content_complete_limit = percent;
        self
    }

    /// Copy dispatch settings from configuration
    #[must_use]
    pub fn apply_config(self, config: &SessionConfig) -> Self {
        self.log_media_events(config.log_media_events)
            .log_custom_events(config.log_custom_events)
            .content_complete_limit(config.content_complete_limit)
    }

    /// Build the session
    ///
    /// # Errors
    ///
    /// Returns error if title, content id, content type or stream type is
    /// missing, or if title or content id is empty.
    pub fn build(self) -> Result<MediaSession> {
        let title = require_text(self.title, "title")?;
        let content_id = require_text(self.content_id, "content_id")?;
        let content_type = self
            .content_type
            .ok_or(BuilderError::MissingField("content_type"))?;
        let stream_type = self
            .stream_type
            .ok_or(BuilderError::MissingField("stream_type"))?;

        let content_complete_limit = if (1..=100).contains(&self.content_complete_limit) {
            self.content_complete_limit
        } else {
            warn!(
                limit = self.content_complete_limit,
                "content_complete_limit must be within 1..=100, using default"
            );
            DEFAULT_CONTENT_COMPLETE_LIMIT
        };

        let sink = self.sink.or_else(sink::global);
        if sink.is_none() {
            warn!("no event sink configured and no global sink installed");
        }

        let content = MediaContent {
            name: title,
            content_id,
            duration: self.duration,
            content_type,
            stream_type,
        };

        Ok(MediaSession::new(
            content,
            sink,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.log_media_events,
            self.log_custom_events,
            content_complete_limit,
        ))
    }
}

fn require_text(value: Option<String>, field: &'static str) -> Result<String> {
    match value {
        None => Err(BuilderError::MissingField(field)),
        Some(v) if v.is_empty() => Err(BuilderError::EmptyField(field)),
        Some(v) => Ok(v),
    }
}
