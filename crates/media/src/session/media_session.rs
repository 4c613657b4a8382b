//! MediaSession - the log operations

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, error};
use uuid::Uuid;

use crate::clock::Clock;
use crate::content::{ContentType, MediaContent, StreamType};
use crate::event::{
    CustomEvent, EventType, MediaAd, MediaAdBreak, MediaEvent, MediaEventName, MediaQos,
    MediaSegment, Options, PlaybackError,
};
use crate::listener::MediaEventListener;
use crate::session::MediaSessionBuilder;
use crate::session::summary::{self, PlaybackStats};
use crate::sink::{self, EventSink, LoggedEvent};

/// A configured playback context under which media events are logged
///
/// Created through [`MediaSession::builder`]. Every `log_*` operation builds
/// exactly one [`MediaEvent`] carrying this session's [`MediaContent`],
/// hands it to the listener and then to the sink.
pub struct MediaSession {
    content: MediaContent,
    session_id: Option<String>,
    current_playhead_position: Option<u64>,
    session_qos: MediaQos,

    sink: Option<Arc<dyn EventSink>>,
    clock: Arc<dyn Clock>,
    listener: Option<Box<dyn MediaEventListener>>,

    log_media_events: bool,
    log_custom_events: bool,
    content_complete_limit: u8,

    stats: PlaybackStats,
}

impl fmt::Debug for MediaSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaSession")
            .field("content", &self.content)
            .field("session_id", &self.session_id)
            .field("current_playhead_position", &self.current_playhead_position)
            .field("session_qos", &self.session_qos)
            .field("log_media_events", &self.log_media_events)
            .field("log_custom_events", &self.log_custom_events)
            .field("content_complete_limit", &self.content_complete_limit)
            .finish_non_exhaustive()
    }
}

impl MediaSession {
    /// Start building a session
    #[inline]
    pub fn builder() -> MediaSessionBuilder {
        MediaSessionBuilder::new()
    }

    pub(crate) fn new(
        content: MediaContent,
        sink: Option<Arc<dyn EventSink>>,
        clock: Arc<dyn Clock>,
        log_media_events: bool,
        log_custom_events: bool,
        content_complete_limit: u8,
    ) -> Self {
        let now = clock.now_ms();
        Self {
            content,
            session_id: None,
            current_playhead_position: None,
            session_qos: MediaQos::default(),
            sink,
            clock,
            listener: None,
            log_media_events,
            log_custom_events,
            content_complete_limit,
            stats: PlaybackStats::new(now),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn title(&self) -> &str {
        &self.content.name
    }

    pub fn content_id(&self) -> &str {
        &self.content.content_id
    }

    pub fn duration(&self) -> Option<u64> {
        self.content.duration
    }

    pub fn content_type(&self) -> ContentType {
        self.content.content_type
    }

    pub fn stream_type(&self) -> StreamType {
        self.content.stream_type
    }

    pub fn content(&self) -> &MediaContent {
        &self.content
    }

    /// Assigned by [`log_media_session_start`](Self::log_media_session_start)
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    pub fn current_playhead_position(&self) -> Option<u64> {
        self.current_playhead_position
    }

    /// QoS state merged from every [`log_qos`](Self::log_qos) call
    pub fn session_qos(&self) -> MediaQos {
        self.session_qos
    }

    pub fn is_content_complete(&self) -> bool {
        self.stats.content_complete
    }

    pub fn segment_total(&self) -> u32 {
        self.stats.segment_total
    }

    pub fn ad_total(&self) -> u32 {
        self.stats.ad_total
    }

    /// Seconds spent in ads so far
    pub fn total_ad_time_spent(&self) -> f64 {
        self.stats.total_ad_time_spent
    }

    /// Seconds spent playing content so far
    pub fn content_time_spent(&self) -> f64 {
        self.stats.content_time_spent(self.clock.now_ms())
    }

    /// Session attributes as they would appear on a new event
    pub fn attributes(&self) -> BTreeMap<String, String> {
        self.new_event(MediaEventName::UpdatePlayheadPosition)
            .session_attributes()
    }

    /// Register a listener, replacing any previous one
    pub fn set_listener(&mut self, listener: impl MediaEventListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Build a media-typed custom event carrying this session's attributes
    ///
    /// `attributes` are added on top of the session attributes. The event is
    /// returned, not logged.
    pub fn build_custom_event(
        &self,
        name: impl Into<String>,
        attributes: Option<&BTreeMap<String, String>>,
    ) -> CustomEvent {
        let mut attrs = self.attributes();
        if let Some(extra) = attributes {
            attrs.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        CustomEvent::new(name, EventType::Media).with_attributes(attrs)
    }

    /// Create an event for this session in its current state
    ///
    /// The event is not logged.
    pub fn new_event(&self, name: MediaEventName) -> MediaEvent {
        MediaEvent::new(
            name,
            self.content.clone(),
            self.session_id.clone(),
            self.current_playhead_position,
            self.clock.now_ms(),
        )
    }

    // =========================================================================
    // Session lifecycle
    // =========================================================================

    /// Start the session; call before logging anything else
    pub fn log_media_session_start(&mut self, options: Option<&Options>) {
        self.session_id = Some(Uuid::new_v4().to_string());
        self.stats.session_start_timestamp = self.clock.now_ms();
        let event = self.event_with(MediaEventName::SessionStart, options);
        self.log_event(event);
    }

    /// End the session and send the session summary (once)
    pub fn log_media_session_end(&mut self, options: Option<&Options>) {
        let event = self.event_with(MediaEventName::SessionEnd, options);
        self.log_event(event);
        self.log_session_summary();
    }

    /// Mark the content as finished; the session stays open
    pub fn log_media_content_end(&mut self, options: Option<&Options>) {
        self.stats.content_complete = true;
        let event = self.event_with(MediaEventName::ContentEnd, options);
        self.log_event(event);
    }

    // =========================================================================
    // Playback
    // =========================================================================

    pub fn log_play(&mut self, options: Option<&Options>) {
        self.stats.start_playback(self.clock.now_ms());
        let event = self.event_with(MediaEventName::Play, options);
        self.log_event(event);
    }

    pub fn log_pause(&mut self, options: Option<&Options>) {
        self.stats.pause_playback(self.clock.now_ms());
        let event = self.event_with(MediaEventName::Pause, options);
        self.log_event(event);
    }

    /// `position` is where the seek started, in milliseconds
    pub fn log_seek_start(&mut self, position: u64, options: Option<&Options>) {
        let mut event = self.event_with(MediaEventName::SeekStart, options);
        event.seek_position = Some(position);
        self.log_event(event);
    }

    /// `position` is where the seek ended, in milliseconds
    pub fn log_seek_end(&mut self, position: u64, options: Option<&Options>) {
        let mut event = self.event_with(MediaEventName::SeekEnd, options);
        event.seek_position = Some(position);
        self.log_event(event);
    }

    pub fn log_buffer_start(
        &mut self,
        duration: u64,
        buffer_percent: f64,
        position: u64,
        options: Option<&Options>,
    ) {
        let mut event = self.event_with(MediaEventName::BufferStart, options);
        event.buffer_duration = Some(duration);
        event.buffer_percent = Some(buffer_percent);
        event.buffer_position = Some(position);
        self.log_event(event);
    }

    pub fn log_buffer_end(
        &mut self,
        duration: u64,
        buffer_percent: f64,
        position: u64,
        options: Option<&Options>,
    ) {
        let mut event = self.event_with(MediaEventName::BufferEnd, options);
        event.buffer_duration = Some(duration);
        event.buffer_percent = Some(buffer_percent);
        event.buffer_position = Some(position);
        self.log_event(event);
    }

    /// Update the playhead; this position is attached to later events
    ///
    /// Playhead updates are never converted to custom events.
    pub fn log_playhead_position(&mut self, position: u64) {
        self.current_playhead_position = Some(position);
        let mut event = self.new_event(MediaEventName::UpdatePlayheadPosition);
        event.playhead_position = Some(position);
        self.log_event(event);
    }

    // =========================================================================
    // Ads
    // =========================================================================

    pub fn log_ad_break_start(&mut self, ad_break: MediaAdBreak, options: Option<&Options>) {
        let mut event = self.event_with(MediaEventName::AdBreakStart, options);
        event.ad_break = Some(ad_break);
        self.log_event(event);
    }

    /// Like [`log_ad_break_start`](Self::log_ad_break_start), filling a
    /// default ad break through `build`
    pub fn log_ad_break_start_with<F>(&mut self, options: Option<&Options>, build: F)
    where
        F: FnOnce(&mut MediaAdBreak),
    {
        let mut ad_break = MediaAdBreak::default();
        build(&mut ad_break);
        self.log_ad_break_start(ad_break, options);
    }

    pub fn log_ad_break_end(&mut self, options: Option<&Options>) {
        let event = self.event_with(MediaEventName::AdBreakEnd, options);
        self.log_event(event);
    }

    /// Start an ad; it becomes the session's current ad
    pub fn log_ad_start(&mut self, mut ad: MediaAd, options: Option<&Options>) {
        ad.start_timestamp = Some(self.clock.now_ms());
        self.stats.ad_total += 1;
        if let Some(id) = &ad.id {
            self.stats.ad_ids.push(id.clone());
        }
        self.stats.ad = Some(ad.clone());

        let mut event = self.event_with(MediaEventName::AdStart, options);
        event.media_ad = Some(ad);
        self.log_event(event);
    }

    pub fn log_ad_start_with<F>(&mut self, options: Option<&Options>, build: F)
    where
        F: FnOnce(&mut MediaAd),
    {
        let mut ad = MediaAd::default();
        build(&mut ad);
        self.log_ad_start(ad, options);
    }

    /// Click on the current ad
    pub fn log_ad_click(&mut self, options: Option<&Options>) {
        let mut event = self.event_with(MediaEventName::AdClick, options);
        event.media_ad = self.stats.ad.clone();
        self.log_event(event);
    }

    /// Finish the current ad and send its summary
    pub fn log_ad_end(&mut self, options: Option<&Options>) {
        self.stats.finish_ad(self.clock.now_ms(), false);
        let event = self.event_with(MediaEventName::AdEnd, options);
        self.log_event(event);
        self.log_ad_summary();
    }

    /// Skip the current ad and send its summary
    pub fn log_ad_skip(&mut self, options: Option<&Options>) {
        self.stats.finish_ad(self.clock.now_ms(), true);
        let event = self.event_with(MediaEventName::AdSkip, options);
        self.log_event(event);
        self.log_ad_summary();
    }

    // =========================================================================
    // Segments
    // =========================================================================

    /// Start a segment; it becomes the session's current segment
    pub fn log_segment_start(&mut self, mut segment: MediaSegment, options: Option<&Options>) {
        self.stats.segment_total += 1;
        segment.start_timestamp = Some(self.clock.now_ms());
        self.stats.segment = Some(segment.clone());

        let mut event = self.event_with(MediaEventName::SegmentStart, options);
        event.segment = Some(segment);
        self.log_event(event);
    }

    pub fn log_segment_start_with<F>(&mut self, options: Option<&Options>, build: F)
    where
        F: FnOnce(&mut MediaSegment),
    {
        let mut segment = MediaSegment::default();
        build(&mut segment);
        self.log_segment_start(segment, options);
    }

    pub fn log_segment_skip(&mut self, options: Option<&Options>) {
        self.stats.finish_segment(self.clock.now_ms(), true);
        let event = self.event_with(MediaEventName::SegmentSkip, options);
        self.log_event(event);
        self.log_segment_summary();
    }

    pub fn log_segment_end(&mut self, options: Option<&Options>) {
        self.stats.finish_segment(self.clock.now_ms(), false);
        let event = self.event_with(MediaEventName::SegmentEnd, options);
        self.log_event(event);
        self.log_segment_summary();
    }

    // =========================================================================
    // QoS / errors
    // =========================================================================

    /// Merge `qos` into the session QoS and log the merged state
    pub fn log_qos(&mut self, qos: MediaQos, options: Option<&Options>) {
        self.session_qos = qos.merged_over(&self.session_qos);
        let mut event = self.event_with(MediaEventName::UpdateQos, options);
        event.qos = Some(self.session_qos);
        self.log_event(event);
    }

    pub fn log_qos_with<F>(&mut self, options: Option<&Options>, build: F)
    where
        F: FnOnce(&mut MediaQos),
    {
        let mut qos = MediaQos::default();
        build(&mut qos);
        self.log_qos(qos, options);
    }

    pub fn log_error(
        &mut self,
        message: impl Into<String>,
        attributes: BTreeMap<String, String>,
        options: Option<&Options>,
    ) {
        let mut event = self.event_with(MediaEventName::Error, options);
        event.error = Some(PlaybackError::new(message, attributes));
        self.log_event(event);
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// New event with options applied; an options playhead also moves the
    /// session playhead
    fn event_with(&mut self, name: MediaEventName, options: Option<&Options>) -> MediaEvent {
        let mut event = self.new_event(name);
        if let Some(options) = options {
            if let Some(position) = options.current_playhead_position {
                self.current_playhead_position = Some(position);
            }
            event.apply_options(options);
        }
        event
    }

    fn log_event(&mut self, event: MediaEvent) {
        self.stats.session_end_timestamp = self.clock.now_ms();
        self.update_content_complete();

        if let Some(listener) = &self.listener {
            listener.on_log_media_event(&event);
        }

        debug!(
            event = %event.event_name,
            id = %event.id,
            session_id = ?self.session_id,
            "media event"
        );

        let custom = (self.log_custom_events
            && event.event_name != MediaEventName::UpdatePlayheadPosition)
            .then(|| event.to_custom_event());

        if self.log_media_events {
            self.deliver(LoggedEvent::Media(event));
        }
        if let Some(custom) = custom {
            self.deliver(LoggedEvent::Custom(custom));
        }
    }

    fn deliver(&mut self, event: LoggedEvent) {
        if self.sink.is_none() {
            self.sink = sink::global();
        }
        match &self.sink {
            Some(sink) => sink.log_event(event),
            None => error!(event = event.name(), "no event sink available, dropping event"),
        }
    }

    fn update_content_complete(&mut self) {
        if self.content_complete_limit >= 100 {
            return;
        }
        if let (Some(duration), Some(playhead)) =
            (self.content.duration, self.current_playhead_position)
            && duration > 0
            && playhead as f64 / duration as f64 >= f64::from(self.content_complete_limit) / 100.0
        {
            self.stats.content_complete = true;
        }
    }

    fn log_session_summary(&mut self) {
        if self.stats.summary_sent {
            return;
        }
        let event = summary::session_summary(
            &self.stats,
            self.session_id.as_deref(),
            &self.content.content_id,
            &self.content.name,
            self.clock.now_ms(),
        );
        self.deliver(event.into());
        self.stats.summary_sent = true;
    }

    fn log_ad_summary(&mut self) {
        if let Some(ad) = self.stats.ad.take() {
            let event = summary::ad_summary(&ad, self.session_id.as_deref());
            self.deliver(event.into());
        }
    }

    fn log_segment_summary(&mut self) {
        if let Some(segment) = self.stats.segment.take()
            && let Some(event) = summary::segment_summary(
                &segment,
                self.session_id.as_deref(),
                &self.content.content_id,
                self.clock.now_ms(),
            )
        {
            self.deliver(event.into());
        }
    }
}
