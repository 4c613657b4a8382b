//! Session, ad and segment summaries
//!
//! A session accumulates playback statistics while events are logged and
//! reports them as custom events when a session, ad or segment finishes.

use std::collections::BTreeMap;

use crate::event::{CustomEvent, EventType, MediaAd, MediaSegment};

pub const MEDIA_SESSION_SUMMARY: &str = "Media Session Summary";
pub const MEDIA_SEGMENT_SUMMARY: &str = "Media Segment Summary";
pub const MEDIA_AD_SUMMARY: &str = "Media Ad Summary";

/// Attribute keys of the summary events
pub mod keys {
    // Session summary
    pub const MEDIA_SESSION_ID: &str = "media_session_id";
    pub const START_TIMESTAMP: &str = "media_session_start_time";
    pub const END_TIMESTAMP: &str = "media_session_end_time";
    pub const CONTENT_ID: &str = "content_id";
    pub const CONTENT_TITLE: &str = "content_title";
    pub const MEDIA_TIME_SPENT: &str = "media_time_spent";
    pub const CONTENT_TIME_SPENT: &str = "media_content_time_spent";
    pub const CONTENT_COMPLETE: &str = "media_content_complete";
    pub const TOTAL_SEGMENTS: &str = "media_session_segment_total";
    pub const TOTAL_AD_TIME_SPENT: &str = "media_total_ad_time_spent";
    pub const AD_TIME_SPENT_RATE: &str = "media_ad_time_spent_rate";
    pub const TOTAL_ADS: &str = "media_session_ad_total";
    pub const AD_IDS: &str = "media_session_ad_objects";

    // Ad summary
    pub const AD_CONTENT_ID: &str = "ad_content_id";
    pub const AD_CONTENT_START_TIMESTAMP: &str = "ad_content_start_time";
    pub const AD_CONTENT_END_TIMESTAMP: &str = "ad_content_end_time";
    pub const AD_CONTENT_TITLE: &str = "ad_content_title";
    pub const AD_SKIPPED: &str = "ad_skipped";
    pub const AD_COMPLETED: &str = "ad_completed";

    // Segment summary
    pub const SEGMENT_INDEX: &str = "segment_index";
    pub const SEGMENT_TITLE: &str = "segment_title";
    pub const SEGMENT_START_TIMESTAMP: &str = "segment_start_time";
    pub const SEGMENT_END_TIMESTAMP: &str = "segment_end_time";
    pub const SEGMENT_TIME_SPENT: &str = "media_segment_time_spent";
    pub const SEGMENT_SKIPPED: &str = "segment_skipped";
    pub const SEGMENT_COMPLETED: &str = "segment_completed";
}

/// Playback statistics tracked across a session
#[derive(Debug, Clone, Default)]
pub(crate) struct PlaybackStats {
    pub session_start_timestamp: u64,
    /// Updated whenever any event is logged
    pub session_end_timestamp: u64,
    pub content_complete: bool,
    pub segment_total: u32,
    /// Seconds
    pub total_ad_time_spent: f64,
    pub ad_total: u32,
    pub ad_ids: Vec<String>,
    pub current_playback_start: Option<u64>,
    /// Seconds of playback accumulated before the current play run
    pub stored_playback_time: f64,
    pub summary_sent: bool,
    /// Ad currently playing
    pub ad: Option<MediaAd>,
    /// Segment currently playing
    pub segment: Option<MediaSegment>,
}

impl PlaybackStats {
    pub fn new(now: u64) -> Self {
        Self {
            session_start_timestamp: now,
            session_end_timestamp: now,
            ..Self::default()
        }
    }

    /// Seconds between session start and the last logged event
    pub fn media_time_spent(&self) -> f64 {
        seconds_between(self.session_start_timestamp, self.session_end_timestamp)
    }

    /// Seconds spent playing content, including the current run
    pub fn content_time_spent(&self, now: u64) -> f64 {
        match self.current_playback_start {
            Some(start) => self.stored_playback_time + seconds_between(start, now),
            None => self.stored_playback_time,
        }
    }

    /// Ad time as a percentage of content time
    pub fn ad_time_spent_rate(&self, now: u64) -> f64 {
        let content = self.content_time_spent(now);
        if content != 0.0 {
            self.total_ad_time_spent / content * 100.0
        } else {
            0.0
        }
    }

    pub fn start_playback(&mut self, now: u64) {
        if self.current_playback_start.is_none() {
            self.current_playback_start = Some(now);
        }
    }

    pub fn pause_playback(&mut self, now: u64) {
        if let Some(start) = self.current_playback_start.take() {
            self.stored_playback_time += seconds_between(start, now);
        }
    }

    /// Mark the current ad finished and add its play time
    pub fn finish_ad(&mut self, now: u64, skipped: bool) {
        if let Some(ad) = self.ad.as_mut()
            && let Some(start) = ad.start_timestamp
        {
            ad.end_timestamp = Some(now);
            if skipped {
                ad.skipped = true;
            } else {
                ad.completed = true;
            }
            self.total_ad_time_spent += seconds_between(start, now);
        }
    }

    /// Mark the current segment finished
    pub fn finish_segment(&mut self, now: u64, skipped: bool) {
        if let Some(segment) = self.segment.as_mut() {
            segment.end_timestamp = Some(now);
            if skipped {
                segment.skipped = true;
            } else {
                segment.completed = true;
            }
        }
    }
}

/// Session summary event
pub(crate) fn session_summary(
    stats: &PlaybackStats,
    session_id: Option<&str>,
    content_id: &str,
    title: &str,
    now: u64,
) -> CustomEvent {
    let mut attrs = BTreeMap::new();
    if let Some(id) = session_id {
        attrs.insert(keys::MEDIA_SESSION_ID.to_string(), id.to_string());
    }
    insert(&mut attrs, keys::START_TIMESTAMP, stats.session_start_timestamp);
    insert(&mut attrs, keys::END_TIMESTAMP, stats.session_end_timestamp);
    insert(&mut attrs, keys::CONTENT_ID, content_id);
    insert(&mut attrs, keys::CONTENT_TITLE, title);
    insert(&mut attrs, keys::MEDIA_TIME_SPENT, stats.media_time_spent());
    insert(&mut attrs, keys::CONTENT_TIME_SPENT, stats.content_time_spent(now));
    insert(&mut attrs, keys::CONTENT_COMPLETE, stats.content_complete);
    insert(&mut attrs, keys::TOTAL_SEGMENTS, stats.segment_total);
    insert(&mut attrs, keys::TOTAL_AD_TIME_SPENT, stats.total_ad_time_spent);
    insert(&mut attrs, keys::AD_TIME_SPENT_RATE, stats.ad_time_spent_rate(now));
    insert(&mut attrs, keys::TOTAL_ADS, stats.ad_total);
    let ad_ids = serde_json::to_string(&stats.ad_ids).unwrap_or_else(|_| "[]".to_string());
    insert(&mut attrs, keys::AD_IDS, ad_ids);

    CustomEvent::new(MEDIA_SESSION_SUMMARY, EventType::Media).with_attributes(attrs)
}

/// Ad summary event
pub(crate) fn ad_summary(ad: &MediaAd, session_id: Option<&str>) -> CustomEvent {
    let mut attrs = BTreeMap::new();
    if let Some(id) = session_id {
        attrs.insert(keys::MEDIA_SESSION_ID.to_string(), id.to_string());
    }
    if let Some(id) = &ad.id {
        insert(&mut attrs, keys::AD_CONTENT_ID, id);
    }
    if let Some(start) = ad.start_timestamp {
        insert(&mut attrs, keys::AD_CONTENT_START_TIMESTAMP, start);
    }
    if let Some(end) = ad.end_timestamp {
        insert(&mut attrs, keys::AD_CONTENT_END_TIMESTAMP, end);
    }
    if let Some(title) = &ad.title {
        insert(&mut attrs, keys::AD_CONTENT_TITLE, title);
    }
    insert(&mut attrs, keys::AD_SKIPPED, ad.skipped);
    insert(&mut attrs, keys::AD_COMPLETED, ad.completed);

    CustomEvent::new(MEDIA_AD_SUMMARY, EventType::Media).with_attributes(attrs)
}

/// Segment summary event
///
/// Returns `None` for a segment that was never started.
pub(crate) fn segment_summary(
    segment: &MediaSegment,
    session_id: Option<&str>,
    content_id: &str,
    now: u64,
) -> Option<CustomEvent> {
    let start = segment.start_timestamp?;
    let end = segment.end_timestamp.unwrap_or(now);

    let mut attrs = BTreeMap::new();
    if let Some(id) = session_id {
        attrs.insert(keys::MEDIA_SESSION_ID.to_string(), id.to_string());
    }
    insert(&mut attrs, keys::CONTENT_ID, content_id);
    if let Some(index) = segment.index {
        insert(&mut attrs, keys::SEGMENT_INDEX, index);
    }
    if let Some(title) = &segment.title {
        insert(&mut attrs, keys::SEGMENT_TITLE, title);
    }
    insert(&mut attrs, keys::SEGMENT_START_TIMESTAMP, start);
    insert(&mut attrs, keys::SEGMENT_END_TIMESTAMP, end);
    insert(&mut attrs, keys::SEGMENT_TIME_SPENT, seconds_between(start, end));
    insert(&mut attrs, keys::SEGMENT_SKIPPED, segment.skipped);
    insert(&mut attrs, keys::SEGMENT_COMPLETED, segment.completed);

    Some(CustomEvent::new(MEDIA_SEGMENT_SUMMARY, EventType::Media).with_attributes(attrs))
}

#[inline]
fn seconds_between(start_ms: u64, end_ms: u64) -> f64 {
    end_ms.saturating_sub(start_ms) as f64 / 1000.0
}

#[inline]
fn insert<V: ToString>(attrs: &mut BTreeMap<String, String>, key: &str, value: V) {
    attrs.insert(key.to_string(), value.to_string());
}
