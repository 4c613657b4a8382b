//! The media event produced by every log operation

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use uuid::Uuid;

use crate::content::MediaContent;
use crate::event::custom::{CustomEvent, EventType};
use crate::event::keys;
use crate::event::{
    MediaAd, MediaAdBreak, MediaEventName, MediaQos, MediaSegment, Options, PlaybackError,
};

/// One logged media interaction
///
/// Carries a snapshot of the session's content metadata taken when the event
/// was created, plus the payload of the specific interaction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MediaEvent {
    pub event_name: MediaEventName,
    /// Unique id (UUID v4)
    pub id: String,
    /// Creation time (ms since epoch)
    pub timestamp: u64,
    /// Set once the session has been started
    pub session_id: Option<String>,
    pub media_content: MediaContent,
    pub playhead_position: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub qos: Option<MediaQos>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_ad: Option<MediaAd>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<MediaSegment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_break: Option<MediaAdBreak>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PlaybackError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seek_position: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_duration: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buffer_position: Option<u64>,

    /// Attributes supplied through [`Options`]
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_attributes: BTreeMap<String, String>,
}

impl MediaEvent {
    /// Create an event with no interaction payload
    pub fn new(
        event_name: MediaEventName,
        media_content: MediaContent,
        session_id: Option<String>,
        playhead_position: Option<u64>,
        timestamp: u64,
    ) -> Self {
        Self {
            event_name,
            id: Uuid::new_v4().to_string(),
            timestamp,
            session_id,
            media_content,
            playhead_position,
            qos: None,
            media_ad: None,
            segment: None,
            ad_break: None,
            error: None,
            seek_position: None,
            buffer_duration: None,
            buffer_percent: None,
            buffer_position: None,
            custom_attributes: BTreeMap::new(),
        }
    }

    /// Apply per-call options to this event
    pub fn apply_options(&mut self, options: &Options) {
        if let Some(position) = options.current_playhead_position {
            self.playhead_position = Some(position);
        }
        if !options.custom_attributes.is_empty() {
            self.custom_attributes = options.custom_attributes.clone();
        }
    }

    /// Session and content attributes, only those with a value
    pub fn session_attributes(&self) -> BTreeMap<String, String> {
        let mut attrs = BTreeMap::new();
        let content = &self.media_content;

        put(&mut attrs, keys::MEDIA_SESSION_ID, self.session_id.as_ref());
        put(&mut attrs, keys::PLAYHEAD_POSITION, self.playhead_position);
        put(&mut attrs, keys::TITLE, Some(&content.name));
        put(&mut attrs, keys::CONTENT_ID, Some(&content.content_id));
        put(&mut attrs, keys::DURATION, content.duration);
        put(&mut attrs, keys::STREAM_TYPE, Some(content.stream_type));
        put(&mut attrs, keys::CONTENT_TYPE, Some(content.content_type));
        attrs
    }

    /// Interaction-specific attributes, only those with a value
    pub fn event_attributes(&self) -> BTreeMap<String, String> {
        let mut attrs = BTreeMap::new();

        put(&mut attrs, keys::SEEK_POSITION, self.seek_position);
        put(&mut attrs, keys::BUFFER_DURATION, self.buffer_duration);
        put(&mut attrs, keys::BUFFER_PERCENT, self.buffer_percent);
        put(&mut attrs, keys::BUFFER_POSITION, self.buffer_position);

        if let Some(qos) = &self.qos {
            put(&mut attrs, keys::QOS_BITRATE, qos.bit_rate);
            put(&mut attrs, keys::QOS_DROPPED_FRAMES, qos.dropped_frames);
            put(&mut attrs, keys::QOS_FRAMES_PER_SECOND, qos.fps);
            put(&mut attrs, keys::QOS_STARTUP_TIME, qos.startup_time);
        }
        if let Some(ad) = &self.media_ad {
            put(&mut attrs, keys::AD_TITLE, ad.title.as_ref());
            put(&mut attrs, keys::AD_ID, ad.id.as_ref());
            put(&mut attrs, keys::AD_ADVERTISING_ID, ad.advertiser.as_ref());
            put(&mut attrs, keys::AD_CAMPAIGN, ad.campaign.as_ref());
            put(&mut attrs, keys::AD_CREATIVE, ad.creative.as_ref());
            put(&mut attrs, keys::AD_SITE_ID, ad.site_id.as_ref());
            put(&mut attrs, keys::AD_DURATION, ad.duration);
            put(&mut attrs, keys::AD_PLACEMENT, ad.placement.as_ref());
            put(&mut attrs, keys::AD_POSITION, ad.position);
        }
        if let Some(segment) = &self.segment {
            put(&mut attrs, keys::SEGMENT_TITLE, segment.title.as_ref());
            put(&mut attrs, keys::SEGMENT_INDEX, segment.index);
            put(&mut attrs, keys::SEGMENT_DURATION, segment.duration);
        }
        if let Some(ad_break) = &self.ad_break {
            put(&mut attrs, keys::AD_BREAK_TITLE, ad_break.title.as_ref());
            put(&mut attrs, keys::AD_BREAK_DURATION, ad_break.duration);
            put(&mut attrs, keys::AD_BREAK_ID, ad_break.id.as_ref());
        }
        if let Some(error) = &self.error {
            attrs.insert(keys::ERROR_MESSAGE.to_string(), error.message.clone());
            if let Ok(json) = serde_json::to_string(&error.attributes) {
                attrs.insert(keys::ERROR_ATTRIBUTES.to_string(), json);
            }
        }
        attrs
    }

    /// Flatten into a custom event of type [`EventType::Media`]
    ///
    /// Attribute precedence: options attributes, then event attributes, then
    /// session attributes.
    pub fn to_custom_event(&self) -> CustomEvent {
        let mut attrs = self.session_attributes();
        attrs.extend(self.event_attributes());
        attrs.extend(
            self.custom_attributes
                .iter()
                .map(|(k, v)| (k.clone(), v.clone())),
        );
        CustomEvent::new(self.event_name.as_str(), EventType::Media).with_attributes(attrs)
    }
}

impl fmt::Display for MediaEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

fn put<V: ToString>(attrs: &mut BTreeMap<String, String>, key: &str, value: Option<V>) {
    if let Some(value) = value {
        attrs.insert(key.to_string(), value.to_string());
    }
}
