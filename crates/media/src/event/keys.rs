//! Attribute keys used when flattening media events into custom attributes

// Session / content
pub const MEDIA_SESSION_ID: &str = "media_session_id";
pub const PLAYHEAD_POSITION: &str = "playhead_position";
pub const TITLE: &str = "content_title";
pub const CONTENT_ID: &str = "content_id";
pub const DURATION: &str = "content_duration";
pub const STREAM_TYPE: &str = "stream_type";
pub const CONTENT_TYPE: &str = "content_type";

// Seek / buffer
pub const SEEK_POSITION: &str = "seek_position";
pub const BUFFER_DURATION: &str = "buffer_duration";
pub const BUFFER_PERCENT: &str = "buffer_percent";
pub const BUFFER_POSITION: &str = "buffer_position";

// QoS
pub const QOS_BITRATE: &str = "qos_bitrate";
pub const QOS_FRAMES_PER_SECOND: &str = "qos_fps";
pub const QOS_STARTUP_TIME: &str = "qos_startup_time";
pub const QOS_DROPPED_FRAMES: &str = "qos_dropped_frames";

// Ad break
pub const AD_BREAK_TITLE: &str = "ad_break_title";
pub const AD_BREAK_DURATION: &str = "ad_break_duration";
pub const AD_BREAK_ID: &str = "ad_break_id";

// Ad
pub const AD_TITLE: &str = "ad_content_title";
pub const AD_DURATION: &str = "ad_content_duration";
pub const AD_ID: &str = "ad_content_id";
pub const AD_ADVERTISING_ID: &str = "ad_content_advertiser";
pub const AD_CAMPAIGN: &str = "ad_content_campaign";
pub const AD_CREATIVE: &str = "ad_content_creative";
pub const AD_PLACEMENT: &str = "ad_content_placement";
pub const AD_POSITION: &str = "ad_content_position";
pub const AD_SITE_ID: &str = "ad_content_site_id";

// Segment
pub const SEGMENT_TITLE: &str = "segment_title";
pub const SEGMENT_INDEX: &str = "segment_index";
pub const SEGMENT_DURATION: &str = "segment_duration";

// Error
pub const ERROR_MESSAGE: &str = "media_error_message";
pub const ERROR_ATTRIBUTES: &str = "media_error_attributes";

/// Every key above
pub const ALL: &[&str] = &[
    MEDIA_SESSION_ID,
    PLAYHEAD_POSITION,
    TITLE,
    CONTENT_ID,
    DURATION,
    STREAM_TYPE,
    CONTENT_TYPE,
    SEEK_POSITION,
    BUFFER_DURATION,
    BUFFER_PERCENT,
    BUFFER_POSITION,
    QOS_BITRATE,
    QOS_FRAMES_PER_SECOND,
    QOS_STARTUP_TIME,
    QOS_DROPPED_FRAMES,
    AD_BREAK_TITLE,
    AD_BREAK_DURATION,
    AD_BREAK_ID,
    AD_TITLE,
    AD_DURATION,
    AD_ID,
    AD_ADVERTISING_ID,
    AD_CAMPAIGN,
    AD_CREATIVE,
    AD_PLACEMENT,
    AD_POSITION,
    AD_SITE_ID,
    SEGMENT_TITLE,
    SEGMENT_INDEX,
    SEGMENT_DURATION,
    ERROR_MESSAGE,
    ERROR_ATTRIBUTES,
];
