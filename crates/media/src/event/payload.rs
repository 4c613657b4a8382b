//! Structured payloads attached to specific interaction kinds
//!
//! All public fields are optional so a default instance is always valid.
//! Lifecycle bookkeeping (timestamps, skipped/completed flags) is owned by
//! the session and is not part of the serialized payload.

use std::collections::BTreeMap;

use serde::Serialize;

/// An individual ad
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaAd {
    pub title: Option<String>,
    /// Length in milliseconds
    pub duration: Option<u64>,
    pub id: Option<String>,
    pub advertiser: Option<String>,
    pub campaign: Option<String>,
    pub creative: Option<String>,
    pub placement: Option<String>,
    /// Position of the ad within its break
    pub position: Option<i32>,
    pub site_id: Option<String>,

    #[serde(skip)]
    pub(crate) start_timestamp: Option<u64>,
    #[serde(skip)]
    pub(crate) end_timestamp: Option<u64>,
    #[serde(skip)]
    pub(crate) skipped: bool,
    #[serde(skip)]
    pub(crate) completed: bool,
}

impl MediaAd {
    pub fn new() -> Self {
        Self::default()
    }

    /// When the session started this ad (ms since epoch)
    pub fn start_timestamp(&self) -> Option<u64> {
        self.start_timestamp
    }

    pub fn end_timestamp(&self) -> Option<u64> {
        self.end_timestamp
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// A group of ads played back to back
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaAdBreak {
    pub title: Option<String>,
    /// Length in milliseconds
    pub duration: Option<u64>,
    pub id: Option<String>,
}

impl MediaAdBreak {
    pub fn new() -> Self {
        Self::default()
    }
}

/// A chapter or section of the content
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MediaSegment {
    pub title: Option<String>,
    pub index: Option<i32>,
    /// Length in milliseconds
    pub duration: Option<u64>,

    #[serde(skip)]
    pub(crate) start_timestamp: Option<u64>,
    #[serde(skip)]
    pub(crate) end_timestamp: Option<u64>,
    #[serde(skip)]
    pub(crate) skipped: bool,
    #[serde(skip)]
    pub(crate) completed: bool,
}

impl MediaSegment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_timestamp(&self) -> Option<u64> {
        self.start_timestamp
    }

    pub fn end_timestamp(&self) -> Option<u64> {
        self.end_timestamp
    }

    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

/// Quality of service snapshot
///
/// `None` means "not reported". When logged, missing fields are filled from
/// the session's last known values (see [`MediaQos::merged_over`]).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MediaQos {
    /// Time to first frame in milliseconds
    pub startup_time: Option<u64>,
    pub bit_rate: Option<u32>,
    pub fps: Option<u32>,
    pub dropped_frames: Option<u32>,
}

impl MediaQos {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields set on `self` win; unset fields fall back to `base`
    pub fn merged_over(&self, base: &MediaQos) -> MediaQos {
        MediaQos {
            startup_time: self.startup_time.or(base.startup_time),
            bit_rate: self.bit_rate.or(base.bit_rate),
            fps: self.fps.or(base.fps),
            dropped_frames: self.dropped_frames.or(base.dropped_frames),
        }
    }
}

/// A playback failure reported by the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PlaybackError {
    pub message: String,
    pub attributes: BTreeMap<String, String>,
}

impl PlaybackError {
    pub fn new(message: impl Into<String>, attributes: BTreeMap<String, String>) -> Self {
        Self {
            message: message.into(),
            attributes,
        }
    }
}
