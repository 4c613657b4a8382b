//! Media event names
//!
//! One variant per media interaction kind. The string form is what ends up
//! as the custom event name when a media event is converted.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};

/// Name of a media interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaEventName {
    Play,
    Pause,
    SessionStart,
    SessionEnd,
    ContentEnd,
    SeekStart,
    SeekEnd,
    BufferStart,
    BufferEnd,
    UpdatePlayheadPosition,
    AdClick,
    AdBreakStart,
    AdBreakEnd,
    AdStart,
    AdEnd,
    AdSkip,
    SegmentStart,
    SegmentSkip,
    SegmentEnd,
    UpdateQos,
    Error,
}

impl MediaEventName {
    /// Every name, in declaration order
    pub const ALL: [MediaEventName; 21] = [
        Self::Play,
        Self::Pause,
        Self::SessionStart,
        Self::SessionEnd,
        Self::ContentEnd,
        Self::SeekStart,
        Self::SeekEnd,
        Self::BufferStart,
        Self::BufferEnd,
        Self::UpdatePlayheadPosition,
        Self::AdClick,
        Self::AdBreakStart,
        Self::AdBreakEnd,
        Self::AdStart,
        Self::AdEnd,
        Self::AdSkip,
        Self::SegmentStart,
        Self::SegmentSkip,
        Self::SegmentEnd,
        Self::UpdateQos,
        Self::Error,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Play => "Play",
            Self::Pause => "Pause",
            Self::SessionStart => "Media Session Start",
            Self::SessionEnd => "Media Session End",
            Self::ContentEnd => "Media Content End",
            Self::SeekStart => "Seek Start",
            Self::SeekEnd => "Seek End",
            Self::BufferStart => "Buffer Start",
            Self::BufferEnd => "Buffer End",
            Self::UpdatePlayheadPosition => "Update Playhead Position",
            Self::AdClick => "Ad Click",
            Self::AdBreakStart => "Ad Break Start",
            Self::AdBreakEnd => "Ad Break End",
            Self::AdStart => "Ad Start",
            Self::AdEnd => "Ad End",
            Self::AdSkip => "Ad Skip",
            Self::SegmentStart => "Segment Start",
            Self::SegmentSkip => "Segment Skip",
            Self::SegmentEnd => "Segment End",
            Self::UpdateQos => "Update QoS",
            Self::Error => "Media Error",
        }
    }
}

impl fmt::Display for MediaEventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MediaEventName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| format!("unknown media event name: '{s}'"))
    }
}

impl Serialize for MediaEventName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
