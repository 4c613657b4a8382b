//! Media content metadata
//!
//! The content description shared by a session and every event it logs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of media being played
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentType {
    Video,
    Audio,
}

impl ContentType {
    /// Wire value used in event attributes
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Video => "Video",
            Self::Audio => "Audio",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Video" => Ok(Self::Video),
            "Audio" => Ok(Self::Audio),
            other => Err(UnknownVariant::new("content type", other)),
        }
    }
}

/// How the media is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamType {
    LiveStream,
    OnDemand,
    Linear,
    Podcast,
    Audiobook,
}

impl StreamType {
    /// Wire value used in event attributes
    #[inline]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LiveStream => "LiveStream",
            Self::OnDemand => "OnDemand",
            Self::Linear => "Linear",
            Self::Podcast => "Podcast",
            Self::Audiobook => "Audiobook",
        }
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StreamType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LiveStream" => Ok(Self::LiveStream),
            "OnDemand" => Ok(Self::OnDemand),
            "Linear" => Ok(Self::Linear),
            "Podcast" => Ok(Self::Podcast),
            "Audiobook" => Ok(Self::Audiobook),
            other => Err(UnknownVariant::new("stream type", other)),
        }
    }
}

/// Returned when parsing an unknown content or stream type
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: '{value}'")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Content metadata copied onto every event of a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaContent {
    /// Content title
    pub name: String,
    /// Content identifier
    pub content_id: String,
    /// Content length in milliseconds, if known
    pub duration: Option<u64>,
    pub content_type: ContentType,
    pub stream_type: StreamType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_round_trip_names() {
        for ty in [ContentType::Video, ContentType::Audio] {
            assert_eq!(ty.as_str().parse::<ContentType>().unwrap(), ty);
        }
    }

    #[test]
    fn test_stream_type_values() {
        assert_eq!(StreamType::LiveStream.as_str(), "LiveStream");
        assert_eq!(StreamType::OnDemand.as_str(), "OnDemand");
        assert_eq!(StreamType::Linear.as_str(), "Linear");
        assert_eq!(StreamType::Podcast.as_str(), "Podcast");
        assert_eq!(StreamType::Audiobook.as_str(), "Audiobook");
    }

    #[test]
    fn test_unknown_stream_type() {
        let err = "Broadcast".parse::<StreamType>().unwrap_err();
        assert_eq!(err.to_string(), "unknown stream type: 'Broadcast'");
    }

    #[test]
    fn test_display_matches_wire_value() {
        assert_eq!(ContentType::Audio.to_string(), "Audio");
        assert_eq!(StreamType::Podcast.to_string(), "Podcast");
    }
}
