//! Generic custom events
//!
//! The flat, string-keyed event shape that the analytics platform accepts
//! for non-media data. Media events convert into this form and session
//! summaries are emitted as custom events.

use std::collections::BTreeMap;

use serde::Serialize;

/// Category of a custom event
///
/// Values mirror the analytics platform's event-type numbering. Sessions
/// only emit [`EventType::Media`]; the other categories exist so events
/// built by host code carry the platform's codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[repr(u8)]
pub enum EventType {
    /// Default value (should not be used in production)
    #[default]
    Unknown = 0,
    Navigation = 1,
    Location = 2,
    Search = 3,
    Transaction = 4,
    UserContent = 5,
    UserPreference = 6,
    Social = 7,
    Other = 8,
    /// Media playback events and summaries
    Media = 9,
}

impl EventType {
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Create from u8 (returns Unknown for invalid values)
    #[inline]
    pub const fn from_u8(value: u8) -> Self {
        match value {
            1 => Self::Navigation,
            2 => Self::Location,
            3 => Self::Search,
            4 => Self::Transaction,
            5 => Self::UserContent,
            6 => Self::UserPreference,
            7 => Self::Social,
            8 => Self::Other,
            9 => Self::Media,
            _ => Self::Unknown,
        }
    }
}

/// A named event with string attributes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomEvent {
    pub name: String,
    pub event_type: EventType,
    pub custom_attributes: BTreeMap<String, String>,
}

impl CustomEvent {
    pub fn new(name: impl Into<String>, event_type: EventType) -> Self {
        Self {
            name: name.into(),
            event_type,
            custom_attributes: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_attributes(mut self, attributes: BTreeMap<String, String>) -> Self {
        self.custom_attributes = attributes;
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.custom_attributes.get(key).map(String::as_str)
    }
}
