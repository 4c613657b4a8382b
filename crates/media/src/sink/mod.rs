//! Event sinks
//!
//! A sink is the analytics platform as seen from a media session: something
//! that accepts logged events. Sessions hold an explicit sink when one was
//! given to the builder and otherwise fall back to the process-wide global
//! sink installed with [`install_global`].
//!
//! ```text
//! [MediaSession] --LoggedEvent--> [EventSink] --> [Destination]
//! ```
//!
//! Concrete destinations (stdout, tracing, null) live in `reel-sinks`.
//! This module only carries the trait and the recording doubles used by
//! tests and the verification harness.

mod recording;

#[cfg(test)]
mod sink_test;

use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::{CustomEvent, MediaEvent};

pub use recording::{LastEventSink, RecordingSink, ResettableSink};

/// Anything a session can hand to a sink
#[derive(Debug, Clone, PartialEq)]
pub enum LoggedEvent {
    /// A media interaction
    Media(MediaEvent),
    /// A converted media event or a summary
    Custom(CustomEvent),
}

impl LoggedEvent {
    pub fn as_media(&self) -> Option<&MediaEvent> {
        match self {
            Self::Media(event) => Some(event),
            Self::Custom(_) => None,
        }
    }

    pub fn as_custom(&self) -> Option<&CustomEvent> {
        match self {
            Self::Custom(event) => Some(event),
            Self::Media(_) => None,
        }
    }

    /// Event name as sent to the platform
    pub fn name(&self) -> &str {
        match self {
            Self::Media(event) => event.event_name.as_str(),
            Self::Custom(event) => &event.name,
        }
    }
}

impl From<MediaEvent> for LoggedEvent {
    fn from(event: MediaEvent) -> Self {
        Self::Media(event)
    }
}

impl From<CustomEvent> for LoggedEvent {
    fn from(event: CustomEvent) -> Self {
        Self::Custom(event)
    }
}

/// Destination for logged events
pub trait EventSink: Send + Sync {
    fn log_event(&self, event: LoggedEvent);
}

impl<S: EventSink + ?Sized> EventSink for Arc<S> {
    #[inline]
    fn log_event(&self, event: LoggedEvent) {
        (**self).log_event(event);
    }
}

// =============================================================================
// Global sink
// =============================================================================

static GLOBAL_SINK: RwLock<Option<Arc<dyn EventSink>>> = parking_lot::const_rwlock(None);

/// Install the process-wide sink used by sessions built without one
///
/// Returns the previously installed sink, if any.
pub fn install_global(sink: Arc<dyn EventSink>) -> Option<Arc<dyn EventSink>> {
    GLOBAL_SINK.write().replace(sink)
}

/// Remove the process-wide sink
pub fn clear_global() -> Option<Arc<dyn EventSink>> {
    GLOBAL_SINK.write().take()
}

/// The process-wide sink, if one is installed
pub fn global() -> Option<Arc<dyn EventSink>> {
    GLOBAL_SINK.read().clone()
}
