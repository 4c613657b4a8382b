//! In-memory sinks that remember what they were given

use std::sync::Arc;

use parking_lot::Mutex;

use crate::event::{CustomEvent, MediaEvent};
use crate::sink::{EventSink, LoggedEvent};

/// Records every event in arrival order
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<LoggedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far
    pub fn events(&self) -> Vec<LoggedEvent> {
        self.events.lock().clone()
    }

    pub fn media_events(&self) -> Vec<MediaEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| e.as_media().cloned())
            .collect()
    }

    pub fn custom_events(&self) -> Vec<CustomEvent> {
        self.events
            .lock()
            .iter()
            .filter_map(|e| e.as_custom().cloned())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    /// Drain and return everything recorded so far
    pub fn take(&self) -> Vec<LoggedEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventSink for RecordingSink {
    fn log_event(&self, event: LoggedEvent) {
        self.events.lock().push(event);
    }
}

/// Sink the verification harness can inspect and clear between operations
pub trait ResettableSink: Send + Sync {
    /// Most recent media event since the last reset
    fn last(&self) -> Option<MediaEvent>;

    /// Media events received since the last reset
    fn count(&self) -> usize;

    /// Custom events received since the last reset
    fn custom_count(&self) -> usize;

    /// Forget everything received so far
    fn reset(&self);

    /// True when nothing has arrived since the last reset
    fn is_empty(&self) -> bool {
        self.last().is_none() && self.count() == 0 && self.custom_count() == 0
    }
}

impl<T: ResettableSink + ?Sized> ResettableSink for Arc<T> {
    fn last(&self) -> Option<MediaEvent> {
        (**self).last()
    }

    fn count(&self) -> usize {
        (**self).count()
    }

    fn custom_count(&self) -> usize {
        (**self).custom_count()
    }

    fn reset(&self) {
        (**self).reset()
    }
}

/// Single-slot sink holding the most recent media event
///
/// Every media event overwrites the slot and bumps a counter; both are
/// cleared by [`reset`](Self::reset). Custom events (conversions and
/// summaries) go to a separate slot so they never displace the media event
/// an operation produced.
#[derive(Debug, Default)]
pub struct LastEventSink {
    state: Mutex<LastEventState>,
}

#[derive(Debug, Default)]
struct LastEventState {
    media: Option<MediaEvent>,
    media_count: usize,
    custom: Option<CustomEvent>,
    custom_count: usize,
}

impl LastEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent custom event since the last reset
    pub fn last_custom(&self) -> Option<CustomEvent> {
        self.state.lock().custom.clone()
    }
}

impl ResettableSink for LastEventSink {
    fn last(&self) -> Option<MediaEvent> {
        self.state.lock().media.clone()
    }

    fn count(&self) -> usize {
        self.state.lock().media_count
    }

    fn custom_count(&self) -> usize {
        self.state.lock().custom_count
    }

    fn reset(&self) {
        *self.state.lock() = LastEventState::default();
    }
}

impl EventSink for LastEventSink {
    fn log_event(&self, event: LoggedEvent) {
        let mut state = self.state.lock();
        match event {
            LoggedEvent::Media(event) => {
                state.media = Some(event);
                state.media_count += 1;
            }
            LoggedEvent::Custom(event) => {
                state.custom = Some(event);
                state.custom_count += 1;
            }
        }
    }
}
