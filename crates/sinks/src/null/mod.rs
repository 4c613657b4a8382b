//! Null sink - discards all events
//!
//! Receives events, updates metrics and drops them.
//!
//! # Use Cases
//!
//! - **Benchmarking**: Measure session overhead without output cost
//! - **Production opt-out**: Keep instrumentation in place with delivery off
//!
//! # Example
//!
//! ```
//! use reel_media::EventSink;
//! use reel_media::event::{CustomEvent, EventType};
//! use reel_sinks::null::NullSink;
//!
//! let sink = NullSink::new();
//! sink.log_event(CustomEvent::new("ping", EventType::Other).into());
//! assert_eq!(sink.metrics().custom_events(), 1);
//! ```


use std::sync::atomic::{AtomicU64, Ordering};

use reel_media::{EventSink, LoggedEvent};

/// Null sink that discards all received events
#[derive(Debug, Default)]
pub struct NullSink {
    metrics: NullSinkMetrics,
}

/// Metrics for the null sink
#[derive(Debug, Default)]
pub struct NullSinkMetrics {
    /// Total media events received
    media_events: AtomicU64,

    /// Total custom events received (conversions and summaries)
    custom_events: AtomicU64,
}

impl NullSinkMetrics {
    /// Create new metrics instance
    #[inline]
    pub const fn new() -> Self {
        Self {
            media_events: AtomicU64::new(0),
            custom_events: AtomicU64::new(0),
        }
    }

    /// Record a received event
    #[inline]
    pub fn record_event(&self, event: &LoggedEvent) {
        let counter = match event {
            LoggedEvent::Media(_) => &self.media_events,
            LoggedEvent::Custom(_) => &self.custom_events,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn media_events(&self) -> u64 {
        self.media_events.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn custom_events(&self) -> u64 {
        self.custom_events.load(Ordering::Relaxed)
    }

    /// Get snapshot of metrics
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            media_events: self.media_events(),
            custom_events: self.custom_events(),
        }
    }

    /// Reset all metrics to zero
    pub fn reset(&self) {
        self.media_events.store(0, Ordering::Relaxed);
        self.custom_events.store(0, Ordering::Relaxed);
    }
}

/// Point-in-time snapshot of null sink metrics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub media_events: u64,
    pub custom_events: u64,
}

impl NullSink {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn metrics(&self) -> &NullSinkMetrics {
        &self.metrics
    }
}

impl EventSink for NullSink {
    #[inline]
    fn log_event(&self, event: LoggedEvent) {
        self.metrics.record_event(&event);
    }
}
