//! Tests for the recording sinks and the global sink

use std::sync::Arc;

use serial_test::serial;

use crate::event::{CustomEvent, EventType};
use crate::sink::{
    self, EventSink, LastEventSink, LoggedEvent, RecordingSink, ResettableSink, clear_global,
    install_global,
};
use crate::{ContentType, MediaSession, StreamType};

fn builder() -> crate::MediaSessionBuilder {
    MediaSession::builder()
        .title("hello")
        .content_id("123")
        .duration(1000)
        .stream_type(StreamType::LiveStream)
        .content_type(ContentType::Video)
}

fn custom(name: &str) -> LoggedEvent {
    CustomEvent::new(name, EventType::Other).into()
}

// =============================================================================
// RecordingSink
// =============================================================================

#[test]
fn test_recording_sink_keeps_order() {
    let sink = RecordingSink::new();
    sink.log_event(custom("a"));
    sink.log_event(custom("b"));

    let names: Vec<_> = sink.events().iter().map(|e| e.name().to_string()).collect();
    assert_eq!(names, ["a", "b"]);
    assert_eq!(sink.len(), 2);
}

#[test]
fn test_recording_sink_take_drains() {
    let sink = RecordingSink::new();
    sink.log_event(custom("a"));

    assert_eq!(sink.take().len(), 1);
    assert!(sink.is_empty());
}

#[test]
fn test_recording_sink_splits_media_and_custom() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = builder().sink(sink.clone()).build().unwrap();

    session.log_play(None);
    sink.log_event(custom("extra"));

    assert_eq!(sink.media_events().len(), 1);
    assert_eq!(sink.custom_events().len(), 1);
    assert!(sink.events()[0].as_media().is_some());
    assert!(sink.events()[1].as_custom().is_some());
}

// =============================================================================
// LastEventSink
// =============================================================================

#[test]
fn test_last_event_sink_overwrites_and_counts() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = builder().sink(sink.clone()).build().unwrap();

    session.log_play(None);
    session.log_pause(None);

    assert_eq!(sink.count(), 2);
    assert_eq!(sink.last().unwrap().event_name.as_str(), "Pause");
}

#[test]
fn test_last_event_sink_empty_after_reset() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = builder().sink(sink.clone()).build().unwrap();

    session.log_play(None);
    sink.log_event(custom("extra"));
    assert!(!sink.is_empty());

    sink.reset();
    assert!(sink.is_empty());
    assert!(sink.last().is_none());
    assert!(sink.last_custom().is_none());
    assert_eq!(sink.count(), 0);
    assert_eq!(sink.custom_count(), 0);
}

#[test]
fn test_last_event_sink_custom_slot_separate() {
    let sink = LastEventSink::new();
    sink.log_event(custom("summary"));

    assert!(sink.last().is_none());
    assert_eq!(sink.count(), 0);
    assert!(!sink.is_empty());
    assert_eq!(sink.custom_count(), 1);
    assert_eq!(sink.last_custom().unwrap().name, "summary");
}

// =============================================================================
// Global sink
// =============================================================================

#[test]
#[serial]
fn test_install_global_returns_previous() {
    clear_global();
    let first = Arc::new(RecordingSink::new());
    let second = Arc::new(RecordingSink::new());

    assert!(install_global(first).is_none());
    assert!(install_global(second).is_some());
    assert!(clear_global().is_some());
    assert!(sink::global().is_none());
}

#[test]
#[serial]
fn test_session_uses_global_sink_captured_at_build() {
    let global = Arc::new(RecordingSink::new());
    install_global(global.clone());

    let mut session = builder().build().unwrap();
    clear_global();
    session.log_play(None);

    assert_eq!(global.len(), 1);
}

#[test]
#[serial]
fn test_session_picks_up_global_installed_after_build() {
    clear_global();
    let mut session = builder().build().unwrap();

    // dropped: no sink yet
    session.log_play(None);

    let global = Arc::new(RecordingSink::new());
    install_global(global.clone());
    session.log_pause(None);
    clear_global();

    assert_eq!(global.len(), 1);
    assert_eq!(global.events()[0].name(), "Pause");
}

#[test]
#[serial]
fn test_explicit_sink_wins_over_global() {
    let global = Arc::new(RecordingSink::new());
    install_global(global.clone());

    let own = Arc::new(RecordingSink::new());
    let mut session = builder().sink(own.clone()).build().unwrap();
    session.log_play(None);
    clear_global();

    assert_eq!(own.len(), 1);
    assert!(global.is_empty());
}
