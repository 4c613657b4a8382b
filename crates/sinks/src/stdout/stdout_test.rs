//! Stdout sink tests

use std::io::{self, Write};
use std::sync::Arc;

use parking_lot::Mutex;
use reel_config::{EventFormat, SinkConfig};
use reel_media::event::{CustomEvent, EventType, MediaEvent, MediaEventName};
use reel_media::{ContentType, EventSink, LoggedEvent, MediaContent, StreamType};

use super::{MetricsSnapshot, StdoutConfig, StdoutSink, StdoutSinkMetrics, format_payload};

/// Writer capturing everything into a shared buffer
#[derive(Clone, Default)]
struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Writer that always fails
struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn media_event(name: MediaEventName) -> MediaEvent {
    let content = MediaContent {
        name: "hello".into(),
        content_id: "123".into(),
        duration: Some(1000),
        content_type: ContentType::Video,
        stream_type: StreamType::LiveStream,
    };
    // 2023-11-14T22:13:20.000Z
    MediaEvent::new(
        name,
        content,
        Some("3f2a9c1e-0000-4000-8000-000000000000".into()),
        Some(250),
        1_700_000_000_000,
    )
}

fn summary_event() -> CustomEvent {
    let mut event = CustomEvent::new("Media Session Summary", EventType::Media);
    event
        .custom_attributes
        .insert("content_id".into(), "123".into());
    event
}

// ============================================================================
// StdoutConfig Tests
// ============================================================================

#[test]
fn test_config_default() {
    let config = StdoutConfig::default();

    assert!(config.color);
    assert_eq!(config.format, EventFormat::Line);
}

#[test]
fn test_config_no_color() {
    let config = StdoutConfig::no_color();

    assert!(!config.color);
    assert_eq!(config.format, EventFormat::Line);
}

#[test]
fn test_config_from_sink_config() {
    let sink_config = SinkConfig {
        color: false,
        format: EventFormat::Json,
        ..SinkConfig::default()
    };
    assert_eq!(StdoutConfig::from(&sink_config), StdoutConfig::json());
}

// ============================================================================
// StdoutSinkMetrics Tests
// ============================================================================

#[test]
fn test_metrics_new() {
    let metrics = StdoutSinkMetrics::new();
    assert_eq!(metrics.snapshot(), MetricsSnapshot::default());
}

#[test]
fn test_metrics_count_by_kind() {
    let buf = SharedBuf::default();
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), buf.clone());

    sink.log_event(media_event(MediaEventName::Play).into());
    sink.log_event(media_event(MediaEventName::Pause).into());
    sink.log_event(summary_event().into());

    let snapshot = sink.metrics().snapshot();
    assert_eq!(snapshot.media_events, 2);
    assert_eq!(snapshot.custom_events, 1);
    assert_eq!(snapshot.events(), 3);
    assert_eq!(snapshot.bytes_written, buf.contents().len() as u64);
    assert_eq!(snapshot.write_errors, 0);
}

#[test]
fn test_write_error_counted() {
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), BrokenPipe);

    sink.log_event(media_event(MediaEventName::Play).into());

    let snapshot = sink.metrics().snapshot();
    assert_eq!(snapshot.media_events, 1);
    assert_eq!(snapshot.write_errors, 1);
    assert_eq!(snapshot.bytes_written, 0);
}

// ============================================================================
// Rendering Tests
// ============================================================================

#[test]
fn test_line_format_media_event() {
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), io::sink());
    let line = sink.render(&media_event(MediaEventName::Play).into());

    assert!(line.starts_with("22:13:20.000 media  Play "), "{line}");
    assert!(line.contains("hello#123"));
    assert!(line.contains("session:3f2a9c1e"));
    assert!(line.contains("playhead:250"));
}

#[test]
fn test_line_format_includes_event_attributes() {
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), io::sink());
    let mut event = media_event(MediaEventName::SeekStart);
    event.seek_position = Some(900);

    let line = sink.render(&event.into());
    assert!(line.ends_with(r#"{"seek_position":"900"}"#), "{line}");
}

#[test]
fn test_line_format_without_session() {
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), io::sink());
    let mut event = media_event(MediaEventName::Play);
    event.session_id = None;
    event.playhead_position = None;

    let line = sink.render(&event.into());
    assert!(line.contains("session:- playhead:-"), "{line}");
}

#[test]
fn test_line_format_custom_event() {
    let sink = StdoutSink::with_writer(StdoutConfig::no_color(), io::sink());
    let line = sink.render(&summary_event().into());

    assert!(line.contains(" custom Media Session Summary "), "{line}");
    assert!(line.ends_with(r#"{"content_id":"123"}"#));
}

#[test]
fn test_color_adds_escape_codes() {
    let plain = StdoutSink::with_writer(StdoutConfig::no_color(), io::sink());
    let colored = StdoutSink::with_writer(StdoutConfig::default(), io::sink());
    let event: LoggedEvent = media_event(MediaEventName::Error).into();

    assert!(!plain.render(&event).contains('\u{1b}'));
    assert!(colored.render(&event).contains('\u{1b}'));
}

#[test]
fn test_json_format_media_event() {
    let sink = StdoutSink::with_writer(StdoutConfig::json(), io::sink());
    let line = sink.render(&media_event(MediaEventName::Play).into());

    let json: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(json["event_name"], "Play");
    assert_eq!(json["playhead_position"], 250);
}

#[test]
fn test_json_format_custom_event() {
    let sink = StdoutSink::with_writer(StdoutConfig::json(), io::sink());
    let line = sink.render(&summary_event().into());

    let json: serde_json::Value = serde_json::from_str(&line).unwrap();
    assert_eq!(json["name"], "Media Session Summary");
    assert_eq!(json["custom_attributes"]["content_id"], "123");
}

#[test]
fn test_one_line_per_event() {
    let buf = SharedBuf::default();
    let sink = StdoutSink::with_writer(StdoutConfig::json(), buf.clone());

    sink.log_event(media_event(MediaEventName::Play).into());
    sink.log_event(summary_event().into());

    assert_eq!(buf.contents().lines().count(), 2);
}

// ============================================================================
// Helper Tests
// ============================================================================

#[test]
fn test_format_payload_truncates() {
    let long = "x".repeat(200);
    let out = format_payload(&long);
    assert_eq!(out.len(), 120);
    assert!(out.ends_with("..."));
}

#[test]
fn test_format_payload_short_unchanged() {
    assert_eq!(format_payload(r#"{"a":"1"}"#), r#"{"a":"1"}"#);
}
