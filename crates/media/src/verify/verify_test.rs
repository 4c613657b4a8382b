//! Tests for the verification harness

use std::sync::Arc;

use crate::event::{MediaAd, MediaEventName, Options};
use crate::event::MediaEvent;
use crate::sink::{EventSink, LastEventSink, LoggedEvent, RecordingSink, ResettableSink};
use crate::verify::{
    self, ArgKind, Argument, Fixtures, HarnessError, LogOperation, check_content,
    for_each_operation,
};
use crate::{ContentType, MediaSession, StreamType};

fn session_with(sink: Arc<dyn EventSink>) -> MediaSession {
    MediaSession::builder()
        .title("hello")
        .content_id("123")
        .duration(1000)
        .stream_type(StreamType::LiveStream)
        .content_type(ContentType::Video)
        .sink(sink)
        .build()
        .unwrap()
}

// =============================================================================
// Registry
// =============================================================================

#[test]
fn test_all_operations_have_log_prefix() {
    for op in LogOperation::ALL {
        assert!(op.name().starts_with("log_"), "{op}");
    }
}

#[test]
fn test_discovery_skips_callback_operations() {
    let discovered: Vec<_> = LogOperation::discoverable().collect();
    assert_eq!(discovered.len(), 21);
    assert!(!discovered.contains(&LogOperation::AdStartWith));
    assert!(!discovered.contains(&LogOperation::AdBreakStartWith));
    assert!(!discovered.contains(&LogOperation::SegmentStartWith));
    assert!(!discovered.contains(&LogOperation::QosWith));
    assert!(discovered.iter().all(|op| !op.takes_callback()));
}

#[test]
fn test_every_event_name_is_reachable() {
    for name in MediaEventName::ALL {
        assert!(
            LogOperation::discoverable().any(|op| op.event_name() == name),
            "{name}"
        );
    }
}

#[test]
fn test_params_of_buffer_operations() {
    assert_eq!(
        LogOperation::BufferStart.params(),
        &[
            ArgKind::Integer,
            ArgKind::Decimal,
            ArgKind::Integer,
            ArgKind::Options
        ]
    );
    assert_eq!(LogOperation::PlayheadPosition.params(), &[ArgKind::Integer]);
}

// =============================================================================
// Fixtures
// =============================================================================

#[test]
fn test_fixtures_match_params() {
    let mut fixtures = Fixtures::seeded(7);
    for op in LogOperation::discoverable() {
        let args = fixtures.arguments_for(op).unwrap();
        let kinds: Vec<_> = args.iter().map(Argument::kind).collect();
        assert_eq!(kinds, op.params(), "{op}");
    }
}

#[test]
fn test_fixtures_random_attributes() {
    let mut fixtures = Fixtures::seeded(7);
    let Argument::Attributes(attrs) = fixtures
        .argument(LogOperation::Error, ArgKind::Attributes)
        .unwrap()
    else {
        panic!("expected attributes");
    };
    assert_eq!(attrs.len(), 6);
    assert!(
        attrs
            .iter()
            .all(|(k, v)| k.len() == 8 && v.len() == 16)
    );
}

#[test]
fn test_fixtures_options_default_to_none() {
    let mut fixtures = Fixtures::new();
    assert_eq!(
        fixtures.argument(LogOperation::Play, ArgKind::Options).unwrap(),
        Argument::Options(None)
    );
}

#[test]
fn test_fixtures_callback_is_unknown() {
    let mut fixtures = Fixtures::new();
    let err = fixtures.arguments_for(LogOperation::AdStartWith).unwrap_err();
    assert_eq!(
        err,
        HarnessError::UnknownType {
            operation: LogOperation::AdStartWith,
            kind: ArgKind::Callback,
        }
    );
}

// =============================================================================
// Invocation
// =============================================================================

#[test]
fn test_invoke_rejects_wrong_argument() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    let err = LogOperation::SeekStart
        .invoke(&mut session, vec![Argument::Text("x".into()), Argument::Options(None)])
        .unwrap_err();
    assert!(matches!(err, HarnessError::ArgumentMismatch { .. }));
    assert_eq!(
        err.to_string(),
        "log_seek_start: expected integer argument, got text"
    );
    assert!(sink.is_empty());
}

#[test]
fn test_invoke_rejects_extra_argument() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    let err = LogOperation::PlayheadPosition
        .invoke(&mut session, vec![Argument::Integer(1), Argument::Integer(2)])
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "log_playhead_position: unexpected extra integer argument"
    );
    assert!(sink.is_empty());
}

#[test]
fn test_invoke_callback_operation_uses_default_payload() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    LogOperation::AdStartWith
        .invoke(&mut session, vec![Argument::Options(None)])
        .unwrap();

    let events = sink.media_events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_name, MediaEventName::AdStart);
    assert_eq!(events[0].media_ad.as_ref().unwrap().title, MediaAd::default().title);
}

#[test]
fn test_invoke_passes_arguments_through() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    LogOperation::BufferEnd
        .invoke(
            &mut session,
            vec![
                Argument::Integer(250),
                Argument::Decimal(0.5),
                Argument::Integer(4000),
                Argument::Options(Some(Options::new().attribute("k", "v"))),
            ],
        )
        .unwrap();

    let event = &sink.media_events()[0];
    assert_eq!(event.buffer_duration, Some(250));
    assert_eq!(event.buffer_percent, Some(0.5));
    assert_eq!(event.buffer_position, Some(4000));
    assert_eq!(event.custom_attributes.get("k").map(String::as_str), Some("v"));
}

// =============================================================================
// Verification runs
// =============================================================================

#[test]
fn test_verify_session_covers_all_operations() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = session_with(sink.clone());

    let report = verify::verify_session(&mut session, &sink, &mut Fixtures::new()).unwrap();

    let expected: Vec<_> = LogOperation::discoverable().collect();
    assert_eq!(report.operations, expected);
    assert!(sink.is_empty());
    assert_eq!(sink.count(), 0);
}

#[test]
fn test_verify_session_with_options_and_custom_events() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = MediaSession::builder()
        .title("hello")
        .content_id("123")
        .duration(1000)
        .stream_type(StreamType::OnDemand)
        .content_type(ContentType::Audio)
        .log_custom_events(true)
        .sink(sink.clone())
        .build()
        .unwrap();

    let options = Options::new().playhead(10).attribute("a", "1");
    let mut fixtures = Fixtures::seeded(42).with_options(options);

    let report = verify::verify_session(&mut session, &sink, &mut fixtures).unwrap();
    assert_eq!(report.operations.len(), 21);
}

#[test]
fn test_verify_session_missing_event_when_media_disabled() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = MediaSession::builder()
        .title("hello")
        .content_id("123")
        .stream_type(StreamType::LiveStream)
        .content_type(ContentType::Video)
        .log_media_events(false)
        .sink(sink.clone())
        .build()
        .unwrap();

    let err = verify::verify_session(&mut session, &sink, &mut Fixtures::new()).unwrap_err();
    assert_eq!(
        err,
        HarnessError::MissingEvent {
            operation: LogOperation::MediaSessionStart,
        }
    );
}

#[test]
fn test_verify_session_unknown_type() {
    let sink = Arc::new(LastEventSink::new());
    let mut session = session_with(sink.clone());
    let mut fixtures = Fixtures::new().without(ArgKind::Qos);

    let err = verify::verify_session(&mut session, &sink, &mut fixtures).unwrap_err();
    assert_eq!(
        err,
        HarnessError::UnknownType {
            operation: LogOperation::Qos,
            kind: ArgKind::Qos,
        }
    );
    assert_eq!(err.to_string(), "unknown type: MediaQos\nmethod: log_qos");
}

#[test]
fn test_verify_session_counts_duplicate_delivery() {
    struct Twice(Arc<LastEventSink>);
    impl EventSink for Twice {
        fn log_event(&self, event: LoggedEvent) {
            self.0.log_event(event.clone());
            self.0.log_event(event);
        }
    }

    let last = Arc::new(LastEventSink::new());
    let mut session = session_with(Arc::new(Twice(last.clone())));

    let err = verify::verify_session(&mut session, &last, &mut Fixtures::new()).unwrap_err();
    assert_eq!(
        err,
        HarnessError::UnexpectedEventCount {
            operation: LogOperation::MediaSessionStart,
            count: 2,
        }
    );
}

#[test]
fn test_verify_session_rejects_sink_that_keeps_events() {
    #[derive(Default)]
    struct Sticky(LastEventSink);
    impl EventSink for Sticky {
        fn log_event(&self, event: LoggedEvent) {
            self.0.log_event(event);
        }
    }
    impl ResettableSink for Sticky {
        fn last(&self) -> Option<MediaEvent> {
            self.0.last()
        }
        fn count(&self) -> usize {
            self.0.count()
        }
        fn custom_count(&self) -> usize {
            self.0.custom_count()
        }
        fn reset(&self) {}
    }

    let sink = Arc::new(Sticky::default());
    let mut session = session_with(sink.clone());

    let err = verify::verify_session(&mut session, &sink, &mut Fixtures::new()).unwrap_err();
    let second = LogOperation::discoverable().nth(1).unwrap();
    assert_eq!(
        err,
        HarnessError::SinkNotEmpty {
            operation: second,
            media: 1,
            custom: 0,
        }
    );
    assert_eq!(err.operation(), second);
}

#[test]
fn test_verify_session_rejects_events_left_before_first_operation() {
    let last = Arc::new(LastEventSink::new());
    let mut session = session_with(last.clone());

    // a sink without a working reset keeps whatever arrived earlier
    struct NoReset(Arc<LastEventSink>);
    impl ResettableSink for NoReset {
        fn last(&self) -> Option<MediaEvent> {
            self.0.last()
        }
        fn count(&self) -> usize {
            self.0.count()
        }
        fn custom_count(&self) -> usize {
            self.0.custom_count()
        }
        fn reset(&self) {}
    }

    session.log_play(None);
    let err = verify::verify_session(&mut session, &NoReset(last), &mut Fixtures::new())
        .unwrap_err();
    assert_eq!(
        err,
        HarnessError::SinkNotEmpty {
            operation: LogOperation::discoverable().next().unwrap(),
            media: 1,
            custom: 0,
        }
    );
}

#[test]
fn test_for_each_operation_stops_on_callback_error() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    let mut seen = Vec::new();
    let err = for_each_operation(&mut session, &mut Fixtures::new(), |op, _| {
        seen.push(op);
        if op == LogOperation::Pause {
            Err(HarnessError::MissingEvent { operation: op })
        } else {
            Ok(())
        }
    })
    .unwrap_err();

    assert_eq!(err.operation(), LogOperation::Pause);
    assert_eq!(seen.len(), 5);
}

#[test]
fn test_for_each_operation_with_recording_sink() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());

    let invoked = for_each_operation(&mut session, &mut Fixtures::new(), |_, _| Ok(())).unwrap();

    assert_eq!(invoked, 21);
    assert_eq!(sink.media_events().len(), 21);
    // one summary per finished session, ad and segment
    assert_eq!(sink.custom_events().len(), 3);
}

#[test]
fn test_check_content_reports_first_difference() {
    let sink = Arc::new(RecordingSink::new());
    let mut session = session_with(sink.clone());
    session.log_play(None);

    let mut event = sink.media_events().remove(0);
    event.media_content.content_id = "456".into();

    let err = check_content(LogOperation::Play, session.content(), &event).unwrap_err();
    assert_eq!(
        err,
        HarnessError::ContentMismatch {
            operation: LogOperation::Play,
            field: "content_id",
            expected: "123".into(),
            actual: "456".into(),
        }
    );
}
