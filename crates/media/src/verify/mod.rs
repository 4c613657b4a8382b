//! Session verification harness
//!
//! Drives every discoverable log operation of a [`MediaSession`] with
//! generated arguments and checks that each call delivers exactly one media
//! event whose content matches the session.
//!
//! Operations come from the [`LogOperation`] registry. Those taking a
//! callback are left out of discovery; they can still be invoked directly.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use reel_media::{ContentType, MediaSession, StreamType};
//! use reel_media::sink::LastEventSink;
//! use reel_media::verify::{self, Fixtures};
//!
//! let sink = Arc::new(LastEventSink::new());
//! let mut session = MediaSession::builder()
//!     .title("hello")
//!     .content_id("123")
//!     .duration(1000)
//!     .stream_type(StreamType::LiveStream)
//!     .content_type(ContentType::Video)
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! let report = verify::verify_session(&mut session, &sink, &mut Fixtures::new()).unwrap();
//! assert_eq!(report.operations.len(), 21);
//! ```

mod error;
mod fixtures;
mod operation;

#[cfg(test)]
mod verify_test;

use tracing::debug;

use crate::content::MediaContent;
use crate::event::MediaEvent;
use crate::session::MediaSession;
use crate::sink::ResettableSink;

pub use error::{HarnessError, Result};
pub use fixtures::Fixtures;
pub use operation::{ArgKind, Argument, LogOperation};

/// Outcome of a successful verification run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VerifyReport {
    /// Operations invoked, in order
    pub operations: Vec<LogOperation>,
}

/// Invoke every discoverable operation once, calling `after` after each
///
/// Stops at the first error from argument generation, invocation or
/// `after`. Returns the number of operations invoked.
///
/// # Errors
///
/// Returns the first [`HarnessError`] encountered.
pub fn for_each_operation<F>(
    session: &mut MediaSession,
    fixtures: &mut Fixtures,
    after: F,
) -> Result<usize>
where
    F: FnMut(LogOperation, &MediaSession) -> Result<()>,
{
    run_operations(session, fixtures, |_| Ok(()), after)
}

fn run_operations<B, F>(
    session: &mut MediaSession,
    fixtures: &mut Fixtures,
    mut before: B,
    mut after: F,
) -> Result<usize>
where
    B: FnMut(LogOperation) -> Result<()>,
    F: FnMut(LogOperation, &MediaSession) -> Result<()>,
{
    let mut invoked = 0;
    for operation in LogOperation::discoverable() {
        before(operation)?;
        let args = fixtures.arguments_for(operation)?;
        debug!(operation = %operation, args = args.len(), "invoking");
        operation.invoke(session, args)?;
        after(operation, session)?;
        invoked += 1;
    }
    Ok(invoked)
}

/// Check that every operation logs exactly one event with matching content
///
/// `sink` must be the sink `session` delivers to. It is reset before each
/// operation and must be empty when the operation starts.
///
/// # Errors
///
/// Returns [`HarnessError::SinkNotEmpty`], [`HarnessError::MissingEvent`],
/// [`HarnessError::UnexpectedEventCount`] or
/// [`HarnessError::ContentMismatch`] for the first operation that fails.
pub fn verify_session<S>(
    session: &mut MediaSession,
    sink: &S,
    fixtures: &mut Fixtures,
) -> Result<VerifyReport>
where
    S: ResettableSink + ?Sized,
{
    let mut report = VerifyReport::default();
    sink.reset();

    run_operations(
        session,
        fixtures,
        |operation| {
            if sink.is_empty() {
                Ok(())
            } else {
                Err(HarnessError::SinkNotEmpty {
                    operation,
                    media: sink.count(),
                    custom: sink.custom_count(),
                })
            }
        },
        |operation, session| {
            let count = sink.count();
            let event = sink.last().ok_or(HarnessError::MissingEvent { operation })?;
            if count != 1 {
                return Err(HarnessError::UnexpectedEventCount { operation, count });
            }
            check_content(operation, session.content(), &event)?;
            if event.event_name != operation.event_name() {
                return Err(HarnessError::ContentMismatch {
                    operation,
                    field: "event_name",
                    expected: operation.event_name().to_string(),
                    actual: event.event_name.to_string(),
                });
            }

            report.operations.push(operation);
            sink.reset();
            Ok(())
        },
    )?;

    Ok(report)
}

/// Compare the content carried by `event` with `expected`
///
/// # Errors
///
/// Returns [`HarnessError::ContentMismatch`] naming the first differing
/// field.
pub fn check_content(
    operation: LogOperation,
    expected: &MediaContent,
    event: &MediaEvent,
) -> Result<()> {
    let actual = &event.media_content;
    let fields = [
        ("title", expected.name.clone(), actual.name.clone()),
        (
            "content_id",
            expected.content_id.clone(),
            actual.content_id.clone(),
        ),
        (
            "duration",
            format!("{:?}", expected.duration),
            format!("{:?}", actual.duration),
        ),
        (
            "stream_type",
            expected.stream_type.to_string(),
            actual.stream_type.to_string(),
        ),
        (
            "content_type",
            expected.content_type.to_string(),
            actual.content_type.to_string(),
        ),
    ];

    match fields.into_iter().find(|(_, e, a)| e != a) {
        Some((field, expected, actual)) => Err(HarnessError::ContentMismatch {
            operation,
            field,
            expected,
            actual,
        }),
        None => Ok(()),
    }
}
