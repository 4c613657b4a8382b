//! Registry of session log operations and their parameter shapes

use std::collections::BTreeMap;
use std::fmt;

use crate::event::{MediaAd, MediaAdBreak, MediaEventName, MediaQos, MediaSegment, Options};
use crate::session::MediaSession;
use crate::verify::error::{HarnessError, Result};

/// Declared type of one operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArgKind {
    /// Position or duration in milliseconds
    Integer,
    Decimal,
    Text,
    Ad,
    AdBreak,
    Segment,
    Qos,
    /// String map
    Attributes,
    Options,
    /// Builder closure; operations taking one are not auto-discovered
    Callback,
}

impl fmt::Display for ArgKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Integer => "integer",
            Self::Decimal => "decimal",
            Self::Text => "text",
            Self::Ad => "MediaAd",
            Self::AdBreak => "MediaAdBreak",
            Self::Segment => "MediaSegment",
            Self::Qos => "MediaQos",
            Self::Attributes => "attributes",
            Self::Options => "Options",
            Self::Callback => "callback",
        };
        f.write_str(name)
    }
}

/// A concrete argument value
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    Integer(u64),
    Decimal(f64),
    Text(String),
    Ad(MediaAd),
    AdBreak(MediaAdBreak),
    Segment(MediaSegment),
    Qos(MediaQos),
    Attributes(BTreeMap<String, String>),
    Options(Option<Options>),
}

impl Argument {
    pub fn kind(&self) -> ArgKind {
        match self {
            Self::Integer(_) => ArgKind::Integer,
            Self::Decimal(_) => ArgKind::Decimal,
            Self::Text(_) => ArgKind::Text,
            Self::Ad(_) => ArgKind::Ad,
            Self::AdBreak(_) => ArgKind::AdBreak,
            Self::Segment(_) => ArgKind::Segment,
            Self::Qos(_) => ArgKind::Qos,
            Self::Attributes(_) => ArgKind::Attributes,
            Self::Options(_) => ArgKind::Options,
        }
    }
}

/// Every `log_*` operation of [`MediaSession`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogOperation {
    MediaSessionStart,
    MediaSessionEnd,
    MediaContentEnd,
    Play,
    Pause,
    SeekStart,
    SeekEnd,
    BufferStart,
    BufferEnd,
    PlayheadPosition,
    AdBreakStart,
    AdBreakStartWith,
    AdBreakEnd,
    AdStart,
    AdStartWith,
    AdClick,
    AdEnd,
    AdSkip,
    SegmentStart,
    SegmentStartWith,
    SegmentSkip,
    SegmentEnd,
    Qos,
    QosWith,
    Error,
}

use ArgKind as K;

impl LogOperation {
    pub const ALL: [LogOperation; 25] = [
        Self::MediaSessionStart,
        Self::MediaSessionEnd,
        Self::MediaContentEnd,
        Self::Play,
        Self::Pause,
        Self::SeekStart,
        Self::SeekEnd,
        Self::BufferStart,
        Self::BufferEnd,
        Self::PlayheadPosition,
        Self::AdBreakStart,
        Self::AdBreakStartWith,
        Self::AdBreakEnd,
        Self::AdStart,
        Self::AdStartWith,
        Self::AdClick,
        Self::AdEnd,
        Self::AdSkip,
        Self::SegmentStart,
        Self::SegmentStartWith,
        Self::SegmentSkip,
        Self::SegmentEnd,
        Self::Qos,
        Self::QosWith,
        Self::Error,
    ];

    /// Operations without a callback parameter, in registry order
    pub fn discoverable() -> impl Iterator<Item = LogOperation> {
        Self::ALL.into_iter().filter(|op| !op.takes_callback())
    }

    /// Method name on [`MediaSession`]
    pub const fn name(self) -> &'static str {
        match self {
            Self::MediaSessionStart => "log_media_session_start",
            Self::MediaSessionEnd => "log_media_session_end",
            Self::MediaContentEnd => "log_media_content_end",
            Self::Play => "log_play",
            Self::Pause => "log_pause",
            Self::SeekStart => "log_seek_start",
            Self::SeekEnd => "log_seek_end",
            Self::BufferStart => "log_buffer_start",
            Self::BufferEnd => "log_buffer_end",
            Self::PlayheadPosition => "log_playhead_position",
            Self::AdBreakStart => "log_ad_break_start",
            Self::AdBreakStartWith => "log_ad_break_start_with",
            Self::AdBreakEnd => "log_ad_break_end",
            Self::AdStart => "log_ad_start",
            Self::AdStartWith => "log_ad_start_with",
            Self::AdClick => "log_ad_click",
            Self::AdEnd => "log_ad_end",
            Self::AdSkip => "log_ad_skip",
            Self::SegmentStart => "log_segment_start",
            Self::SegmentStartWith => "log_segment_start_with",
            Self::SegmentSkip => "log_segment_skip",
            Self::SegmentEnd => "log_segment_end",
            Self::Qos => "log_qos",
            Self::QosWith => "log_qos_with",
            Self::Error => "log_error",
        }
    }

    /// Declared parameters, in call order
    pub const fn params(self) -> &'static [ArgKind] {
        match self {
            Self::MediaSessionStart
            | Self::MediaSessionEnd
            | Self::MediaContentEnd
            | Self::Play
            | Self::Pause
            | Self::AdBreakEnd
            | Self::AdClick
            | Self::AdEnd
            | Self::AdSkip
            | Self::SegmentSkip
            | Self::SegmentEnd => &[K::Options],
            Self::SeekStart | Self::SeekEnd => &[K::Integer, K::Options],
            Self::BufferStart | Self::BufferEnd => {
                &[K::Integer, K::Decimal, K::Integer, K::Options]
            }
            Self::PlayheadPosition => &[K::Integer],
            Self::AdBreakStart => &[K::AdBreak, K::Options],
            Self::AdStart => &[K::Ad, K::Options],
            Self::SegmentStart => &[K::Segment, K::Options],
            Self::Qos => &[K::Qos, K::Options],
            Self::AdBreakStartWith | Self::AdStartWith | Self::SegmentStartWith | Self::QosWith => {
                &[K::Options, K::Callback]
            }
            Self::Error => &[K::Text, K::Attributes, K::Options],
        }
    }

    pub fn takes_callback(self) -> bool {
        self.params().contains(&ArgKind::Callback)
    }

    /// Name of the media event the operation logs
    pub const fn event_name(self) -> MediaEventName {
        match self {
            Self::MediaSessionStart => MediaEventName::SessionStart,
            Self::MediaSessionEnd => MediaEventName::SessionEnd,
            Self::MediaContentEnd => MediaEventName::ContentEnd,
            Self::Play => MediaEventName::Play,
            Self::Pause => MediaEventName::Pause,
            Self::SeekStart => MediaEventName::SeekStart,
            Self::SeekEnd => MediaEventName::SeekEnd,
            Self::BufferStart => MediaEventName::BufferStart,
            Self::BufferEnd => MediaEventName::BufferEnd,
            Self::PlayheadPosition => MediaEventName::UpdatePlayheadPosition,
            Self::AdBreakStart | Self::AdBreakStartWith => MediaEventName::AdBreakStart,
            Self::AdBreakEnd => MediaEventName::AdBreakEnd,
            Self::AdStart | Self::AdStartWith => MediaEventName::AdStart,
            Self::AdClick => MediaEventName::AdClick,
            Self::AdEnd => MediaEventName::AdEnd,
            Self::AdSkip => MediaEventName::AdSkip,
            Self::SegmentStart | Self::SegmentStartWith => MediaEventName::SegmentStart,
            Self::SegmentSkip => MediaEventName::SegmentSkip,
            Self::SegmentEnd => MediaEventName::SegmentEnd,
            Self::Qos | Self::QosWith => MediaEventName::UpdateQos,
            Self::Error => MediaEventName::Error,
        }
    }

    /// Call the operation on `session`
    ///
    /// `args` must match [`params`](Self::params) with the callback left out;
    /// callback operations are called with a closure that keeps the default
    /// payload. Arguments are checked before the session is touched.
    ///
    /// # Errors
    ///
    /// Returns [`HarnessError::ArgumentMismatch`] if `args` does not match.
    pub fn invoke(self, session: &mut MediaSession, args: Vec<Argument>) -> Result<()> {
        let mut a = Args {
            operation: self,
            iter: args.into_iter(),
        };

        match self {
            Self::MediaSessionStart => {
                let o = a.finish_with_options()?;
                session.log_media_session_start(o.as_ref());
            }
            Self::MediaSessionEnd => {
                let o = a.finish_with_options()?;
                session.log_media_session_end(o.as_ref());
            }
            Self::MediaContentEnd => {
                let o = a.finish_with_options()?;
                session.log_media_content_end(o.as_ref());
            }
            Self::Play => {
                let o = a.finish_with_options()?;
                session.log_play(o.as_ref());
            }
            Self::Pause => {
                let o = a.finish_with_options()?;
                session.log_pause(o.as_ref());
            }
            Self::SeekStart => {
                let position = a.integer()?;
                let o = a.finish_with_options()?;
                session.log_seek_start(position, o.as_ref());
            }
            Self::SeekEnd => {
                let position = a.integer()?;
                let o = a.finish_with_options()?;
                session.log_seek_end(position, o.as_ref());
            }
            Self::BufferStart => {
                let (duration, percent, position) = (a.integer()?, a.decimal()?, a.integer()?);
                let o = a.finish_with_options()?;
                session.log_buffer_start(duration, percent, position, o.as_ref());
            }
            Self::BufferEnd => {
                let (duration, percent, position) = (a.integer()?, a.decimal()?, a.integer()?);
                let o = a.finish_with_options()?;
                session.log_buffer_end(duration, percent, position, o.as_ref());
            }
            Self::PlayheadPosition => {
                let position = a.integer()?;
                a.finish()?;
                session.log_playhead_position(position);
            }
            Self::AdBreakStart => {
                let ad_break = a.ad_break()?;
                let o = a.finish_with_options()?;
                session.log_ad_break_start(ad_break, o.as_ref());
            }
            Self::AdBreakStartWith => {
                let o = a.finish_with_options()?;
                session.log_ad_break_start_with(o.as_ref(), |_| {});
            }
            Self::AdBreakEnd => {
                let o = a.finish_with_options()?;
                session.log_ad_break_end(o.as_ref());
            }
            Self::AdStart => {
                let ad = a.ad()?;
                let o = a.finish_with_options()?;
                session.log_ad_start(ad, o.as_ref());
            }
            Self::AdStartWith => {
                let o = a.finish_with_options()?;
                session.log_ad_start_with(o.as_ref(), |_| {});
            }
            Self::AdClick => {
                let o = a.finish_with_options()?;
                session.log_ad_click(o.as_ref());
            }
            Self::AdEnd => {
                let o = a.finish_with_options()?;
                session.log_ad_end(o.as_ref());
            }
            Self::AdSkip => {
                let o = a.finish_with_options()?;
                session.log_ad_skip(o.as_ref());
            }
            Self::SegmentStart => {
                let segment = a.segment()?;
                let o = a.finish_with_options()?;
                session.log_segment_start(segment, o.as_ref());
            }
            Self::SegmentStartWith => {
                let o = a.finish_with_options()?;
                session.log_segment_start_with(o.as_ref(), |_| {});
            }
            Self::SegmentSkip => {
                let o = a.finish_with_options()?;
                session.log_segment_skip(o.as_ref());
            }
            Self::SegmentEnd => {
                let o = a.finish_with_options()?;
                session.log_segment_end(o.as_ref());
            }
            Self::Qos => {
                let qos = a.qos()?;
                let o = a.finish_with_options()?;
                session.log_qos(qos, o.as_ref());
            }
            Self::QosWith => {
                let o = a.finish_with_options()?;
                session.log_qos_with(o.as_ref(), |_| {});
            }
            Self::Error => {
                let message = a.text()?;
                let attributes = a.attributes()?;
                let o = a.finish_with_options()?;
                session.log_error(message, attributes, o.as_ref());
            }
        }
        Ok(())
    }
}

impl fmt::Display for LogOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Typed cursor over an argument list
struct Args {
    operation: LogOperation,
    iter: std::vec::IntoIter<Argument>,
}

macro_rules! take_arg {
    ($fn_name:ident, $variant:ident, $ty:ty) => {
        fn $fn_name(&mut self) -> Result<$ty> {
            match self.iter.next() {
                Some(Argument::$variant(value)) => Ok(value),
                other => Err(self.mismatch(ArgKind::$variant, other.as_ref())),
            }
        }
    };
}

impl Args {
    take_arg!(integer, Integer, u64);
    take_arg!(decimal, Decimal, f64);
    take_arg!(text, Text, String);
    take_arg!(ad, Ad, MediaAd);
    take_arg!(ad_break, AdBreak, MediaAdBreak);
    take_arg!(segment, Segment, MediaSegment);
    take_arg!(qos, Qos, MediaQos);
    take_arg!(attributes, Attributes, BTreeMap<String, String>);
    take_arg!(options, Options, Option<Options>);

    /// Take the trailing options argument and require nothing after it
    fn finish_with_options(&mut self) -> Result<Option<Options>> {
        let options = self.options()?;
        self.finish()?;
        Ok(options)
    }

    fn finish(&mut self) -> Result<()> {
        match self.iter.next() {
            None => Ok(()),
            Some(extra) => Err(HarnessError::ArgumentMismatch {
                operation: self.operation,
                detail: format!("unexpected extra {} argument", extra.kind()),
            }),
        }
    }

    fn mismatch(&self, expected: ArgKind, actual: Option<&Argument>) -> HarnessError {
        let detail = match actual {
            Some(arg) => format!("expected {expected} argument, got {}", arg.kind()),
            None => format!("missing {expected} argument"),
        };
        HarnessError::ArgumentMismatch {
            operation: self.operation,
            detail,
        }
    }
}
